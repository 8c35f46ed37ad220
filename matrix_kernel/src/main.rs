/// Matrix Kernel: Demo Harness
///
/// Builds the reference matrices, prints their cells and canonical
/// hashes, and checks the symmetric lookup.

use matrix_kernel::error::Result;
use matrix_kernel::hashing::canonical_hash;
use matrix_kernel::matrix::Matrix;
use matrix_kernel::symmetric::SymmetricMatrix;

fn main() -> Result<()> {
    env_logger::init();

    let matrix = Matrix::from_fn(2, 2, |x, y| format!("value {},{}", x, y))?;
    println!("Matrix {}x{}:", matrix.width(), matrix.height());
    for cell in &matrix {
        println!("  {} {} {}", cell.x, cell.y, cell.value);
    }
    println!("  hash={}", canonical_hash(&matrix)?);

    let mut symmetric = SymmetricMatrix::from_fn(5, |x, y| format!("{},{}", x, y))?;
    println!("SymmetricMatrix {}x{}:", symmetric.size(), symmetric.size());
    println!("  get(2, 3) = {}", symmetric.get(2, 3)?);
    println!("  get(3, 2) = {}", symmetric.get(3, 2)?);

    symmetric.set(0, 4, "edge".to_string())?;
    println!("  after set(0, 4): get(4, 0) = {}", symmetric.get(4, 0)?);
    println!("  hash={}", canonical_hash(symmetric.as_matrix())?);

    match matrix.get(5, 5) {
        Ok(value) => println!("Unexpected value at (5, 5): {}", value),
        Err(e) => println!("[OK] {}", e),
    }
    match Matrix::<u8>::new(-1, 3) {
        Ok(_) => println!("Unexpected matrix with negative width"),
        Err(e) => println!("[OK] {}", e),
    }

    Ok(())
}
