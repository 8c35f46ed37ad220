/// Matrix Kernel: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 fingerprint.
///
/// Rules:
///   - Field order: format_version, width, height, content
///   - Content in row-major order
///   - Compact UTF-8 JSON, no whitespace

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use crate::FORMAT_VERSION;

/// Canonical serialization of a matrix to UTF-8 JSON bytes.
/// Includes format_version as the first field for identity binding.
pub fn canonical_serialize<T: Serialize>(matrix: &Matrix<T>) -> Result<Vec<u8>> {
    let root = build_canonical_value(matrix)?;
    serde_json::to_vec(&root).map_err(|e| MatrixError::Serialization(e.to_string()))
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash<T: Serialize>(matrix: &Matrix<T>) -> Result<String> {
    let bytes = canonical_serialize(matrix)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

/// serde_json::Map preserves insertion order (preserve_order feature).
fn build_canonical_value<T: Serialize>(matrix: &Matrix<T>) -> Result<Value> {
    let content = matrix
        .as_slice()
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<Value>, _>>()
        .map_err(|e| MatrixError::Serialization(e.to_string()))?;

    let mut root = Map::new();
    root.insert(
        "format_version".to_string(),
        Value::Number(FORMAT_VERSION.into()),
    );
    root.insert("width".to_string(), Value::Number(matrix.width().into()));
    root.insert("height".to_string(), Value::Number(matrix.height().into()));
    root.insert("content".to_string(), Value::Array(content));
    Ok(Value::Object(root))
}
