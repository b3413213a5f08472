//! Typed views of the JSON input records.
//!
//! The input files are JSON arrays of loosely-shaped objects. Every field
//! is optional here so that a record with missing keys deserializes instead
//! of failing the whole file; the loaders and the validation schema decide
//! what to do with the gaps. Unknown keys are ignored.

use crate::errors::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// One entry of the categories file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    /// Category name; records without one are skipped by the loader
    pub name: Option<String>,
}

/// One entry of the products file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Product name
    pub name: Option<String>,
    /// Unit price
    pub price: Option<f64>,
    /// Units in stock; the schema defaults an absent stock to 0
    pub stock: Option<i64>,
    /// Category *name* (not id) this product belongs to
    pub category: Option<String>,
}

/// Reads a JSON array of records from a UTF-8 file.
///
/// Callers are expected to handle absent files themselves (the loaders
/// treat those as empty input); a file that exists but does not parse is
/// an error.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(Into::into)
}
