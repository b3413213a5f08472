//! Shared test utilities for the catalog seeder.
//!
//! This module provides common helper functions for setting up test databases,
//! building input records, and writing source files into temporary directories.

use crate::{
    entities::category,
    errors::Result,
    records::{CategoryRecord, ProductRecord},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::path::{Path, PathBuf};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a category record as it would arrive from the categories file.
pub fn category_record(name: &str) -> CategoryRecord {
    CategoryRecord {
        name: Some(name.to_string()),
    }
}

/// Builds a fully-populated product record as it would arrive from the
/// products file. Use the struct literal directly when a test needs an
/// absent field.
pub fn product_record(name: &str, price: f64, stock: i64, category: &str) -> ProductRecord {
    ProductRecord {
        name: Some(name.to_string()),
        price: Some(price),
        stock: Some(stock),
        category: Some(category.to_string()),
    }
}

/// Inserts a category row directly, bypassing the loader.
/// Returns the generated id for wiring up product fixtures.
pub async fn insert_category(db: &DatabaseConnection, name: &str) -> Result<i64> {
    let model = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.id)
}

/// Writes `contents` to `file_name` under `dir` and returns the full path.
/// Tests pair this with a [`tempfile::TempDir`] to stand in for the data
/// directory.
pub fn write_json(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, contents)?;
    Ok(path)
}
