//! Database configuration module for the catalog seeder.
//!
//! This module handles the `SQLite` connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! database schema is generated from the entity definitions without manual
//! SQL, and is guarded with `IF NOT EXISTS` because the seeder is expected
//! to run repeatedly against the same database file.

use crate::entities::{Category, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::error;

/// Gets the database URL from the environment or returns the default
/// `SQLite` path. The default opens in read-write-create mode so a first
/// run against a fresh checkout works without manual setup.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/catalog.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Verifies that the backing store is reachable.
///
/// Returns `true` when a ping round-trips, `false` otherwise; the failure
/// is logged here so callers only need the boolean.
pub async fn check_connection(db: &DatabaseConnection) -> bool {
    match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            error!("Database connectivity check failed: {e}");
            false
        }
    }
}

/// Creates the category and product tables from the entity definitions.
///
/// Safe to call on every startup: existing tables are left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut category_table = schema.create_table_from_entity(Category);
    category_table.if_not_exists();
    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    Ok(())
}
