//! Seed run orchestration.
//!
//! Drives the two loading stages in order: categories first, so the
//! resulting name-to-id map can resolve product references, then products.
//! A run never propagates loader failures to the caller; errors are logged
//! and the report covers whatever completed before the failure.

use crate::{
    config::sources::SourceFiles,
    core::{
        categories::{self, CategoryLoad},
        products::{self, ProductLoad},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{error, warn};

/// Combined outcome of a seed run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub categories: CategoryLoad,
    pub products: ProductLoad,
}

/// Runs a full seed pass against the database.
///
/// Failures inside the run are reported through the log rather than the
/// return value, so a partially-failed seed still produces a report.
pub async fn run(db: &DatabaseConnection, sources: &SourceFiles) -> SeedReport {
    match seed(db, sources).await {
        Ok(report) => report,
        Err(e) => {
            error!("An error occurred: {e}");
            SeedReport::default()
        }
    }
}

async fn seed(db: &DatabaseConnection, sources: &SourceFiles) -> Result<SeedReport> {
    let categories = categories::load_categories(db, &sources.categories).await?;

    // Without category ids every product reference would dangle, so the
    // product stage is not attempted.
    if categories.map.is_empty() {
        warn!("No categories loaded. Skipping product loading.");
        return Ok(SeedReport {
            categories,
            products: ProductLoad::default(),
        });
    }

    let products = products::load_products(db, &sources.products, &categories.map).await?;
    Ok(SeedReport {
        categories,
        products,
    })
}
