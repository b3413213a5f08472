//! Category loading - first stage of a seed run.
//!
//! Upserts categories by name: a category that already exists is counted
//! and reused, a new one is inserted inside the open transaction so its
//! generated id is available before the batch commits. The whole batch
//! commits as a single unit.

use crate::{
    entities::{Category, category},
    errors::Result,
    records::{self, CategoryRecord},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info};

/// Outcome of a category load: the name-to-id map consumed by the product
/// loader, plus counters for reporting.
#[derive(Debug, Clone, Default)]
pub struct CategoryLoad {
    /// Maps each loaded category name to its database id
    pub map: HashMap<String, i64>,
    /// Categories inserted by this run
    pub new: usize,
    /// Categories that already existed
    pub existing: usize,
}

/// Loads categories from a JSON file into the database.
///
/// An absent file is logged and treated as empty input; the returned map
/// is then empty, which makes the orchestrator skip product loading.
pub async fn load_categories(db: &DatabaseConnection, path: &Path) -> Result<CategoryLoad> {
    if !path.exists() {
        error!("Categories file not found: {}", path.display());
        return Ok(CategoryLoad::default());
    }

    let records: Vec<CategoryRecord> = records::read_records(path)?;
    load_category_records(db, &records).await
}

/// Upserts a batch of category records in one transaction and returns the
/// accumulated name-to-id map.
///
/// Records without a name are silently skipped. Duplicate names within the
/// batch resolve to the same id (the second occurrence finds the row the
/// first one flushed) with last-write-wins in the map.
pub async fn load_category_records(
    db: &DatabaseConnection,
    records: &[CategoryRecord],
) -> Result<CategoryLoad> {
    info!("Processing {} categories...", records.len());

    let txn = db.begin().await?;
    let mut load = CategoryLoad::default();

    for record in records {
        let Some(name) = record.name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };

        let found = Category::find()
            .filter(category::Column::Name.eq(name))
            .one(&txn)
            .await?;

        let id = match found {
            Some(model) => {
                load.existing += 1;
                model.id
            }
            None => {
                // Insert inside the open transaction: the statement runs
                // immediately, so the fresh id is usable before commit.
                let inserted = category::ActiveModel {
                    name: Set(name.to_string()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                load.new += 1;
                inserted.id
            }
        };

        load.map.insert(name.to_string(), id);
    }

    txn.commit().await?;
    info!("Categories loaded: {} new, {} existing.", load.new, load.existing);
    Ok(load)
}
