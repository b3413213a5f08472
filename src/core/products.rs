//! Product loading - second stage of a seed run.
//!
//! Resolves each record to a category through the map produced by the
//! category loader, skips records whose category is unknown or whose name
//! already exists (existing products are never updated, even when price or
//! stock differ in the input), validates the rest against the product
//! schema and stages them for insertion. The whole batch commits as a
//! single unit.

use crate::{
    entities::{Product, product},
    errors::Result,
    records::{self, ProductRecord},
    schema::ProductDraft,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use std::collections::HashMap;
use std::path::Path;
use tracing::{error, info, warn};

/// Outcome of a product load.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductLoad {
    /// Products inserted by this run
    pub new: usize,
    /// Records skipped: already existing, unresolved category, or invalid
    pub skipped: usize,
}

/// Loads products from a JSON file into the database.
///
/// An absent file is logged and treated as empty input.
pub async fn load_products(
    db: &DatabaseConnection,
    path: &Path,
    category_map: &HashMap<String, i64>,
) -> Result<ProductLoad> {
    if !path.exists() {
        error!("Products file not found: {}", path.display());
        return Ok(ProductLoad::default());
    }

    let records: Vec<ProductRecord> = records::read_records(path)?;
    load_product_records(db, &records, category_map).await
}

/// Inserts a batch of product records in one transaction.
///
/// Per record, in order: resolve the category name against the map (a miss
/// is warned about and skipped), skip products that already exist by name,
/// validate against the schema (invalid records are warned about and
/// skipped), then stage the insert.
pub async fn load_product_records(
    db: &DatabaseConnection,
    records: &[ProductRecord],
    category_map: &HashMap<String, i64>,
) -> Result<ProductLoad> {
    info!("Processing {} products...", records.len());

    let txn = db.begin().await?;
    let mut load = ProductLoad::default();

    for record in records {
        let name = record.name.clone().unwrap_or_default();

        let resolved = record
            .category
            .as_deref()
            .and_then(|c| category_map.get(c).copied());
        let Some(category_id) = resolved else {
            warn!(
                "Category '{}' not found for product '{}'. Skipping.",
                record.category.as_deref().unwrap_or("?"),
                name
            );
            load.skipped += 1;
            continue;
        };

        // Uniqueness by name is tool policy, not a storage constraint:
        // an existing product is left untouched.
        let existing = Product::find()
            .filter(product::Column::Name.eq(name.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            load.skipped += 1;
            continue;
        }

        let draft = ProductDraft {
            name: name.clone(),
            price: record.price,
            stock: record.stock,
            category_id,
        };
        match draft.validate() {
            Ok(new_product) => {
                product::ActiveModel {
                    name: Set(new_product.name),
                    price: Set(new_product.price),
                    stock: Set(new_product.stock),
                    category_id: Set(new_product.category_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                load.new += 1;
            }
            Err(e) => {
                warn!("Invalid product record '{name}': {e}. Skipping.");
                load.skipped += 1;
            }
        }
    }

    txn.commit().await?;
    info!(
        "Products loaded: {} new, {} skipped (existing or missing category).",
        load.new, load.skipped
    );
    Ok(load)
}
