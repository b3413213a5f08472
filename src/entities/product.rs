//! Product entity - Represents a catalog product.
//!
//! Each product carries a price and a stock count and belongs to exactly one
//! category. Products are created once per unique name by the seeder and are
//! never updated afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Dune", "Wireless Mouse")
    pub name: String,
    /// Unit price, strictly positive by the validation schema
    pub price: f64,
    /// Units in stock, never negative
    pub stock: i64,
    /// ID of the category this product belongs to
    pub category_id: i64,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
