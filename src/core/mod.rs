//! Core seeding logic - framework-agnostic loaders and orchestration.
//!
//! Two sequential stages with no feedback loop: the category loader runs
//! first and produces a name-to-id map, the product loader consumes that
//! map. `seed::run` ties them together.

/// Category loading (first stage)
pub mod categories;
/// Product loading (second stage)
pub mod products;
/// Orchestration of a full seed run
pub mod seed;
