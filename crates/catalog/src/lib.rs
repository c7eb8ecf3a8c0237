//! Catalog domain for Outre Couture.
//!
//! Defines the [`Category`](models::Category) and [`Product`](models::Product)
//! records and the [`CatalogStore`] trait that persists them, with a
//! PostgreSQL implementation ([`Database`]) and an in-memory one
//! ([`MemoryStore`]).

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod store;

pub use database::Database;
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use models::{Category, Product, Specifications};
pub use store::CatalogStore;
