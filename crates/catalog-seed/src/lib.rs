//! Sample data seeding for the Outre Couture catalog.
//!
//! Inserts a fixed set of categories and products into a
//! [`CatalogStore`](catalog::CatalogStore), skipping any record whose name is
//! already stored, so repeated runs leave the catalog unchanged.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_seed::prelude::*;
//!
//! let seeder = Seeder::new(Database::new(pool));
//! let report = seeder.run().await?;
//! println!("{} products created", report.products_created());
//! ```

pub mod config;
pub mod dataset;
pub mod db;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::dataset::{CategorySpec, Dataset, DatasetError, ProductSpec};
    pub use crate::db::{Outcome, SeedError, SeedReport, Seeded, Seeder};
    pub use catalog::{CatalogStore, Category, Database, MemoryStore, Product};
}
