//! The storage seam between catalog consumers and a concrete backend.

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{Category, Product};

/// Persistent home of the `categories` and `products` collections.
///
/// Lookups go by natural key (`name`). Implementations do not enforce name
/// uniqueness themselves; callers check before inserting.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Cheap liveness check.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Creates the collections if they do not exist yet.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError>;

    async fn insert_category(&self, category: &Category) -> Result<(), StoreError>;

    async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;

    async fn insert_product(&self, product: &Product) -> Result<(), StoreError>;

    async fn count_categories(&self) -> Result<u64, StoreError>;

    async fn count_products(&self) -> Result<u64, StoreError>;
}
