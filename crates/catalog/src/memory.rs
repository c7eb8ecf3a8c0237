//! In-memory catalog store.
//!
//! Holds both collections in insertion order behind a mutex. Useful wherever a
//! real database is unnecessary, most notably in tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::StoreError;
use crate::models::{Category, Product};
use crate::store::CatalogStore;

#[derive(Debug, Default)]
struct Collections {
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
    unreachable: bool,
    /// Total inserts accepted before every later insert fails.
    insert_limit: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every operation fails with [`StoreError::Unavailable`].
    pub fn unreachable() -> Self {
        Self {
            collections: Mutex::default(),
            unreachable: true,
            insert_limit: None,
        }
    }

    /// Creates a store that accepts `limit` inserts across both collections,
    /// then fails every further insert with [`StoreError::Unavailable`].
    pub fn fail_after_inserts(limit: usize) -> Self {
        Self {
            insert_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Creates a store that already holds `categories`.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            collections: Mutex::new(Collections {
                categories,
                products: Vec::new(),
            }),
            unreachable: false,
            insert_limit: None,
        }
    }

    /// Snapshot of every stored category, in insertion order.
    pub async fn categories(&self) -> Vec<Category> {
        self.collections.lock().await.categories.clone()
    }

    /// Snapshot of every stored product, in insertion order.
    pub async fn products(&self) -> Vec<Product> {
        self.collections.lock().await.products.clone()
    }

    fn check_reachable(&self) -> Result<(), StoreError> {
        if self.unreachable {
            return Err(StoreError::Unavailable(
                "in-memory store is marked unreachable".to_string(),
            ));
        }
        Ok(())
    }

    fn check_insert_allowed(&self, collections: &Collections) -> Result<(), StoreError> {
        self.check_reachable()?;
        let inserted = collections.categories.len() + collections.products.len();
        match self.insert_limit {
            Some(limit) if inserted >= limit => Err(StoreError::Unavailable(format!(
                "in-memory store rejects inserts after {limit}"
            ))),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_reachable()
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.check_reachable()
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        self.check_reachable()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn insert_category(&self, category: &Category) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        self.check_insert_allowed(&collections)?;
        collections.categories.push(category.clone());
        Ok(())
    }

    async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        self.check_reachable()?;
        let collections = self.collections.lock().await;
        Ok(collections.products.iter().find(|p| p.name == name).cloned())
    }

    async fn insert_product(&self, product: &Product) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().await;
        self.check_insert_allowed(&collections)?;
        collections.products.push(product.clone());
        Ok(())
    }

    async fn count_categories(&self) -> Result<u64, StoreError> {
        self.check_reachable()?;
        Ok(self.collections.lock().await.categories.len() as u64)
    }

    async fn count_products(&self) -> Result<u64, StoreError> {
        self.check_reachable()?;
        Ok(self.collections.lock().await.products.len() as u64)
    }
}
