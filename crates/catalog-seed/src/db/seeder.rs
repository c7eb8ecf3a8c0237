//! Idempotent catalog seeding.

use catalog::{CatalogStore, Category, Product, StoreError};
use thiserror::Error;
use tracing::info;

use crate::dataset::{CategorySpec, Dataset, DatasetError, ProductSpec};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Cannot reach the catalog store: {0}")]
    Unreachable(#[source] StoreError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Product {product:?} references unknown category {category:?}")]
    UnknownCategory { product: String, category: String },
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),
}

/// Whether a record was inserted by this run or found already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Existing,
}

/// A record as it exists in the store after seeding.
#[derive(Debug, Clone)]
pub struct Seeded<T> {
    pub record: T,
    pub outcome: Outcome,
}

impl<T> Seeded<T> {
    fn created(record: T) -> Self {
        Self {
            record,
            outcome: Outcome::Created,
        }
    }

    fn existing(record: T) -> Self {
        Self {
            record,
            outcome: Outcome::Existing,
        }
    }
}

/// Result of a complete seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub categories: Vec<Seeded<Category>>,
    pub products: Vec<Seeded<Product>>,
}

impl SeedReport {
    pub fn categories_created(&self) -> usize {
        count(&self.categories, Outcome::Created)
    }

    pub fn categories_existing(&self) -> usize {
        count(&self.categories, Outcome::Existing)
    }

    pub fn products_created(&self) -> usize {
        count(&self.products, Outcome::Created)
    }

    pub fn products_existing(&self) -> usize {
        count(&self.products, Outcome::Existing)
    }
}

fn count<T>(seeded: &[Seeded<T>], outcome: Outcome) -> usize {
    seeded.iter().filter(|s| s.outcome == outcome).count()
}

/// Seeds categories and products into a [`CatalogStore`].
///
/// Every record is keyed on its name: a definition whose name is already
/// stored is skipped and the stored record is used instead. Existence checks
/// and inserts are separate round trips, so two runs racing against the same
/// store can both insert the same name.
pub struct Seeder<S> {
    store: S,
    dataset: Dataset,
}

impl<S: CatalogStore> Seeder<S> {
    /// Creates a seeder for the built-in sample dataset.
    pub fn new(store: S) -> Self {
        Self {
            store,
            dataset: Dataset::builtin(),
        }
    }

    /// Replaces the dataset to seed.
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    /// Checks dataset prices, pings the store, prepares the schema, then seeds
    /// categories followed by products.
    ///
    /// Records inserted before a failure stay in the store.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        info!("Initializing catalog database...");

        self.dataset.validate_prices()?;

        self.store.ping().await.map_err(SeedError::Unreachable)?;
        info!("Database connection successful");

        self.store.ensure_schema().await?;

        info!("Creating sample categories...");
        let categories = self.seed_categories(&self.dataset.categories).await?;

        info!("Creating sample products...");
        let resolved: Vec<Category> = categories.iter().map(|c| c.record.clone()).collect();
        let products = self.seed_products(&self.dataset.products, &resolved).await?;

        let report = SeedReport {
            categories,
            products,
        };

        info!(
            "Processed {} categories ({} created, {} existing) and {} products ({} created, {} existing)",
            report.categories.len(),
            report.categories_created(),
            report.categories_existing(),
            report.products.len(),
            report.products_created(),
            report.products_existing(),
        );

        Ok(report)
    }

    /// Inserts every category whose name is not stored yet.
    ///
    /// Returns the stored record for each definition, in definition order.
    pub async fn seed_categories(
        &self,
        definitions: &[CategorySpec],
    ) -> Result<Vec<Seeded<Category>>, SeedError> {
        let mut seeded = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if let Some(existing) = self.store.find_category_by_name(&definition.name).await? {
                info!("Category already exists: {}", existing.name);
                seeded.push(Seeded::existing(existing));
                continue;
            }

            let category = Category::new(&definition.name, &definition.description);
            self.store.insert_category(&category).await?;
            info!("Created category: {}", category.name);
            seeded.push(Seeded::created(category));
        }

        Ok(seeded)
    }

    /// Inserts every product whose name is not stored yet.
    ///
    /// Category references are resolved against `categories` by name before
    /// anything is written; a single unknown name aborts the whole batch with
    /// [`SeedError::UnknownCategory`].
    pub async fn seed_products(
        &self,
        definitions: &[ProductSpec],
        categories: &[Category],
    ) -> Result<Vec<Seeded<Product>>, SeedError> {
        let resolved = definitions
            .iter()
            .map(|definition| {
                categories
                    .iter()
                    .find(|c| c.name == definition.category_name)
                    .map(|category| (definition, category))
                    .ok_or_else(|| SeedError::UnknownCategory {
                        product: definition.name.clone(),
                        category: definition.category_name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seeded = Vec::with_capacity(resolved.len());

        for (definition, category) in resolved {
            if let Some(existing) = self.store.find_product_by_name(&definition.name).await? {
                info!("Product already exists: {}", existing.name);
                seeded.push(Seeded::existing(existing));
                continue;
            }

            let product = Product::new(
                &definition.name,
                category,
                definition.price,
                &definition.description,
                definition.images.clone(),
                definition.specifications.clone(),
            );
            self.store.insert_product(&product).await?;
            info!("Created product: {} - ${}", product.name, product.price);
            seeded.push(Seeded::created(product));
        }

        Ok(seeded)
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
