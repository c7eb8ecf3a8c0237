//! Seeds the catalog with the sample categories and products.
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p catalog-seed --bin seed
//! ```

use std::process::ExitCode;

use catalog::Database;
use catalog_seed::config::SeedConfig;
use catalog_seed::dataset::Dataset;
use catalog_seed::db::{SeedError, Seeder};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;

    let dataset = match &config.dataset_path {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path.display());
            Dataset::from_json_file(path)?
        }
        None => Dataset::builtin(),
    };

    // Connections are opened on first use so the seeder's ping reports reachability.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy(&config.database_url)?;

    let seeder = Seeder::new(Database::new(pool)).with_dataset(dataset);

    match seeder.run().await {
        Ok(report) => {
            tracing::info!("Database initialization completed successfully!");
            tracing::info!(
                "  Categories: {} ({} created)",
                report.categories.len(),
                report.categories_created()
            );
            tracing::info!(
                "  Products: {} ({} created)",
                report.products.len(),
                report.products_created()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Error initializing database: {e}");
            if matches!(e, SeedError::Unreachable(_) | SeedError::Store(_)) {
                tracing::error!("Please make sure the database is running and accessible");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
