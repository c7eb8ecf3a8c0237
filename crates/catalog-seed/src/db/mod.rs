//! Database integration for seeding the catalog.
//!
//! The [`Seeder`] inserts each category and product of a [`Dataset`](crate::dataset::Dataset)
//! unless a record with the same name already exists, and reports what it did.

mod seeder;

pub use seeder::{Outcome, SeedError, SeedReport, Seeded, Seeder};
