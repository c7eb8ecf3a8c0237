use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Free-form product attributes such as "material" or "color".
pub type Specifications = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    /// Copy of the referenced category's name, kept for read convenience.
    pub category_name: String,
    pub price: Decimal,
    pub description: String,
    /// Image filenames in display order.
    pub images: Vec<String>,
    #[sqlx(json)]
    pub specifications: Specifications,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Product {
    /// Creates an active product filed under `category`.
    ///
    /// `created_at` and `updated_at` share the same instant.
    pub fn new(
        name: impl Into<String>,
        category: &Category,
        price: Decimal,
        description: impl Into<String>,
        images: Vec<String>,
        specifications: Specifications,
    ) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category_id: category.id,
            category_name: category.name.clone(),
            price,
            description: description.into(),
            images,
            specifications,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_gets_fresh_id() {
        let a = Category::new("Handbags", "Luxury designer handbags and purses");
        let b = Category::new("Handbags", "Luxury designer handbags and purses");

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Handbags");
    }

    #[test]
    fn test_new_product_defaults() {
        let category = Category::new("Wallets", "Designer wallets and card holders");
        let product = Product::new(
            "Bifold Leather Wallet",
            &category,
            Decimal::new(12999, 2),
            "Handcrafted bifold wallet",
            vec!["wallet_1.jpg".to_string()],
            Specifications::from([("style".to_string(), "Bifold".to_string())]),
        );

        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.category_id, category.id);
        assert_eq!(product.category_name, "Wallets");
        assert_eq!(product.price.to_string(), "129.99");
    }

    #[test]
    fn test_product_serializes_price_as_string() {
        let category = Category::new("Belts", "Leather belts and fashion accessories");
        let product = Product::new(
            "Classic Leather Belt",
            &category,
            Decimal::new(7999, 2),
            "Premium leather belt",
            Vec::new(),
            Specifications::new(),
        );

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "79.99");
        assert_eq!(json["is_active"], true);
    }
}
