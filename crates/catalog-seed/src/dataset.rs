//! Sample catalog data.
//!
//! [`Dataset::builtin`] is the fixed storefront sample: five categories and one
//! product in each. A dataset with the same shape can also be loaded from JSON:
//!
//! ```json
//! {
//!   "categories": [{ "name": "Handbags", "description": "..." }],
//!   "products": [{
//!     "name": "Classic Leather Tote Bag",
//!     "category_name": "Handbags",
//!     "price": 299.99,
//!     "description": "...",
//!     "images": ["tote_bag_1.jpg"],
//!     "specifications": { "material": "Italian Leather" }
//!   }]
//! }
//! ```

use std::path::Path;

use catalog::Specifications;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Product {product:?} has invalid price {price}: must be positive with at most 2 decimal places")]
    InvalidPrice { product: String, price: Decimal },
}

/// Prices are stored as `NUMERIC(12, 2)`.
const PRICE_SCALE: u32 = 2;

/// Definition of a category to seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub description: String,
}

/// Definition of a product to seed. The category is referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub name: String,
    pub category_name: String,
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<CategorySpec>,
    pub products: Vec<ProductSpec>,
}

impl Dataset {
    /// Loads a dataset from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(raw)?;
        dataset.validate_prices()?;
        Ok(dataset)
    }

    /// Rejects prices the store would round or that are not positive.
    pub fn validate_prices(&self) -> Result<(), DatasetError> {
        for product in &self.products {
            if product.price <= Decimal::ZERO || product.price.normalize().scale() > PRICE_SCALE {
                return Err(DatasetError::InvalidPrice {
                    product: product.name.clone(),
                    price: product.price,
                });
            }
        }
        Ok(())
    }

    /// The storefront sample catalog.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                category("Handbags", "Luxury designer handbags and purses"),
                category("Jewelry", "Elegant jewelry and accessories"),
                category("Scarves", "Silk scarves and fashion accessories"),
                category("Belts", "Leather belts and fashion accessories"),
                category("Wallets", "Designer wallets and card holders"),
            ],
            products: vec![
                ProductSpec {
                    name: "Classic Leather Tote Bag".to_string(),
                    category_name: "Handbags".to_string(),
                    price: Decimal::new(29999, 2),
                    description: "Timeless leather tote bag perfect for everyday use. Made from premium Italian leather with brass hardware.".to_string(),
                    images: images(&["tote_bag_1.jpg", "tote_bag_2.jpg"]),
                    specifications: specifications(&[
                        ("material", "Italian Leather"),
                        ("color", "Cognac Brown"),
                        ("size", "Large"),
                        ("dimensions", "15\" x 12\" x 6\""),
                        ("hardware", "Brass"),
                    ]),
                },
                ProductSpec {
                    name: "Pearl Necklace Set".to_string(),
                    category_name: "Jewelry".to_string(),
                    price: Decimal::new(19999, 2),
                    description: "Elegant freshwater pearl necklace with matching earrings. Perfect for formal occasions.".to_string(),
                    images: images(&["pearl_set_1.jpg", "pearl_set_2.jpg"]),
                    specifications: specifications(&[
                        ("material", "Freshwater Pearls"),
                        ("color", "White"),
                        ("length", "18 inches"),
                        ("clasp", "Lobster Clasp"),
                        ("includes", "Necklace and Earrings"),
                    ]),
                },
                ProductSpec {
                    name: "Silk Scarf Collection".to_string(),
                    category_name: "Scarves".to_string(),
                    price: Decimal::new(8999, 2),
                    description: "Luxurious silk scarf with hand-painted floral design. Available in multiple colors.".to_string(),
                    images: images(&["silk_scarf_1.jpg", "silk_scarf_2.jpg"]),
                    specifications: specifications(&[
                        ("material", "100% Silk"),
                        ("size", "35\" x 35\""),
                        ("pattern", "Hand-painted Floral"),
                        ("care", "Dry Clean Only"),
                        ("colors", "Blue, Red, Green, Purple"),
                    ]),
                },
                ProductSpec {
                    name: "Classic Leather Belt".to_string(),
                    category_name: "Belts".to_string(),
                    price: Decimal::new(7999, 2),
                    description: "Premium leather belt with classic buckle design. Available in various sizes.".to_string(),
                    images: images(&["leather_belt_1.jpg"]),
                    specifications: specifications(&[
                        ("material", "Genuine Leather"),
                        ("color", "Black, Brown"),
                        ("width", "1.25 inches"),
                        ("buckle", "Classic Brass"),
                        ("sizes", "30\", 32\", 34\", 36\", 38\""),
                    ]),
                },
                ProductSpec {
                    name: "Bifold Leather Wallet".to_string(),
                    category_name: "Wallets".to_string(),
                    price: Decimal::new(12999, 2),
                    description: "Handcrafted bifold wallet with multiple card slots and coin pocket.".to_string(),
                    images: images(&["wallet_1.jpg", "wallet_2.jpg"]),
                    specifications: specifications(&[
                        ("material", "Full-grain Leather"),
                        ("color", "Saddle Brown"),
                        ("style", "Bifold"),
                        ("card_slots", "6"),
                        ("coin_pocket", "Yes"),
                        ("bill_compartment", "Yes"),
                    ]),
                },
            ],
        }
    }
}

fn category(name: &str, description: &str) -> CategorySpec {
    CategorySpec {
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn images(files: &[&str]) -> Vec<String> {
    files.iter().map(|f| f.to_string()).collect()
}

fn specifications(pairs: &[(&str, &str)]) -> Specifications {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_shape() {
        let dataset = Dataset::builtin();

        assert_eq!(dataset.categories.len(), 5);
        assert_eq!(dataset.products.len(), 5);

        let tote = &dataset.products[0];
        assert_eq!(tote.name, "Classic Leather Tote Bag");
        assert_eq!(tote.category_name, "Handbags");
        assert_eq!(tote.price.to_string(), "299.99");
        assert_eq!(tote.specifications["hardware"], "Brass");
    }

    #[test]
    fn test_builtin_is_consistent() {
        let dataset = Dataset::builtin();

        let category_names: HashSet<_> = dataset.categories.iter().map(|c| &c.name).collect();
        assert_eq!(category_names.len(), dataset.categories.len());

        let product_names: HashSet<_> = dataset.products.iter().map(|p| &p.name).collect();
        assert_eq!(product_names.len(), dataset.products.len());

        for product in &dataset.products {
            assert!(
                category_names.contains(&product.category_name),
                "{} references unknown category {}",
                product.name,
                product.category_name
            );
            assert!(product.price > Decimal::ZERO);
            assert!(!product.images.is_empty());
        }
    }

    #[test]
    fn test_from_json_str() {
        let raw = r#"{
            "categories": [{ "name": "Hats", "description": "Wide-brim hats" }],
            "products": [{
                "name": "Panama Hat",
                "category_name": "Hats",
                "price": 149.5,
                "description": "Hand-woven straw"
            }]
        }"#;

        let dataset = Dataset::from_json_str(raw).unwrap();

        assert_eq!(dataset.categories[0].name, "Hats");
        let hat = &dataset.products[0];
        assert_eq!(hat.price, Decimal::new(1495, 1));
        assert!(hat.images.is_empty());
        assert!(hat.specifications.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_malformed_input() {
        let err = Dataset::from_json_str(r#"{ "categories": [] }"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_from_json_str_rejects_sub_cent_price() {
        let raw = r#"{
            "categories": [{ "name": "Hats", "description": "Wide-brim hats" }],
            "products": [{
                "name": "Panama Hat",
                "category_name": "Hats",
                "price": "149.555",
                "description": "Hand-woven straw"
            }]
        }"#;

        match Dataset::from_json_str(raw).unwrap_err() {
            DatasetError::InvalidPrice { product, price } => {
                assert_eq!(product, "Panama Hat");
                assert_eq!(price.to_string(), "149.555");
            }
            other => panic!("expected InvalidPrice, got {other:?}"),
        }
    }

    #[test]
    fn test_price_validation() {
        let mut dataset = Dataset::builtin();
        assert!(dataset.validate_prices().is_ok());

        // Trailing zeros do not count as extra precision.
        dataset.products[0].price = "149.500".parse().unwrap();
        assert!(dataset.validate_prices().is_ok());

        dataset.products[0].price = Decimal::ZERO;
        assert!(matches!(
            dataset.validate_prices(),
            Err(DatasetError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Dataset::from_json_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
