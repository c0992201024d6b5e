use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::value_objects::{Category, CategoryFilter, Price, ProductId};
use crate::domain::errors::{LoadError, LoadResult, ValidationError};

/// Entity - a purchasable product, immutable for the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(deserialize_with = "Price::deserialize_number")]
    pub price: Price,
    pub description: String,
    pub category: Category,
    pub image: String,
}

impl Product {
    /// A product can go into the cart only with a name and a non-negative price.
    pub fn ensure_purchasable(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NotPurchasable {
                id: self.id.value(),
                reason: "missing name".to_string(),
            });
        }
        if self.price.is_negative() {
            return Err(ValidationError::NotPurchasable {
                id: self.id.value(),
                reason: format!("negative price {}", self.price.amount()),
            });
        }
        Ok(())
    }
}

/// Aggregate - the static product list plus its distinct categories
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from already decoded products. Fails on an empty
    /// list or on duplicate ids.
    pub fn new(products: Vec<Product>) -> LoadResult<Self> {
        if products.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen_ids = HashSet::with_capacity(products.len());
        let mut categories: Vec<Category> = Vec::new();
        for product in &products {
            if !seen_ids.insert(product.id) {
                return Err(LoadError::invalid(format!("duplicate product id {}", product.id)));
            }
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        Ok(Self { products, categories })
    }

    /// Parse the catalog document. The whole payload is rejected if any
    /// element is malformed.
    pub fn from_json(payload: &str) -> LoadResult<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| LoadError::invalid(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> LoadResult<Self> {
        let Value::Array(items) = value else {
            return Err(LoadError::invalid("payload is not a list"));
        };
        if items.is_empty() {
            return Err(LoadError::Empty);
        }

        let products = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Product>(item)
                    .map_err(|e| LoadError::invalid(format!("product #{}: {}", index, e)))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Subsequence of the catalog matching the filter, original order kept.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(&product.category))
            .collect()
    }

    /// Resolve a `data-category` value against the loaded categories.
    pub fn resolve_filter(&self, key: &str) -> Option<CategoryFilter> {
        if key == CategoryFilter::ALL_KEY {
            return Some(CategoryFilter::All);
        }
        self.categories
            .iter()
            .find(|category| category.value() == key)
            .cloned()
            .map(CategoryFilter::Only)
    }
}
