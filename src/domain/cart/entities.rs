use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_objects::Quantity;
use crate::domain::catalog::{Price, Product, ProductId};
use crate::domain::errors::StorageError;
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, get_logger};
use crate::{log_debug, log_warn};

/// Entity - one product's entry in the cart. Product fields are copied at
/// add-time, later catalog changes do not affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: Quantity,
}

impl CartItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: Quantity::ONE,
        }
    }

    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity.value())
    }
}

/// Aggregate - ordered line items, at most one per product id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Σ price × quantity, recomputed on every call. Carts built through
    /// the store or restored from a snapshot never exceed [`Price::MAX`].
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity, recomputed on every call.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity.value())).sum()
    }

    /// Whether the cart total stays representable once the line for `id`
    /// holds `quantity` units at `price`. Other lines are kept as they are.
    pub fn accepts(&self, id: ProductId, price: Price, quantity: Quantity) -> bool {
        let Some(line) = price.checked_times(quantity.value()) else {
            return false;
        };
        self.items
            .iter()
            .filter(|item| item.id != id)
            .try_fold(line, |acc, item| {
                item.price
                    .checked_times(item.quantity.value())
                    .and_then(|other| acc.checked_add(other))
            })
            .is_some()
    }

    /// Increment an existing line or append a new one with quantity 1.
    /// Returns the resulting quantity.
    pub(crate) fn add_product(&mut self, product: &Product) -> Quantity {
        match self.get_mut(product.id) {
            Some(item) => {
                item.quantity = item.quantity.incremented();
                item.quantity
            }
            None => {
                self.items.push(CartItem::from_product(product));
                Quantity::ONE
            }
        }
    }

    pub(crate) fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// JSON snapshot written to durable storage.
    pub fn to_snapshot(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.items).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Rebuild a cart from a persisted snapshot. Unparsable or non-list
    /// data yields an empty cart; malformed entries are skipped one by one.
    pub fn from_snapshot(raw: &str) -> Self {
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(e) => {
                log_warn!(LogComponent::Domain("Cart"), "Discarding unparsable cart snapshot: {}", e);
                return Self::new();
            }
        };
        let Value::Array(entries) = value else {
            log_warn!(LogComponent::Domain("Cart"), "Discarding cart snapshot that is not a list");
            return Self::new();
        };

        let mut cart = Self::new();
        for entry in &entries {
            let Some(item) = restore_item(entry) else {
                get_logger().log(
                    LogEntry::new(LogLevel::Warn, LogComponent::Domain("Cart"), "Skipping invalid cart entry")
                        .with_context(entry.to_string()),
                );
                continue;
            };
            if cart.get(item.id).is_some() {
                log_warn!(LogComponent::Domain("Cart"), "Dropping duplicate cart entry for id {}", item.id);
                continue;
            }
            if !cart.accepts(item.id, item.price, item.quantity) {
                log_warn!(LogComponent::Domain("Cart"), "Dropping cart entry {} with out-of-range total", item.id);
                continue;
            }
            cart.items.push(item);
        }

        log_debug!(LogComponent::Domain("Cart"), "Restored {} cart lines", cart.len());
        cart
    }
}

/// Lenient decode of one persisted entry: the id is mandatory, other
/// fields fall back to safe defaults and a corrupt quantity becomes 1.
fn restore_item(entry: &Value) -> Option<CartItem> {
    let object = entry.as_object()?;
    let id = ProductId::new(object.get("id")?.as_u64()?);

    let text = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let price = object
        .get("price")
        .and_then(|value| serde_json::from_value::<Price>(value.clone()).ok())
        .unwrap_or(Price::ZERO);
    let quantity = object
        .get("quantity")
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .and_then(Quantity::new)
        .unwrap_or(Quantity::ONE);

    Some(CartItem {
        id,
        name: text("name"),
        price,
        image: text("image"),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_snapshot_is_discarded() {
        assert!(Cart::from_snapshot("{not json").is_empty());
        assert!(Cart::from_snapshot("{\"id\": 1}").is_empty());
    }

    #[test]
    fn invalid_entries_are_skipped_individually() {
        let raw = r#"[
            {"id": 1, "name": "Mug", "price": "10.00", "image": "", "quantity": 2},
            "garbage",
            {"name": "no id", "price": 3, "quantity": 1},
            {"id": 2, "name": "Lamp", "price": 5, "image": "", "quantity": "many"}
        ]"#;
        let cart = Cart::from_snapshot(raw);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity.value(), 2);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, Quantity::ONE);
    }

    #[test]
    fn overflowing_entry_is_dropped_on_restore() {
        let raw = r#"[
            {"id": 1, "name": "Mug", "price": 10, "image": "", "quantity": 2},
            {"id": 2, "name": "Yacht", "price": "100000000000000000000", "image": "", "quantity": 4000000000}
        ]"#;
        let cart = Cart::from_snapshot(raw);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Price::from_cents(2000));
    }

    #[test]
    fn accepts_checks_the_whole_total() {
        let raw = r#"[{"id": 1, "name": "Yacht", "price": "50000000000000000000000000000", "image": "", "quantity": 1}]"#;
        let cart = Cart::from_snapshot(raw);
        assert_eq!(cart.len(), 1);
        let big = cart.items()[0].price;
        assert!(!cart.accepts(ProductId::new(2), big, Quantity::ONE));
        assert!(cart.accepts(ProductId::new(1), big, Quantity::ONE));
        assert!(cart.accepts(ProductId::new(2), Price::from_cents(100), Quantity::ONE));
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let raw = r#"[
            {"id": 7, "name": "First", "price": 1, "image": "", "quantity": 1},
            {"id": 7, "name": "Second", "price": 1, "image": "", "quantity": 4}
        ]"#;
        let cart = Cart::from_snapshot(raw);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "First");
    }
}
