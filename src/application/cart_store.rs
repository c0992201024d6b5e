use crate::domain::{
    cart::{Cart, CartStorage, Quantity},
    catalog::{Price, Product, ProductId},
    errors::ValidationError,
    events::{CartEvent, RemovalCause},
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_info, log_warn};

/// Result of editing a quantity input directly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityEdit {
    /// The new quantity was stored.
    Applied(CartEvent),
    /// The input was valid but no line with that id exists.
    Ignored,
    /// Not a positive integer, or a total out of range; the field must
    /// show 1 again.
    Rejected(ValidationError),
}

/// The cart plus its durable mirror. Every mutation writes the whole
/// snapshot before returning.
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the persisted cart once; missing or corrupt data starts empty.
    pub fn restore(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(raw)) => Cart::from_snapshot(&raw),
            Ok(None) => Cart::new(),
            Err(e) => {
                log_warn!(LogComponent::Application("CartStore"), "Cart storage unreadable, starting empty: {}", e);
                Cart::new()
            }
        };
        log_info!(
            LogComponent::Application("CartStore"),
            "Cart restored with {} lines ({} items)",
            cart.len(),
            cart.item_count()
        );
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of `product`, creating the line if needed.
    pub fn add(&mut self, product: &Product) -> Result<CartEvent, ValidationError> {
        product.ensure_purchasable()?;
        let (price, next) = match self.cart.get(product.id) {
            Some(item) => (item.price, item.quantity.incremented()),
            None => (product.price, Quantity::ONE),
        };
        self.ensure_total_fits(product.id, price, next)?;
        let quantity = self.cart.add_product(product);
        self.persist();
        log_debug!(
            LogComponent::Application("CartStore"),
            "Added {} (id {}), quantity now {}",
            product.name,
            product.id,
            quantity
        );
        Ok(CartEvent::ItemAdded {
            id: product.id,
            name: product.name.clone(),
            quantity,
        })
    }

    /// Add one unit; refused (logged) when the cart total would overflow.
    pub fn increase(&mut self, id: ProductId) -> Option<CartEvent> {
        let (price, next) = self.cart.get(id).map(|item| (item.price, item.quantity.incremented()))?;
        if let Err(e) = self.ensure_total_fits(id, price, next) {
            log_warn!(LogComponent::Application("CartStore"), "Refused increase: {}", e);
            return None;
        }
        let item = self.cart.get_mut(id)?;
        item.quantity = next;
        let quantity = item.quantity;
        self.persist();
        Some(CartEvent::QuantityChanged { id, quantity })
    }

    /// Decrement; a line at quantity 1 is removed instead.
    pub fn decrease(&mut self, id: ProductId) -> Option<CartEvent> {
        let item = self.cart.get_mut(id)?;
        let event = match item.quantity.decremented() {
            Some(quantity) => {
                item.quantity = quantity;
                CartEvent::QuantityChanged { id, quantity }
            }
            None => {
                let removed = self.cart.remove(id)?;
                CartEvent::ItemRemoved {
                    id,
                    name: removed.name,
                    cause: RemovalCause::Depleted,
                }
            }
        };
        self.persist();
        Some(event)
    }

    /// Direct edit from the quantity input.
    pub fn set_quantity(&mut self, id: ProductId, raw: &str) -> QuantityEdit {
        let quantity = match Quantity::parse(raw) {
            Ok(quantity) => quantity,
            Err(e) => {
                log_warn!(LogComponent::Application("CartStore"), "Rejected quantity edit for {}: {}", id, e);
                return QuantityEdit::Rejected(e);
            }
        };
        let Some(price) = self.cart.get(id).map(|item| item.price) else {
            return QuantityEdit::Ignored;
        };
        if let Err(e) = self.ensure_total_fits(id, price, quantity) {
            log_warn!(LogComponent::Application("CartStore"), "Rejected quantity edit for {}: {}", id, e);
            return QuantityEdit::Rejected(e);
        }
        let Some(item) = self.cart.get_mut(id) else {
            return QuantityEdit::Ignored;
        };
        item.quantity = quantity;
        self.persist();
        QuantityEdit::Applied(CartEvent::QuantityChanged { id, quantity })
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartEvent> {
        let removed = self.cart.remove(id)?;
        self.persist();
        Some(CartEvent::ItemRemoved {
            id,
            name: removed.name,
            cause: RemovalCause::Removed,
        })
    }

    /// Empty the cart. `confirmed` is the answer of the destructive-action
    /// prompt; a declined prompt leaves everything untouched.
    pub fn clear(&mut self, confirmed: bool) -> Option<CartEvent> {
        if !confirmed {
            return None;
        }
        self.cart.clear();
        self.persist();
        Some(CartEvent::Cleared)
    }

    /// Client-only checkout: empties a non-empty cart.
    pub fn checkout(&mut self) -> Option<CartEvent> {
        if self.cart.is_empty() {
            return None;
        }
        let item_count = self.cart.item_count();
        self.cart.clear();
        self.persist();
        log_info!(LogComponent::Application("CartStore"), "Checkout completed for {} items", item_count);
        Some(CartEvent::CheckedOut { item_count })
    }

    fn ensure_total_fits(&self, id: ProductId, price: Price, quantity: Quantity) -> Result<(), ValidationError> {
        if self.cart.accepts(id, price, quantity) {
            Ok(())
        } else {
            Err(ValidationError::AmountOverflow { id: id.value(), quantity: quantity.value() })
        }
    }

    fn persist(&mut self) {
        let result = self
            .cart
            .to_snapshot()
            .and_then(|snapshot| self.storage.save(&snapshot));
        if let Err(e) = result {
            log_error!(LogComponent::Application("CartStore"), "Failed to persist cart: {}", e);
        }
    }
}
