use crate::domain::cart::Quantity;
use crate::domain::catalog::ProductId;
use std::fmt::Debug;

/// Base trait for domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Why a line left the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalCause {
    /// The shopper pressed the remove button.
    Removed,
    /// A decrement took the quantity below one.
    Depleted,
}

/// Outcome of a cart mutation, translated into view updates by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded {
        id: ProductId,
        name: String,
        quantity: Quantity,
    },
    QuantityChanged {
        id: ProductId,
        quantity: Quantity,
    },
    ItemRemoved {
        id: ProductId,
        name: String,
        cause: RemovalCause,
    },
    Cleared,
    CheckedOut {
        item_count: u64,
    },
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "ItemAdded",
            CartEvent::QuantityChanged { .. } => "QuantityChanged",
            CartEvent::ItemRemoved { .. } => "ItemRemoved",
            CartEvent::Cleared => "Cleared",
            CartEvent::CheckedOut { .. } => "CheckedOut",
        }
    }
}
