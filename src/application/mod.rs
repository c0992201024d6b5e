//! Application layer: state ownership and use cases, no DOM access.

pub mod cart_store;
pub mod checkout;
pub mod storefront;

pub use cart_store::{CartStore, QuantityEdit};
pub use checkout::{whatsapp_link, whatsapp_message};
pub use storefront::{CatalogState, Storefront};
