pub mod interactions;
pub mod view_models;
pub mod wasm_api;

pub use interactions::{Reaction, StorefrontHandle, react_to};
pub use wasm_api::mount_storefront;
