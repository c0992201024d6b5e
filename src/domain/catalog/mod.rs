//! Catalog aggregate: products, prices, categories and the grid filter.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
