use derive_more::{Display, From};

/// Root error type for the storefront. Nothing here is fatal to the page;
/// every variant degrades to a narrower UI state.
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Catalog: {}", _0)]
    Load(LoadError),
    #[display(fmt = "Validation: {}", _0)]
    Validation(ValidationError),
    #[display(fmt = "Storage: {}", _0)]
    Storage(StorageError),
    #[display(fmt = "Config: {}", _0)]
    Config(ConfigError),
}

/// Why the catalog could not be loaded. No partial catalog is ever accepted.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LoadError {
    #[display(fmt = "request failed: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP error: {} {}", status, text)]
    Status { status: u16, text: String },
    #[display(fmt = "invalid catalog: {}", reason)]
    InvalidPayload { reason: String },
    #[display(fmt = "catalog is empty")]
    Empty,
}

impl LoadError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidPayload { reason: reason.into() }
    }

    /// Human readable reason shown next to the retry button.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Rejected input coming from the DOM or from catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "invalid product id: {:?}", _0)]
    InvalidProductId(String),
    #[display(fmt = "invalid quantity: {:?}", _0)]
    InvalidQuantity(String),
    #[display(fmt = "unknown product id {}", _0)]
    UnknownProduct(u64),
    #[display(fmt = "product {} is not purchasable: {}", id, reason)]
    NotPurchasable { id: u64, reason: String },
    #[display(fmt = "catalog not loaded")]
    CatalogUnavailable,
    #[display(fmt = "cart total out of range with {} x product {}", quantity, id)]
    AmountOverflow { id: u64, quantity: u32 },
}

/// Durable cart storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StorageError {
    #[display(fmt = "storage unavailable: {}", _0)]
    Unavailable(String),
    #[display(fmt = "write failed: {}", _0)]
    WriteFailed(String),
    #[display(fmt = "serialization failed: {}", _0)]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "malformed config object: {}", _0)]
    Malformed(String),
    #[display(fmt = "{} must not be empty", _0)]
    EmptyField(&'static str),
    #[display(fmt = "{} must be greater than zero", _0)]
    ZeroDuration(&'static str),
}

impl std::error::Error for AppError {}
impl std::error::Error for LoadError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for StorageError {}
impl std::error::Error for ConfigError {}

pub type LoadResult<T> = Result<T, LoadError>;
pub type StorageResult<T> = Result<T, StorageError>;
