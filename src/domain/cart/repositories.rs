use crate::domain::errors::StorageResult;

/// Durable home of the cart snapshot (a single key holding a JSON list)
pub trait CartStorage {
    /// Raw snapshot, `None` when nothing has been persisted yet.
    fn load(&self) -> StorageResult<Option<String>>;

    /// Overwrite the snapshot wholesale.
    fn save(&mut self, snapshot: &str) -> StorageResult<()>;
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn load(&self) -> StorageResult<Option<String>> {
        (**self).load()
    }

    fn save(&mut self, snapshot: &str) -> StorageResult<()> {
        (**self).save(snapshot)
    }
}
