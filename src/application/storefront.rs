use crate::application::cart_store::{CartStore, QuantityEdit};
use crate::domain::{
    cart::{Cart, CartStorage},
    catalog::{Catalog, CategoryFilter, Product, ProductId},
    errors::{LoadError, ValidationError},
    events::CartEvent,
    logging::LogComponent,
};
use crate::{log_info, log_warn};

/// Lifecycle of the single catalog fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(LoadError),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Single owner of all page state: catalog, cart and active filter.
/// Renderers read it, the interaction layer calls its methods.
pub struct Storefront<S: CartStorage> {
    catalog: CatalogState,
    cart: CartStore<S>,
    filter: CategoryFilter,
}

impl<S: CartStorage> Storefront<S> {
    pub fn new(storage: S) -> Self {
        Self {
            catalog: CatalogState::Loading,
            cart: CartStore::restore(storage),
            filter: CategoryFilter::All,
        }
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.catalog()
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn cart_store(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Apply the outcome of the catalog fetch.
    pub fn finish_loading(&mut self, result: Result<Catalog, LoadError>) {
        self.catalog = match result {
            Ok(catalog) => {
                log_info!(
                    LogComponent::Application("Storefront"),
                    "Catalog ready: {} products in {} categories",
                    catalog.len(),
                    catalog.categories().len()
                );
                CatalogState::Ready(catalog)
            }
            Err(e) => {
                log_warn!(LogComponent::Application("Storefront"), "Catalog failed to load: {}", e);
                CatalogState::Failed(e)
            }
        };
        self.filter = CategoryFilter::All;
    }

    /// Products visible under the active filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog()
            .map(|catalog| catalog.filter(&self.filter))
            .unwrap_or_default()
    }

    /// Switch the grid filter; unknown categories leave it unchanged.
    pub fn select_category(&mut self, key: &str) -> bool {
        match self.catalog().and_then(|catalog| catalog.resolve_filter(key)) {
            Some(filter) => {
                self.filter = filter;
                true
            }
            None => {
                log_warn!(LogComponent::Application("Storefront"), "Ignoring unknown category {:?}", key);
                false
            }
        }
    }

    pub fn product(&self, id: ProductId) -> Result<&Product, ValidationError> {
        let catalog = self.catalog().ok_or(ValidationError::CatalogUnavailable)?;
        catalog.find(id).ok_or(ValidationError::UnknownProduct(id.value()))
    }

    /// Resolve `id` against the catalog and add one unit. Unknown or
    /// unpurchasable products are logged and leave the cart untouched.
    pub fn add_by_id(&mut self, id: ProductId) -> Option<CartEvent> {
        let product = match self.product(id) {
            Ok(product) => product.clone(),
            Err(e) => {
                log_warn!(LogComponent::Application("Storefront"), "Cannot add to cart: {}", e);
                return None;
            }
        };
        match self.cart.add(&product) {
            Ok(event) => Some(event),
            Err(e) => {
                log_warn!(LogComponent::Application("Storefront"), "Cannot add to cart: {}", e);
                None
            }
        }
    }

    pub fn increase(&mut self, id: ProductId) -> Option<CartEvent> {
        self.cart.increase(id)
    }

    pub fn decrease(&mut self, id: ProductId) -> Option<CartEvent> {
        self.cart.decrease(id)
    }

    pub fn set_quantity(&mut self, id: ProductId, raw: &str) -> QuantityEdit {
        self.cart.set_quantity(id, raw)
    }

    pub fn remove(&mut self, id: ProductId) -> Option<CartEvent> {
        self.cart.remove(id)
    }

    pub fn clear(&mut self, confirmed: bool) -> Option<CartEvent> {
        self.cart.clear(confirmed)
    }

    pub fn checkout(&mut self) -> Option<CartEvent> {
        self.cart.checkout()
    }
}
