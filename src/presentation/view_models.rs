//! Pure projections from state to what the components draw.
//!
//! Nothing here touches the DOM: each function maps a slice of state to a
//! plain view model and is re-run after every mutation. Totals and counts
//! are recomputed on every call, never stored.

use serde::Serialize;

use crate::application::CatalogState;
use crate::domain::{
    cart::{Cart, CartItem},
    catalog::{Category, CategoryFilter, Product},
};

pub const ALL_CATEGORIES_LABEL: &str = "All";
pub const NO_PRODUCTS_MESSAGE: &str = "No products available";
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";
const UNNAMED_PRODUCT: &str = "Unnamed product";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardView {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.value().to_string(),
            image: product.image.clone(),
        }
    }
}

/// What the product grid shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProductGridView {
    /// Fetch still pending: nothing is drawn.
    Loading,
    /// Fetch failed: message plus a reload button.
    Failed { message: String },
    /// Explicit placeholder instead of an empty grid.
    Empty { message: String },
    Products(Vec<ProductCardView>),
}

/// Grid markup for a product list.
pub fn render_products(products: &[&Product]) -> ProductGridView {
    if products.is_empty() {
        return ProductGridView::Empty { message: NO_PRODUCTS_MESSAGE.to_string() };
    }
    ProductGridView::Products(products.iter().map(|product| ProductCardView::from(*product)).collect())
}

/// Grid for the current catalog state under `filter`.
pub fn render_grid(state: &CatalogState, filter: &CategoryFilter) -> ProductGridView {
    match state {
        CatalogState::Loading => ProductGridView::Loading,
        CatalogState::Failed(e) => ProductGridView::Failed {
            message: format!("Error loading products: {}", e.reason()),
        },
        CatalogState::Ready(catalog) => render_products(&catalog.filter(filter)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButtonView {
    /// `data-category` value: `"all"` or the category itself.
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// "All" followed by one button per category; exactly one is active.
pub fn render_categories(categories: &[Category], active: &CategoryFilter) -> Vec<CategoryButtonView> {
    let all = CategoryButtonView {
        key: CategoryFilter::ALL_KEY.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
        active: *active == CategoryFilter::All,
    };
    std::iter::once(all)
        .chain(categories.iter().map(|category| CategoryButtonView {
            key: category.value().to_string(),
            label: category.value().to_string(),
            active: matches!(active, CategoryFilter::Only(selected) if selected == category),
        }))
        .collect()
}

/// Filter bar for the catalog state; empty until the catalog is ready.
pub fn render_category_bar(state: &CatalogState, active: &CategoryFilter) -> Vec<CategoryButtonView> {
    state
        .catalog()
        .map(|catalog| render_categories(catalog.categories(), active))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineView {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: u32,
    pub line_total: String,
}

impl CartLineView {
    fn project(item: &CartItem, placeholder_image: &str) -> Self {
        let name = if item.name.trim().is_empty() { UNNAMED_PRODUCT } else { item.name.as_str() };
        let image = if item.image.trim().is_empty() { placeholder_image } else { item.image.as_str() };
        Self {
            id: item.id.value(),
            name: name.to_string(),
            price: item.price.to_string(),
            image: image.to_string(),
            quantity: item.quantity.value(),
            line_total: item.line_total().to_string(),
        }
    }
}

/// Cart drawer contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartPanelView {
    pub lines: Vec<CartLineView>,
    pub empty_message: Option<String>,
    pub total: String,
    pub item_count: u64,
    pub checkout_enabled: bool,
}

impl CartPanelView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One row per line item; an empty cart gets a message and no checkout.
pub fn render_cart(cart: &Cart, placeholder_image: &str) -> CartPanelView {
    let lines: Vec<CartLineView> = cart
        .items()
        .iter()
        .map(|item| CartLineView::project(item, placeholder_image))
        .collect();
    let empty = lines.is_empty();
    CartPanelView {
        lines,
        empty_message: empty.then(|| EMPTY_CART_MESSAGE.to_string()),
        total: cart.total().to_string(),
        item_count: cart.item_count(),
        checkout_enabled: !empty,
    }
}
