use insta::{assert_json_snapshot, assert_snapshot};
use storefront_wasm::application::{CartStore, CatalogState};
use storefront_wasm::domain::catalog::{Catalog, Category, CategoryFilter, Price, Product, ProductId};
use storefront_wasm::infrastructure::MemoryCartStorage;
use storefront_wasm::presentation::view_models::{
    EMPTY_CART_MESSAGE, NO_PRODUCTS_MESSAGE, ProductGridView, render_cart, render_categories, render_grid,
    render_products,
};

const PLACEHOLDER: &str = "https://via.placeholder.com/100";

fn product(id: u64, name: &str, cents: i64, category: &str, image: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents),
        description: String::new(),
        category: Category::from(category),
        image: image.to_string(),
    }
}

#[test]
fn empty_cart_has_placeholder_and_no_checkout() {
    let store = CartStore::restore(MemoryCartStorage::new());
    let view = render_cart(store.cart(), PLACEHOLDER);
    assert!(view.is_empty());
    assert_eq!(view.empty_message.as_deref(), Some(EMPTY_CART_MESSAGE));
    assert!(!view.checkout_enabled);
    assert_eq!(view.total, "$0.00");
    assert_eq!(view.item_count, 0);
}

#[test]
fn cart_lines_fall_back_to_placeholders() {
    let mut store = CartStore::restore(MemoryCartStorage::new());
    store.add(&product(1, "Mug", 1050, "Kitchen", "")).unwrap();
    store.add(&product(1, "Mug", 1050, "Kitchen", "")).unwrap();
    store.add(&product(2, "Lamp", 333, "Home", "img/lamp.png")).unwrap();

    let view = render_cart(store.cart(), PLACEHOLDER);
    assert!(view.checkout_enabled);
    assert_eq!(view.empty_message, None);
    assert_eq!(view.lines[0].image, PLACEHOLDER);
    assert_eq!(view.lines[1].image, "img/lamp.png");
    assert_snapshot!(
        format!("{} items, total {}, first line {}", view.item_count, view.total, view.lines[0].line_total),
        @"3 items, total $24.33, first line $21.00"
    );
}

#[test]
fn restored_line_without_name_is_labelled() {
    let raw = r#"[{"id": 4, "price": 1, "quantity": 1}]"#;
    let store = CartStore::restore(MemoryCartStorage::with_snapshot(raw));
    let view = render_cart(store.cart(), PLACEHOLDER);
    assert_eq!(view.lines[0].name, "Unnamed product");
    assert_eq!(view.lines[0].image, PLACEHOLDER);
}

#[test]
fn exactly_one_category_button_is_active() {
    let categories = vec![Category::from("Kitchen"), Category::from("Home")];
    for filter in [
        CategoryFilter::All,
        CategoryFilter::Only(Category::from("Kitchen")),
        CategoryFilter::Only(Category::from("Home")),
    ] {
        let buttons = render_categories(&categories, &filter);
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
        assert_eq!(buttons.iter().find(|b| b.active).map(|b| b.key.as_str()), Some(filter.key()));
    }
}

#[test]
fn category_bar_snapshot() {
    let categories = vec![Category::from("Kitchen"), Category::from("Home")];
    let buttons = render_categories(&categories, &CategoryFilter::Only(Category::from("Home")));
    assert_json_snapshot!(buttons, @r#"
    [
      {
        "key": "all",
        "label": "All",
        "active": false
      },
      {
        "key": "Kitchen",
        "label": "Kitchen",
        "active": false
      },
      {
        "key": "Home",
        "label": "Home",
        "active": true
      }
    ]
    "#);
}

#[test]
fn empty_product_list_shows_placeholder() {
    assert_eq!(
        render_products(&[]),
        ProductGridView::Empty { message: NO_PRODUCTS_MESSAGE.to_string() }
    );
}

#[test]
fn grid_follows_active_filter() {
    let catalog = Catalog::new(vec![
        product(1, "Mug", 1000, "Kitchen", ""),
        product(2, "Lamp", 500, "Home", ""),
    ])
    .unwrap();
    let state = CatalogState::Ready(catalog);

    let ProductGridView::Products(cards) = render_grid(&state, &CategoryFilter::Only(Category::from("Home"))) else {
        panic!("expected products");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 2);
    assert_eq!(cards[0].price, "$5.00");
}
