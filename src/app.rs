use leptos::*;

use crate::domain::catalog::ProductId;
use crate::infrastructure::ui;
use crate::presentation::interactions::StorefrontHandle;
use crate::presentation::view_models::{
    CartLineView, ProductCardView, ProductGridView, render_cart, render_category_bar, render_grid,
};

/// 🛍️ Root storefront component
#[component]
pub fn App(handle: StorefrontHandle) -> impl IntoView {
    provide_context(handle);
    handle.load_catalog();

    // Either overlay open keeps the page from scrolling
    create_effect(move |_| {
        ui::set_scroll_locked(handle.overlay.with(|overlay| overlay.scroll_locked()));
    });

    view! {
        <style>{STYLES}</style>
        <div class="storefront">
            <Header />
            <CategoryFilters />
            <ProductGrid />
            <div
                class="overlay"
                class:active=move || handle.overlay.with(|overlay| overlay.backdrop_visible())
                on:click=move |_| handle.close_overlays()
            ></div>
            <CartPanel />
            <ProductModal />
            <NotificationStack />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let count = move || handle.store.with(|store| store.cart().item_count());

    view! {
        <header class="store-header">
            <h1 class="store-title">"Store"</h1>
            <button class="cart-icon" on:click=move |_| handle.open_cart()>
                "🛒"
                <span class="cart-count">{count}</span>
            </button>
        </header>
    }
}

/// "All" plus one button per category, rebuilt after every transition
#[component]
fn CategoryFilters() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let buttons = move || handle.store.with(|store| render_category_bar(store.catalog_state(), store.filter()));

    view! {
        <div class="category-filters">
            {move || {
                buttons()
                    .into_iter()
                    .map(|button| {
                        let key = button.key.clone();
                        view! {
                            <button
                                class="category-btn"
                                class:active=button.active
                                data-category=button.key
                                on:click=move |_| handle.select_category(&key)
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let grid = move || handle.store.with(|store| render_grid(store.catalog_state(), store.filter()));

    view! {
        <div class="products-grid">
            {move || match grid() {
                ProductGridView::Loading => ().into_view(),
                ProductGridView::Failed { message } => view! {
                    <div class="error-message">
                        <p>{message}</p>
                        <button class="retry-btn" on:click=|_| ui::reload_page()>
                            "Try again"
                        </button>
                    </div>
                }
                .into_view(),
                ProductGridView::Empty { message } => view! { <p class="no-products">{message}</p> }.into_view(),
                ProductGridView::Products(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ProductCard(card: ProductCardView) -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let id = ProductId::new(card.id);
    let ProductCardView { name, price, description, image, .. } = card;
    let alt = name.clone();

    view! {
        <div class="product-card" data-id=id.value()>
            <div class="product-image">
                <img src=image alt=alt />
            </div>
            <div class="product-info">
                <h3 class="product-title">{name}</h3>
                <p class="product-price">{price}</p>
                <p class="product-description">{description}</p>
                <div class="product-actions">
                    <div class="top-buttons">
                        <button class="add-to-cart" on:click=move |_| handle.add_to_cart(id)>
                            "Add"
                        </button>
                        <button class="view-details" on:click=move |_| handle.show_details(id)>
                            "View details"
                        </button>
                    </div>
                    <button class="whatsapp-btn" on:click=move |_| handle.buy_via_whatsapp(id)>
                        "Buy now"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Product detail overlay
#[component]
fn ProductModal() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let detail = move || {
        let id = handle.overlay.with(|overlay| overlay.modal_product)?;
        handle.store.with(|store| store.product(id).ok().map(ProductCardView::from))
    };

    view! {
        <div class="product-modal" class:show=move || handle.overlay.with(|overlay| overlay.modal_open())>
            <div class="product-modal-content">
                <button class="close-modal" on:click=move |_| handle.close_modal()>"×"</button>
                <div class="product-modal-details">
                    {move || detail().map(|card| {
                        let id = ProductId::new(card.id);
                        let alt = card.name.clone();
                        view! {
                            <div class="modal-product-image">
                                <img src=card.image alt=alt />
                            </div>
                            <div class="modal-product-info">
                                <h2>{card.name}</h2>
                                <p class="modal-product-price">{card.price}</p>
                                <div class="modal-product-description">
                                    <h3>"Description:"</h3>
                                    <p>{card.description}</p>
                                </div>
                                <div class="modal-product-category">
                                    <h3>"Category:"</h3>
                                    <p>{card.category}</p>
                                </div>
                                <div class="modal-product-actions">
                                    <button
                                        class="modal-add-to-cart"
                                        on:click=move |_| {
                                            handle.add_to_cart(id);
                                            handle.close_modal();
                                        }
                                    >
                                        "Add to cart"
                                    </button>
                                    <button
                                        class="modal-whatsapp"
                                        on:click=move |_| {
                                            handle.buy_via_whatsapp(id);
                                            handle.close_modal();
                                        }
                                    >
                                        "Buy via WhatsApp"
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

/// Cart drawer: lines, total and checkout
#[component]
fn CartPanel() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let placeholder = handle.config.with_value(|config| config.placeholder_image.clone());
    let panel = create_memo(move |_| handle.store.with(|store| render_cart(store.cart(), &placeholder)));

    view! {
        <aside class="cart-sidebar" class:open=move || handle.overlay.with(|overlay| overlay.cart_open)>
            <div class="cart-header">
                <h3>"Your cart"</h3>
                <button class="close-cart" on:click=move |_| handle.close_cart()>"×"</button>
            </div>
            <div class="cart-items">
                {move || {
                    let view = panel.get();
                    match view.empty_message {
                        Some(message) => view! { <p class="empty-cart">{message}</p> }.into_view(),
                        None => view! {
                            <div class="cart-actions">
                                <button class="clear-cart-btn" on:click=move |_| handle.clear_cart()>
                                    "Empty cart"
                                </button>
                            </div>
                            {view
                                .lines
                                .into_iter()
                                .map(|line| view! { <CartLine line=line /> })
                                .collect_view()}
                        }
                        .into_view(),
                    }
                }}
            </div>
            <div class="cart-footer">
                <div class="cart-total">
                    <span>"Total: "</span>
                    <span class="total-amount">{move || panel.with(|view| view.total.clone())}</span>
                </div>
                <button
                    class="checkout-btn"
                    prop:disabled=move || panel.with(|view| !view.checkout_enabled)
                    on:click=move |_| handle.checkout()
                >
                    "Checkout"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn CartLine(line: CartLineView) -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();
    let id = ProductId::new(line.id);
    let alt = line.name.clone();

    let on_quantity_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        if !handle.set_quantity(id, &raw) {
            event_target::<web_sys::HtmlInputElement>(&ev).set_value("1");
        }
    };

    view! {
        <div class="cart-item" data-id=line.id>
            <div class="cart-item-image">
                <img src=line.image alt=alt />
            </div>
            <div class="cart-item-details">
                <h4 class="cart-item-title">{line.name}</h4>
                <p class="cart-item-price">{line.price}</p>
                <div class="cart-item-quantity">
                    <button class="quantity-btn decrease" on:click=move |_| handle.decrease(id)>"−"</button>
                    <input
                        type="number"
                        class="quantity-input"
                        min="1"
                        prop:value=line.quantity.to_string()
                        on:change=on_quantity_change
                    />
                    <button class="quantity-btn increase" on:click=move |_| handle.increase(id)>"+"</button>
                </div>
            </div>
            <button class="remove-item" title="Remove product" on:click=move |_| handle.remove(id)>
                "🗑"
            </button>
        </div>
    }
}

/// Independent toasts stacked bottom-right. Keyed by id so a fade or a
/// new toast never rebuilds the nodes already on screen.
#[component]
fn NotificationStack() -> impl IntoView {
    let handle = expect_context::<StorefrontHandle>();

    view! {
        <div class="notification-stack">
            <For
                each=move || handle.toasts.with(|queue| queue.items().to_vec())
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div
                            class=format!("notification {}", notification.kind)
                            class:show=move || handle.toasts.with(|queue| queue.is_showing(id))
                        >
                            <p>{notification.message}</p>
                            <button class="close-notification" on:click=move |_| handle.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

const STYLES: &str = r#"
.storefront { font-family: -apple-system, BlinkMacSystemFont, sans-serif; --primary-color: #2c6e49; --success-color: #2e7d32; --error-color: #c62828; }
.store-header { display: flex; justify-content: space-between; align-items: center; padding: 15px 20px; }
.cart-icon { position: relative; background: none; border: none; font-size: 24px; cursor: pointer; }
.cart-count { position: absolute; top: -6px; right: -10px; background: var(--primary-color); color: white; border-radius: 50%; padding: 2px 7px; font-size: 12px; }
.category-filters { display: flex; flex-wrap: wrap; gap: 10px; padding: 0 20px 20px; }
.category-btn { padding: 8px 16px; border: 1px solid var(--primary-color); border-radius: 20px; background: white; cursor: pointer; }
.category-btn.active { background: var(--primary-color); color: white; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 20px; padding: 0 20px 40px; }
.product-card { border-radius: 8px; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); overflow: hidden; }
.product-image img { width: 100%; height: 200px; object-fit: cover; }
.product-info { padding: 15px; }
.product-price { font-weight: 700; color: var(--primary-color); }
.top-buttons { display: flex; gap: 10px; margin-bottom: 10px; }
.add-to-cart, .view-details { flex: 1; }
.whatsapp-btn { width: 100%; background-color: #25D366; color: white; border: none; padding: 8px; border-radius: 4px; cursor: pointer; }
.no-products, .empty-cart { text-align: center; padding: 20px; color: #666; }
.error-message { grid-column: 1 / -1; text-align: center; padding: 30px; color: var(--error-color); }
.overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); opacity: 0; visibility: hidden; transition: opacity 0.3s; z-index: 998; }
.overlay.active { opacity: 1; visibility: visible; }
.cart-sidebar { position: fixed; top: 0; right: -400px; width: 380px; max-width: 100%; height: 100%; background: white; display: flex; flex-direction: column; transition: right 0.3s; z-index: 999; }
.cart-sidebar.open { right: 0; }
.cart-header, .cart-footer { display: flex; justify-content: space-between; align-items: center; padding: 15px; }
.cart-items { flex: 1; overflow-y: auto; padding: 0 15px; }
.cart-item { display: flex; gap: 10px; padding: 10px 0; border-bottom: 1px solid #eee; }
.cart-item-image img { width: 70px; height: 70px; object-fit: cover; border-radius: 4px; }
.cart-item-details { flex: 1; }
.quantity-input { width: 50px; text-align: center; }
.checkout-btn:disabled { opacity: 0.5; cursor: not-allowed; }
.product-modal { position: fixed; inset: 0; display: flex; justify-content: center; align-items: center; z-index: 1000; opacity: 0; visibility: hidden; transition: opacity 0.3s; }
.product-modal.show { opacity: 1; visibility: visible; }
.product-modal-content { background: white; width: 90%; max-width: 900px; max-height: 90vh; border-radius: 8px; position: relative; overflow-y: auto; }
.close-modal { position: absolute; top: 15px; right: 15px; background: none; border: none; font-size: 20px; cursor: pointer; }
.product-modal-details { display: flex; flex-wrap: wrap; gap: 30px; padding: 30px; }
.modal-product-image, .modal-product-info { flex: 1; min-width: 300px; }
.modal-product-image img { width: 100%; border-radius: 4px; }
.modal-product-price { font-size: 28px; font-weight: 700; color: var(--primary-color); }
.modal-product-actions { display: flex; gap: 15px; margin-top: 30px; }
.modal-add-to-cart { background: var(--primary-color); color: white; }
.modal-whatsapp { background: #25D366; color: white; }
.notification-stack { position: fixed; bottom: 20px; right: 20px; display: flex; flex-direction: column; gap: 10px; z-index: 1001; pointer-events: none; }
.notification { pointer-events: auto; padding: 15px 20px; border-radius: 4px; background: white; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); display: flex; align-items: center; justify-content: space-between; transform: translateY(100px); opacity: 0; transition: transform 0.3s, opacity 0.3s; }
.notification.show { transform: translateY(0); opacity: 1; animation: toast-in 0.3s; }
.notification.success { border-left: 4px solid var(--success-color); }
.notification.error { border-left: 4px solid var(--error-color); }
.close-notification { background: none; border: none; font-size: 20px; cursor: pointer; margin-left: 10px; }
@keyframes toast-in { from { transform: translateY(100px); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
@media (max-width: 768px) { .product-modal-details, .modal-product-actions { flex-direction: column; } }
"#;
