//! Interaction layer: DOM events in, store calls out, store events back
//! into overlay and notification updates.

use gloo::timers::callback::Timeout;
use leptos::*;

use crate::application::{QuantityEdit, Storefront, whatsapp_link};
use crate::config::StorefrontConfig;
use crate::domain::{
    catalog::ProductId,
    events::{CartEvent, DomainEvent, RemovalCause},
    logging::LogComponent,
};
use crate::infrastructure::{CatalogHttpClient, LocalStorageCart, ui};
use crate::view_state::{NotificationKind, NotificationQueue, OverlayState};
use crate::{log_debug, log_warn};

pub const CLEAR_CONFIRMATION: &str = "Are you sure you want to empty the cart?";
pub const CHECKOUT_THANKS: &str = "Thank you for your purchase! You will receive the details shortly.";

/// UI side effects implied by a cart event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reaction {
    pub notification: Option<(NotificationKind, String)>,
    pub open_cart: bool,
    pub close_cart: bool,
    pub alert: Option<String>,
}

/// Pure mapping from store events to view updates.
pub fn react_to(event: &CartEvent) -> Reaction {
    match event {
        CartEvent::ItemAdded { name, .. } => Reaction {
            notification: Some((NotificationKind::Success, format!("{} added to cart", name))),
            open_cart: true,
            ..Reaction::default()
        },
        CartEvent::ItemRemoved { name, cause: RemovalCause::Removed, .. } => {
            let name = if name.trim().is_empty() { "Product" } else { name.as_str() };
            Reaction {
                notification: Some((NotificationKind::Success, format!("{} removed from cart", name))),
                ..Reaction::default()
            }
        }
        CartEvent::ItemRemoved { cause: RemovalCause::Depleted, .. } | CartEvent::QuantityChanged { .. } => {
            Reaction::default()
        }
        CartEvent::Cleared => Reaction {
            notification: Some((NotificationKind::Success, "Cart emptied".to_string())),
            ..Reaction::default()
        },
        CartEvent::CheckedOut { .. } => Reaction {
            alert: Some(CHECKOUT_THANKS.to_string()),
            close_cart: true,
            ..Reaction::default()
        },
    }
}

/// Copyable handle to all page state, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct StorefrontHandle {
    pub store: RwSignal<Storefront<LocalStorageCart>>,
    pub overlay: RwSignal<OverlayState>,
    pub toasts: RwSignal<NotificationQueue>,
    pub config: StoredValue<StorefrontConfig>,
}

impl StorefrontHandle {
    pub fn new(config: StorefrontConfig) -> Self {
        let storage = LocalStorageCart::new(config.storage_key.clone());
        Self {
            store: create_rw_signal(Storefront::new(storage)),
            overlay: create_rw_signal(OverlayState::default()),
            toasts: create_rw_signal(NotificationQueue::default()),
            config: store_value(config),
        }
    }

    /// Start the one catalog fetch; the grid stays empty until it resolves.
    pub fn load_catalog(self) {
        let client = CatalogHttpClient::new(self.config.with_value(|c| c.catalog_url.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            let result = client.load().await;
            self.store.update(|store| store.finish_loading(result));
        });
    }

    fn apply(self, event: Option<CartEvent>) {
        let Some(event) = event else { return };
        log_debug!(LogComponent::Presentation("Interactions"), "Cart event {}", event.event_type());

        let reaction = react_to(&event);
        if let Some((kind, message)) = reaction.notification {
            self.notify(kind, message);
        }
        if let Some(message) = reaction.alert {
            ui::alert(&message);
        }
        if reaction.open_cart {
            self.overlay.update(OverlayState::open_cart);
        }
        if reaction.close_cart {
            self.overlay.update(OverlayState::close_cart);
        }
    }

    pub fn add_to_cart(self, id: ProductId) {
        let event = self.store.try_update(|store| store.add_by_id(id)).flatten();
        self.apply(event);
    }

    pub fn increase(self, id: ProductId) {
        let event = self.store.try_update(|store| store.increase(id)).flatten();
        self.apply(event);
    }

    pub fn decrease(self, id: ProductId) {
        let event = self.store.try_update(|store| store.decrease(id)).flatten();
        self.apply(event);
    }

    pub fn remove(self, id: ProductId) {
        let event = self.store.try_update(|store| store.remove(id)).flatten();
        self.apply(event);
    }

    /// Returns false when the input must be reset to 1.
    pub fn set_quantity(self, id: ProductId, raw: &str) -> bool {
        match self.store.try_update(|store| store.set_quantity(id, raw)) {
            Some(QuantityEdit::Applied(event)) => {
                self.apply(Some(event));
                true
            }
            Some(QuantityEdit::Rejected(_)) => false,
            Some(QuantityEdit::Ignored) | None => true,
        }
    }

    pub fn clear_cart(self) {
        if self.store.with_untracked(|store| store.cart().is_empty()) {
            return;
        }
        let confirmed = ui::confirm(CLEAR_CONFIRMATION);
        let event = self.store.try_update(|store| store.clear(confirmed)).flatten();
        self.apply(event);
    }

    pub fn checkout(self) {
        let event = self.store.try_update(|store| store.checkout()).flatten();
        self.apply(event);
    }

    pub fn select_category(self, key: &str) {
        self.store.update(|store| {
            store.select_category(key);
        });
    }

    pub fn show_details(self, id: ProductId) {
        match self.store.with_untracked(|store| store.product(id).map(|_| ())) {
            Ok(()) => self.overlay.update(|overlay| overlay.open_modal(id)),
            Err(e) => log_warn!(LogComponent::Presentation("Interactions"), "Cannot show details: {}", e),
        }
    }

    pub fn buy_via_whatsapp(self, id: ProductId) {
        let phone = self.config.with_value(|c| c.whatsapp_phone.clone());
        let link = self
            .store
            .with_untracked(|store| store.product(id).map(|product| whatsapp_link(&phone, product)));
        match link {
            Ok(link) => ui::open_in_new_tab(&link),
            Err(e) => log_warn!(LogComponent::Presentation("Interactions"), "Cannot start WhatsApp order: {}", e),
        }
    }

    pub fn open_cart(self) {
        self.overlay.update(OverlayState::open_cart);
    }

    pub fn close_cart(self) {
        self.overlay.update(OverlayState::close_cart);
    }

    pub fn close_modal(self) {
        self.overlay.update(OverlayState::close_modal);
    }

    pub fn close_overlays(self) {
        self.overlay.update(OverlayState::close_all);
    }

    /// Show a toast that fades out on its own after the configured delay.
    pub fn notify(self, kind: NotificationKind, message: String) {
        let Some(id) = self.toasts.try_update(|queue| queue.push(kind, message)) else {
            return;
        };
        let delay = self.config.with_value(|c| c.notification_ms);
        Timeout::new(delay, move || self.dismiss(id)).forget();
    }

    /// Fade out, then drop the toast. Safe to call twice.
    pub fn dismiss(self, id: u64) {
        if self.toasts.try_update(|queue| queue.begin_dismiss(id)) != Some(true) {
            return;
        }
        let fade = self.config.with_value(|c| c.fade_ms);
        Timeout::new(fade, move || self.toasts.update(|queue| queue.remove(id))).forget();
    }
}
