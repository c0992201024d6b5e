use derive_more::Display;
use strum::{AsRefStr, EnumString};

use crate::domain::catalog::ProductId;

/// Visibility of the two overlays sharing the backdrop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub cart_open: bool,
    pub modal_product: Option<ProductId>,
}

impl OverlayState {
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn open_modal(&mut self, id: ProductId) {
        self.modal_product = Some(id);
    }

    pub fn close_modal(&mut self) {
        self.modal_product = None;
    }

    /// Backdrop click closes everything.
    pub fn close_all(&mut self) {
        self.cart_open = false;
        self.modal_product = None;
    }

    pub fn modal_open(&self) -> bool {
        self.modal_product.is_some()
    }

    pub fn backdrop_visible(&self) -> bool {
        self.cart_open || self.modal_open()
    }

    /// Page scroll stays locked while either overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.backdrop_visible()
    }
}

/// Toast flavour, also used as the CSS modifier class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub enum NotificationKind {
    #[display(fmt = "success")]
    #[strum(serialize = "success")]
    Success,
    #[display(fmt = "error")]
    #[strum(serialize = "error")]
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    /// Set once the fade-out transition has started.
    pub leaving: bool,
}

/// Stack of independent toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message: message.into(), leaving: false });
        id
    }

    /// Start the fade-out. Returns false when the toast is already gone
    /// or already fading.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id && !n.leaving) {
            Some(notification) => {
                notification.leaving = true;
                true
            }
            None => false,
        }
    }

    /// Present and not fading out.
    pub fn is_showing(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id && !n.leaving)
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
