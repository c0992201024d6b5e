use storefront_wasm::domain::{
    cart::Quantity,
    catalog::ProductId,
    events::{CartEvent, RemovalCause},
};
use storefront_wasm::presentation::interactions::{CHECKOUT_THANKS, react_to};
use storefront_wasm::view_state::{NotificationKind, NotificationQueue, OverlayState};

#[test]
fn scroll_locks_while_any_overlay_is_open() {
    let mut overlay = OverlayState::default();
    assert!(!overlay.scroll_locked());

    overlay.open_cart();
    assert!(overlay.scroll_locked());
    overlay.open_modal(ProductId::new(1));
    overlay.close_cart();
    assert!(overlay.scroll_locked(), "modal still open");
    overlay.close_modal();
    assert!(!overlay.scroll_locked());
}

#[test]
fn backdrop_click_closes_both_overlays() {
    let mut overlay = OverlayState::default();
    overlay.open_cart();
    overlay.open_modal(ProductId::new(3));
    assert!(overlay.backdrop_visible());

    overlay.close_all();
    assert_eq!(overlay, OverlayState::default());
}

#[test]
fn notifications_stack_and_dismiss_independently() {
    let mut queue = NotificationQueue::default();
    let first = queue.push(NotificationKind::Success, "Mug added to cart");
    let second = queue.push(NotificationKind::Error, "Something failed");
    assert_ne!(first, second);
    assert_eq!(queue.len(), 2);

    assert!(queue.begin_dismiss(first));
    assert!(!queue.begin_dismiss(first), "already fading");
    assert!(queue.items()[0].leaving);
    assert!(!queue.items()[1].leaving);

    queue.remove(first);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.items()[0].id, second);
    assert!(!queue.begin_dismiss(first));

    queue.remove(second);
    assert!(queue.is_empty());
}

#[test]
fn fading_toast_keeps_its_slot_while_hiding() {
    let mut queue = NotificationQueue::default();
    let first = queue.push(NotificationKind::Success, "Mug added to cart");
    let second = queue.push(NotificationKind::Success, "Lamp added to cart");
    assert!(queue.is_showing(first) && queue.is_showing(second));

    queue.begin_dismiss(first);
    assert!(!queue.is_showing(first));
    assert!(queue.is_showing(second));
    let ids: Vec<u64> = queue.items().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first, second], "fading toast stays mounted until removed");

    queue.remove(first);
    assert!(!queue.is_showing(first));
    assert!(queue.is_showing(second));
}

#[test]
fn notification_kind_is_css_class() {
    assert_eq!(NotificationKind::Success.to_string(), "success");
    assert_eq!(NotificationKind::Error.as_ref(), "error");
    assert_eq!("error".parse::<NotificationKind>(), Ok(NotificationKind::Error));
}

#[test]
fn adding_opens_cart_with_toast() {
    let reaction = react_to(&CartEvent::ItemAdded {
        id: ProductId::new(1),
        name: "Mug".to_string(),
        quantity: Quantity::ONE,
    });
    assert!(reaction.open_cart);
    assert_eq!(reaction.notification, Some((NotificationKind::Success, "Mug added to cart".to_string())));
}

#[test]
fn removal_toast_depends_on_cause() {
    let removed = react_to(&CartEvent::ItemRemoved {
        id: ProductId::new(1),
        name: String::new(),
        cause: RemovalCause::Removed,
    });
    assert_eq!(removed.notification, Some((NotificationKind::Success, "Product removed from cart".to_string())));

    let depleted = react_to(&CartEvent::ItemRemoved {
        id: ProductId::new(1),
        name: "Mug".to_string(),
        cause: RemovalCause::Depleted,
    });
    assert_eq!(depleted, Default::default());
}

#[test]
fn checkout_closes_cart_and_thanks() {
    let reaction = react_to(&CartEvent::CheckedOut { item_count: 2 });
    assert!(reaction.close_cart);
    assert_eq!(reaction.alert.as_deref(), Some(CHECKOUT_THANKS));
    assert_eq!(reaction.notification, None);

    let cleared = react_to(&CartEvent::Cleared);
    assert_eq!(cleared.notification, Some((NotificationKind::Success, "Cart emptied".to_string())));
}
