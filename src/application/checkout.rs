//! Outbound handoff: WhatsApp deep links for "buy now".

use crate::domain::catalog::Product;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Text sent to the shop: `"<greeting><name> - $<price>"`.
pub fn whatsapp_message(product: &Product) -> String {
    format!("Hello, I would like to buy: {} - {}", product.name, product.price)
}

/// Deep link to a chat with `phone` prefilled with the purchase message.
/// Non-digit characters (`+`, spaces, dashes) are stripped from the number.
pub fn whatsapp_link(phone: &str, product: &Product) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE,
        digits,
        urlencoding::encode(&whatsapp_message(product))
    )
}
