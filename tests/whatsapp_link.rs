use insta::assert_snapshot;
use storefront_wasm::application::{whatsapp_link, whatsapp_message};
use storefront_wasm::domain::catalog::{Category, Price, Product, ProductId};
use wasm_bindgen_test::*;

fn lamp() -> Product {
    Product {
        id: ProductId::new(2),
        name: "Desk Lamp & Bulb".to_string(),
        price: Price::from_cents(2499),
        description: String::new(),
        category: Category::from("Home"),
        image: String::new(),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn message_names_product_and_price() {
    assert_snapshot!(whatsapp_message(&lamp()), @"Hello, I would like to buy: Desk Lamp & Bulb - $24.99");
}

#[wasm_bindgen_test(unsupported = test)]
fn link_keeps_only_phone_digits_and_encodes_text() {
    assert_snapshot!(
        whatsapp_link("+57 316-769 9072", &lamp()),
        @"https://wa.me/573167699072?text=Hello%2C%20I%20would%20like%20to%20buy%3A%20Desk%20Lamp%20%26%20Bulb%20-%20%2424.99"
    );
}
