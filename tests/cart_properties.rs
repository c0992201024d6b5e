use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use storefront_wasm::application::CartStore;
use storefront_wasm::domain::{
    cart::Cart,
    catalog::{Category, Price, Product, ProductId},
};
use storefront_wasm::infrastructure::MemoryCartStorage;

const PRODUCTS: u64 = 5;

fn product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {}", id),
        // Prices with cents so the sums exercise decimal arithmetic
        price: Price::from_cents(199 * id as i64 + 1),
        description: String::new(),
        category: Category::from("Misc"),
        image: String::new(),
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(u64),
    Increase(u64),
    Decrease(u64),
    Set(u64, i32),
    Remove(u64),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let id = u64::arbitrary(g) % PRODUCTS + 1;
        match u8::arbitrary(g) % 6 {
            0 => Op::Add(id),
            1 => Op::Increase(id),
            2 => Op::Decrease(id),
            3 => Op::Set(id, i32::arbitrary(g) % 20),
            4 => Op::Remove(id),
            _ => Op::Clear,
        }
    }
}

fn run(ops: &[Op]) -> CartStore<MemoryCartStorage> {
    let mut store = CartStore::restore(MemoryCartStorage::new());
    for op in ops {
        match *op {
            Op::Add(id) => {
                let _ = store.add(&product(id));
            }
            Op::Increase(id) => {
                store.increase(ProductId::new(id));
            }
            Op::Decrease(id) => {
                store.decrease(ProductId::new(id));
            }
            Op::Set(id, value) => {
                store.set_quantity(ProductId::new(id), &value.to_string());
            }
            Op::Remove(id) => {
                store.remove(ProductId::new(id));
            }
            Op::Clear => {
                store.clear(true);
            }
        }
    }
    store
}

fn recomputed_total(cart: &Cart) -> Price {
    cart.items()
        .iter()
        .map(|item| item.price.times(item.quantity.value()))
        .sum()
}

#[quickcheck]
fn quantities_stay_positive(ops: Vec<Op>) -> bool {
    run(&ops).cart().items().iter().all(|item| item.quantity.value() >= 1)
}

#[quickcheck]
fn ids_stay_unique(ops: Vec<Op>) -> bool {
    let store = run(&ops);
    let mut ids: Vec<_> = store.cart().items().iter().map(|item| item.id).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    ids.len() == before
}

#[quickcheck]
fn adding_never_lowers_quantity(ops: Vec<Op>, id: u64) -> bool {
    let id = ProductId::new(id % PRODUCTS + 1);
    let mut store = run(&ops);
    let before = store.cart().get(id).map(|item| item.quantity.value()).unwrap_or(0);
    let _ = store.add(&product(id.value()));
    let after = store.cart().get(id).map(|item| item.quantity.value()).unwrap_or(0);
    after == before + 1
}

#[quickcheck]
fn total_survives_reload(ops: Vec<Op>) -> bool {
    let store = run(&ops);
    let reloaded = CartStore::restore(store.storage().clone());
    reloaded.cart() == store.cart() && reloaded.cart().total() == recomputed_total(store.cart())
}

#[quickcheck]
fn item_count_matches_quantities(ops: Vec<Op>) -> bool {
    let store = run(&ops);
    let expected: u64 = store.cart().items().iter().map(|item| u64::from(item.quantity.value())).sum();
    store.cart().item_count() == expected
}
