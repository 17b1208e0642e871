//! Shopping cart module.
//!
//! One authoritative, id-deduplicated cart store with derived totals.

mod store;

pub use store::{CartLine, CartStore, DEFAULT_QUANTITY_KG, QUANTITY_CHOICES_KG};
