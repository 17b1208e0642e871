//! Catalog module.
//!
//! Items and farmers as the Catalog Source serves them. These types are
//! read-only snapshots; the storefront never mutates them.

mod farmer;
mod item;

pub use farmer::Farmer;
pub use item::Item;
