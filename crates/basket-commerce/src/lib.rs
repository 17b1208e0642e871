//! Commerce domain types and logic for the FarmBasket storefront.
//!
//! This crate holds the pure, I/O-free core of the storefront:
//!
//! - **Catalog**: items and farmers as the backend serves them
//! - **Cart**: an id-deduplicated cart store with derived totals
//! - **Checkout**: addresses, the Address → Review → Confirmation state
//!   machine, and order construction
//!
//! Everything network-facing lives in `basket-storefront`; this crate only
//! defines the data and the transitions.
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.toggle(item); // inserts with the default 5 kg quantity
//! cart.set_quantity(&product_id, 10)?;
//!
//! let subtotal = cart.subtotal()?;
//! println!("Order total: {}", final_total(subtotal)?);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Farmer, Item};

    // Cart
    pub use crate::cart::{CartLine, CartStore, DEFAULT_QUANTITY_KG, QUANTITY_CHOICES_KG};

    // Checkout
    pub use crate::checkout::{
        final_total, Address, AddressRecord, CheckoutFlow, CheckoutStep, Order, OrderLineItem,
        OrderStatus, PlacedOrder, FLAT_RATE,
    };
}
