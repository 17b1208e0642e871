//! Checkout module.
//!
//! Addresses, the Address → Review → Confirmation state machine, order
//! construction, and the flat shipping rate.

mod address;
mod flow;
mod order;
mod shipping;

pub use address::{Address, AddressRecord};
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{Order, OrderLineItem, OrderStatus, PlacedOrder};
pub use shipping::{final_total, FLAT_RATE};

/// Get current Unix timestamp in seconds.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
