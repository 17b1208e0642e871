//! Order types.

use crate::cart::CartStore;
use crate::checkout::{current_timestamp, shipping};
use crate::error::CommerceError;
use crate::ids::{AddressId, FarmerId, OrderId, ProductId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status as reported by the Order Source. New orders are `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order confirmed by the backend.
    Confirmed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A line in a placed order. Snapshot of a cart line at submission time;
/// later cart mutations do not touch it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Product ordered.
    pub product_id: ProductId,
    /// The farmer fulfilling this line.
    pub farmer_id: FarmerId,
    /// Quantity ordered, in kilograms.
    #[serde(rename = "quantity")]
    pub quantity_kg: u32,
    /// Unit price at time of order, minor units.
    #[serde(rename = "price")]
    pub unit_price: Money,
}

impl OrderLineItem {
    /// Price for this line.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_mul(i64::from(self.quantity_kg))
            .ok_or(CommerceError::Overflow)
    }
}

/// The placed purchase, as posted to `POST /api/orders`.
///
/// Invariant: `total_amount == sum(line totals) + shipping_cost`, which
/// [`Order::from_cart`] guarantees by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// The purchasing user.
    pub user_id: UserId,
    /// The shipping address, by the id the Order Source returned when the
    /// address was submitted.
    pub address_id: AddressId,
    /// Grand total in minor units, shipping included.
    pub total_amount: Money,
    /// Flat shipping cost in minor units.
    pub shipping_cost: Money,
    /// Unix timestamp of order creation.
    pub order_date: i64,
    /// Order status; always `pending` at submission.
    pub order_status: OrderStatus,
    /// Ordered lines, in cart insertion order.
    pub order_items: Vec<OrderLineItem>,
}

impl Order {
    /// Build an order by snapshotting the cart.
    ///
    /// Copies every line (the cart may be cleared afterwards without
    /// affecting the order) and computes the grand total from the snapshot
    /// plus the flat shipping rate.
    pub fn from_cart(
        user_id: UserId,
        address_id: AddressId,
        cart: &CartStore,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let order_items: Vec<OrderLineItem> = cart
            .lines()
            .iter()
            .map(|line| OrderLineItem {
                product_id: line.item.id.clone(),
                farmer_id: line.item.farmer_id.clone(),
                quantity_kg: line.quantity_kg,
                unit_price: line.item.unit_price,
            })
            .collect();

        let total_amount = shipping::final_total(cart.subtotal()?)?;

        Ok(Self {
            user_id,
            address_id,
            total_amount,
            shipping_cost: shipping::FLAT_RATE,
            order_date: current_timestamp(),
            order_status: OrderStatus::Pending,
            order_items,
        })
    }

    /// Total quantity across all lines, in kilograms.
    pub fn total_quantity_kg(&self) -> u64 {
        self.order_items
            .iter()
            .map(|i| u64::from(i.quantity_kg))
            .sum()
    }
}

/// Confirmation payload from a successful `POST /api/orders`. The id is
/// opaque and used only for display on the confirmation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    /// Backend-assigned order identifier.
    pub order_id: OrderId,
}
