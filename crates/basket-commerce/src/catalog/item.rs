//! Purchasable item type.

use crate::ids::{FarmerId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable unit from the catalog.
///
/// Deserialized from `GET /api/products`; the `price` field on the wire is
/// in minor units. Items are immutable once loaded into the cart; the
/// requested quantity is tracked on the cart line, not here.
///
/// Invariant: `unit_price` is never negative in catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category label used for filtering.
    pub category: String,
    /// Price per unit, in minor units.
    #[serde(rename = "price")]
    pub unit_price: Money,
    /// The farmer selling this item.
    pub farmer_id: FarmerId,
    /// Units in stock.
    pub stock: u32,
    /// Farm location label.
    pub location: String,
    /// Free-text delivery estimate (e.g., "2-3 days"); never parsed.
    pub estimated_delivery_time: String,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Check if the item has stock available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_shape() {
        let json = r#"{
            "id": "prod-1",
            "name": "Alphonso Mango",
            "category": "Fruits",
            "price": 250,
            "farmerId": "farmer-7",
            "stock": 40,
            "location": "Ratnagiri, Maharashtra",
            "estimatedDeliveryTime": "2-3 days"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id.as_str(), "prod-1");
        assert_eq!(item.unit_price, Money::from_minor(250));
        assert_eq!(item.farmer_id.as_str(), "farmer-7");
        assert!(item.in_stock());
        assert!(item.image.is_none());
    }

    #[test]
    fn test_out_of_stock() {
        let json = r#"{
            "id": "prod-2",
            "name": "Basmati Rice",
            "category": "Grains",
            "price": 900,
            "farmerId": "farmer-2",
            "stock": 0,
            "location": "Punjab",
            "estimatedDeliveryTime": "4-5 days",
            "image": "https://example.com/rice.png"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(!item.in_stock());
        assert!(item.image.is_some());
    }
}
