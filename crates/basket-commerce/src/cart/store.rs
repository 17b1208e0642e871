//! Cart store and cart lines.

use crate::catalog::Item;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Quantity a line starts with when an item is added to the cart.
pub const DEFAULT_QUANTITY_KG: u32 = 5;

/// The quantities the address step offers for each line. The store itself
/// accepts any positive quantity; this set only drives the form controls.
pub const QUANTITY_CHOICES_KG: [u32; 6] = [5, 10, 25, 50, 75, 100];

/// An item plus its requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Snapshot of the item at add-time.
    pub item: Item,
    /// Requested quantity in kilograms. Always positive.
    pub quantity_kg: u32,
}

impl CartLine {
    fn new(item: Item) -> Self {
        Self {
            item,
            quantity_kg: DEFAULT_QUANTITY_KG,
        }
    }

    /// Price for this line: `unit_price * quantity_kg`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.item
            .unit_price
            .try_mul(i64::from(self.quantity_kg))
            .ok_or(CommerceError::Overflow)
    }
}

/// The set of cart lines a user intends to purchase.
///
/// Lines are keyed by `item.id` (never two lines with the same id) and keep
/// insertion order, so order items come out in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it entirely if present.
    ///
    /// New lines start at [`DEFAULT_QUANTITY_KG`]. Returns whether the item
    /// is present after the call.
    pub fn toggle(&mut self, item: Item) -> bool {
        if self.remove(&item.id) {
            false
        } else {
            self.lines.push(CartLine::new(item));
            true
        }
    }

    /// Delete the line with this id. Idempotent: removing an absent id is a
    /// no-op and returns `false`.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.item.id != id);
        self.lines.len() < len_before
    }

    /// Set the requested quantity for a line.
    ///
    /// Quantity zero is rejected. Setting the quantity of an item that is
    /// not in the cart has no effect and returns `Ok(false)`.
    pub fn set_quantity(&mut self, id: &ProductId, quantity_kg: u32) -> Result<bool, CommerceError> {
        if quantity_kg == 0 {
            return Err(CommerceError::InvalidQuantity(quantity_kg));
        }
        match self.lines.iter_mut().find(|l| &l.item.id == id) {
            Some(line) => {
                line.quantity_kg = quantity_kg;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sum of `unit_price * quantity_kg` over all lines; zero for an empty
    /// cart.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut total = Money::ZERO;
        for line in &self.lines {
            total = total
                .try_add(line.line_total()?)
                .ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Get the line for an item, if present.
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.item.id == id)
    }

    /// Check if an item is in the cart.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line, e.g. after order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FarmerId;

    fn item(id: &str, price_minor: i64) -> Item {
        Item {
            id: ProductId::new(id),
            name: format!("Item {}", id),
            category: "Vegetables".to_string(),
            unit_price: Money::from_minor(price_minor),
            farmer_id: FarmerId::new("farmer-1"),
            stock: 10,
            location: "Nashik".to_string(),
            estimated_delivery_time: "2-3 days".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_toggle_inserts_with_default_quantity() {
        let mut cart = CartStore::new();
        assert!(cart.toggle(item("a", 200)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&"a".into()).unwrap().quantity_kg, DEFAULT_QUANTITY_KG);
        // price 200 * default qty 5
        assert_eq!(cart.subtotal().unwrap(), Money::from_minor(1000));
    }

    #[test]
    fn test_toggle_twice_returns_to_absent() {
        let mut cart = CartStore::new();
        assert!(cart.toggle(item("a", 200)));
        assert!(!cart.toggle(item("a", 200)));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap(), Money::ZERO);
    }

    #[test]
    fn test_toggle_never_duplicates() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 200));
        cart.toggle(item("b", 300));
        cart.toggle(item("a", 200));
        cart.toggle(item("a", 200));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 200));
        assert!(cart.remove(&"a".into()));
        assert!(!cart.remove(&"a".into()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 500));
        assert!(cart.set_quantity(&"a".into(), 10).unwrap());
        assert_eq!(cart.get(&"a".into()).unwrap().quantity_kg, 10);
        assert_eq!(cart.subtotal().unwrap(), Money::from_minor(5000));
    }

    #[test]
    fn test_set_quantity_absent_id_has_no_effect() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 500));
        assert!(!cart.set_quantity(&"ghost".into(), 10).unwrap());
        assert_eq!(cart.subtotal().unwrap(), Money::from_minor(2500));
    }

    #[test]
    fn test_set_quantity_zero_rejected() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 500));
        assert!(matches!(
            cart.set_quantity(&"a".into(), 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        // line untouched
        assert_eq!(cart.get(&"a".into()).unwrap().quantity_kg, DEFAULT_QUANTITY_KG);
    }

    #[test]
    fn test_subtotal_multiple_lines() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 500));
        cart.toggle(item("b", 300));
        cart.set_quantity(&"a".into(), 10).unwrap();
        // 500*10 + 300*5
        assert_eq!(cart.subtotal().unwrap(), Money::from_minor(6500));
    }

    #[test]
    fn test_subtotal_empty_cart_is_zero() {
        assert_eq!(CartStore::new().subtotal().unwrap(), Money::ZERO);
    }

    #[test]
    fn test_subtotal_overflow() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", i64::MAX));
        assert!(matches!(cart.subtotal(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.toggle(item("a", 200));
        cart.toggle(item("b", 300));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().unwrap(), Money::ZERO);
    }
}
