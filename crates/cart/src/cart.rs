use serde::{Deserialize, Serialize};

use crate::line::LineEntry;
use crate::total::calculate_total;

/// Append-only, insertion-ordered collection of line entries.
///
/// Duplicates are allowed and entries are only ever appended. A cart built
/// with `new` holds exactly as many entries as it has had `add_item` calls;
/// clones and deserialized carts start from the entries they were given.
///
/// There is no internal locking: mutation needs `&mut self`, so sharing a cart
/// across threads means wrapping it in a lock of the caller's choosing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart<P> {
    items: Vec<LineEntry<P>>,
}

impl<P> Cart<P> {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `{product, price}` and return the new number of entries.
    ///
    /// No validation is performed on the price; any `f64` (including negative,
    /// zero or non-finite values) is accepted.
    pub fn add_item(&mut self, product: P, price: impl Into<f64>) -> usize {
        let entry = LineEntry::new(product, price);
        let price = entry.price();
        self.items.push(entry);

        let line_no = self.items.len();
        tracing::debug!(line_no, price, "cart line added");
        line_no
    }

    pub fn items(&self) -> &[LineEntry<P>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all accumulated prices, in insertion order.
    pub fn total(&self) -> f64 {
        calculate_total(&self.items)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LineEntry<P>> {
        self.items.iter()
    }
}

impl<P> Default for Cart<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P> IntoIterator for &'a Cart<P> {
    type Item = &'a LineEntry<P>;
    type IntoIter = core::slice::Iter<'a, LineEntry<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_cart_is_empty() {
        let cart: Cart<&str> = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart, Cart::default());
    }

    #[test]
    fn first_add_returns_one_and_stores_the_entry() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("A", 10), 1);
        assert_eq!(cart.items(), &[LineEntry::new("A", 10.0)]);
    }

    #[test]
    fn add_returns_running_count_and_keeps_insertion_order() {
        let mut cart = Cart::new();
        let counts = [
            cart.add_item("A", 1.0),
            cart.add_item("B", 2.0),
            cart.add_item("C", 3.0),
        ];
        assert_eq!(counts, [1, 2, 3]);

        let products: Vec<&str> = cart.iter().map(|e| *e.product()).collect();
        assert_eq!(products, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut cart = Cart::new();
        cart.add_item("A", 4.0);
        cart.add_item("A", 4.0);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0], cart.items()[1]);
        assert_eq!(cart.total(), 8.0);
    }

    #[test]
    fn add_accepts_unvalidated_prices() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item("refund", -5.0), 1);
        assert_eq!(cart.add_item("broken", f64::NAN), 2);
        assert!(cart.total().is_nan());
    }

    #[test]
    fn borrowed_cart_iterates_in_order() {
        let mut cart = Cart::new();
        cart.add_item(1u32, 0.5);
        cart.add_item(2u32, 1.5);

        let mut seen = Vec::new();
        for entry in &cart {
            seen.push(*entry.product());
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn serializes_items_in_order() {
        let mut cart = Cart::new();
        cart.add_item("A".to_string(), 10.0);
        cart.add_item("B".to_string(), 2.5);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    { "product": "A", "price": 10.0 },
                    { "product": "B", "price": 2.5 }
                ]
            })
        );

        let back: Cart<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn clones_and_deserialized_carts_append_after_their_entries() {
        let mut original = Cart::new();
        original.add_item("A".to_string(), 1.0);

        let mut cloned = original.clone();
        assert_eq!(cloned.add_item("B".to_string(), 2.0), 2);
        assert_eq!(original.len(), 1);

        let json = serde_json::json!({ "items": [{ "product": "X", "price": 4.0 }] });
        let mut restored: Cart<String> = serde_json::from_value(json).unwrap();
        assert_eq!(restored.add_item("Y".to_string(), 1.0), 2);
        assert_eq!(*restored.items()[0].product(), "X");
        assert_eq!(*restored.items()[1].product(), "Y");
    }

    #[test]
    fn cart_is_send_and_sync_for_plain_products() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cart<String>>();
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after N additions the cart holds N entries and its total
        /// equals the sum of the added prices.
        #[test]
        fn total_matches_sum_of_added_prices(
            cents in prop::collection::vec(-100_000i64..100_000i64, 0..40)
        ) {
            let mut cart = Cart::new();
            for (i, c) in cents.iter().enumerate() {
                let len = cart.add_item(i, *c as f64);
                prop_assert_eq!(len, i + 1);
            }

            let expected = cents.iter().sum::<i64>() as f64;
            prop_assert_eq!(cart.len(), cents.len());
            prop_assert_eq!(cart.total(), expected);
            prop_assert_eq!(calculate_total(cart.items()), expected);
        }
    }
}
