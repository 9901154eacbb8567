//! The shopping cart: the single source of truth for what the shopper
//! intends to buy, plus the derived price and footprint totals.
//!
//! The cart is an ordered sequence, not a set. Duplicate products may appear
//! as separate lines, and removal or swapping addresses a line by position.
//! Suggestions are computed asynchronously against a catalog snapshot, so a
//! position arriving from the UI may be stale; every positional operation is
//! therefore a silent no-op when the index is out of bounds.

use crate::model::product::Product;

/// Ordered collection of cart lines. Totals are pure functions of the
/// current contents and are recomputed on every call, never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product as a new last line. Never rejects: no stock check,
    /// no dedup.
    pub fn add(&mut self, product: Product) {
        self.lines.push(product);
    }

    /// Removes the line at `index`. Stale indices are ignored.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Swaps the product at `index` for `product`, preserving the position
    /// of every other line. Stale indices are ignored. This is the accept-
    /// suggestion path: a positional swap, never a remove-then-add (which
    /// would shift the indices of later lines).
    pub fn replace_at(&mut self, index: usize, product: Product) {
        if let Some(line) = self.lines.get_mut(index) {
            *line = product;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    /// Sum of line emissions in kg CO2. Missing emissions were defaulted to
    /// zero at deserialization.
    pub fn total_impact(&self) -> f64 {
        self.lines.iter().map(|p| p.co2_emission).sum()
    }

    /// Total impact rendered the way the summary displays it: one decimal.
    pub fn impact_label(&self) -> String {
        format!("{:.1}", self.total_impact())
    }

    /// Sum of line prices in currency units.
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(|p| p.price).sum()
    }

    /// Total price rendered with two decimals.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, co2: f64) -> Product {
        Product {
            id,
            name: format!("P{id}"),
            description: None,
            price,
            category: "Misc".into(),
            co2_emission: co2,
            is_eco_friendly: false,
            image_url: None,
            image_urls: None,
            alternative_product_id: None,
            brand: None,
            material: None,
            stock_quantity: None,
        }
    }

    #[test]
    fn empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.impact_label(), "0.0");
        assert_eq!(cart.price_label(), "0.00");
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_sum_lines_and_round_for_display() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.004, 3.0));
        cart.add(product(2, 5.0, 0.26));
        assert_eq!(cart.impact_label(), "3.3");
        assert_eq!(cart.price_label(), "15.00");
    }

    #[test]
    fn missing_emission_counts_as_zero() {
        // A wire product with absent co2Emission deserializes to 0.0.
        let mut cart = Cart::new();
        cart.add(product(1, 0.0, 3.0));
        cart.add(product(2, 0.0, 0.0));
        assert_eq!(cart.impact_label(), "3.0");
    }

    #[test]
    fn duplicates_are_separate_lines() {
        let mut cart = Cart::new();
        cart.add(product(1, 2.0, 1.0));
        cart.add(product(1, 2.0, 1.0));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.price_label(), "4.00");
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(product(1, 1.0, 1.0));
        cart.remove_at(5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn remove_at_preserves_relative_order() {
        let mut cart = Cart::new();
        for id in 1..=4 {
            cart.add(product(id, 1.0, 1.0));
        }
        cart.remove_at(1);
        let ids: Vec<i64> = cart.lines().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn replace_at_preserves_length_and_other_lines() {
        let mut cart = Cart::new();
        for id in 1..=3 {
            cart.add(product(id, 1.0, 5.0));
        }
        cart.replace_at(1, product(99, 2.0, 0.5));
        let ids: Vec<i64> = cart.lines().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 99, 3]);
        assert_eq!(cart.len(), 3);
        // Totals reflect the swapped-in product, not the original.
        assert_eq!(cart.impact_label(), "10.5");
    }

    #[test]
    fn replace_at_out_of_range_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(product(1, 1.0, 1.0));
        cart.replace_at(3, product(99, 2.0, 2.0));
        assert_eq!(cart.lines()[0].id, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 1.0, 1.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.impact_label(), "0.0");
    }
}
