//! The greener-alternative suggestion engine.
//!
//! For every non-eco cart line the engine scans the catalog snapshot in the
//! order the backend returned it and proposes the first eco-friendly product
//! in the same category. The first-match-in-catalog-order tie-break is a
//! deliberate contract with the backend (`GET /api/products` defines the
//! iteration order), not an oversight; picking the cheapest or the
//! lowest-emission candidate instead would change observable behavior.
//!
//! The result list is transient: it is recomputed wholesale on every cart or
//! catalog change and fully replaces the previous one.

use crate::cart::Cart;
use crate::model::product::Product;

/// A proposed same-category swap for one cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Position of the offending line in the cart at computation time.
    pub cart_index: usize,
    /// The non-eco product currently at that position.
    pub original: Product,
    /// The first eco-friendly same-category product in catalog order.
    pub alternative: Product,
}

impl Suggestion {
    /// Emission saved by accepting the swap. Can be negative when the
    /// eco-flagged alternative happens to emit more.
    pub fn saving(&self) -> f64 {
        self.original.co2_emission - self.alternative.co2_emission
    }
}

/// Computes the suggestion list for the current cart against a catalog
/// snapshot. Never fails: empty cart or empty catalog yields an empty list.
pub fn suggest_swaps(cart: &Cart, catalog: &[Product]) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = Vec::new();

    for (cart_index, line) in cart.lines().iter().enumerate() {
        if line.is_eco_friendly {
            continue;
        }
        let alternative = catalog
            .iter()
            .find(|p| p.category == line.category && p.is_eco_friendly && p.id != line.id);
        if let Some(alternative) = alternative {
            // One suggestion per cart position, even if the same index is
            // revisited across recomputations.
            if !suggestions.iter().any(|s| s.cart_index == cart_index) {
                suggestions.push(Suggestion {
                    cart_index,
                    original: line.clone(),
                    alternative: alternative.clone(),
                });
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, category: &str, eco: bool, co2: f64) -> Product {
        Product {
            id,
            name: format!("P{id}"),
            description: None,
            price: 10.0,
            category: category.into(),
            co2_emission: co2,
            is_eco_friendly: eco,
            image_url: None,
            image_urls: None,
            alternative_product_id: None,
            brand: None,
            material: None,
            stock_quantity: None,
        }
    }

    fn cart_of(products: Vec<Product>) -> Cart {
        let mut cart = Cart::new();
        for p in products {
            cart.add(p);
        }
        cart
    }

    #[test]
    fn empty_inputs_yield_no_suggestions() {
        assert!(suggest_swaps(&Cart::new(), &[]).is_empty());
        assert!(suggest_swaps(&Cart::new(), &[product(1, "Bags", true, 1.0)]).is_empty());
        let cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        assert!(suggest_swaps(&cart, &[]).is_empty());
    }

    #[test]
    fn eco_lines_are_skipped() {
        let cart = cart_of(vec![product(1, "Bags", true, 1.0)]);
        let catalog = vec![product(2, "Bags", true, 0.5)];
        assert!(suggest_swaps(&cart, &catalog).is_empty());
    }

    #[test]
    fn non_eco_line_gets_first_eco_counterpart_in_catalog_order() {
        let cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        let catalog = vec![
            product(1, "Bags", false, 5.0),
            product(3, "Bags", true, 2.0),
            product(2, "Bags", true, 1.0),
        ];
        let suggestions = suggest_swaps(&cart, &catalog);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].cart_index, 0);
        // First match wins even though id 2 emits less.
        assert_eq!(suggestions[0].alternative.id, 3);
        assert_eq!(suggestions[0].saving(), 3.0);
    }

    #[test]
    fn no_counterpart_in_category_means_no_suggestion() {
        let cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        let catalog = vec![
            product(2, "Shoes", true, 1.0),
            product(3, "Bags", false, 4.0),
        ];
        assert!(suggest_swaps(&cart, &catalog).is_empty());
    }

    #[test]
    fn candidate_must_have_a_different_id() {
        // The offending product may itself be flagged eco in a newer catalog
        // snapshot; it must never be suggested as its own replacement.
        let cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        let catalog = vec![product(1, "Bags", true, 5.0)];
        assert!(suggest_swaps(&cart, &catalog).is_empty());
    }

    #[test]
    fn single_bad_line_gets_the_eco_counterpart() {
        // Cart holds the non-eco bag, catalog holds it plus an eco bag.
        let cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        let catalog = vec![product(1, "Bags", false, 5.0), product(2, "Bags", true, 1.0)];
        let suggestions = suggest_swaps(&cart, &catalog);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].cart_index, 0);
        assert_eq!(suggestions[0].alternative.id, 2);
    }

    #[test]
    fn mixed_cart_only_flags_non_eco_lines() {
        // A (non-eco, X) and B (eco, X); catalog's only eco X item is B.
        let a = product(1, "X", false, 4.0);
        let b = product(2, "X", true, 1.0);
        let cart = cart_of(vec![a, b.clone()]);
        let catalog = vec![product(1, "X", false, 4.0), b];
        let suggestions = suggest_swaps(&cart, &catalog);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].cart_index, 0);
        assert_eq!(suggestions[0].alternative.id, 2);
    }

    #[test]
    fn duplicate_lines_each_get_their_own_suggestion() {
        let bad = product(1, "Bags", false, 5.0);
        let cart = cart_of(vec![bad.clone(), bad]);
        let catalog = vec![product(2, "Bags", true, 1.0)];
        let suggestions = suggest_swaps(&cart, &catalog);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].cart_index, 0);
        assert_eq!(suggestions[1].cart_index, 1);
    }

    #[test]
    fn accepting_a_swap_changes_the_totals() {
        let mut cart = cart_of(vec![product(1, "Bags", false, 5.0)]);
        let catalog = vec![product(2, "Bags", true, 1.0)];
        let suggestions = suggest_swaps(&cart, &catalog);
        cart.replace_at(suggestions[0].cart_index, suggestions[0].alternative.clone());
        assert_eq!(cart.impact_label(), "1.0");
        // The swapped cart no longer produces suggestions.
        assert!(suggest_swaps(&cart, &catalog).is_empty());
    }
}
