//! Order submission payload for `POST /api/orders/create`.
//!
//! The backend owns the order once submitted; the client only cares whether
//! the request succeeded. The wire shape mirrors what the order endpoint
//! expects: the two totals plus a flat item list.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub co2_emission: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub total_amount: f64,
    pub total_co2: f64,
    pub items: Vec<OrderItem>,
}

impl OrderRequest {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            total_amount: cart.total_price(),
            total_co2: cart.total_impact(),
            items: cart
                .lines()
                .iter()
                .map(|p| OrderItem {
                    id: p.id,
                    name: p.name.clone(),
                    price: p.price,
                    co2_emission: p.co2_emission,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Product;

    #[test]
    fn from_cart_carries_totals_and_items() {
        let mut cart = Cart::new();
        cart.add(Product {
            id: 4,
            name: "Jute Bag".into(),
            description: None,
            price: 8.5,
            category: "Bags".into(),
            co2_emission: 0.9,
            is_eco_friendly: true,
            image_url: None,
            image_urls: None,
            alternative_product_id: None,
            brand: None,
            material: None,
            stock_quantity: None,
        });

        let order = OrderRequest::from_cart(&cart);
        assert_eq!(order.total_amount, 8.5);
        assert_eq!(order.total_co2, 0.9);
        assert_eq!(order.items.len(), 1);

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("totalCo2").is_some());
        assert!(json["items"][0].get("co2Emission").is_some());
    }
}
