//! Properties for the checkout page.
//!
//! The cart is owned by the app shell; the page receives it by value and
//! mutates it only through the typed callbacks below. `on_replace` is a
//! positional swap — accepting a suggestion must never be expressed as a
//! remove-then-add pair, which would shift the indices of later lines.

use common::cart::Cart;
use common::model::product::Product;
use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutProps {
    pub cart: Cart,
    pub on_remove: Callback<usize>,
    pub on_replace: Callback<(usize, Product)>,
    pub on_clear: Callback<()>,
    pub on_navigate: Callback<Page>,
}
