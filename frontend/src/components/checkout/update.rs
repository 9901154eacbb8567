//! Update function for the checkout page.
//!
//! Key behaviors
//! - Catalog refresh with a generation guard: only the most recently
//!   initiated fetch may replace the snapshot; older in-flight responses
//!   are discarded. A failed fetch keeps the previous snapshot and logs.
//! - Suggestions are recomputed wholesale from the fresh snapshot and the
//!   current cart; the previous list is fully replaced.
//! - Accepting a suggestion emits a positional swap to the app shell. The
//!   resulting cart prop change re-enters `changed()` and triggers the next
//!   refresh cycle.
//! - Order confirmation waits for the backend: the cart is cleared and the
//!   confirmed panel shown only after a successful response. A rejected
//!   submission keeps the cart intact and surfaces a toast.

use common::model::order::OrderRequest;
use common::suggestions::suggest_swaps;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

use super::messages::Msg;
use super::state::{CheckoutPage, Phase};

/// Starts a catalog fetch for the next generation. The previous suggestion
/// list stays rendered while the fetch is in flight.
pub fn refresh_catalog(component: &mut CheckoutPage, ctx: &Context<CheckoutPage>) {
    component.fetch_generation += 1;
    let generation = component.fetch_generation;
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_products().await {
            Ok(products) => link.send_message(Msg::CatalogLoaded {
                generation,
                products,
            }),
            Err(err) => link.send_message(Msg::CatalogFailed {
                generation,
                error: err.to_string(),
            }),
        }
    });
}

/// Central update function for the checkout page.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render, `false` when only side effects occur.
pub fn update(component: &mut CheckoutPage, ctx: &Context<CheckoutPage>, msg: Msg) -> bool {
    match msg {
        Msg::CatalogLoaded {
            generation,
            products,
        } => {
            if generation != component.fetch_generation {
                // A newer refresh is already in flight or applied.
                return false;
            }
            component.catalog = products;
            component.suggestions = suggest_swaps(&ctx.props().cart, &component.catalog);
            true
        }
        Msg::CatalogFailed { generation, error } => {
            if generation != component.fetch_generation {
                return false;
            }
            // Keep the last good snapshot; suggestions stay as they were.
            error!(format!("catalog refresh failed: {error}"));
            show_toast("Could not refresh suggestions.");
            false
        }
        Msg::AcceptSuggestion(index) => {
            if let Some(suggestion) = component.suggestions.get(index) {
                ctx.props()
                    .on_replace
                    .emit((suggestion.cart_index, suggestion.alternative.clone()));
            }
            false
        }
        Msg::RemoveLine(index) => {
            ctx.props().on_remove.emit(index);
            false
        }
        Msg::ConfirmOrder => {
            if ctx.props().cart.is_empty() || component.phase != Phase::Editing {
                return false;
            }
            component.phase = Phase::Submitting;
            let request = OrderRequest::from_cart(&ctx.props().cart);
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_order(&request).await {
                    Ok(()) => link.send_message(Msg::OrderAccepted),
                    Err(err) => link.send_message(Msg::OrderRejected(err.to_string())),
                }
            });
            true
        }
        Msg::OrderAccepted => {
            component.phase = Phase::Confirmed;
            ctx.props().on_clear.emit(());
            true
        }
        Msg::OrderRejected(message) => {
            component.phase = Phase::Editing;
            error!(format!("order submission failed: {message}"));
            show_toast("Order could not be placed. Your cart is unchanged.");
            true
        }
        Msg::BackToShop => {
            ctx.props().on_navigate.emit(Page::Shop);
            false
        }
    }
}
