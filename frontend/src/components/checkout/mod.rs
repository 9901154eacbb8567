//! Checkout page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `CheckoutProps`, `CheckoutPage`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Keep the catalog snapshot fresh: a fetch is started on first render and
//!   again whenever the cart prop changes, so suggestions are always
//!   computed against a snapshot at least as new as the user's last action.
//!   Responses are tagged with a generation counter; only the most recently
//!   initiated fetch is allowed to replace the snapshot.

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CheckoutProps;
pub use state::CheckoutPage;

use yew::prelude::*;

impl Component for CheckoutPage {
    type Message = Msg;
    type Properties = CheckoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CheckoutPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::refresh_catalog(self, ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Every cart mutation (add, remove, swap, clear) lands here as a new
        // cart prop; re-fetch so the snapshot tracks the user's action.
        if ctx.props().cart != old_props.cart {
            update::refresh_catalog(self, ctx);
        }
        true
    }
}
