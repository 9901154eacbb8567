//! View rendering for the checkout page.
//!
//! Two top-level states: the confirmed panel after a successful order, and
//! the two-column layout otherwise — the suggestion list and payment form
//! on the left, the live order summary (lines, footprint meter, total) on
//! the right. Suggestions render the original and the alternative side by
//! side with the emission delta.

use common::suggestions::Suggestion;
use yew::prelude::*;

use crate::format::{format_impact, format_price};

use super::helpers::{impact_is_high, impact_meter_width};
use super::messages::Msg;
use super::state::{CheckoutPage, Phase};

pub fn view(component: &CheckoutPage, ctx: &Context<CheckoutPage>) -> Html {
    if component.phase == Phase::Confirmed {
        return confirmed_panel(ctx);
    }

    let link = ctx.link();

    html! {
        <div class="checkout-page">
            <div class="checkout-main">
                <a class="back-link" onclick={link.callback(|_| Msg::BackToShop)}>
                    {"← Back to Shop"}
                </a>
                <h1>{"Secure Checkout"}</h1>

                { suggestion_panel(component, ctx) }
                { payment_form() }
            </div>

            { summary_panel(component, ctx) }
        </div>
    }
}

fn confirmed_panel(ctx: &Context<CheckoutPage>) -> Html {
    html! {
        <div class="confirmation-panel">
            <h1>{"Order Confirmed!"}</h1>
            <p>{"Thank you for shopping mindfully. Your digital receipt has been sent."}</p>
            <button onclick={ctx.link().callback(|_| Msg::BackToShop)}>
                {"Continue Shopping"}
            </button>
        </div>
    }
}

fn suggestion_panel(component: &CheckoutPage, ctx: &Context<CheckoutPage>) -> Html {
    if component.suggestions.is_empty() {
        return Html::default();
    }

    html! {
        <section class="suggestion-panel">
            <h3>{"Wait! Greener Alternatives Available"}</h3>
            <div class="suggestion-list">
                {
                    component
                        .suggestions
                        .iter()
                        .enumerate()
                        .map(|(index, suggestion)| suggestion_row(ctx, index, suggestion))
                        .collect::<Html>()
                }
            </div>
        </section>
    }
}

fn suggestion_row(ctx: &Context<CheckoutPage>, index: usize, suggestion: &Suggestion) -> Html {
    let link = ctx.link();

    html! {
        <div class="suggestion-row">
            <div class="suggestion-original">
                <p class="strikethrough">{&suggestion.original.name}</p>
                <p class="impact high">{format_impact(suggestion.original.co2_emission)}</p>
            </div>
            <span class="arrow">{"→"}</span>
            <div class="suggestion-alternative">
                <p>{&suggestion.alternative.name}</p>
                <p class="impact eco">{format_impact(suggestion.alternative.co2_emission)}</p>
            </div>
            <button
                class="swap-button"
                onclick={link.callback(move |_| Msg::AcceptSuggestion(index))}
            >
                {"Swap & Save"}
            </button>
        </div>
    }
}

fn payment_form() -> Html {
    html! {
        <section class="payment-form">
            <h2>{"Payment Information"}</h2>
            <input type="text" placeholder="Name on Card" />
            <input type="text" placeholder="Card Number" />
            <div class="payment-row">
                <input type="text" placeholder="MM/YY" />
                <input type="text" placeholder="CVC" />
            </div>
        </section>
    }
}

fn summary_panel(component: &CheckoutPage, ctx: &Context<CheckoutPage>) -> Html {
    let link = ctx.link();
    let cart = &ctx.props().cart;
    let total_impact = cart.total_impact();
    let meter_class = if impact_is_high(total_impact) {
        "meter-fill high"
    } else {
        "meter-fill"
    };
    let busy = component.phase == Phase::Submitting;

    html! {
        <aside class="summary-panel">
            <h2>{"Order Summary"}</h2>

            <div class="summary-lines">
                {
                    if cart.is_empty() {
                        html! { <p class="empty-cart">{"Cart is empty"}</p> }
                    } else {
                        cart.lines().iter().enumerate().map(|(index, item)| html! {
                            <div class="summary-line">
                                <div>
                                    <p class="line-name">{&item.name}</p>
                                    <p class="line-impact">{format_impact(item.co2_emission)}</p>
                                </div>
                                <div class="line-actions">
                                    <span class="price">{format_price(item.price)}</span>
                                    <button onclick={link.callback(move |_| Msg::RemoveLine(index))}>
                                        {"Remove"}
                                    </button>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                }
            </div>

            <div class="impact-summary">
                <h3>{"Total Environmental Impact"}</h3>
                <span class={if impact_is_high(total_impact) { "impact high" } else { "impact" }}>
                    {format!("{} kg CO₂", cart.impact_label())}
                </span>
                <div class="meter-track">
                    <div
                        class={meter_class}
                        style={format!("width: {}%", impact_meter_width(total_impact))}
                    />
                </div>
            </div>

            <div class="summary-total">
                <span>{"Total"}</span>
                <span class="price">{format_price(cart.total_price())}</span>
            </div>

            <button
                class="confirm-button"
                disabled={cart.is_empty() || busy}
                onclick={link.callback(|_| Msg::ConfirmOrder)}
            >
                { if busy { "Placing Order..." } else { "Confirm Order" } }
            </button>
        </aside>
    }
}
