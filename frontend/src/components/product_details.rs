//! Product details page: fetches a single product by id and renders the
//! loading, not-found, or loaded state. Re-fetches when the id prop changes.

use common::model::product::Product;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::format::{format_impact, format_price};
use crate::toast::show_toast;

/// Scale ceiling for the footprint bar; anything at or above renders full.
const IMPACT_BAR_MAX_KG: f64 = 20.0;

enum LoadState {
    Loading,
    NotFound,
    Loaded(Product),
}

pub enum Msg {
    Fetched(Option<Product>),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProductDetailsProps {
    pub id: i64,
    pub on_add: Callback<Product>,
    pub on_navigate: Callback<Page>,
}

pub struct ProductDetailsPage {
    state: LoadState,
}

impl ProductDetailsPage {
    fn fetch(ctx: &Context<Self>) {
        let id = ctx.props().id;
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_product(id).await {
                Ok(product) => link.send_message(Msg::Fetched(product)),
                Err(err) => link.send_message(Msg::Failed(err.to_string())),
            }
        });
    }
}

impl Component for ProductDetailsPage {
    type Message = Msg;
    type Properties = ProductDetailsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            Self::fetch(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.state = LoadState::Loading;
            Self::fetch(ctx);
        }
        true
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(Some(product)) => {
                self.state = LoadState::Loaded(product);
                true
            }
            Msg::Fetched(None) => {
                self.state = LoadState::NotFound;
                true
            }
            Msg::Failed(message) => {
                error!(format!("product load failed: {message}"));
                show_toast("Could not load the product.");
                self.state = LoadState::NotFound;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let back = ctx.props().on_navigate.reform(|_| Page::Shop);

        match &self.state {
            LoadState::Loading => html! {
                <div class="details-page"><p class="loading">{"Loading..."}</p></div>
            },
            LoadState::NotFound => html! {
                <div class="details-page">
                    <h2>{"Product Not Found"}</h2>
                    <a onclick={back}>{"Return to Shop"}</a>
                </div>
            },
            LoadState::Loaded(product) => self.details(ctx, product, back),
        }
    }
}

impl ProductDetailsPage {
    fn details(&self, ctx: &Context<Self>, product: &Product, back: Callback<MouseEvent>) -> Html {
        let bar_width = ((product.co2_emission / IMPACT_BAR_MAX_KG) * 100.0).min(100.0);
        let bar_class = if product.is_eco_friendly {
            "impact-bar eco"
        } else {
            "impact-bar"
        };
        let on_add = ctx.props().on_add.reform({
            let product = product.clone();
            move |_| product.clone()
        });

        html! {
            <div class="details-page">
                <a class="back-link" onclick={back}>{"← Back to Shop"}</a>

                <div class="details-card">
                    <div class="details-image">
                        {
                            match product.primary_image() {
                                Some(url) => html! { <img src={url.to_string()} alt={product.name.clone()} /> },
                                None => html! { <div class="image-placeholder" /> },
                            }
                        }
                        {
                            if product.is_eco_friendly {
                                html! { <span class="eco-badge">{"Verified Sustainable"}</span> }
                            } else {
                                Html::default()
                            }
                        }
                    </div>

                    <div class="details-body">
                        <span class="category">{&product.category}</span>
                        <h1>{&product.name}</h1>
                        <span class="price">{format_price(product.price)}</span>
                        <p class="description">
                            {
                                product.description.clone().unwrap_or_else(|| {
                                    "No detailed description available for this product yet. \
                                     All items on EcoBazaarX are vetted for quality."
                                        .to_string()
                                })
                            }
                        </p>

                        <div class="impact-card">
                            <h3>{"Environmental Impact"}</h3>
                            <div class="impact-row">
                                <span>{"Carbon Footprint"}</span>
                                <span>{format_impact(product.co2_emission)}</span>
                            </div>
                            <div class="impact-track">
                                <div class={bar_class} style={format!("width: {bar_width}%")} />
                            </div>
                        </div>

                        <button class="add-button" onclick={on_add}>
                            {"Add to Impact Cart"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
