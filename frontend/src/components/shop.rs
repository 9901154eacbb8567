//! Shop page: catalog grid with search, plus a slide-in cart drawer that
//! shows the running footprint total.
//!
//! The catalog is fetched once on first render. A fetch failure leaves the
//! grid empty and logs; the page stays usable and the user can retry by
//! navigating back.

use common::cart::Cart;
use common::model::product::Product;
use common::model::user::SessionUser;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::format::{format_impact, format_price};
use crate::toast::show_toast;

/// Footprint above which the drawer's total is styled as high-impact.
const DRAWER_IMPACT_WARN_KG: f64 = 10.0;

/// Case-insensitive match against product name or category.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

pub enum Msg {
    Loaded(Vec<Product>),
    LoadFailed(String),
    SetSearch(String),
    SetDrawer(bool),
    Add(Product),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShopProps {
    pub cart: Cart,
    /// Present after login; `None` when browsing anonymously.
    #[prop_or_default]
    pub user: Option<SessionUser>,
    pub on_add: Callback<Product>,
    pub on_navigate: Callback<Page>,
}

pub struct ShopPage {
    products: Vec<Product>,
    search: String,
    drawer_open: bool,
}

impl Component for ShopPage {
    type Message = Msg;
    type Properties = ShopProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            products: Vec::new(),
            search: String::new(),
            drawer_open: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_products().await {
                    Ok(products) => link.send_message(Msg::Loaded(products)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(products) => {
                self.products = products;
                true
            }
            Msg::LoadFailed(message) => {
                error!(format!("catalog load failed: {message}"));
                show_toast("Could not load products.");
                false
            }
            Msg::SetSearch(term) => {
                self.search = term;
                true
            }
            Msg::SetDrawer(open) => {
                self.drawer_open = open;
                true
            }
            Msg::Add(product) => {
                ctx.props().on_add.emit(product);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let cart = &ctx.props().cart;
        let filtered = filter_products(&self.products, &self.search);

        html! {
            <div class="shop-page">
                <nav class="shop-nav">
                    <span class="brand">{"EcoBazaar"}<span class="brand-x">{"X"}</span></span>
                    {
                        match &ctx.props().user {
                            Some(user) => html! {
                                <span class="nav-greeting">{format!("Hi, {}", user.name)}</span>
                            },
                            None => Html::default(),
                        }
                    }
                    <button class="cart-button" onclick={link.callback(|_| Msg::SetDrawer(true))}>
                        {"Cart"}
                        {
                            if !cart.is_empty() {
                                html! { <span class="cart-count">{cart.len()}</span> }
                            } else {
                                Html::default()
                            }
                        }
                    </button>
                </nav>

                <header class="shop-hero">
                    <h1>{"Shop Responsibly."}</h1>
                    <p>
                        {"Every product has a hidden cost. Watch your carbon footprint \
                          as you shop and make mindful choices."}
                    </p>
                    <input
                        class="shop-search"
                        type="text"
                        placeholder="Search products or categories..."
                        value={self.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </header>

                <div class="product-grid">
                    {
                        if filtered.is_empty() {
                            html! {
                                <p class="empty-grid">
                                    { format!("No products found matching \"{}\"", self.search) }
                                </p>
                            }
                        } else {
                            filtered.iter().map(|product| self.product_card(ctx, product)).collect::<Html>()
                        }
                    }
                </div>

                { if self.drawer_open { self.cart_drawer(ctx) } else { Html::default() } }
            </div>
        }
    }
}

impl ShopPage {
    fn product_card(&self, ctx: &Context<Self>, product: &Product) -> Html {
        let link = ctx.link();
        let id = product.id;
        let eco_class = if product.is_eco_friendly { "dot eco" } else { "dot" };

        html! {
            <div class="product-card" key={product.id}>
                <a onclick={ctx.props().on_navigate.reform(move |_| Page::ProductDetails { id })}>
                    {
                        match product.primary_image() {
                            Some(url) => html! { <img src={url.to_string()} alt={product.name.clone()} /> },
                            None => html! { <div class="image-placeholder" /> },
                        }
                    }
                    {
                        if product.is_eco_friendly {
                            html! { <span class="eco-badge">{"Eco Choice"}</span> }
                        } else {
                            Html::default()
                        }
                    }
                </a>
                <div class="product-card-body">
                    <h3>{&product.name}</h3>
                    <span class="price">{format_price(product.price)}</span>
                    <div class="impact-line">
                        <span class={eco_class} />
                        <span>{format_impact(product.co2_emission)}</span>
                    </div>
                    <button onclick={link.callback({
                        let product = product.clone();
                        move |_| Msg::Add(product.clone())
                    })}>
                        {"Add to Cart"}
                    </button>
                </div>
            </div>
        }
    }

    fn cart_drawer(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let cart = &ctx.props().cart;
        let total = cart.total_impact();
        let impact_class = if total > DRAWER_IMPACT_WARN_KG {
            "impact high"
        } else {
            "impact"
        };

        html! {
            <div class="drawer-overlay" onclick={link.callback(|_| Msg::SetDrawer(false))}>
                <aside class="cart-drawer" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="drawer-header">
                        <h2>{"Your Cart"}</h2>
                        <button onclick={link.callback(|_| Msg::SetDrawer(false))}>{"×"}</button>
                    </div>

                    <div class="drawer-lines">
                        {
                            if cart.is_empty() {
                                html! { <p class="empty-cart">{"Your cart is empty."}</p> }
                            } else {
                                cart.lines().iter().map(|item| html! {
                                    <div class="drawer-line">
                                        <div>
                                            <h4>{&item.name}</h4>
                                            <p>{format_price(item.price)}</p>
                                        </div>
                                        <span class={if item.is_eco_friendly { "line-impact eco" } else { "line-impact" }}>
                                            {format!("{}kg", item.co2_emission)}
                                        </span>
                                    </div>
                                }).collect::<Html>()
                            }
                        }
                    </div>

                    <div class="drawer-footer">
                        <div class="footprint-box">
                            <span>{"Total Footprint"}</span>
                            <span class={impact_class}>{format!("{} kg CO₂", cart.impact_label())}</span>
                        </div>
                        <button
                            class="checkout-button"
                            disabled={cart.is_empty()}
                            onclick={ctx.props().on_navigate.reform(|_| Page::Checkout)}
                        >
                            {"Proceed to Checkout"}
                        </button>
                    </div>
                </aside>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.into(),
            description: None,
            price: 1.0,
            category: category.into(),
            co2_emission: 1.0,
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
    fn empty_term_matches_everything() {
        let products = vec![product(1, "Tote", "Bags"), product(2, "Mug", "Kitchen")];
        assert_eq!(filter_products(&products, "").len(), 2);
    }

    #[test]
    fn matches_name_or_category_case_insensitively() {
        let products = vec![product(1, "Canvas Tote", "Bags"), product(2, "Mug", "Kitchen")];
        assert_eq!(filter_products(&products, "tote").len(), 1);
        assert_eq!(filter_products(&products, "KITCH").len(), 1);
        assert_eq!(filter_products(&products, "bAgS")[0].id, 1);
    }

    #[test]
    fn no_match_yields_empty() {
        let products = vec![product(1, "Tote", "Bags")];
        assert!(filter_products(&products, "laptop").is_empty());
    }
}
