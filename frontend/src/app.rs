//! Application shell: owns the state shared across views and switches
//! between pages.
//!
//! Routing libraries are deliberately not used; navigation is an in-memory
//! `Page` switch driven by callbacks. The shell is also the single writer of
//! the shared cart: every page receives the cart by value plus typed
//! callbacks, and each mutation flows back through an `AppMsg`, so the
//! mounted page always re-renders with a fresh cart prop. The checkout page
//! relies on that prop change to re-fetch its catalog snapshot.

use common::cart::Cart;
use common::model::product::Product;
use common::model::user::SessionUser;
use yew::prelude::*;

use crate::components::admin::AdminPage;
use crate::components::auth::forgot_password::ForgotPasswordPage;
use crate::components::auth::login::LoginPage;
use crate::components::auth::reset_password::ResetPasswordPage;
use crate::components::auth::signup::SignupPage;
use crate::components::checkout::CheckoutPage;
use crate::components::product_details::ProductDetailsPage;
use crate::components::shop::ShopPage;

/// The views of the storefront. Starts at `Login`; a password-reset link
/// (carrying a `token` query parameter) lands directly on `ResetPassword`.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Login,
    Signup,
    ForgotPassword,
    ResetPassword { token: String },
    Shop,
    ProductDetails { id: i64 },
    Checkout,
    Admin,
}

pub enum AppMsg {
    Navigate(Page),
    LoggedIn(SessionUser),
    CartAdd(Product),
    CartRemove(usize),
    CartReplace(usize, Product),
    CartClear,
}

pub struct App {
    page: Page,
    cart: Cart,
    session: Option<SessionUser>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: initial_page(),
            cart: Cart::new(),
            session: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                self.page = page;
                true
            }
            AppMsg::LoggedIn(user) => {
                self.page = if user.role.is_admin() {
                    Page::Admin
                } else {
                    Page::Shop
                };
                self.session = Some(user);
                true
            }
            AppMsg::CartAdd(product) => {
                self.cart.add(product);
                true
            }
            AppMsg::CartRemove(index) => {
                self.cart.remove_at(index);
                true
            }
            AppMsg::CartReplace(index, product) => {
                self.cart.replace_at(index, product);
                true
            }
            AppMsg::CartClear => {
                self.cart.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_navigate = link.callback(AppMsg::Navigate);

        match &self.page {
            Page::Login => html! {
                <LoginPage
                    on_login={link.callback(AppMsg::LoggedIn)}
                    on_navigate={on_navigate}
                />
            },
            Page::Signup => html! {
                <SignupPage on_navigate={on_navigate} />
            },
            Page::ForgotPassword => html! {
                <ForgotPasswordPage on_navigate={on_navigate} />
            },
            Page::ResetPassword { token } => html! {
                <ResetPasswordPage token={token.clone()} on_navigate={on_navigate} />
            },
            Page::Shop => html! {
                <ShopPage
                    cart={self.cart.clone()}
                    user={self.session.clone()}
                    on_add={link.callback(AppMsg::CartAdd)}
                    on_navigate={on_navigate}
                />
            },
            Page::ProductDetails { id } => html! {
                <ProductDetailsPage
                    id={*id}
                    on_add={link.callback(AppMsg::CartAdd)}
                    on_navigate={on_navigate}
                />
            },
            Page::Checkout => html! {
                <CheckoutPage
                    cart={self.cart.clone()}
                    on_remove={link.callback(AppMsg::CartRemove)}
                    on_replace={link.callback(|(index, product)| AppMsg::CartReplace(index, product))}
                    on_clear={link.callback(|_| AppMsg::CartClear)}
                    on_navigate={on_navigate}
                />
            },
            Page::Admin => html! {
                <AdminPage on_navigate={on_navigate} />
            },
        }
    }
}

/// Picks the first page from the browser location. A `token` query
/// parameter means the user followed a password-reset email.
fn initial_page() -> Page {
    let token = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("token"));

    match token {
        Some(token) if !token.is_empty() => Page::ResetPassword { token },
        _ => Page::Login,
    }
}
