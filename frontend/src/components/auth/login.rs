//! Login page. On success the backend replies with the user's name and
//! role; the app shell routes admins to the dashboard and everyone else to
//! the shop.

use common::model::user::SessionUser;
use common::requests::LoginRequest;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    Submit,
    Succeeded(SessionUser),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub on_login: Callback<SessionUser>,
    pub on_navigate: Callback<Page>,
}

pub struct LoginPage {
    email: String,
    password: String,
    busy: bool,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                let request = LoginRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::login(&request).await {
                        Ok(response) => link.send_message(Msg::Succeeded(response.into())),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::Succeeded(user) => {
                self.busy = false;
                show_toast(&format!("Welcome back, {}!", user.name));
                ctx.props().on_login.emit(user);
                true
            }
            Msg::Failed(message) => {
                self.busy = false;
                error!(format!("login failed: {message}"));
                show_toast("Login failed. Check your credentials.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="auth-page">
                <div class="auth-card">
                    <h2>{"Welcome Back"}</h2>
                    <p class="auth-subtitle">{"Login to continue your eco-journey"}</p>

                    <form {onsubmit}>
                        <label for="login-email">{"Email Address"}</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="you@example.com"
                            required=true
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <div class="auth-row">
                            <label for="login-password">{"Password"}</label>
                            <a onclick={ctx.props().on_navigate.reform(|_| Page::ForgotPassword)}>
                                {"Forgot Password?"}
                            </a>
                        </div>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="••••••••"
                            required=true
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />

                        <button type="submit" disabled={self.busy}>
                            { if self.busy { "Signing in..." } else { "Sign In" } }
                        </button>
                    </form>

                    <p class="auth-footer">
                        {"Don't have an account?"}
                        <a onclick={ctx.props().on_navigate.reform(|_| Page::Signup)}>{"Sign up"}</a>
                    </p>
                </div>
            </div>
        }
    }
}
