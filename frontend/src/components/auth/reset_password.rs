//! Reset-password page. The token arrives as a query parameter on the
//! emailed link; the app shell extracts it and passes it in as a prop.

use common::requests::ResetPasswordRequest;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

pub enum Msg {
    SetPassword(String),
    Submit,
    Succeeded,
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResetPasswordProps {
    pub token: String,
    pub on_navigate: Callback<Page>,
}

pub struct ResetPasswordPage {
    password: String,
}

impl Component for ResetPasswordPage {
    type Message = Msg;
    type Properties = ResetPasswordProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            password: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                let request = ResetPasswordRequest {
                    token: ctx.props().token.clone(),
                    new_password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::reset_password(&request).await {
                        Ok(()) => link.send_message(Msg::Succeeded),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                false
            }
            Msg::Succeeded => {
                show_toast("Password reset! Please log in.");
                ctx.props().on_navigate.emit(Page::Login);
                false
            }
            Msg::Failed(message) => {
                error!(format!("reset-password failed: {message}"));
                show_toast("Token invalid or expired.");
                false
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
                    <h2>{"Set New Password"}</h2>
                    <form {onsubmit}>
                        <input
                            type="password"
                            placeholder="New secure password"
                            required=true
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        <button type="submit">{"Confirm Change"}</button>
                    </form>
                </div>
            </div>
        }
    }
}
