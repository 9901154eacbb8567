//! Forgot-password page: sends the reset-link request and swaps the form
//! for a confirmation note.

use common::requests::ForgotPasswordRequest;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

pub enum Msg {
    SetEmail(String),
    Submit,
    Sent,
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct ForgotPasswordProps {
    pub on_navigate: Callback<Page>,
}

pub struct ForgotPasswordPage {
    email: String,
    sent: bool,
}

impl Component for ForgotPasswordPage {
    type Message = Msg;
    type Properties = ForgotPasswordProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            sent: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::Submit => {
                let request = ForgotPasswordRequest {
                    email: self.email.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::forgot_password(&request).await {
                        Ok(()) => link.send_message(Msg::Sent),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                false
            }
            Msg::Sent => {
                self.sent = true;
                true
            }
            Msg::Failed(message) => {
                error!(format!("forgot-password failed: {message}"));
                show_toast("Could not request a reset link. Try again.");
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
                    <h2>{"Forgot Password?"}</h2>
                    <p class="auth-subtitle">{"Enter your email to receive a reset link."}</p>

                    {
                        if self.sent {
                            html! {
                                <div class="auth-confirmation">
                                    {"Reset link generated! Check your email."}
                                </div>
                            }
                        } else {
                            html! {
                                <form {onsubmit}>
                                    <input
                                        type="email"
                                        placeholder="you@example.com"
                                        required=true
                                        value={self.email.clone()}
                                        oninput={link.callback(|e: InputEvent| {
                                            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                                        })}
                                    />
                                    <button type="submit">{"Send Reset Link"}</button>
                                </form>
                            }
                        }
                    }

                    <p class="auth-footer">
                        <a onclick={ctx.props().on_navigate.reform(|_| Page::Login)}>
                            {"Back to login"}
                        </a>
                    </p>
                </div>
            </div>
        }
    }
}
