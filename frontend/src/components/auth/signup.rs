//! Signup page with client-side validation.
//!
//! Validation mirrors the backend's registration rules: name of at least
//! three characters, a plausible email, and a password with an upper, a
//! lower, a digit, a special character, no whitespace, and length 8+.
//! Errors are shown per field and cleared as soon as the field changes.

use common::model::user::Role;
use common::requests::RegisterRequest;
use gloo_console::error;
use regex::Regex;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::toast::show_toast;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Validates the signup form. Pure so it can be unit tested.
pub fn validate(full_name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if full_name.trim().chars().count() < 3 {
        errors.full_name = Some("Name must be at least 3 characters.");
    }

    let email_re = Regex::new(EMAIL_PATTERN).unwrap();
    if !email_re.is_match(email) {
        errors.email = Some("Invalid email format.");
    }

    if !password_is_strong(password) {
        errors.password = Some(
            "Password must be 8+ chars, with 1 uppercase, 1 lowercase, 1 number, and 1 special char.",
        );
    }

    errors
}

fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| "@#$%^&+=!".contains(c))
        && !password.chars().any(char::is_whitespace)
}

pub enum Msg {
    SetFullName(String),
    SetEmail(String),
    SetPassword(String),
    SetRole(Role),
    Submit,
    Succeeded,
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct SignupProps {
    pub on_navigate: Callback<Page>,
}

pub struct SignupPage {
    full_name: String,
    email: String,
    password: String,
    role: Role,
    errors: FieldErrors,
    busy: bool,
}

impl Component for SignupPage {
    type Message = Msg;
    type Properties = SignupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::User,
            errors: FieldErrors::default(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFullName(value) => {
                self.full_name = value;
                self.errors.full_name = None;
                true
            }
            Msg::SetEmail(value) => {
                self.email = value;
                self.errors.email = None;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                self.errors.password = None;
                true
            }
            Msg::SetRole(role) => {
                self.role = role;
                false
            }
            Msg::Submit => {
                let errors = validate(&self.full_name, &self.email, &self.password);
                if !errors.is_empty() {
                    self.errors = errors;
                    return true;
                }
                self.busy = true;
                let request = RegisterRequest {
                    full_name: self.full_name.trim().to_string(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                    role: self.role,
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::register(&request).await {
                        Ok(()) => link.send_message(Msg::Succeeded),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::Succeeded => {
                self.busy = false;
                show_toast("Registration successful! Please log in.");
                ctx.props().on_navigate.emit(Page::Login);
                true
            }
            Msg::Failed(message) => {
                self.busy = false;
                error!(format!("signup failed: {message}"));
                show_toast("Signup failed. The email may already be in use.");
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
                    <h2>{"Join EcoBazaar"}</h2>
                    <p class="auth-subtitle">{"Start your sustainable journey"}</p>

                    <form {onsubmit}>
                        <label>{"Full Name"}</label>
                        <input
                            type="text"
                            placeholder="John Doe"
                            value={self.full_name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetFullName(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        { field_error(self.errors.full_name) }

                        <label>{"Email Address"}</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        { field_error(self.errors.email) }

                        <label>{"I am a..."}</label>
                        <select onchange={link.callback(|e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            Msg::SetRole(if value == "admin" { Role::Admin } else { Role::User })
                        })}>
                            <option value="user" selected={self.role == Role::User}>
                                {"Customer (shop for eco-products)"}
                            </option>
                            <option value="admin" selected={self.role == Role::Admin}>
                                {"Admin (manage inventory)"}
                            </option>
                        </select>

                        <label>{"Password"}</label>
                        <input
                            type="password"
                            placeholder="••••••••"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                        { field_error(self.errors.password) }

                        <button type="submit" disabled={self.busy}>
                            { if self.busy { "Creating..." } else { "Create Account" } }
                        </button>
                    </form>

                    <p class="auth-footer">
                        {"Already have an account?"}
                        <a onclick={ctx.props().on_navigate.reform(|_| Page::Login)}>{"Log in"}</a>
                    </p>
                </div>
            </div>
        }
    }
}

fn field_error(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_valid_form() {
        assert!(validate("Ada Lovelace", "ada@example.com", "S3cret!pw").is_empty());
    }

    #[test]
    fn rejects_short_names() {
        let errors = validate("Al", "ada@example.com", "S3cret!pw");
        assert!(errors.full_name.is_some());
        assert!(errors.email.is_none());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate("Ada", "not-an-email", "S3cret!pw").email.is_some());
        assert!(validate("Ada", "a b@example.com", "S3cret!pw").email.is_some());
    }

    #[test]
    fn enforces_password_rules() {
        // Too short.
        assert!(validate("Ada", "a@b.co", "S3c!pw").password.is_some());
        // No special character.
        assert!(validate("Ada", "a@b.co", "S3cretpwd").password.is_some());
        // No uppercase.
        assert!(validate("Ada", "a@b.co", "s3cret!pw").password.is_some());
        // Whitespace.
        assert!(validate("Ada", "a@b.co", "S3cret! pw").password.is_some());
        // All rules satisfied.
        assert!(validate("Ada", "a@b.co", "S3cret!pw").password.is_none());
    }
}
