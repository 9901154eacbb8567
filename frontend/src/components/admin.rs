//! Admin dashboard: catalog CRUD plus image upload.
//!
//! Key behaviors
//! - Product list with delete (behind a browser confirm) and edit, which
//!   pre-fills the form and turns submit into a `PUT`.
//! - The form keeps raw strings and validates through `ProductDraft::build`;
//!   a validation failure surfaces as a toast and nothing is sent.
//! - Image upload: hidden file input -> local data-URL preview while the
//!   multipart upload runs against the media host -> the returned public
//!   URL lands in the form's image field.

use common::model::product::{Product, ProductDraft};
use gloo_console::error;
use gloo_file::futures::read_as_data_url;
use serde::Deserialize;
use web_sys::{File, FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::app::Page;
use crate::format::{format_impact, format_price};
use crate::toast::show_toast;

/// Third-party media host. Accepts a multipart upload under the `image`
/// field and replies with a JSON body carrying the public URL.
const MEDIA_UPLOAD_URL: &str = "https://media.ecobazaarx.com/upload";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

pub enum Msg {
    Loaded(Vec<Product>),
    LoadFailed(String),
    SetName(String),
    SetDescription(String),
    SetPrice(String),
    SetCategory(String),
    SetCo2(String),
    SetEco(bool),
    SetImageUrl(String),
    StartEdit(i64),
    CancelEdit,
    Submit,
    Saved,
    SaveFailed(String),
    Delete(i64),
    Deleted,
    DeleteFailed(String),
    OpenFilePicker,
    FileSelected(File),
    PreviewReady(String),
    Uploaded(String),
    UploadFailed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    pub on_navigate: Callback<Page>,
}

pub struct AdminPage {
    products: Vec<Product>,
    draft: ProductDraft,
    /// Id of the product being edited; `None` means the form adds.
    editing: Option<i64>,
    /// Local data-URL preview of a freshly picked image.
    preview: Option<String>,
    uploading: bool,
    busy: bool,
    file_input_ref: NodeRef,
}

impl AdminPage {
    fn reload(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(products) => link.send_message(Msg::Loaded(products)),
                Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
            }
        });
    }
}

impl Component for AdminPage {
    type Message = Msg;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            products: Vec::new(),
            draft: ProductDraft::default(),
            editing: None,
            preview: None,
            uploading: false,
            busy: false,
            file_input_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            Self::reload(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(products) => {
                self.products = products;
                true
            }
            Msg::LoadFailed(message) => {
                error!(format!("admin catalog load failed: {message}"));
                show_toast("Could not load products.");
                false
            }
            Msg::SetName(v) => {
                self.draft.name = v;
                false
            }
            Msg::SetDescription(v) => {
                self.draft.description = v;
                false
            }
            Msg::SetPrice(v) => {
                self.draft.price = v;
                false
            }
            Msg::SetCategory(v) => {
                self.draft.category = v;
                false
            }
            Msg::SetCo2(v) => {
                self.draft.co2_emission = v;
                false
            }
            Msg::SetEco(v) => {
                self.draft.is_eco_friendly = v;
                true
            }
            Msg::SetImageUrl(v) => {
                self.draft.image_url = v;
                self.preview = None;
                true
            }
            Msg::StartEdit(id) => {
                if let Some(product) = self.products.iter().find(|p| p.id == id) {
                    self.draft = ProductDraft::from_product(product);
                    self.editing = Some(id);
                    self.preview = None;
                }
                true
            }
            Msg::CancelEdit => {
                self.draft = ProductDraft::default();
                self.editing = None;
                self.preview = None;
                true
            }
            Msg::Submit => {
                let product = match self.draft.build() {
                    Ok(product) => product,
                    Err(err) => {
                        show_toast(&err.to_string());
                        return false;
                    }
                };
                self.busy = true;
                let editing = self.editing;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match editing {
                        Some(id) => api::update_product(id, &product).await.map(|_| ()),
                        None => api::add_product(&product).await.map(|_| ()),
                    };
                    match result {
                        Ok(()) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                    }
                });
                true
            }
            Msg::Saved => {
                self.busy = false;
                show_toast(if self.editing.is_some() {
                    "Product updated."
                } else {
                    "Product added."
                });
                self.draft = ProductDraft::default();
                self.editing = None;
                self.preview = None;
                Self::reload(ctx);
                true
            }
            Msg::SaveFailed(message) => {
                self.busy = false;
                error!(format!("product save failed: {message}"));
                show_toast("Could not save the product.");
                true
            }
            Msg::Delete(id) => {
                let confirmed = web_sys::window()
                    .and_then(|w| w.confirm_with_message("Delete this product?").ok())
                    .unwrap_or(false);
                if !confirmed {
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_product(id).await {
                        Ok(()) => link.send_message(Msg::Deleted),
                        Err(err) => link.send_message(Msg::DeleteFailed(err.to_string())),
                    }
                });
                false
            }
            Msg::Deleted => {
                show_toast("Product deleted.");
                Self::reload(ctx);
                false
            }
            Msg::DeleteFailed(message) => {
                error!(format!("product delete failed: {message}"));
                show_toast("Could not delete the product.");
                false
            }
            Msg::OpenFilePicker => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileSelected(file) => {
                self.uploading = true;
                let link = ctx.link().clone();

                // Local preview while the upload runs.
                let preview_file = gloo_file::File::from(file.clone());
                let preview_link = link.clone();
                spawn_local(async move {
                    if let Ok(data_url) = read_as_data_url(&preview_file).await {
                        preview_link.send_message(Msg::PreviewReady(data_url));
                    }
                });

                spawn_local(async move {
                    match upload_image(file).await {
                        Ok(url) => link.send_message(Msg::Uploaded(url)),
                        Err(message) => link.send_message(Msg::UploadFailed(message)),
                    }
                });
                true
            }
            Msg::PreviewReady(data_url) => {
                self.preview = Some(data_url);
                true
            }
            Msg::Uploaded(url) => {
                self.uploading = false;
                self.draft.image_url = url;
                show_toast("Image uploaded.");
                true
            }
            Msg::UploadFailed(message) => {
                self.uploading = false;
                self.preview = None;
                error!(format!("image upload failed: {message}"));
                show_toast("Image upload failed.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="admin-page">
                <nav class="admin-nav">
                    <h1>{"Admin Dashboard"}</h1>
                    <a onclick={ctx.props().on_navigate.reform(|_| Page::Shop)}>
                        {"View Shop"}
                    </a>
                </nav>

                { self.product_form(ctx) }

                <div class="admin-grid">
                    {
                        self.products.iter().map(|product| {
                            let id = product.id;
                            html! {
                                <div class="admin-card" key={product.id}>
                                    {
                                        match product.primary_image() {
                                            Some(url) => html! { <img src={url.to_string()} alt={product.name.clone()} /> },
                                            None => html! { <div class="image-placeholder" /> },
                                        }
                                    }
                                    <h3>{&product.name}</h3>
                                    <p class="category">{&product.category}</p>
                                    <div class="admin-card-row">
                                        <span class="price">{format_price(product.price)}</span>
                                        <span class={if product.is_eco_friendly { "impact eco" } else { "impact high" }}>
                                            {format_impact(product.co2_emission)}
                                        </span>
                                    </div>
                                    <div class="admin-card-actions">
                                        <button onclick={link.callback(move |_| Msg::StartEdit(id))}>
                                            {"Edit"}
                                        </button>
                                        <button class="danger" onclick={link.callback(move |_| Msg::Delete(id))}>
                                            {"Delete"}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        }
    }
}

impl AdminPage {
    fn product_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let onchange_file = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::FileSelected)
        });

        let image_src = self
            .preview
            .clone()
            .or_else(|| (!self.draft.image_url.is_empty()).then(|| self.draft.image_url.clone()));

        html! {
            <form class="admin-form" {onsubmit}>
                <h2>
                    { if self.editing.is_some() { "Edit Product" } else { "Add New Product" } }
                </h2>

                <input
                    placeholder="Product Name"
                    value={self.draft.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    placeholder="Price ($)"
                    value={self.draft.price.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetPrice(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    placeholder="Category"
                    value={self.draft.category.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetCategory(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    placeholder="Description"
                    value={self.draft.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />

                <div class="eco-fields">
                    <label>{"Carbon Footprint (kg CO2)"}</label>
                    <input
                        value={self.draft.co2_emission.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetCo2(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={self.draft.is_eco_friendly}
                            onchange={link.callback(|e: Event| {
                                Msg::SetEco(e.target_unchecked_into::<HtmlInputElement>().checked())
                            })}
                        />
                        {"Is this an eco-friendly product?"}
                    </label>
                </div>

                <div class="image-fields">
                    <input
                        placeholder="Image URL"
                        value={self.draft.image_url.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetImageUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button
                        type="button"
                        disabled={self.uploading}
                        onclick={link.callback(|_| Msg::OpenFilePicker)}
                    >
                        { if self.uploading { "Uploading..." } else { "Upload Image" } }
                    </button>
                    <input
                        type="file"
                        accept="image/*"
                        style="display: none;"
                        ref={self.file_input_ref.clone()}
                        onchange={onchange_file}
                    />
                    {
                        match image_src {
                            Some(src) => html! { <img class="form-preview" src={src} /> },
                            None => Html::default(),
                        }
                    }
                </div>

                <div class="form-actions">
                    <button type="submit" disabled={self.busy}>
                        { if self.editing.is_some() { "Save Changes" } else { "Add Product" } }
                    </button>
                    {
                        if self.editing.is_some() {
                            html! {
                                <button type="button" onclick={link.callback(|_| Msg::CancelEdit)}>
                                    {"Cancel"}
                                </button>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </div>
            </form>
        }
    }
}

/// Multipart upload to the media host; resolves to the public URL.
async fn upload_image(file: File) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "could not build form data".to_string())?;
    form.append_with_blob("image", &file)
        .map_err(|_| "could not attach the file".to_string())?;

    let response = gloo_net::http::Request::post(MEDIA_UPLOAD_URL)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("media host returned {}", response.status()));
    }
    let body: UploadResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.url)
}
