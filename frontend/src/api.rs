//! Backend client: thin wrappers over gloo-net for every endpoint the
//! storefront consumes. All calls go through the `/api` prefix that the
//! deployment proxies to the backend.
//!
//! Every wrapper returns `Result<_, ApiError>`; callers decide whether a
//! failure is worth a toast, a retry, or just a console entry. Non-2xx
//! responses are turned into `ApiError::Status` with the body preserved,
//! since the backend puts human-readable messages there.

use common::model::order::OrderRequest;
use common::model::product::Product;
use common::model::user::LoginResponse;
use common::requests::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use gloo_net::http::{Request, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Maps non-2xx responses to `ApiError::Status`, keeping the body text.
async fn error_for_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

/// Full catalog, in the order that defines first-match substitution.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response = Request::get("/api/products").send().await?;
    Ok(error_for_status(response).await?.json().await?)
}

/// Single product; `Ok(None)` when the backend reports not-found.
pub async fn fetch_product(id: i64) -> Result<Option<Product>, ApiError> {
    let response = Request::get(&format!("/api/products/{}", id)).send().await?;
    if response.status() == 404 {
        return Ok(None);
    }
    Ok(Some(error_for_status(response).await?.json().await?))
}

pub async fn add_product(product: &Product) -> Result<Product, ApiError> {
    let response = Request::post("/api/products/add")
        .json(product)?
        .send()
        .await?;
    Ok(error_for_status(response).await?.json().await?)
}

pub async fn update_product(id: i64, product: &Product) -> Result<Product, ApiError> {
    let response = Request::put(&format!("/api/products/{}", id))
        .json(product)?
        .send()
        .await?;
    Ok(error_for_status(response).await?.json().await?)
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&format!("/api/products/{}", id))
        .send()
        .await?;
    error_for_status(response).await?;
    Ok(())
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post("/api/auth/login").json(request)?.send().await?;
    Ok(error_for_status(response).await?.json().await?)
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    let response = Request::post("/api/auth/register")
        .json(request)?
        .send()
        .await?;
    error_for_status(response).await?;
    Ok(())
}

pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), ApiError> {
    let response = Request::post("/api/auth/forgot-password")
        .json(request)?
        .send()
        .await?;
    error_for_status(response).await?;
    Ok(())
}

pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), ApiError> {
    let response = Request::post("/api/auth/reset-password")
        .json(request)?
        .send()
        .await?;
    error_for_status(response).await?;
    Ok(())
}

/// Submits the order. The caller must treat anything but `Ok` as
/// "the order did not happen" and keep the cart intact.
pub async fn create_order(request: &OrderRequest) -> Result<(), ApiError> {
    let response = Request::post("/api/orders/create")
        .json(request)?
        .send()
        .await?;
    error_for_status(response).await?;
    Ok(())
}
