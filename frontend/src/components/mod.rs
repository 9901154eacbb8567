pub mod admin;
pub mod auth;
pub mod checkout;
pub mod product_details;
pub mod shop;
