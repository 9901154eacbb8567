pub mod cart;
pub mod error;
pub mod model;
pub mod requests;
pub mod suggestions;
