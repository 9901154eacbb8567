use thiserror::Error;

/// Client-side validation failures, surfaced as toasts in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be a non-negative number")]
    InvalidNumber { field: &'static str },
}
