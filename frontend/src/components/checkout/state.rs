//! Component state for the checkout page.

use common::model::product::Product;
use common::suggestions::Suggestion;

/// Where the page is in the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The user is reviewing the cart and suggestions.
    Editing,
    /// The order request is in flight; the confirm button is disabled.
    Submitting,
    /// The backend accepted the order; the cart has been cleared.
    Confirmed,
}

/// State container for the checkout page.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct CheckoutPage {
    /// Last successfully fetched catalog. Starts empty and is replaced
    /// wholesale on every successful refresh; a failed refresh leaves it
    /// untouched so suggestions keep working from the last good snapshot.
    pub catalog: Vec<Product>,

    /// Current suggestion list, recomputed from scratch whenever the
    /// snapshot is replaced. Never merged or diffed.
    pub suggestions: Vec<Suggestion>,

    /// Generation of the most recently initiated catalog fetch. Responses
    /// carrying an older generation are discarded, so rapid cart edits
    /// cannot let a stale response overwrite a newer snapshot.
    pub fetch_generation: u32,

    pub phase: Phase,
}

impl CheckoutPage {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            suggestions: Vec::new(),
            fetch_generation: 0,
            phase: Phase::Editing,
        }
    }
}
