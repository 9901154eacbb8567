use common::model::product::Product;

pub enum Msg {
    /// A catalog fetch finished. `generation` identifies which refresh this
    /// response belongs to; stale generations are dropped.
    CatalogLoaded {
        generation: u32,
        products: Vec<Product>,
    },
    CatalogFailed {
        generation: u32,
        error: String,
    },
    /// Accept the suggestion at this position in the suggestion list.
    AcceptSuggestion(usize),
    /// Remove the cart line at this position.
    RemoveLine(usize),
    ConfirmOrder,
    OrderAccepted,
    OrderRejected(String),
    BackToShop,
}
