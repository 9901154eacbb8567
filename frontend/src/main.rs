use crate::app::App;

mod api;
mod app;
mod components;
mod format;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
