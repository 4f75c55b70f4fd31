use crate::app::App;

mod api;
mod app;
mod card_grid;
mod components;
mod helpers;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
