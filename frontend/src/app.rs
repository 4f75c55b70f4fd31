use common::routes::Page;
use gloo_console::log;
use yew::{html, Component, Context, Html};

use crate::components::admin::console::AdminConsoleComponent;
use crate::components::cards::browser::CardBrowserComponent;

/// Root component; mounts the console or a card section depending on the
/// page the bundle was loaded on.
pub struct App {
    page: Page,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let page = Page::from_path(&path);
        log!(format!("Mounting {:?} for {}", page, path));
        Self { page }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.page {
            Page::Admin => html! { <AdminConsoleComponent /> },
            Page::Cards(record_type) => html! { <CardBrowserComponent record_type={record_type.clone()} /> },
            Page::NotFound => html! {
                <div class="form-message">{ "Page not found" }</div>
            },
        }
    }
}
