//! Admin console: root module wiring the Yew `Component` implementation with
//! submodules for messages, state, update logic, view rendering and the
//! schema-driven form fields.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, load the manageable record types, falling back to the
//!   placeholder set when the server cannot list them.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::admin::list_types;

mod fields;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminConsoleComponent;

impl Component for AdminConsoleComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminConsoleComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let types = list_types().await.map_err(|e| e.to_string());
                if let Ok(types) = &types {
                    log!(format!("Loaded {} record types", types.len()));
                }
                link.send_message(Msg::TypesLoaded(types));
            });
        }
    }
}
