//! Public card browser of one section.
//!
//! Shows the section header, a grid of cards, and a modal with the details of
//! the clicked card. From the modal a visitor can add a tale to the card.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::cards::list_cards;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Msg, TaleField};
pub use props::CardBrowserProps;
pub use state::CardBrowserComponent;

impl Component for CardBrowserComponent {
    type Message = Msg;
    type Properties = CardBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardBrowserComponent::new()
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

            let record_type = ctx.props().record_type.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let cards = list_cards(&record_type).await.map_err(|e| e.to_string());
                link.send_message(Msg::CardsLoaded(cards));
            });
        }
    }
}
