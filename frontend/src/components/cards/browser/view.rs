use yew::html::Scope;
use yew::prelude::*;

use common::config::section_title;
use common::model::card::Card;

use crate::card_grid::CardGrid;
use crate::components::cards::dialogs::card::card_dialog;

use super::messages::Msg;
use super::state::CardBrowserComponent;

pub fn view(component: &CardBrowserComponent, ctx: &Context<CardBrowserComponent>) -> Html {
    let link = ctx.link();
    let record_type = &ctx.props().record_type;
    let (header, subheader) = match section_title(record_type.as_str()) {
        Some(title) => (title.header.to_string(), Some(title.subheader)),
        None => (record_type.label(), None),
    };

    html! {
        <section class="card-section">
            <header class="section-header">
                <h1>{ header }</h1>
                if let Some(subheader) = subheader {
                    <p class="section-subheader">{ subheader }</p>
                }
            </header>
            { build_body(component, link) }
            { card_dialog(component, link) }
        </section>
    }
}

fn build_body(component: &CardBrowserComponent, link: &Scope<CardBrowserComponent>) -> Html {
    match &component.load_result {
        None => html! { <p class="loading">{ "Loading..." }</p> },
        Some(Err(err)) => html! {
            <div id="error-message" class="form-message error">
                { format!("Error loading data: {}", err) }
            </div>
        },
        Some(Ok(())) if component.cards.is_empty() => html! {
            <p class="no-data">{ "Nothing here yet." }</p>
        },
        Some(Ok(())) => html! {
            <CardGrid>
                { for component.cards.iter().map(|card| build_card(card, link)) }
            </CardGrid>
        },
    }
}

fn build_card(card: &Card, link: &Scope<CardBrowserComponent>) -> Html {
    let onclick = {
        let id = card.id.clone();
        link.callback(move |_: MouseEvent| Msg::OpenCard(id.clone()))
    };

    html! {
        <div class="card" data-id={card.id.clone()} key={card.id.clone()} {onclick}>
            if card.has_tales {
                <div class="tale-indicator" title="Has tales">{ "📖" }</div>
            }
            <h3>{ card.title_or_untitled().to_string() }</h3>
            <p>{ card.content.clone() }</p>
            if let Some(subtopic) = card.subtopic.as_deref().filter(|s| !s.trim().is_empty()) {
                <span class="subtopic">{ subtopic.to_string() }</span>
            }
            if !card.tags().is_empty() {
                <div class="tag">
                    { for card.tags().into_iter().map(|tag| html! { <span class="tag-item">{ format!("#{}", tag) }</span> }) }
                </div>
            }
        </div>
    }
}
