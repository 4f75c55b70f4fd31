use pulldown_cmark::{html, Event, Parser};
use yew::html::Scope;
use yew::prelude::*;

use common::model::card::DetailRow;

use crate::components::cards::browser::{CardBrowserComponent, Msg};
use crate::components::cards::dialogs::tale::tale_form;
use crate::tops_sheet::modal_sheet::ModalSheet;

/// Detail modal of the open card, with the tale form below once requested.
pub fn card_dialog(component: &CardBrowserComponent, link: &Scope<CardBrowserComponent>) -> Html {
    let card = component.current_card();
    let on_close = link.callback(|_: ()| Msg::CloseCard);

    html! {
        <ModalSheet open={card.is_some()} {on_close} expanded={component.tale.is_some()}>
            if let Some(card) = card {
                <span class="modal-add" title="Add a Tale for this item" onclick={link.callback(|_| Msg::ShowTaleForm)}>
                    { "+" }
                </span>
                <div class="modal-body">
                    <h1>{ card.title_or_untitled().to_string() }</h1>
                    <div class="card-separator"></div>
                    { for card.detail_rows().into_iter().map(detail_row) }
                </div>
                if let Some(draft) = &component.tale {
                    { tale_form(card, draft, component.submitting_tale, link) }
                }
            }
        </ModalSheet>
    }
}

fn detail_row(row: DetailRow) -> Html {
    let value = if row.label == "Content" {
        Html::from_html_unchecked(AttrValue::from(markdown_to_html(&row.value)))
    } else {
        html! { { row.value } }
    };
    html! {
        <div class="detail-row">
            <strong>{ format!("{}:", row.label) }</strong>
            <div class="detail-value">{ value }</div>
        </div>
    }
}

/// Renders card content as markdown. Raw HTML in the source is shown as text.
fn markdown_to_html(input: &str) -> String {
    let parser = Parser::new(input).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

