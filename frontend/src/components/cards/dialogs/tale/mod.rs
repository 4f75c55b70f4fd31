use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::card::Card;
use common::model::tale::TaleDraft;

use crate::components::cards::browser::{CardBrowserComponent, Msg, TaleField};

/// "Add a Tale" form shown under the card details.
///
/// The card id, type and title travel with the draft; only date, location
/// and the tale itself are inputs.
pub fn tale_form(
    card: &Card,
    draft: &TaleDraft,
    submitting: bool,
    link: &Scope<CardBrowserComponent>,
) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitTale
    });
    let on_date = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TaleInput(TaleField::Date, input.value())
    });
    let on_location = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TaleInput(TaleField::Location, input.value())
    });
    let on_tale = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::TaleInput(TaleField::Talltale, textarea.value())
    });

    html! {
        <div class="tale-form">
            <h2>{ format!("Add a Tale for \"{}\"", card.title) }</h2>
            <form id="add-tale-form" novalidate={true} {onsubmit}>
                <div class="form-group">
                    <label for="date" class="required-field">{ "Date:" }</label>
                    <input type="datetime-local" id="date" name="date" required={true}
                        value={draft.date.clone()} oninput={on_date} />
                </div>
                <div class="form-group">
                    <label for="location">{ "Location:" }</label>
                    <input type="text" id="location" name="location" placeholder="Where did this happen?"
                        value={draft.location.clone()} oninput={on_location} />
                </div>
                <div class="form-group">
                    <label for="talltale" class="required-field">{ "Your Tale:" }</label>
                    <textarea id="talltale" name="talltale" placeholder="Tell your tale here..." required={true}
                        value={draft.talltale.clone()} oninput={on_tale} />
                </div>
                <button type="submit" class="submit-btn" disabled={submitting}>
                    { if submitting { "Saving..." } else { "Save Tale" } }
                </button>
            </form>
        </div>
    }
}
