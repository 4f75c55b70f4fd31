use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::tale::TaleDraft;

use crate::api::cards::add_tale;
use crate::helpers::{alert, now_for_input};

use super::messages::{Msg, TaleField};
use super::state::CardBrowserComponent;

pub fn update(component: &mut CardBrowserComponent, ctx: &Context<CardBrowserComponent>, msg: Msg) -> bool {
    match msg {
        Msg::CardsLoaded(result) => {
            match result {
                Ok(cards) => {
                    log!(format!("Loaded {} cards", cards.len()));
                    component.cards = cards;
                    component.load_result = Some(Ok(()));
                }
                Err(err) => component.load_result = Some(Err(err)),
            }
            true
        }
        Msg::OpenCard(id) => {
            component.tale = None;
            component.open_card = component.card(&id).map(|c| c.id.clone());
            true
        }
        Msg::CloseCard => {
            component.close();
            true
        }
        Msg::ShowTaleForm => {
            if component.tale.is_some() {
                return false;
            }
            let Some(card) = component.current_card() else {
                return false;
            };
            let draft = TaleDraft::for_card(card, &now_for_input());
            component.tale = Some(draft);
            true
        }
        Msg::TaleInput(field, value) => {
            if let Some(tale) = component.tale.as_mut() {
                match field {
                    TaleField::Date => tale.date = value,
                    TaleField::Location => tale.location = value,
                    TaleField::Talltale => tale.talltale = value,
                }
            }
            false
        }
        Msg::SubmitTale => {
            if component.submitting_tale {
                return false;
            }
            let Some(tale) = component.tale.as_ref() else {
                return false;
            };
            let record_type = ctx.props().record_type.clone();
            let request = match tale.to_request(&record_type) {
                Ok(request) => request,
                Err(err) => {
                    alert(&err.to_string());
                    return false;
                }
            };
            let card_id = tale.card_id.clone();
            component.submitting_tale = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = add_tale(&record_type, &request).await.map_err(|e| e.to_string());
                link.send_message(Msg::TaleFinished { card_id, result });
            });
            true
        }
        Msg::TaleFinished { card_id, result } => {
            component.submitting_tale = false;
            match result {
                Ok(()) => {
                    alert("Tale added successfully!");
                    if let Some(card) = component.cards.iter_mut().find(|c| c.id == card_id) {
                        card.has_tales = true;
                    }
                    component.close();
                }
                Err(err) => alert(&format!("Error: {}", err)),
            }
            true
        }
    }
}
