use common::model::card::Card;

/// Inputs of the tale form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TaleField {
    Date,
    Location,
    Talltale,
}

pub enum Msg {
    CardsLoaded(Result<Vec<Card>, String>),
    OpenCard(String),
    CloseCard,
    ShowTaleForm,
    TaleInput(TaleField, String),
    SubmitTale,
    TaleFinished { card_id: String, result: Result<(), String> },
}
