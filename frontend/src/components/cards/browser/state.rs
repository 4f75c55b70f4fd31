//! State of the public card browser.

use common::model::card::Card;
use common::model::tale::TaleDraft;

pub struct CardBrowserComponent {
    pub cards: Vec<Card>,

    /// `None` until the first response arrives.
    pub load_result: Option<Result<(), String>>,

    /// Id of the card shown in the modal.
    pub open_card: Option<String>,

    /// Tale form of the open card, once its "+" control was used.
    pub tale: Option<TaleDraft>,

    /// A tale submission is in flight; its button is disabled meanwhile.
    pub submitting_tale: bool,

    pub loaded: bool,
}

impl CardBrowserComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            load_result: None,
            open_card: None,
            tale: None,
            submitting_tale: false,
            loaded: false,
        }
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.open_card.as_deref().and_then(|id| self.card(id))
    }

    /// Closes the modal and drops any unsent tale.
    pub fn close(&mut self) {
        self.open_card = None;
        self.tale = None;
    }
}
