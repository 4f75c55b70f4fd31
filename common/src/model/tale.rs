//! Tales: short stories appended to a public card.
//!
//! The card modal owns a `TaleDraft` while its form is open. Submitting turns
//! the draft into an `AddTaleRequest` for `POST /{type}/addTale`, after the
//! same required-field check the admin forms use.

use serde::Serialize;

use super::card::Card;
use super::record_type::RecordType;
use crate::forms::ValidationError;

/// Body of `POST /{type}/addTale`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaleRequest {
    pub mind_object_type: String,
    pub mind_object_type_id: String,
    pub topic_title: String,
    pub date: String,
    pub location: String,
    pub talltale: String,
}

/// Editable state of the tale form attached to one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaleDraft {
    pub card_id: String,
    pub topic_title: String,
    /// `datetime-local` value, `YYYY-MM-DDTHH:MM`.
    pub date: String,
    pub location: String,
    pub talltale: String,
}

impl TaleDraft {
    pub fn for_card(card: &Card, now: &str) -> Self {
        Self {
            card_id: card.id.clone(),
            topic_title: card.title.clone(),
            date: now.to_string(),
            location: String::new(),
            talltale: String::new(),
        }
    }

    /// `date` and `talltale` must be non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<String> = [("Date", &self.date), ("Your Tale", &self.talltale)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label.to_string())
            .collect();
        if missing.is_empty() { Ok(()) } else { Err(ValidationError { missing }) }
    }

    pub fn to_request(&self, record_type: &RecordType) -> Result<AddTaleRequest, ValidationError> {
        self.validate()?;
        Ok(AddTaleRequest {
            mind_object_type: record_type.to_string(),
            mind_object_type_id: self.card_id.clone(),
            topic_title: self.topic_title.clone(),
            date: self.date.clone(),
            location: self.location.clone(),
            talltale: self.talltale.clone(),
        })
    }
}

/// Path of the tale creation endpoint of a section.
pub fn add_tale_url(record_type: &RecordType) -> String {
    format!("/{}/addTale", record_type)
}

/// Formats a local timestamp as a `datetime-local` input value.
pub fn format_datetime_local(year: u32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card() -> Card {
        serde_json::from_value(json!({"id": 9, "title": "Dragons", "content": "c"})).unwrap()
    }

    #[test]
    fn blank_tale_is_rejected() {
        let mut draft = TaleDraft::for_card(&card(), "2024-05-01T10:30");
        draft.talltale = "   ".to_string();

        let err = draft.to_request(&RecordType::from("delusions")).unwrap_err();
        assert_eq!(err.missing, ["Your Tale"]);
    }

    #[test]
    fn request_carries_card_identity() {
        let mut draft = TaleDraft::for_card(&card(), "2024-05-01T10:30");
        draft.talltale = "Saw one".to_string();

        let request = draft.to_request(&RecordType::from("delusions")).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "mindObjectType": "delusions",
                "mindObjectTypeId": "9",
                "topicTitle": "Dragons",
                "date": "2024-05-01T10:30",
                "location": "",
                "talltale": "Saw one"
            })
        );
    }

    #[test]
    fn datetime_local_is_zero_padded() {
        assert_eq!(format_datetime_local(2024, 3, 7, 9, 5), "2024-03-07T09:05");
        assert_eq!(add_tale_url(&RecordType::from("thoughts")), "/thoughts/addTale");
    }
}
