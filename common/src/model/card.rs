use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::record::{display_value, is_truthy};
use super::record_type::RecordType;

/// One public content card as served by `GET /{type}/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub subtopic: Option<String>,
    #[serde(default)]
    pub subtopic_desc: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    /// Sent as a boolean or as the strings `"true"` / `"false"`.
    #[serde(default, deserialize_with = "flag")]
    pub has_tales: bool,
}

/// One labelled line of the card detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl Card {
    /// Tags from the comma separated `tag` field, trimmed, empties dropped.
    pub fn tags(&self) -> Vec<String> {
        self.tag
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn title_or_untitled(&self) -> &str {
        if self.title.trim().is_empty() { "Untitled" } else { &self.title }
    }

    /// Rows of the detail modal; empty optional fields are left out.
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let mut rows = vec![DetailRow { label: "Content", value: self.content.clone() }];
        let optional = [("Subtopic", &self.subtopic), ("Subtopic Description", &self.subtopic_desc)];
        for (label, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                rows.push(DetailRow { label, value: value.to_string() });
            }
        }
        let tags = self.tags();
        if !tags.is_empty() {
            let value = tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ");
            rows.push(DetailRow { label: "Tags", value });
        }
        rows
    }
}

/// Path of the public data endpoint of a section.
pub fn cards_url(record_type: &RecordType) -> String {
    format!("/{}/data", record_type)
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_value(&Value::deserialize(deserializer)?).unwrap_or_default())
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(value: Value) -> Card {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn decodes_public_payload() {
        let c = card(json!({
            "id": 3,
            "title": "Time travel",
            "content": "Probably not",
            "subtopic": "",
            "subtopicDesc": "",
            "tag": "physics, fiction ,",
            "hasTales": "true"
        }));
        assert_eq!(c.id, "3");
        assert!(c.has_tales);
        assert_eq!(c.tags(), ["physics", "fiction"]);
    }

    #[test]
    fn detail_rows_skip_empty_fields() {
        let c = card(json!({"id": 1, "title": "", "content": "Body", "subtopic": "Sub", "tag": "a"}));
        let labels: Vec<&str> = c.detail_rows().iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Content", "Subtopic", "Tags"]);
        assert_eq!(c.detail_rows()[2].value, "#a");
        assert_eq!(c.title_or_untitled(), "Untitled");
    }

    #[test]
    fn data_url_uses_type_segment() {
        assert_eq!(cards_url(&RecordType::from("passions")), "/passions/data");
    }
}
