//! Request and response bodies of the admin HTTP API.
//!
//! Responses are decoded leniently: a missing list decodes as `None` so the
//! caller can tell "server answered without the expected key" from "server
//! answered with an empty list".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ADMIN_API_PATH;
use crate::model::record::Record;
use crate::model::record_type::RecordType;
use crate::model::schema::FieldSchema;

/// `GET /admin/tables`
#[derive(Debug, Clone, Deserialize)]
pub struct TablesResponse {
    #[serde(default)]
    pub tables: Option<Vec<RecordType>>,
}

/// `GET /admin/get-columns?table=T`
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsResponse {
    #[serde(default)]
    pub columns: Option<Vec<FieldSchema>>,
}

/// `GET /admin/objects?table=T`
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectsResponse {
    #[serde(default)]
    pub objects: Option<Vec<Record>>,
}

/// Body of `POST /admin/create` and `POST /admin/update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationRequest {
    pub table_name: RecordType,
    pub data: Map<String, Value>,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Admin API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminEndpoint {
    Tables,
    Columns,
    Objects,
    Create,
    Update,
    Delete,
}

impl AdminEndpoint {
    pub fn url(self) -> String {
        let path = match self {
            AdminEndpoint::Tables => "tables",
            AdminEndpoint::Columns => "get-columns",
            AdminEndpoint::Objects => "objects",
            AdminEndpoint::Create => "create",
            AdminEndpoint::Update => "update",
            AdminEndpoint::Delete => "delete",
        };
        format!("{ADMIN_API_PATH}/{path}")
    }
}

/// The message shown for a failed call: the server's `error` text when the
/// body carries one, else the raw body, else the status line.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(error) }) = serde_json::from_str::<ErrorBody>(body) {
        if !error.trim().is_empty() {
            return error;
        }
    }
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("HTTP error! Status: {status}")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_tables_key_is_none() {
        let decoded: TablesResponse = serde_json::from_value(json!({"error": "boom"})).unwrap();
        assert!(decoded.tables.is_none());

        let decoded: TablesResponse = serde_json::from_value(json!({"tables": ["thoughts"]})).unwrap();
        assert_eq!(decoded.tables, Some(vec![RecordType::from("thoughts")]));
    }

    #[test]
    fn update_body_shape() {
        let mut data = Map::new();
        data.insert("topic".to_string(), json!("New"));
        data.insert("id".to_string(), json!("5"));
        let body = MutationRequest { table_name: RecordType::from("thoughts"), data };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"table_name": "thoughts", "data": {"topic": "New", "id": "5"}})
        );
    }

    #[test]
    fn error_message_prefers_server_text() {
        assert_eq!(error_message(404, r#"{"error": "No object found with ID 3"}"#), "No object found with ID 3");
        assert_eq!(error_message(502, "Bad gateway"), "Bad gateway");
        assert_eq!(error_message(500, ""), "HTTP error! Status: 500");
        assert_eq!(error_message(500, r#"{"detail": "x"}"#), "HTTP error! Status: 500");
    }

    #[test]
    fn endpoints_live_under_admin() {
        assert_eq!(AdminEndpoint::Columns.url(), "/admin/get-columns");
        assert_eq!(AdminEndpoint::Delete.url(), "/admin/delete");
    }
}
