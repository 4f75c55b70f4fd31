//! Calls behind the public card pages.

use gloo_net::http::Request;

use common::model::card::{cards_url, Card};
use common::model::record_type::RecordType;
use common::model::tale::{add_tale_url, AddTaleRequest};

use super::{check, decode, logged, ApiError};

/// `GET /{type}/data`
pub async fn list_cards(record_type: &RecordType) -> Result<Vec<Card>, ApiError> {
    let url = cards_url(record_type);
    let result = async {
        let response = check(Request::get(&url).send().await?).await?;
        decode::<Vec<Card>>(response).await
    }
    .await;
    logged(&format!("GET {}", url), result)
}

/// `POST /{type}/addTale`
pub async fn add_tale(record_type: &RecordType, tale: &AddTaleRequest) -> Result<(), ApiError> {
    let url = add_tale_url(record_type);
    let result = async {
        let response = Request::post(&url).json(tale)?.send().await?;
        check(response).await?;
        Ok::<_, ApiError>(())
    }
    .await;
    logged(&format!("POST {}", url), result)
}
