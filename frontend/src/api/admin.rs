//! Calls to the `/admin` API used by the console.

use gloo_net::http::Request;

use common::console::NO_COLUMN_INFO;
use common::model::record::{Record, RecordId};
use common::model::record_type::RecordType;
use common::model::schema::FieldSchema;
use common::requests::{
    AdminEndpoint, ColumnsResponse, MutationRequest, ObjectsResponse, TablesResponse,
};

use super::{check, decode, logged, ApiError};

/// `GET /admin/tables`. A body without `tables` is a decode error so the
/// caller falls back to the placeholder types.
pub async fn list_types() -> Result<Vec<RecordType>, ApiError> {
    let result = async {
        let response = check(Request::get(&AdminEndpoint::Tables.url()).send().await?).await?;
        let body: TablesResponse = decode(response).await?;
        body.tables
            .ok_or_else(|| ApiError::Decode("missing `tables`".to_string()))
    }
    .await;
    logged("GET /admin/tables", result)
}

/// `GET /admin/get-columns?table=T`. An empty list is passed through: create
/// mode shows it as a type without columns, view mode refuses it.
pub async fn get_schema(record_type: &RecordType) -> Result<Vec<FieldSchema>, ApiError> {
    let result = async {
        let request = Request::get(&AdminEndpoint::Columns.url())
            .query([("table", record_type.as_str())]);
        let response = check(request.send().await?).await?;
        let body: ColumnsResponse = decode(response).await?;
        body.columns
            .ok_or_else(|| ApiError::Decode(NO_COLUMN_INFO.to_string()))
    }
    .await;
    logged(&format!("GET /admin/get-columns for {}", record_type), result)
}

/// `GET /admin/objects?table=T`. A body without `objects` is an empty list.
pub async fn list_records(record_type: &RecordType) -> Result<Vec<Record>, ApiError> {
    let result = async {
        let request = Request::get(&AdminEndpoint::Objects.url())
            .query([("table", record_type.as_str())]);
        let response = check(request.send().await?).await?;
        let body: ObjectsResponse = decode(response).await?;
        Ok::<_, ApiError>(body.objects.unwrap_or_default())
    }
    .await;
    logged(&format!("GET /admin/objects for {}", record_type), result)
}

/// `POST /admin/create`
pub async fn create(request: &MutationRequest) -> Result<(), ApiError> {
    let result = post(AdminEndpoint::Create, request).await;
    logged(&format!("POST /admin/create for {}", request.table_name), result)
}

/// `POST /admin/update`
pub async fn update(request: &MutationRequest) -> Result<(), ApiError> {
    let result = post(AdminEndpoint::Update, request).await;
    logged(&format!("POST /admin/update for {}", request.table_name), result)
}

/// `DELETE /admin/delete?table=T&id=ID`
pub async fn delete(record_type: &RecordType, id: &RecordId) -> Result<(), ApiError> {
    let result = async {
        let request = Request::delete(&AdminEndpoint::Delete.url())
            .query([("table", record_type.as_str()), ("id", id.as_str())]);
        check(request.send().await?).await?;
        Ok::<_, ApiError>(())
    }
    .await;
    logged(&format!("DELETE {} #{}", record_type, id), result)
}

async fn post(endpoint: AdminEndpoint, body: &MutationRequest) -> Result<(), ApiError> {
    let response = Request::post(&endpoint.url()).json(body)?.send().await?;
    check(response).await?;
    Ok(())
}
