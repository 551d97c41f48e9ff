//! GraphQL over HTTP: single or batched POST requests, plus the GraphiQL page.

use crate::error::AppError;
use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql::{BatchRequest, BatchResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};

/// Executes a single request or a batch; field errors stay inside the GraphQL response.
pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, AppError> {
    let Json(batch) = payload.map_err(|e| AppError::BadInput(e.body_text()))?;
    let operations = match &batch {
        BatchRequest::Single(_) => 1,
        BatchRequest::Batch(requests) => requests.len(),
    };
    tracing::debug!(operations, "graphql request");
    Ok(Json(state.schema.execute_batch(batch).await))
}

pub fn graphiql_page(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}
