//! Health, readiness and version handlers.

use crate::state::AppState;
use crate::store::LayerStore;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    layers: Option<usize>,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    match state.store.list_layers().await {
        Ok(layers) => Ok(Json(ReadyBody {
            status: "ok",
            layers: Some(layers.len()),
        })),
        Err(err) => {
            tracing::error!(error = %err, "store unavailable");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "degraded",
                    layers: None,
                }),
            ))
        }
    }
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
