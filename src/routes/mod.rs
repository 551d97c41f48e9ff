mod common;
mod graphql;

pub use common::common_routes;
pub use graphql::graphql_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: GraphQL endpoint and common routes with body limit and tracing.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(graphql_routes(state.clone(), &config.graphql_path, config.graphiql))
        .merge(common_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(RequestBodyLimitLayer::new(config.body_limit))
        .layer(TraceLayer::new_for_http())
}
