//! GraphQL endpoint. GET serves GraphiQL only when enabled.

use crate::handlers::graphql::{execute, graphiql_page};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn graphql_routes(state: AppState, path: &str, graphiql: bool) -> Router {
    let mut method_router = post(execute);
    if graphiql {
        let endpoint = path.to_string();
        method_router = method_router.get(move || {
            let endpoint = endpoint.clone();
            async move { graphiql_page(&endpoint) }
        });
    }
    Router::new().route(path, method_router).with_state(state)
}
