//! Layer server: seeds the in-memory store and serves the GraphQL API.
//!
//! Run from repo root: `cargo run -p layer-server`
//! Configure with HOST, PORT, GRAPHQL_PATH, GRAPHIQL, BODY_LIMIT_BYTES (or a `.env` file).

use layer_graph::{app, init_tracing, AppState, InMemoryLayerStore, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::load()?;
    init_tracing("layer_graph=info,layer_server=info");

    let state = AppState::new(Arc::new(InMemoryLayerStore::new()));
    let router = app(state, &config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("server ready at http://{}{}", addr, config.graphql_path);
    axum::serve(listener, router).await?;
    Ok(())
}
