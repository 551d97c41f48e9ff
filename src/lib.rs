//! Layer Graph: GraphQL API over an in-memory collection of canvas layers.

pub mod config;
pub mod error;
pub mod graphql;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod scalar;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use graphql::{build_schema, LayerSchema, SharedStore};
pub use model::{seed_layers, Layer};
pub use routes::{app, common_routes, graphql_routes};
pub use scalar::DateTime;
pub use state::AppState;
pub use store::{InMemoryLayerStore, LayerStore};
pub use telemetry::init_tracing;
