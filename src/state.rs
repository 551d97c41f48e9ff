//! Shared application state for all routes. The schema holds its own handle to the store.

use crate::graphql::{build_schema, LayerSchema, SharedStore};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub schema: LayerSchema,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        let schema = build_schema(store.clone());
        Self { store, schema }
    }
}
