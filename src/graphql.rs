//! GraphQL schema: `Layer` object, `layers` query and `toggleLayerVisibility` mutation.

use crate::model::Layer;
use crate::scalar::DateTime;
use crate::store::LayerStore;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Result, Schema, ID};
use std::sync::Arc;

pub type LayerSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handle injected as schema data.
pub type SharedStore = Arc<dyn LayerStore>;

pub fn build_schema(store: SharedStore) -> LayerSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

#[Object]
impl Layer {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn visible(&self) -> bool {
        self.visible
    }

    async fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    async fn last_modified(&self) -> Option<DateTime> {
        Some(self.last_modified)
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn layers(&self, ctx: &Context<'_>) -> Result<Vec<Layer>> {
        store(ctx)?.list_layers().await.map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn toggle_layer_visibility(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Layer>> {
        store(ctx)?
            .toggle_visibility(&id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }
}
