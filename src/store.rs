//! Layer storage. The in-memory store owns every layer; callers only see clones.

use crate::error::AppError;
use crate::model::{seed_layers, Layer};
use crate::scalar::DateTime;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;

#[async_trait]
pub trait LayerStore: Send + Sync {
    /// All layers in insertion order.
    async fn list_layers(&self) -> Result<Vec<Layer>, AppError>;

    /// Flip `visible` on the layer with `id` and stamp `last_modified`.
    async fn toggle_visibility(&self, id: &str) -> Result<Layer, AppError>;
}

pub struct InMemoryLayerStore {
    layers: RwLock<Vec<Layer>>,
}

impl InMemoryLayerStore {
    /// Store seeded with the default layers, stamped now.
    pub fn new() -> Self {
        Self {
            layers: RwLock::new(seed_layers(DateTime::now())),
        }
    }

    pub fn with_layers(layers: Vec<Layer>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for layer in &layers {
            if !seen.insert(layer.id.as_str()) {
                return Err(AppError::DuplicateLayer(layer.id.clone()));
            }
        }
        Ok(Self {
            layers: RwLock::new(layers),
        })
    }
}

impl Default for InMemoryLayerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LayerStore for InMemoryLayerStore {
    async fn list_layers(&self) -> Result<Vec<Layer>, AppError> {
        let guard = self.layers.read().map_err(|_| AppError::StateLock)?;
        Ok(guard.clone())
    }

    async fn toggle_visibility(&self, id: &str) -> Result<Layer, AppError> {
        // Held across lookup and update so concurrent toggles each flip once.
        let mut guard = self.layers.write().map_err(|_| AppError::StateLock)?;
        let Some(layer) = guard.iter_mut().find(|l| l.id == id) else {
            tracing::warn!(id = %id, "toggle on unknown layer");
            return Err(AppError::LayerNotFound { id: id.to_string() });
        };
        let now = DateTime::now();
        layer.visible = !layer.visible;
        layer.last_modified = if now > layer.last_modified {
            now
        } else {
            layer.last_modified.next_tick()
        };
        tracing::debug!(id = %id, visible = layer.visible, last_modified = %layer.last_modified, "layer toggled");
        Ok(layer.clone())
    }
}
