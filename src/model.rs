//! Layer entity and the fixed seed set.

use crate::scalar::DateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    /// `#RRGGBB` by convention; not validated.
    pub color: Option<String>,
    pub last_modified: DateTime,
}

impl Layer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, visible: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible,
            color: None,
            last_modified: DateTime::now(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_last_modified(mut self, at: DateTime) -> Self {
        self.last_modified = at;
        self
    }
}

/// Layers present at startup, all stamped with `at`.
pub fn seed_layers(at: DateTime) -> Vec<Layer> {
    vec![
        Layer::new("1", "Layer 1", true)
            .with_color("#FF0000")
            .with_last_modified(at),
        Layer::new("2", "Layer 2", false)
            .with_color("#00FF00")
            .with_last_modified(at),
    ]
}
