use serde::{Deserialize, Serialize};

/// Caller overrides applied at render time. Every field is independent and
/// unset fields fall back to the icon definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub fill: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}
