use serde::{Deserialize, Serialize};

use super::RenderOptions;

/// An embedding described by a config file: where the generated module goes
/// and which overrides it renders with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definition {
    pub module: String,
    #[serde(default)]
    pub style: RenderOptions,
}
