mod config;
mod error;
mod generator;
mod model;
mod renderer;
mod utils;

pub use error::{Error, Result};
pub use generator::{Glyph, bounds, export_svg, outline, subpaths};
pub use model::{IconDefinition, RenderOptions, VectorDocument, ViewBox};
pub use renderer::{render, render_default};

use crate::config::parse_definition;
use crate::generator::render_module;
use crate::model::Definition;
use crate::utils::{extract_hash, module_file_path};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Build-script helper that renders the badge from a TOML definition and
/// writes it out as a Rust module of constants.
pub struct MatchupIcon {
    path: PathBuf,
    output_dir: PathBuf,

    definition: Definition,
    hash: String,
}

impl MatchupIcon {
    pub fn builder(path: impl AsRef<Path>) -> MatchupIcon {
        let path = path.as_ref().to_path_buf();
        MatchupIcon {
            path,
            output_dir: PathBuf::from("src"),
            definition: Default::default(),
            hash: Default::default(),
        }
    }

    pub fn set_output_dir(&mut self, output_dir: impl AsRef<Path>) -> &mut Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Generate the module unless it already carries the current hash.
    /// Returns the module path either way.
    pub fn build(&mut self) -> Result<PathBuf> {
        let (definition, hash) = parse_definition(&self.path)?;
        self.definition = definition;
        self.hash = hash;

        let module_path = module_file_path(&self.output_dir, &self.definition.module);
        if self.up_to_date(&module_path) {
            debug!(path = %module_path.display(), "matchup icon module up to date");
            return Ok(module_path);
        }

        self.generate(&module_path)?;
        Ok(module_path)
    }

    /// Badge rendered with the style loaded by the last `build`.
    pub fn document(&self) -> VectorDocument {
        render(&self.definition.style)
    }

    fn up_to_date(&self, module_path: &Path) -> bool {
        matches!(extract_hash(module_path), Some(existing) if existing == self.hash)
    }

    fn generate(&self, module_path: &Path) -> Result<()> {
        let rendered = render_module(&self.document(), &self.hash)?;

        if let Some(parent) = module_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(module_path, rendered)?;
        info!(path = %module_path.display(), hash = %self.hash, "generated matchup icon module");
        Ok(())
    }
}
