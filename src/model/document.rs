use std::fmt;

use sha2::{Digest, Sha256};

use super::ViewBox;
use crate::generator::write_svg;
use crate::utils::hex_upper;
use crate::Result;

/// A rendered badge. Owned by the caller; holds no link back to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub fill: String,
    pub path_data: &'static str,
}

impl VectorDocument {
    /// SVG markup of the document.
    pub fn to_markup(&self) -> String {
        self.to_string()
    }

    /// Upper-case hex SHA-256 of the markup.
    pub fn fingerprint(&self) -> String {
        hex_upper(Sha256::digest(self.to_markup().as_bytes()))
    }

    /// Parse the markup into a usvg tree for hosts that rasterize.
    pub fn to_tree(&self) -> Result<usvg::Tree> {
        let opt = usvg::Options::default();
        Ok(usvg::Tree::from_str(&self.to_markup(), &opt)?)
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_svg(f, self)
    }
}
