mod geometry;
mod module;
mod svg;

pub use geometry::{Glyph, bounds, outline, subpaths};
pub(crate) use module::render_module;
pub use svg::export_svg;
pub(crate) use svg::write_svg;
