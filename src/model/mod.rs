mod definition;
mod document;
mod options;
mod style;
mod view_box;

pub use definition::IconDefinition;
pub use document::VectorDocument;
pub use options::RenderOptions;
pub(crate) use style::Definition;
pub use view_box::ViewBox;
