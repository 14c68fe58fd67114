use std::{fmt, fs, path::Path};

use tracing::info;

use crate::Result;
use crate::model::VectorDocument;
use crate::utils::fmt_number;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escape the characters that would break a double-quoted attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn write_svg(f: &mut fmt::Formatter<'_>, doc: &VectorDocument) -> fmt::Result {
    write!(
        f,
        r#"<svg xmlns="{}" x="0px" y="0px" width="{}px" height="{}px" viewBox="{}" fill="{}"><path d="{}"/></svg>"#,
        SVG_NS,
        fmt_number(doc.width),
        fmt_number(doc.height),
        doc.view_box,
        escape_attr(&doc.fill),
        doc.path_data,
    )
}

/// Write the document as a standalone `.svg` file, creating parent
/// directories as needed.
pub fn export_svg(doc: &VectorDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, doc.to_markup())?;
    info!(path = %path.display(), "exported matchup icon");
    Ok(())
}
