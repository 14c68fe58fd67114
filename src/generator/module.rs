use handlebars::Handlebars;
use serde_json::json;

use crate::Result;
use crate::model::VectorDocument;

const MODULE_TEMPLATE: &str = include_str!("../../templates/matchup.rs.hbs");

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "f64::NAN".to_string()
    } else if value == f64::INFINITY {
        "f64::INFINITY".to_string()
    } else if value == f64::NEG_INFINITY {
        "f64::NEG_INFINITY".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Rust source for a module embedding `doc`, tagged with `hash`.
pub(crate) fn render_module(doc: &VectorDocument, hash: &str) -> Result<String> {
    let data = json!({
        "icon_hash": hash,
        "width": float_literal(doc.width),
        "height": float_literal(doc.height),
        "fill": format!("{:?}", doc.fill),
        "svg": format!("{:?}", doc.to_markup()),
    });

    let handlebars = Handlebars::new();
    Ok(handlebars.render_template(MODULE_TEMPLATE, &data)?)
}
