use crate::model::{IconDefinition, RenderOptions, VectorDocument};

/// Project the matchup badge into a document, applying any overrides.
///
/// Never fails: values are passed through to the embedding environment
/// without inspection.
pub fn render(options: &RenderOptions) -> VectorDocument {
    let def = IconDefinition::MATCHUP;
    let (width, height) = def.intrinsic_size;

    VectorDocument {
        width: options.width.unwrap_or(width),
        height: options.height.unwrap_or(height),
        view_box: def.view_box,
        fill: options.fill.clone().unwrap_or_else(|| def.fill.to_string()),
        path_data: def.outline,
    }
}

pub fn render_default() -> VectorDocument {
    render(&RenderOptions::default())
}
