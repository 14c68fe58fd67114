use kurbo::{BezPath, PathEl, Rect, Shape};

use crate::Result;
use crate::model::IconDefinition;

/// Parts of the badge outline, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Frame,
    V,
    S,
}

impl Glyph {
    pub const ORDER: [Glyph; 3] = [Glyph::Frame, Glyph::V, Glyph::S];
}

/// The badge outline parsed into view box coordinates.
pub fn outline() -> Result<BezPath> {
    Ok(BezPath::from_svg(IconDefinition::MATCHUP.outline)?)
}

/// The outline split at each move-to, tagged with the glyph it draws.
pub fn subpaths() -> Result<Vec<(Glyph, BezPath)>> {
    let mut parts: Vec<BezPath> = Vec::new();

    for el in outline()?.elements() {
        if matches!(el, PathEl::MoveTo(_)) || parts.is_empty() {
            parts.push(BezPath::new());
        }
        if let Some(current) = parts.last_mut() {
            current.push(*el);
        }
    }

    Ok(Glyph::ORDER.into_iter().zip(parts).collect())
}

/// Bounding box of the whole outline.
pub fn bounds() -> Result<Rect> {
    Ok(outline()?.bounding_box())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < EPS
    }

    #[test]
    fn outline_splits_into_frame_v_and_s() {
        let parts = subpaths().unwrap();
        let glyphs: Vec<Glyph> = parts.iter().map(|(g, _)| *g).collect();
        assert_eq!(glyphs, Glyph::ORDER);

        let starts: Vec<Point> = parts
            .iter()
            .map(|(_, path)| match path.elements()[0] {
                PathEl::MoveTo(p) => p,
                other => panic!("subpath starts with {other:?}"),
            })
            .collect();
        assert!(close(starts[0], Point::new(52.0, 2.0)));
        assert!(close(starts[1], Point::new(23.23, 44.365)));
        assert!(close(starts[2], Point::new(51.383, 42.77)));
    }

    #[test]
    fn v_glyph_uses_straight_segments_only() {
        let parts = subpaths().unwrap();
        let (_, v) = &parts[1];
        assert!(
            v.elements()
                .iter()
                .all(|el| matches!(el, PathEl::MoveTo(_) | PathEl::LineTo(_)))
        );
    }

    #[test]
    fn s_glyph_is_curve_based() {
        let parts = subpaths().unwrap();
        let (_, s) = &parts[2];
        let curves = s
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::CurveTo(..)))
            .count();
        assert!(curves > 10);
    }

    #[test]
    fn bad_path_data_keeps_the_parser_error() {
        let err = BezPath::from_svg("M1 2 L x").unwrap_err();
        assert!(matches!(crate::Error::from(err), crate::Error::Path(_)));
    }

    #[test]
    fn frame_bounds_the_outline() {
        let rect = bounds().unwrap();
        assert!((rect.x0 - 2.0).abs() < EPS);
        assert!((rect.y0 - 2.0).abs() < EPS);
        assert!((rect.x1 - 62.0).abs() < EPS);
        assert!((rect.y1 - 62.0).abs() < EPS);

        let view_box = IconDefinition::MATCHUP.view_box.to_rect();
        assert_eq!(rect.intersect(view_box), rect);
    }
}
