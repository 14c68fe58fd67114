use super::ViewBox;

/// Fixed description of a badge glyph: coordinate space, display size,
/// default tint and the baked outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconDefinition {
    pub view_box: ViewBox,
    pub intrinsic_size: (f64, f64),
    pub fill: &'static str,
    pub outline: &'static str,
}

impl IconDefinition {
    /// The "type matchup" badge: a rounded-square frame with a "V" and an
    /// "S" stroke layered on top.
    pub const MATCHUP: IconDefinition = IconDefinition {
        view_box: ViewBox::new(0.0, 0.0, 64.0, 64.0),
        intrinsic_size: (44.0, 32.0),
        fill: "rgb(141, 141, 141)",
        outline: MATCHUP_OUTLINE,
    };
}

const MATCHUP_OUTLINE: &str = concat!(
    "M52 2H12C6.477 2 2 6.477 2 12v40c0 5.523 4.477 10 10 10h40",
    "c5.523 0 10-4.477 10-10V12c0-5.523-4.477-10-10-10",
    "M23.23 44.365h-4.877L10 19.72h5.514l5.363 18.71l5.412-18.71h5.363L23.23 44.365",
    "m28.153-1.595C49.639 44.257 47.174 45 43.988 45c-3.252 0-5.809-.732-7.672-2.197",
    "c-1.863-1.467-2.795-3.481-2.795-6.045h4.928c.158 1.125.473 1.967.939 2.524",
    "c.855 1.016 2.322 1.521 4.398 1.521c1.242 0 2.252-.134 3.029-.401",
    "c1.471-.512 2.207-1.465 2.207-2.859c0-.813-.361-1.443-1.082-1.889",
    "c-.721-.436-1.865-.82-3.43-1.154l-2.674-.584c-2.629-.581-4.434-1.211-5.418-1.891",
    "c-1.664-1.136-2.496-2.915-2.496-5.334c0-2.207.813-4.04 2.441-5.501",
    "c1.629-1.46 4.021-2.19 7.178-2.19c2.635 0 4.883.688 6.742 2.065",
    "c1.861 1.376 2.836 3.375 2.928 5.994H48.25c-.092-1.482-.756-2.536-1.994-3.16",
    "c-.824-.412-1.85-.62-3.074-.62c-1.363 0-2.451.269-3.266.804",
    "c-.813.535-1.219 1.283-1.219 2.24c0 .881.4 1.539 1.203 1.975",
    "c.516.289 1.609.629 3.281 1.019l4.336 1.021c1.898.446 3.324 1.042 4.271 1.789",
    "C53.264 33.285 54 34.962 54 37.159c0 2.252-.871 4.121-2.617 5.611",
);
