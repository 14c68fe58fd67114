/// Attribute form of a number: `44` rather than `44.0`, full precision kept.
pub(crate) fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
