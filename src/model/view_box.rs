use std::fmt;

use crate::utils::fmt_number;

/// Internal coordinate space of a vector document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        ViewBox {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn to_rect(self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.min_x,
            self.min_y,
            self.min_x + self.width,
            self.min_y + self.height,
        )
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fmt_number(self.min_x),
            fmt_number(self.min_y),
            fmt_number(self.width),
            fmt_number(self.height)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_attribute_value() {
        assert_eq!(ViewBox::new(0.0, 0.0, 64.0, 64.0).to_string(), "0 0 64 64");
        assert_eq!(ViewBox::new(-1.5, 0.0, 24.0, 24.0).to_string(), "-1.5 0 24 24");
    }
}
