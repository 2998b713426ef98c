//! Relative tonal adjustments in HSL space.
//!
//! Each adjustment scales lightness or saturation by a fraction of its
//! current value (`l + l * amount` for lighten), so black never lightens
//! and gray never saturates. Results are clamped to [0, 1].

use crate::color::{detect_format, hsl_to_rgb, rgb_to_hsl, ColorFormat, ColorValue, Hsla, Rgba};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// One of the four tonal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    Lighten,
    Darken,
    Saturate,
    Desaturate,
}

impl Adjustment {
    /// Applies the adjustment to an HSL color.
    pub fn apply(self, c: Hsla, amount: f64) -> Hsla {
        match self {
            Adjustment::Lighten => Hsla {
                l: scale(c.l, amount),
                ..c
            },
            Adjustment::Darken => Hsla {
                l: scale(c.l, -amount),
                ..c
            },
            Adjustment::Saturate => Hsla {
                s: scale(c.s, amount),
                ..c
            },
            Adjustment::Desaturate => Hsla {
                s: scale(c.s, -amount),
                ..c
            },
        }
    }

    /// Parses `color`, applies the adjustment, and renders the result in the
    /// input's own encoding (hex for names).
    pub fn apply_str(self, color: &str, amount: f64) -> Result<ColorValue, ColorError> {
        let rgba = Rgba::parse(color)?;
        let format = detect_format(color).unwrap_or(ColorFormat::Hex);
        Ok(hsl_to_rgb(self.apply(rgb_to_hsl(rgba), amount)).render(format, false))
    }
}

fn scale(v: f64, amount: f64) -> f64 {
    (v + v * amount).clamp(0.0, 1.0)
}

/// Raises lightness by `amount` of its current value.
pub fn lighten(color: &str, amount: f64) -> Result<ColorValue, ColorError> {
    Adjustment::Lighten.apply_str(color, amount)
}

/// Lowers lightness by `amount` of its current value.
pub fn darken(color: &str, amount: f64) -> Result<ColorValue, ColorError> {
    Adjustment::Darken.apply_str(color, amount)
}

/// Raises saturation by `amount` of its current value.
pub fn saturate(color: &str, amount: f64) -> Result<ColorValue, ColorError> {
    Adjustment::Saturate.apply_str(color, amount)
}

/// Lowers saturation by `amount` of its current value.
pub fn desaturate(color: &str, amount: f64) -> Result<ColorValue, ColorError> {
    Adjustment::Desaturate.apply_str(color, amount)
}
