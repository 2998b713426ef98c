//! Error types for colorkit.

use thiserror::Error;

/// Errors produced by color parsing, conversion, and contrast enforcement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A format name did not match any known encoding.
    #[error("unknown color format: {0} (expected hex, rgb, or hsl)")]
    UnknownFormat(String),

    /// A scheme name did not match any known scheme template.
    #[error("unknown color scheme: {0}")]
    UnknownScheme(String),

    /// The requested contrast ratio lies outside the WCAG range [1, 21].
    #[error("contrast ratio {requested} is unreachable: WCAG contrast lies in [1, 21]")]
    UnreachableContrast { requested: f64 },

    /// Lightening the foreground stopped before the requested ratio was met.
    #[error(
        "contrast ratio {requested} not achievable: best was {achieved:.2} after {steps} lightening steps"
    )]
    ContrastUnachievable {
        requested: f64,
        achieved: f64,
        steps: usize,
    },
}
