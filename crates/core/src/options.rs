//! Per-operation option structs.
//!
//! Every field has the default listed on its doc comment. All structs
//! deserialize from camelCase JSON with missing keys filled from those
//! defaults, so `{"seed": 7}` is a complete gradient request.

use crate::color::ColorFormat;
use crate::prng::Seed;
use crate::scheme::SchemeKind;
use serde::{Deserialize, Serialize};

/// Default WCAG contrast threshold (AA for normal text).
pub const DEFAULT_CONTRAST_RATIO: f64 = 4.5;

/// Options for a single random color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomColorOptions {
    /// Output encoding. Default `hex`.
    pub format: ColorFormat,
    /// Lower channel bound for `rgb`. Default 0.
    pub min: i64,
    /// Upper channel bound for `rgb`. Default 255.
    pub max: i64,
    /// Append a random alpha to `rgb`/`hsl` output. Default false.
    pub alpha: bool,
    /// Deterministic seed; `None` draws from the ambient source.
    pub seed: Option<Seed>,
}

impl Default for RandomColorOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::Hex,
            min: 0,
            max: 255,
            alpha: false,
            seed: None,
        }
    }
}

/// Options for a sequence of independently sampled colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientOptions {
    pub format: ColorFormat,
    /// Number of colors. Default 2.
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub alpha: bool,
    pub seed: Option<Seed>,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::Hex,
            count: 2,
            min: 0,
            max: 255,
            alpha: false,
            seed: None,
        }
    }
}

impl GradientOptions {
    /// Options for one element of the gradient, seeded with `seed`.
    pub(crate) fn element(&self, seed: Seed) -> RandomColorOptions {
        RandomColorOptions {
            format: self.format,
            min: self.min,
            max: self.max,
            alpha: self.alpha,
            seed: Some(seed),
        }
    }
}

/// Options for a color family anchored on one random HSL color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FamilyOptions {
    pub format: ColorFormat,
    /// Family size including the anchor. Default 5.
    pub count: usize,
    pub alpha: bool,
    pub seed: Option<Seed>,
    /// Maximum hue perturbation in degrees, either direction. Default 30.
    pub hue_range: i64,
    /// Maximum saturation perturbation in percent points. Default 20.
    pub saturation_range: i64,
    /// Maximum lightness perturbation in percent points. Default 20.
    pub lightness_range: i64,
}

impl Default for FamilyOptions {
    fn default() -> Self {
        Self {
            format: ColorFormat::Hex,
            count: 5,
            alpha: false,
            seed: None,
            hue_range: 30,
            saturation_range: 20,
            lightness_range: 20,
        }
    }
}

/// Options for a template color scheme around a base color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeOptions {
    pub base_color: String,
    #[serde(default)]
    pub format: ColorFormat,
    /// Default `complementary`.
    #[serde(default)]
    pub scheme: SchemeKind,
    /// Render alpha-bearing encodings. Default false.
    #[serde(default)]
    pub alpha: bool,
}

impl SchemeOptions {
    /// Complementary hex scheme around `base_color`.
    pub fn new(base_color: impl Into<String>) -> Self {
        Self {
            base_color: base_color.into(),
            format: ColorFormat::Hex,
            scheme: SchemeKind::default(),
            alpha: false,
        }
    }
}

/// Options for contrast enforcement between two colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastOptions {
    pub color1: String,
    pub color2: String,
    #[serde(default)]
    pub format: ColorFormat,
    /// Minimum WCAG ratio. Default 4.5.
    #[serde(default = "default_contrast_ratio")]
    pub contrast_ratio: f64,
}

impl ContrastOptions {
    /// Hex output at the default 4.5:1 threshold.
    pub fn new(color1: impl Into<String>, color2: impl Into<String>) -> Self {
        Self {
            color1: color1.into(),
            color2: color2.into(),
            format: ColorFormat::Hex,
            contrast_ratio: DEFAULT_CONTRAST_RATIO,
        }
    }
}

fn default_contrast_ratio() -> f64 {
    DEFAULT_CONTRAST_RATIO
}
