//! The public operation surface.
//!
//! [`Toolkit`] bundles the two injectable collaborators, the ambient
//! entropy used for unseeded calls and the scheme-template service, and
//! exposes every operation as a method. The free functions at the bottom
//! use `Toolkit::default()` (thread entropy, hue-wheel schemes).

use crate::adjust::Adjustment;
use crate::color::{convert, ColorFormat, ColorValue};
use crate::contrast::ensure_contrast;
use crate::error::ColorError;
use crate::names;
use crate::options::{
    ContrastOptions, FamilyOptions, GradientOptions, RandomColorOptions, SchemeOptions,
};
use crate::prng::{EntropyProvider, ThreadEntropy};
use crate::sample::sample_color;
use crate::scheme::{generate_scheme, HueWheel, SchemeProvider};
use crate::sequence::{generate_color_family, generate_gradient};

/// Color operations with an injected entropy provider and scheme service.
#[derive(Debug, Clone, Default)]
pub struct Toolkit<P = ThreadEntropy, S = HueWheel> {
    entropy: P,
    schemes: S,
}

impl<P: EntropyProvider> Toolkit<P, HueWheel> {
    /// Toolkit with a custom entropy provider and the default scheme service.
    pub fn with_entropy(entropy: P) -> Self {
        Self {
            entropy,
            schemes: HueWheel,
        }
    }
}

impl<P: EntropyProvider, S: SchemeProvider> Toolkit<P, S> {
    /// Toolkit with both collaborators supplied.
    pub fn new(entropy: P, schemes: S) -> Self {
        Self { entropy, schemes }
    }

    /// The entropy provider used for unseeded calls.
    pub fn entropy(&self) -> &P {
        &self.entropy
    }

    /// One random color.
    pub fn generate_random_color(&self, options: &RandomColorOptions) -> ColorValue {
        sample_color(options, &self.entropy)
    }

    /// A reproducible list of independently sampled colors.
    pub fn generate_random_gradient_colors(&self, options: &GradientOptions) -> Vec<ColorValue> {
        generate_gradient(options, &self.entropy)
    }

    /// A random anchor color and its perturbed relatives.
    pub fn generate_random_color_family(&self, options: &FamilyOptions) -> Vec<ColorValue> {
        generate_color_family(options, &self.entropy)
    }

    /// A template scheme around `options.base_color`.
    pub fn generate_color_scheme(
        &self,
        options: &SchemeOptions,
    ) -> Result<Vec<ColorValue>, ColorError> {
        generate_scheme(options, &self.schemes)
    }

    /// Verifies or repairs the contrast between two colors.
    pub fn ensure_color_contrast(
        &self,
        options: &ContrastOptions,
    ) -> Result<[ColorValue; 2], ColorError> {
        ensure_contrast(options)
    }

    /// Applies a tonal adjustment, keeping the input's encoding.
    pub fn adjust(
        &self,
        adjustment: Adjustment,
        color: &str,
        amount: f64,
    ) -> Result<ColorValue, ColorError> {
        adjustment.apply_str(color, amount)
    }

    /// Nearest CSS color name.
    pub fn get_color_name(&self, color: &str) -> Result<&'static str, ColorError> {
        names::get_color_name(color)
    }

    /// Re-encodes a color string, optionally replacing its alpha.
    pub fn convert(
        &self,
        color: &str,
        format: ColorFormat,
        alpha: Option<f64>,
    ) -> Result<ColorValue, ColorError> {
        convert(color, format, alpha)
    }
}

/// One random color, using thread entropy when unseeded.
pub fn generate_random_color(options: &RandomColorOptions) -> ColorValue {
    Toolkit::<ThreadEntropy, HueWheel>::default().generate_random_color(options)
}

/// A gradient, using thread entropy when unseeded.
pub fn generate_random_gradient_colors(options: &GradientOptions) -> Vec<ColorValue> {
    Toolkit::<ThreadEntropy, HueWheel>::default().generate_random_gradient_colors(options)
}

/// A color family, using thread entropy when unseeded.
pub fn generate_random_color_family(options: &FamilyOptions) -> Vec<ColorValue> {
    Toolkit::<ThreadEntropy, HueWheel>::default().generate_random_color_family(options)
}

/// A scheme from the hue-wheel service.
pub fn generate_color_scheme(options: &SchemeOptions) -> Result<Vec<ColorValue>, ColorError> {
    Toolkit::<ThreadEntropy, HueWheel>::default().generate_color_scheme(options)
}

/// Verifies or repairs the contrast between two colors.
pub fn ensure_color_contrast(options: &ContrastOptions) -> Result<[ColorValue; 2], ColorError> {
    ensure_contrast(options)
}
