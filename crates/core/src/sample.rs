//! Single-color samplers.
//!
//! Each sampler consumes draws from a [`RandomSource`] in a fixed order, so
//! a seeded stream always yields the same color string:
//!
//! - hex: six digit draws
//! - rgb: red, green, blue, then alpha if requested
//! - hsl: hue, saturation, lightness, then alpha if requested

use crate::color::{hsl_to_rgb, ColorFormat, ColorValue, Hsla, Rgba};
use crate::options::RandomColorOptions;
use crate::prng::{EntropyProvider, RandomSource};
use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Draws an integer uniformly from `[min, max]`, both inclusive.
///
/// `min > max` is a caller error: the result is then unspecified but the
/// call never panics.
pub fn sample_integer<R: RandomSource + ?Sized>(min: i64, max: i64, rng: &mut R) -> i64 {
    let span = max as f64 - min as f64 + 1.0;
    ((rng.next_f64() * span).floor() as i64).saturating_add(min)
}

/// Draws an alpha value rounded half-up to two decimals.
fn sample_alpha<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    // x * 100 is exact for Mulberry32 output, so the rounding is too.
    (rng.next_f64() * 100.0).round() / 100.0
}

/// Draws six independent uppercase hex digits: `#A08FF4`.
pub fn sample_hex<R: RandomSource + ?Sized>(rng: &mut R) -> ColorValue {
    let digits: String = (0..6)
        .map(|_| HEX_DIGITS[sample_integer(0, 15, rng) as usize % 16] as char)
        .collect();
    ColorValue::new(format!("#{digits}"))
}

/// Draws three channels in `[min, max]`, plus alpha when `alpha` is set.
pub fn sample_rgb<R: RandomSource + ?Sized>(
    min: i64,
    max: i64,
    alpha: bool,
    rng: &mut R,
) -> ColorValue {
    let red = sample_integer(min, max, rng);
    let green = sample_integer(min, max, rng);
    let blue = sample_integer(min, max, rng);
    let text = if alpha {
        let a = sample_alpha(rng);
        format!("rgba({red}, {green}, {blue}, {a:.2})")
    } else {
        format!("rgb({red}, {green}, {blue})")
    };
    ColorValue::new(text)
}

/// Integer HSL channels as drawn by [`sample_hsl_parts`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslSample {
    /// Degrees in `[0, 360]`.
    pub hue: i64,
    /// Percent in `[0, 100]`.
    pub saturation: i64,
    /// Percent in `[0, 100]`.
    pub lightness: i64,
    /// Two-decimal alpha, when requested.
    pub alpha: Option<f64>,
}

impl HslSample {
    /// Numeric RGBA for this sample, for re-encoding.
    pub fn to_rgba(self) -> Rgba {
        hsl_to_rgb(Hsla {
            h: self.hue as f64,
            s: self.saturation as f64 / 100.0,
            l: self.lightness as f64 / 100.0,
            a: self.alpha.unwrap_or(1.0),
        })
    }

    /// The sample rendered as `hsl(...)` / `hsla(...)`.
    pub fn to_value(self) -> ColorValue {
        ColorValue::new(self.to_string())
    }
}

impl fmt::Display for HslSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = (self.hue, self.saturation, self.lightness);
        match self.alpha {
            Some(a) => write!(f, "hsla({h}, {s}%, {l}%, {a:.2})"),
            None => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

/// Draws hue in `[0, 360]` and saturation/lightness in `[0, 100]`.
pub fn sample_hsl_parts<R: RandomSource + ?Sized>(alpha: bool, rng: &mut R) -> HslSample {
    let hue = sample_integer(0, 360, rng);
    let saturation = sample_integer(0, 100, rng);
    let lightness = sample_integer(0, 100, rng);
    HslSample {
        hue,
        saturation,
        lightness,
        alpha: alpha.then(|| sample_alpha(rng)),
    }
}

/// Draws a random `hsl(...)` color, plus alpha when `alpha` is set.
pub fn sample_hsl<R: RandomSource + ?Sized>(alpha: bool, rng: &mut R) -> ColorValue {
    sample_hsl_parts(alpha, rng).to_value()
}

/// Samples one color in the requested format from a fresh stream: seeded
/// when `options.seed` is set, ambient otherwise.
pub fn sample_color<P: EntropyProvider + ?Sized>(
    options: &RandomColorOptions,
    entropy: &P,
) -> ColorValue {
    let mut rng = entropy.stream(options.seed);
    match options.format {
        ColorFormat::Hex => sample_hex(&mut rng),
        ColorFormat::Rgb => sample_rgb(options.min, options.max, options.alpha, &mut rng),
        ColorFormat::Hsl => sample_hsl(options.alpha, &mut rng),
    }
}
