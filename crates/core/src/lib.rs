#![deny(unsafe_code)]
//! Core of colorkit: seeded color generation and accessibility tooling.
//!
//! Provides the `Mulberry32` PRNG and injectable ambient entropy, samplers
//! for hex/rgb/hsl colors, gradient and color-family generators, template
//! color schemes, WCAG contrast enforcement, tonal adjustments, nearest
//! CSS-name lookup, and the format converter tying the encodings together.

pub mod adjust;
pub mod color;
pub mod contrast;
pub mod error;
pub mod names;
pub mod options;
pub mod prng;
pub mod sample;
pub mod scheme;
pub mod sequence;
pub mod toolkit;

pub use adjust::{darken, desaturate, lighten, saturate, Adjustment};
pub use color::{convert, ColorFormat, ColorValue, Hsla, Rgba};
pub use contrast::{contrast_ratio, ensure_contrast};
pub use error::ColorError;
pub use names::get_color_name;
pub use options::{
    ContrastOptions, FamilyOptions, GradientOptions, RandomColorOptions, SchemeOptions,
};
pub use prng::{EntropyProvider, Mulberry32, RandomSource, Seed, SeededEntropy, ThreadEntropy};
pub use scheme::{HueWheel, SchemeKind, SchemeProvider};
pub use toolkit::{
    ensure_color_contrast, generate_color_scheme, generate_random_color,
    generate_random_color_family, generate_random_gradient_colors, Toolkit,
};
