//! Template color schemes (complementary, triadic, ...) around a base color.
//!
//! Scheme generation is a pluggable service behind [`SchemeProvider`]. The
//! default [`HueWheel`] rotates the base color's HSL hue; hue rotation wraps
//! into [0, 360) so every template is well defined for any base.

use crate::color::{convert, hsl_to_rgb, rgb_to_hsl, ColorFormat, ColorValue, Hsla, Rgba};
use crate::error::ColorError;
use crate::options::SchemeOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which template to derive from the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeKind {
    /// Base and base+180.
    #[default]
    Complementary,
    /// Base-30, base, base+30.
    Analogous,
    /// Base, base+120, base+240.
    Triadic,
    /// Base, base+90, base+180, base+270.
    Tetradic,
    /// Base, base+150, base+210.
    SplitComplementary,
    /// The base hue at five lightness steps.
    Monochromatic,
}

impl SchemeKind {
    /// All scheme kinds, in display order.
    pub const ALL: [SchemeKind; 6] = [
        SchemeKind::Complementary,
        SchemeKind::Analogous,
        SchemeKind::Triadic,
        SchemeKind::Tetradic,
        SchemeKind::SplitComplementary,
        SchemeKind::Monochromatic,
    ];

    /// Returns the kebab-case name of this scheme.
    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Complementary => "complementary",
            SchemeKind::Analogous => "analogous",
            SchemeKind::Triadic => "triadic",
            SchemeKind::Tetradic => "tetradic",
            SchemeKind::SplitComplementary => "split-complementary",
            SchemeKind::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = ColorError;

    /// Accepts the kebab-case names plus the short template names
    /// (`contrast`, `analogic`, `triade`, `tetrade`, `mono`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" | "contrast" => Ok(SchemeKind::Complementary),
            "analogous" | "analogic" => Ok(SchemeKind::Analogous),
            "triadic" | "triade" => Ok(SchemeKind::Triadic),
            "tetradic" | "tetrade" => Ok(SchemeKind::Tetradic),
            "split-complementary" | "split_complementary" => Ok(SchemeKind::SplitComplementary),
            "monochromatic" | "mono" => Ok(SchemeKind::Monochromatic),
            other => Err(ColorError::UnknownScheme(other.to_string())),
        }
    }
}

/// External scheme-template service.
///
/// Returns raw color strings in any encoding the format converter parses;
/// [`generate_scheme`] normalizes them.
pub trait SchemeProvider {
    /// Derives the colors of `kind` around `base`.
    fn colors(&self, base: &str, kind: SchemeKind) -> Result<Vec<String>, ColorError>;
}

/// Default provider: rotates the base color around the HSL hue wheel.
#[derive(Debug, Clone, Copy, Default)]
pub struct HueWheel;

impl HueWheel {
    /// Lightness offsets for the monochromatic template.
    const MONO_STEPS: [f64; 5] = [-0.30, -0.15, 0.0, 0.15, 0.30];

    /// Derives the template as HSL colors.
    pub fn derive(base: Hsla, kind: SchemeKind) -> Vec<Hsla> {
        match kind {
            SchemeKind::Complementary => rotations(base, &[0.0, 180.0]),
            SchemeKind::Analogous => rotations(base, &[-30.0, 0.0, 30.0]),
            SchemeKind::Triadic => rotations(base, &[0.0, 120.0, 240.0]),
            SchemeKind::Tetradic => rotations(base, &[0.0, 90.0, 180.0, 270.0]),
            SchemeKind::SplitComplementary => rotations(base, &[0.0, 150.0, 210.0]),
            SchemeKind::Monochromatic => Self::MONO_STEPS
                .iter()
                .map(|step| Hsla {
                    l: (base.l + step).clamp(0.0, 1.0),
                    ..base
                })
                .collect(),
        }
    }
}

impl SchemeProvider for HueWheel {
    fn colors(&self, base: &str, kind: SchemeKind) -> Result<Vec<String>, ColorError> {
        let base = rgb_to_hsl(Rgba::parse(base)?);
        Ok(Self::derive(base, kind)
            .into_iter()
            .map(|c| hsl_to_rgb(c).to_hex())
            .collect())
    }
}

/// Base color rotated by each offset in degrees.
fn rotations(base: Hsla, offsets: &[f64]) -> Vec<Hsla> {
    offsets
        .iter()
        .map(|offset| Hsla {
            h: normalize_hue(base.h + offset),
            ..base
        })
        .collect()
}

/// Normalizes a hue angle to [0, 360).
fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Asks `provider` for the scheme and renders every color in
/// `options.format`. With `options.alpha` the alpha-bearing encodings are
/// used. Provider errors propagate unchanged.
pub fn generate_scheme<S: SchemeProvider + ?Sized>(
    options: &SchemeOptions,
    provider: &S,
) -> Result<Vec<ColorValue>, ColorError> {
    let raw = provider.colors(&options.base_color, options.scheme)?;
    let alpha = options.alpha.then_some(1.0);
    let colors = raw
        .iter()
        .map(|c| convert(c, options.format, alpha))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        base = %options.base_color,
        scheme = %options.scheme,
        count = colors.len(),
        "generated color scheme"
    );
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(base: &str, kind: SchemeKind) -> Vec<String> {
        HueWheel.colors(base, kind).unwrap()
    }

    #[test]
    fn kind_parses_names_and_aliases() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.name().parse::<SchemeKind>().unwrap(), kind);
        }
        assert_eq!("triade".parse::<SchemeKind>().unwrap(), SchemeKind::Triadic);
        assert_eq!("MONO".parse::<SchemeKind>().unwrap(), SchemeKind::Monochromatic);
        assert!(matches!(
            "pentadic".parse::<SchemeKind>(),
            Err(ColorError::UnknownScheme(_))
        ));
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SchemeKind::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
        assert_eq!(SchemeKind::default(), SchemeKind::Complementary);
    }

    #[test]
    fn complementary_of_red_is_cyan() {
        assert_eq!(scheme("#ff0000", SchemeKind::Complementary), ["#ff0000", "#00ffff"]);
    }

    #[test]
    fn triadic_of_red_is_rgb_primaries() {
        assert_eq!(
            scheme("#ff0000", SchemeKind::Triadic),
            ["#ff0000", "#00ff00", "#0000ff"]
        );
    }

    #[test]
    fn tetradic_has_four_colors_starting_at_base() {
        let colors = scheme("#ff0000", SchemeKind::Tetradic);
        assert_eq!(colors, ["#ff0000", "#80ff00", "#00ffff", "#7f00ff"]);
    }

    #[test]
    fn analogous_is_ordered_by_offset() {
        let colors = scheme("#ff0000", SchemeKind::Analogous);
        assert_eq!(colors, ["#ff0080", "#ff0000", "#ff8000"]);
    }

    #[test]
    fn split_complementary_flanks_the_complement() {
        let colors = scheme("hsl(0, 100%, 50%)", SchemeKind::SplitComplementary);
        assert_eq!(colors, ["#ff0000", "#00ff80", "#007fff"]);
    }

    #[test]
    fn monochromatic_keeps_hue_and_clamps_lightness() {
        let colors = scheme("#ffffff", SchemeKind::Monochromatic);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[2], "#ffffff");
        assert_eq!(colors[3], "#ffffff");
        assert_eq!(colors[4], "#ffffff");
        assert_eq!(colors[0], "#b3b3b3");
    }

    #[test]
    fn generate_scheme_renders_requested_format() {
        let options = SchemeOptions {
            format: ColorFormat::Rgb,
            ..SchemeOptions::new("#ff0000")
        };
        let colors = generate_scheme(&options, &HueWheel).unwrap();
        assert_eq!(colors[0].as_str(), "rgb(255, 0, 0)");
        assert_eq!(colors[1].as_str(), "rgb(0, 255, 255)");
    }

    #[test]
    fn generate_scheme_alpha_uses_alpha_encodings() {
        let options = SchemeOptions {
            format: ColorFormat::Hsl,
            alpha: true,
            ..SchemeOptions::new("#ff0000")
        };
        let colors = generate_scheme(&options, &HueWheel).unwrap();
        assert_eq!(colors[0].as_str(), "hsla(0, 100%, 50%, 1)");
    }

    #[test]
    fn invalid_base_propagates_error() {
        let result = generate_scheme(&SchemeOptions::new("#nothex"), &HueWheel);
        assert!(matches!(result, Err(ColorError::InvalidColor(_))));
    }

    struct Fixed(Vec<&'static str>);

    impl SchemeProvider for Fixed {
        fn colors(&self, _base: &str, _kind: SchemeKind) -> Result<Vec<String>, ColorError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    #[test]
    fn custom_provider_output_is_normalized() {
        let provider = Fixed(vec!["ABCDEF", "rgb(1, 2, 3)", "navy"]);
        let colors = generate_scheme(&SchemeOptions::new("#000000"), &provider).unwrap();
        let strs: Vec<&str> = colors.iter().map(ColorValue::as_str).collect();
        assert_eq!(strs, ["#abcdef", "#010203", "#000080"]);
    }

    #[test]
    fn custom_provider_bad_color_propagates() {
        let provider = Fixed(vec!["#000000", "bogus"]);
        assert!(generate_scheme(&SchemeOptions::new("#000000"), &provider).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rotations_preserve_saturation_and_lightness(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
            ) {
                let base = Hsla { h, s, l, a: 1.0 };
                for kind in SchemeKind::ALL {
                    let derived = HueWheel::derive(base, kind);
                    prop_assert!(derived.len() >= 2);
                    for c in derived {
                        prop_assert!((0.0..360.0).contains(&c.h), "hue {}", c.h);
                        if kind != SchemeKind::Monochromatic {
                            prop_assert_eq!(c.s, s);
                            prop_assert_eq!(c.l, l);
                        }
                    }
                }
            }
        }
    }
}
