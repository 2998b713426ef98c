//! Multi-color generators: gradients and color families.
//!
//! A gradient is a list of independently sampled colors chained through one
//! outer stream, so a single top-level seed reproduces the whole list.
//!
//! A family is one random HSL anchor plus members perturbed from that
//! anchor's hue, saturation, and lightness. Every member is derived from
//! the anchor itself, never from a previous member, so members do not drift.

use crate::color::{hsl_to_rgb, ColorFormat, ColorValue, Hsla};
use crate::options::{FamilyOptions, GradientOptions};
use crate::prng::{EntropyProvider, RandomSource, Seed};
use crate::sample::{sample_color, sample_hsl_parts, sample_integer};
use tracing::debug;

/// Maps an outer-stream draw in `[0, 1)` to the 32-bit seed that produced it.
fn substream_seed(x: f64) -> Seed {
    (x * 4_294_967_296.0) as Seed
}

/// Generates `options.count` independently sampled colors.
///
/// One outer stream is opened from `options.seed` (or the ambient source);
/// each element draws one value from it and uses that as its own seed.
/// `count == 0` yields an empty list.
pub fn generate_gradient<P: EntropyProvider + ?Sized>(
    options: &GradientOptions,
    entropy: &P,
) -> Vec<ColorValue> {
    let mut outer = entropy.stream(options.seed);
    let colors: Vec<ColorValue> = (0..options.count)
        .map(|_| {
            let seed = substream_seed(outer.next_f64());
            sample_color(&options.element(seed), entropy)
        })
        .collect();
    debug!(
        count = colors.len(),
        format = %options.format,
        seed = ?options.seed,
        "generated gradient"
    );
    colors
}

/// One derived family member, before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyMember {
    /// Degrees in `[0, 360)`.
    pub hue: i64,
    /// Percent in `[0, 100]`.
    pub saturation: i64,
    /// Percent in `[0, 100]`.
    pub lightness: i64,
}

impl FamilyMember {
    /// Perturbs `anchor` by one draw each of hue, saturation, and lightness.
    ///
    /// Hue wraps into `[0, 360)`; saturation and lightness clamp to `[0, 100]`.
    pub fn perturb<R: RandomSource + ?Sized>(
        anchor: (i64, i64, i64),
        options: &FamilyOptions,
        rng: &mut R,
    ) -> Self {
        let (hue, saturation, lightness) = anchor;
        let mut delta = |range: i64| sample_integer(range.saturating_neg(), range, rng);
        let dh = delta(options.hue_range);
        let ds = delta(options.saturation_range);
        let dl = delta(options.lightness_range);
        Self {
            hue: hue.saturating_add(dh).rem_euclid(360),
            saturation: saturation.saturating_add(ds).clamp(0, 100),
            lightness: lightness.saturating_add(dl).clamp(0, 100),
        }
    }

    /// Renders the member in `format`.
    pub fn render(self, format: ColorFormat) -> ColorValue {
        match format {
            ColorFormat::Hsl => ColorValue::new(format!(
                "hsl({}, {}%, {}%)",
                self.hue, self.saturation, self.lightness
            )),
            other => hsl_to_rgb(Hsla {
                h: self.hue as f64,
                s: self.saturation as f64 / 100.0,
                l: self.lightness as f64 / 100.0,
                a: 1.0,
            })
            .render(other, false),
        }
    }
}

/// Generates a color family of `options.count` colors.
///
/// Element 0 is a random HSL anchor sampled exactly as a seeded `hsl`
/// random color would be, re-encoded into `options.format`. The remaining
/// `count - 1` members are perturbations of the anchor drawn from a second
/// stream built from the same seed. `count == 0` yields an empty list.
pub fn generate_color_family<P: EntropyProvider + ?Sized>(
    options: &FamilyOptions,
    entropy: &P,
) -> Vec<ColorValue> {
    if options.count == 0 {
        return Vec::new();
    }
    let anchor = sample_hsl_parts(options.alpha, &mut entropy.stream(options.seed));
    let mut rng = entropy.stream(options.seed);

    let mut family = Vec::with_capacity(options.count);
    family.push(match options.format {
        ColorFormat::Hsl => anchor.to_value(),
        other => anchor.to_rgba().render(other, options.alpha),
    });
    let triplet = (anchor.hue, anchor.saturation, anchor.lightness);
    family.extend(
        (1..options.count)
            .map(|_| FamilyMember::perturb(triplet, options, &mut rng).render(options.format)),
    );
    debug!(
        count = family.len(),
        anchor = %anchor,
        format = %options.format,
        seed = ?options.seed,
        "generated color family"
    );
    family
}
