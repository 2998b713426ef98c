#![deny(unsafe_code)]
//! CLI binary for colorkit.
//!
//! Subcommands:
//! - `random` / `gradient` / `family` — seeded or ambient color generation
//! - `scheme` — template scheme around a base color
//! - `contrast` — verify or repair WCAG contrast between two colors
//! - `lighten` / `darken` / `saturate` / `desaturate` — tonal adjustments
//! - `name` — nearest CSS color name
//! - `convert` — re-encode a color string

mod error;

use clap::{Args, Parser, Subcommand};
use colorkit_core::{
    Adjustment, ColorFormat, ColorValue, ContrastOptions, FamilyOptions, GradientOptions,
    RandomColorOptions, SchemeKind, SchemeOptions, Seed, Toolkit,
};
use error::CliError;
use serde::de::DeserializeOwned;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colorkit", about = "Seeded color generation and contrast tooling")]
struct Cli {
    /// Output as JSON instead of one color per line.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by the generators.
#[derive(Args)]
struct GenerateArgs {
    /// Output format (hex, rgb, hsl).
    #[arg(short, long, default_value = "hex")]
    format: ColorFormat,

    /// Seed for reproducible output; omit for a random result.
    #[arg(long)]
    seed: Option<Seed>,

    /// Append a random alpha channel (rgb/hsl only).
    #[arg(long)]
    alpha: bool,

    /// Full options object as JSON; replaces all other flags.
    #[arg(long)]
    options: Option<String>,
}

/// Channel bounds for rgb output.
#[derive(Args)]
struct BoundsArgs {
    /// Lowest channel value.
    #[arg(long, default_value_t = 0)]
    min: i64,

    /// Highest channel value.
    #[arg(long, default_value_t = 255)]
    max: i64,
}

#[derive(Args)]
struct AdjustArgs {
    /// Color in any supported encoding.
    color: String,

    /// Relative amount, e.g. 0.2 for 20%.
    amount: f64,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one random color.
    Random {
        #[command(flatten)]
        common: GenerateArgs,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Generate a reproducible list of random colors.
    Gradient {
        #[command(flatten)]
        common: GenerateArgs,
        #[command(flatten)]
        bounds: BoundsArgs,
        /// Number of colors.
        #[arg(short, long, default_value_t = 2)]
        count: usize,
    },
    /// Generate a random anchor color and its perturbed relatives.
    Family {
        #[command(flatten)]
        common: GenerateArgs,
        /// Family size including the anchor.
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        /// Maximum hue perturbation in degrees.
        #[arg(long, default_value_t = 30)]
        hue_range: i64,
        /// Maximum saturation perturbation in percent points.
        #[arg(long, default_value_t = 20)]
        saturation_range: i64,
        /// Maximum lightness perturbation in percent points.
        #[arg(long, default_value_t = 20)]
        lightness_range: i64,
    },
    /// Derive a template color scheme from a base color.
    Scheme {
        /// Base color in any supported encoding.
        base_color: String,
        /// Scheme template.
        #[arg(short, long, default_value = "complementary")]
        scheme: SchemeKind,
        /// Output format (hex, rgb, hsl).
        #[arg(short, long, default_value = "hex")]
        format: ColorFormat,
        /// Render rgba/hsla encodings.
        #[arg(long)]
        alpha: bool,
    },
    /// Ensure two colors meet a WCAG contrast ratio.
    Contrast {
        color1: String,
        color2: String,
        /// Minimum contrast ratio.
        #[arg(short, long, default_value_t = 4.5)]
        ratio: f64,
        /// Output format (hex, rgb, hsl).
        #[arg(short, long, default_value = "hex")]
        format: ColorFormat,
    },
    /// Raise lightness by a fraction of its value.
    Lighten(AdjustArgs),
    /// Lower lightness by a fraction of its value.
    Darken(AdjustArgs),
    /// Raise saturation by a fraction of its value.
    Saturate(AdjustArgs),
    /// Lower saturation by a fraction of its value.
    Desaturate(AdjustArgs),
    /// Print the nearest CSS color name.
    Name { color: String },
    /// Re-encode a color string.
    Convert {
        color: String,
        /// Output format (hex, rgb, hsl).
        #[arg(short, long, default_value = "hex")]
        format: ColorFormat,
        /// Replace the alpha channel.
        #[arg(long)]
        alpha: Option<f64>,
    },
}

/// Parses `--options` JSON when given, otherwise keeps the flag-built value.
fn options_or<T: DeserializeOwned>(json: Option<&str>, from_flags: T) -> Result<T, CliError> {
    match json {
        Some(json) => serde_json::from_str(json)
            .map_err(|e| CliError::Input(format!("invalid --options JSON: {e}"))),
        None => Ok(from_flags),
    }
}

fn print_colors(json: bool, colors: &[ColorValue]) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(colors)?);
    } else {
        for color in colors {
            println!("{color}");
        }
    }
    Ok(())
}

fn adjust(
    kit: &Toolkit,
    adjustment: Adjustment,
    args: &AdjustArgs,
) -> Result<Vec<ColorValue>, CliError> {
    Ok(vec![kit.adjust(adjustment, &args.color, args.amount)?])
}

fn run(cli: Cli) -> Result<(), CliError> {
    let kit: Toolkit = Toolkit::default();
    let colors = match cli.command {
        Command::Random { common, bounds } => {
            let options = options_or(
                common.options.as_deref(),
                RandomColorOptions {
                    format: common.format,
                    min: bounds.min,
                    max: bounds.max,
                    alpha: common.alpha,
                    seed: common.seed,
                },
            )?;
            vec![kit.generate_random_color(&options)]
        }
        Command::Gradient {
            common,
            bounds,
            count,
        } => {
            let options = options_or(
                common.options.as_deref(),
                GradientOptions {
                    format: common.format,
                    count,
                    min: bounds.min,
                    max: bounds.max,
                    alpha: common.alpha,
                    seed: common.seed,
                },
            )?;
            kit.generate_random_gradient_colors(&options)
        }
        Command::Family {
            common,
            count,
            hue_range,
            saturation_range,
            lightness_range,
        } => {
            let options = options_or(
                common.options.as_deref(),
                FamilyOptions {
                    format: common.format,
                    count,
                    alpha: common.alpha,
                    seed: common.seed,
                    hue_range,
                    saturation_range,
                    lightness_range,
                },
            )?;
            kit.generate_random_color_family(&options)
        }
        Command::Scheme {
            base_color,
            scheme,
            format,
            alpha,
        } => kit.generate_color_scheme(&SchemeOptions {
            base_color,
            format,
            scheme,
            alpha,
        })?,
        Command::Contrast {
            color1,
            color2,
            ratio,
            format,
        } => {
            let [background, foreground] = kit.ensure_color_contrast(&ContrastOptions {
                color1,
                color2,
                format,
                contrast_ratio: ratio,
            })?;
            if cli.json {
                let info = serde_json::json!({
                    "background": background,
                    "foreground": foreground,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
                return Ok(());
            }
            vec![background, foreground]
        }
        Command::Lighten(args) => adjust(&kit, Adjustment::Lighten, &args)?,
        Command::Darken(args) => adjust(&kit, Adjustment::Darken, &args)?,
        Command::Saturate(args) => adjust(&kit, Adjustment::Saturate, &args)?,
        Command::Desaturate(args) => adjust(&kit, Adjustment::Desaturate, &args)?,
        Command::Name { color } => {
            let name = kit.get_color_name(&color)?;
            if cli.json {
                let info = serde_json::json!({ "color": color, "name": name });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{name}");
            }
            return Ok(());
        }
        Command::Convert {
            color,
            format,
            alpha,
        } => vec![kit.convert(&color, format, alpha)?],
    };

    print_colors(cli.json, &colors)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    tracing::debug!(json = json_mode, "colorkit starting");
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_random_with_seed_and_format() {
        let cli = Cli::try_parse_from(["colorkit", "random", "--seed", "1", "-f", "rgb"]).unwrap();
        match cli.command {
            Command::Random { common, bounds } => {
                assert_eq!(common.seed, Some(1));
                assert_eq!(common.format, ColorFormat::Rgb);
                assert_eq!((bounds.min, bounds.max), (0, 255));
            }
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["colorkit", "random", "-f", "cmyk"]).is_err());
    }

    #[test]
    fn parses_scheme_alias() {
        let cli = Cli::try_parse_from(["colorkit", "scheme", "#336699", "-s", "triade"]).unwrap();
        match cli.command {
            Command::Scheme { scheme, .. } => assert_eq!(scheme, SchemeKind::Triadic),
            _ => panic!("expected scheme"),
        }
    }

    #[test]
    fn options_json_replaces_flags() {
        let options = options_or(
            Some(r#"{"count": 4, "seed": 3}"#),
            GradientOptions::default(),
        )
        .ok()
        .unwrap();
        assert_eq!(options.count, 4);
        assert_eq!(options.seed, Some(3));
    }

    #[test]
    fn bad_options_json_is_an_input_error() {
        let err = options_or::<GradientOptions>(Some("{nope"), GradientOptions::default())
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn run_reports_color_errors() {
        let cli = Cli::try_parse_from(["colorkit", "name", "#nothex"]).unwrap();
        let err = run(cli).err().unwrap();
        assert_eq!(err.exit_code(), 10);
    }
}
