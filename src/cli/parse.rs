use clap::{Args, Parser, Subcommand, builder::RangedU64ValueParser};

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT};

/// Heights from 1 to `MAX_HEIGHT` rows.
fn height_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_HEIGHT as u64)
}

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "block-histogram",
    about = "Weighted histograms and bar charts drawn with Unicode block glyphs"
)]
pub struct Cli {
    /// Log binning and timing diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Histogram of `x[,weight]` samples from a CSV file
    Csv(CsvArgs),
    /// Bar chart of levels given on the command line
    Bars(BarsArgs),
    /// Random uniform, normal and weighted histograms
    Demo(DemoArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// Title, colour and layout shared by every chart-printing command.
#[derive(Args, Debug)]
pub struct StyleArgs {
    /// Color (name, `#RRGGBB` or `plain`)
    #[arg(long, default_value = "plain")]
    pub color: String,

    /// Draw a border around the chart
    #[arg(long)]
    pub boxed: bool,
}

/// `block-histogram csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Chart title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Number of bins (terminal width if omitted)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = height_parser())]
    pub height: usize,

    /// Fixed top of the y-scale, for comparing several charts (tallest bin if omitted)
    #[arg(long)]
    pub y_max: Option<f64>,

    /// X-axis lower bound (data minimum if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub x_min: Option<f64>,
    /// X-axis upper bound (data maximum if omitted)
    #[arg(long, allow_hyphen_values = true)]
    pub x_max: Option<f64>,

    /// Fail on samples outside the x-range instead of dropping them
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// `block-histogram bars …`
#[derive(Parser, Debug)]
pub struct BarsArgs {
    /// Comma-separated levels, 8 per row of height
    #[arg(value_name = "LEVELS", value_delimiter = ',', required = true)]
    pub levels: Vec<usize>,

    /// Chart title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = height_parser())]
    pub height: usize,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// `block-histogram demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Samples drawn for the uniform and normal histograms
    #[arg(long, default_value_t = 10_000)]
    pub samples: usize,
    /// Samples drawn for the weighted histogram
    #[arg(long, default_value_t = 1_000)]
    pub weighted_samples: usize,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = height_parser())]
    pub height: usize,
    /// RNG seed (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn csv_accepts_negative_bounds() {
        let cli = Cli::try_parse_from([
            "block-histogram",
            "csv",
            "data.csv",
            "--x-min",
            "-4",
            "--x-max",
            "4",
            "--strict",
        ])
        .unwrap();
        let Command::Csv(a) = cli.cmd else {
            panic!("expected csv");
        };
        assert_eq!(a.file, "data.csv");
        assert_eq!(a.x_min, Some(-4.0));
        assert_eq!(a.x_max, Some(4.0));
        assert!(a.strict);
        assert_eq!(a.width, None);
        assert_eq!(a.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn bars_splits_on_commas() {
        let cli = Cli::try_parse_from([
            "block-histogram",
            "--debug",
            "bars",
            "0,4,8",
            "--height",
            "2",
        ])
        .unwrap();
        assert!(cli.debug);
        let Command::Bars(a) = cli.cmd else {
            panic!("expected bars");
        };
        assert_eq!(a.levels, vec![0, 4, 8]);
        assert_eq!(a.height, 2);
        assert_eq!(a.style.color, "plain");
    }

    #[test]
    fn heights_outside_the_supported_range_are_refused() {
        for h in ["0", "4097", "18446744073709551615"] {
            assert!(
                Cli::try_parse_from(["block-histogram", "bars", "8", "--height", h]).is_err(),
                "height {h}"
            );
        }
        let cli = Cli::try_parse_from(["block-histogram", "bars", "8", "--height", "4096"]).unwrap();
        let Command::Bars(a) = cli.cmd else {
            panic!("expected bars");
        };
        assert_eq!(a.height, MAX_HEIGHT);
    }

    #[test]
    fn csv_takes_a_fixed_y_max() {
        let cli = Cli::try_parse_from(["block-histogram", "csv", "-", "--y-max", "250"]).unwrap();
        let Command::Csv(a) = cli.cmd else {
            panic!("expected csv");
        };
        assert_eq!(a.y_max, Some(250.0));
    }

    #[test]
    fn bars_needs_levels() {
        assert!(Cli::try_parse_from(["block-histogram", "bars"]).is_err());
    }

    #[test]
    fn demo_defaults() {
        let cli = Cli::try_parse_from(["block-histogram", "demo", "--seed", "7"]).unwrap();
        let Command::Demo(a) = cli.cmd else {
            panic!("expected demo");
        };
        assert_eq!(a.samples, 10_000);
        assert_eq!(a.weighted_samples, 1_000);
        assert_eq!((a.width, a.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(a.seed, Some(7));
    }
}
