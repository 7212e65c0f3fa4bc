use std::{io::Write, time::Instant};

use log::debug;

use crate::{
    core::{
        bounds::{chart_width, terminal_width},
        color::{AnsiCode, NAMED, colorize},
        config::{Config, OutOfRange},
        data::{Samples, read_csv_from_path},
        error::GraphError,
        rng::Lcg,
    },
    render::{Layout, Section, bin, bin_sums, quantize, render},
};

use super::parse::{BarsArgs, CsvArgs, DemoArgs, StyleArgs};

/// Levels of the parabola shown first by `demo`.
const PARABOLA: [usize; 20] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 36, 32, 28, 24, 20, 16, 12, 8, 4,
];

impl StyleArgs {
    fn section(&self, title: impl Into<String>) -> Result<Section, GraphError> {
        let layout = if self.boxed {
            Layout::Boxed
        } else {
            Layout::Titled
        };
        Ok(Section::new(title)
            .color(AnsiCode::from_name(&self.color)?)
            .layout(layout))
    }
}

fn print(section: &Section, chart: &str) -> Result<(), GraphError> {
    let mut out = std::io::stdout().lock();
    section.write_to(&mut out, chart)?;
    Ok(())
}

pub fn csv(a: &CsvArgs) -> Result<(), GraphError> {
    let section = a.style.section(a.title.as_str())?;

    let t_ingest = Instant::now();
    let samples = read_csv_from_path(&a.file)?;
    debug!(
        "CSV ingest: {} µs   ({} samples)",
        t_ingest.elapsed().as_micros(),
        samples.len()
    );

    let width = a.width.unwrap_or_else(|| chart_width(terminal_width()));
    let policy = if a.strict {
        OutOfRange::Reject
    } else {
        OutOfRange::Drop
    };
    let cfg = Config::builder(width, a.height)
        .x_min_opt(a.x_min)
        .x_max_opt(a.x_max)
        .y_max_opt(a.y_max)
        .out_of_range(policy)
        .build()?;

    let t_bin = Instant::now();
    let sums = bin_sums(&samples.x, &samples.y, &cfg)?;
    debug!("bin sums: {sums:?}");
    let levels = quantize(&sums, cfg.height(), cfg.y_max());
    debug!("binning: {} µs", t_bin.elapsed().as_micros());

    let t_render = Instant::now();
    let chart = render(&levels, cfg.height());
    debug!("render: {} µs", t_render.elapsed().as_micros());

    print(&section, &chart)
}

pub fn bars(a: &BarsArgs) -> Result<(), GraphError> {
    let section = a.style.section(a.title.as_str())?;
    print(&section, &render(&a.levels, a.height))
}

/// Histogram of one demo distribution, printed as its own section.
fn demo_histogram(
    style: &StyleArgs,
    title: &str,
    samples: &Samples,
    cfg: &Config,
) -> Result<(), GraphError> {
    let t0 = Instant::now();
    let levels = bin(&samples.x, &samples.y, cfg)?;
    let chart = render(&levels, cfg.height());
    debug!("{title}: {} samples in {} µs", samples.len(), t0.elapsed().as_micros());
    print(&style.section(title)?, &chart)
}

pub fn demo(a: &DemoArgs) -> Result<(), GraphError> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    let unit = Config::builder(a.width, a.height)
        .x_range(0.0..=1.0)
        .build()?;

    writeln!(
        std::io::stdout().lock(),
        "{}\n",
        colorize(&AnsiCode::bold(), "Block Histogram Demos")
    )?;

    print(
        &a.style.section("1. BarChart - Parabolic curve")?,
        &render(&PARABOLA, 5),
    )?;

    let uniform = Samples::unweighted((0..a.samples).map(|_| rng.uniform()).collect());
    demo_histogram(
        &a.style,
        "2. Histogram - Uniform distribution [0, 1]",
        &uniform,
        &unit,
    )?;

    let normal = Samples::unweighted((0..a.samples).map(|_| rng.randn()).collect());
    let wide = Config::builder(a.width, a.height)
        .x_range(-4.0..=4.0)
        .build()?;
    demo_histogram(&a.style, "3. Histogram - Normal distribution", &normal, &wide)?;

    let mut weighted = Samples::with_capacity(a.weighted_samples);
    for _ in 0..a.weighted_samples {
        let x = rng.uniform();
        weighted.push(x, f64::from(rng.int_inclusive(1, 10)));
    }
    demo_histogram(
        &a.style,
        "4. Histogram - Weighted random data",
        &weighted,
        &unit,
    )
}

/// Pretty-print available color names + an example hex code.
pub fn colors() -> Result<(), GraphError> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "\nPossible colors:")?;
    for (name, seq) in NAMED {
        writeln!(out, "{}", colorize(&AnsiCode::Static(seq), name))?;
    }
    writeln!(out, "plain  (terminal default)")?;
    writeln!(
        out,
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    )?;
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() -> Result<(), GraphError> {
    let exe = "block-histogram";
    writeln!(
        std::io::stdout().lock(),
        "
Example invocations
-------------------
• Demo charts      : {exe} demo
• Seeded demo      : {exe} demo --seed 42 --width 60 --height 10
• CSV histogram    : {exe} csv samples.csv --title \"Latency (ms)\"
• Fixed x window   : {exe} csv samples.csv --x-min 0 --x-max 250
• Reject outliers  : {exe} csv samples.csv --x-min 0 --x-max 250 --strict
• Shared y-scale   : {exe} csv before.csv --y-max 500 && {exe} csv after.csv --y-max 500
• From stdin       : seq 1 100 | {exe} csv - --width 20
• Bar chart        : {exe} bars 0,4,8,12,16,12,8,4 --height 2
• Colored + boxed  : {exe} demo --color #6048c1 --boxed
• Diagnostics      : {exe} --debug csv samples.csv
"
    )?;
    Ok(())
}
