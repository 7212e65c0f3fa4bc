mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    // a second init (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_micros()
        .try_init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Bars(a) => handlers::bars(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Colors => handlers::colors(),
        parse::Command::Examples => handlers::examples(),
    }
}
