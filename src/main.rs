//!
//! relazioni binary
//! ----------------
//! Loads the dataset registry (embedded documents or a data directory) and
//! prints one mode's relation table, a single entity, or a per-mode summary.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use relazioni::cli::{self, CliOptions};
use relazioni::config::RegistryConfig;
use relazioni::error::{DatasetError, DatasetResult};
use relazioni::registry::{self, DatasetRegistry};

fn run(opts: &CliOptions) -> DatasetResult<String> {
    let config = RegistryConfig::from_env().with_data_dir(opts.data_dir.clone());
    let source = config.source();
    registry::install(DatasetRegistry::load(source.as_ref())?)?;
    cli::execute(opts, registry::datasets()?)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so table/JSON output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let program = std::env::args().next().unwrap_or_else(|| "relazioni".to_string());
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = cli::parse_args(&args).and_then(|opts| {
        if opts.help {
            return Ok(cli::usage(&program));
        }
        info!(target: "relazioni", "relazioni starting: mode={}, summary={}, json={}", opts.mode, opts.summary, opts.json);
        run(&opts)
    });

    match result {
        Ok(out) => {
            println!("{}", out);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            if matches!(e, DatasetError::UserInput { .. }) {
                eprintln!("{}", cli::usage(&program));
            }
            std::process::exit(e.exit_code());
        }
    }
}
