//! CLI entry point: read a schedule file and print one result row per line.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shift_pricer::config::{RateTable, load_rate_table};
use shift_pricer::input::PatternValidator;
use shift_pricer::payroll::pay_lines;

const USAGE: &str = "\
Usage: shift-pricer [OPTIONS]

Options:
  -f, --file <PATH>   Schedule data file to read (default: pay_data.txt)
      --rates <PATH>  YAML rate table overriding the built-in rates
  -h, --help          Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<(), Box<dyn std::error::Error>> {
    let rates_path: Option<PathBuf> = args.opt_value_from_str("--rates")?;
    let file: PathBuf = args
        .opt_value_from_str(["-f", "--file"])?
        .unwrap_or_else(|| PathBuf::from("pay_data.txt"));

    let unexpected = args.finish();
    if !unexpected.is_empty() {
        return Err(format!("unexpected arguments: {unexpected:?}\n{USAGE}").into());
    }

    let rates = match &rates_path {
        Some(path) => {
            info!(path = %path.display(), "loading rate table");
            load_rate_table(path)?
        }
        None => RateTable::default(),
    };

    info!(file = %file.display(), "reading schedule data");
    let reader = BufReader::new(File::open(&file)?);
    for row in pay_lines(reader, &PatternValidator, &rates)? {
        println!("{row}");
    }

    Ok(())
}
