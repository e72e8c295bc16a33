use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::Axis;

use rusty_tabular::{Dataset, Delimiter, LoadOptions};

/// Inspect a delimited numeric table: shape, intercept, first rows.
#[derive(Parser, Debug)]
#[command(name = "rusty-tabular", version, about)]
struct Args {
    /// Input file, one observation per line
    file: PathBuf,

    /// Column delimiter (literal text unless --pattern is given)
    #[arg(long, short, default_value = ",")]
    delimiter: String,

    /// Treat the delimiter as a regular expression
    #[arg(long)]
    pattern: bool,

    /// Prepend a constant 1.0 intercept column
    #[arg(long, short)]
    intercept: bool,

    /// Split the last column off as the target
    #[arg(long, short)]
    target: bool,

    /// JSON options file; overrides the flags above
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Number of rows to print
    #[arg(long, short = 'n', default_value_t = 5)]
    preview: usize,
}

impl Args {
    fn options(&self) -> Result<LoadOptions> {
        if let Some(path) = &self.config {
            return LoadOptions::from_json_file(path);
        }
        let delimiter = if self.pattern {
            Delimiter::pattern(&self.delimiter)
        } else {
            Delimiter::from(self.delimiter.as_str())
        };
        Ok(LoadOptions::new()
            .with_delimiter(delimiter)
            .with_intercept(self.intercept)
            .with_target(self.target))
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.options()?;
    log::info!("loading {} with {:?}", args.file.display(), options);

    let dataset = options
        .load_path(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;

    print_summary(&dataset, args.preview);
    Ok(())
}

fn print_summary(dataset: &Dataset, preview: usize) {
    println!(
        "features: {} rows x {} columns{}",
        dataset.n_rows(),
        dataset.n_features(),
        if dataset.intercept { " (column 0 = intercept)" } else { "" }
    );
    if let Some(target) = &dataset.target {
        println!("target:   {} rows x {} column", target.nrows(), target.ncols());
    }

    let shown = preview.min(dataset.n_rows());
    for (i, row) in dataset.features.axis_iter(Axis(0)).take(shown).enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
        match &dataset.target {
            Some(target) => println!("{i:>5}: {} | {:>10.4}", cells.join(" "), target[[i, 0]]),
            None => println!("{i:>5}: {}", cells.join(" ")),
        }
    }
    if dataset.n_rows() > shown {
        println!("  ... {} more rows", dataset.n_rows() - shown);
    }
}
