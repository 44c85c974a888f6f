//! Scribe CLI - turn JSON Lines rows into CSV

mod rows;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use scribe_csv::{CsvWriter, LineTerminator, QuoteStrategy, WriteOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scribe")]
#[command(author, version, about = "Streaming CSV writer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON Lines (one array of strings/nulls per line) to CSV
    Convert {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append to the output file instead of truncating it
        #[arg(short, long, requires = "output")]
        append: bool,

        /// JSON file with write options; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: OptionFlags,
    },
}

/// Write option flags, each overriding the defaults or the options file
#[derive(Args, Debug, Default)]
struct OptionFlags {
    /// Field separator (default: comma)
    #[arg(short = 'd', long)]
    separator: Option<char>,

    /// Quote character (default: double quote)
    #[arg(short, long)]
    quote: Option<char>,

    /// When to quote fields: required, always or empty
    #[arg(long)]
    quote_strategy: Option<QuoteStrategy>,

    /// Line terminator: lf, crlf, cr or platform
    #[arg(short, long)]
    terminator: Option<LineTerminator>,
}

impl OptionFlags {
    /// Replace every option that was given on the command line
    fn apply(&self, mut options: WriteOptions) -> WriteOptions {
        if let Some(separator) = self.separator {
            options.separator = separator;
        }
        if let Some(quote) = self.quote {
            options.quote = quote;
        }
        if let Some(strategy) = self.quote_strategy {
            options.quote_strategy = strategy;
        }
        if let Some(terminator) = self.terminator {
            options.line_terminator = terminator;
        }
        options
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            append,
            config,
            overrides,
        } => {
            let options = resolve_options(config.as_deref(), &overrides)?;
            convert(input.as_deref(), output.as_deref(), append, options)
        }
    }
}

/// Start from the options file (or the defaults) and apply the flags on top
fn resolve_options(config: Option<&Path>, overrides: &OptionFlags) -> Result<WriteOptions> {
    let options = match config {
        Some(path) => load_options(path)?,
        None => WriteOptions::default(),
    };
    Ok(overrides.apply(options))
}

fn load_options(path: &Path) -> Result<WriteOptions> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    let options = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid options file '{}'", path.display()))?;
    tracing::debug!("Loaded write options from {}", path.display());
    Ok(options)
}

fn convert(
    input: Option<&Path>,
    output: Option<&Path>,
    append: bool,
    options: WriteOptions,
) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    match output {
        Some(path) => {
            let mut writer = if append {
                CsvWriter::append(path, options)
            } else {
                CsvWriter::create(path, options)
            }
            .with_context(|| format!("Failed to open '{}'", path.display()))?;

            let rows = rows::copy_rows(reader, &mut writer)?;
            writer
                .close()
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = CsvWriter::new(stdout.lock(), options)
                .context("Invalid write options")?;
            rows::copy_rows(reader, &mut writer)?;
            writer.close().context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
