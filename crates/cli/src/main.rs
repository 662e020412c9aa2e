// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use bin_labels::{CoreError, DuplicatePolicy, Generation, GenerationRequest, generate};
use bin_labels_api::{
    ExportLayout, InputFormat, TextOptions, load_groups, parse_shelf_list, write_duplicates_csv,
    write_labels,
};
use bin_labels_domain::{BayGroup, DuplicateReport};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Bin Labels - derive warehouse bin labels from bay identifiers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the bay groups.
    #[arg(short, long)]
    input: PathBuf,

    /// Format of the input file. Detected from the extension when omitted.
    #[arg(long, value_enum)]
    input_format: Option<FormatArg>,

    /// Comma-separated shelf labels applied to every group of a text input.
    #[arg(short, long)]
    shelves: Option<String>,

    /// Bins on every shelf of a text input.
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    bins: i64,

    /// Refuse to generate labels while duplicate bay IDs exist.
    #[arg(long)]
    block_on_duplicate: bool,

    /// Shape of the label CSV.
    #[arg(long, value_enum, default_value_t = LayoutArg::Long)]
    layout: LayoutArg,

    /// Path of the label CSV. Written to stdout if not provided.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path of the duplicate report CSV.
    #[arg(long)]
    duplicates_output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for InputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Long,
    Wide,
}

impl From<LayoutArg> for ExportLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Long => Self::Long,
            LayoutArg::Wide => Self::Wide,
        }
    }
}

impl Args {
    fn input_format(&self) -> InputFormat {
        self.input_format
            .map_or_else(|| InputFormat::detect(&self.input), InputFormat::from)
    }

    fn text_options(&self) -> Option<TextOptions> {
        self.shelves.as_deref().map(|shelves| TextOptions {
            shelves: parse_shelf_list(shelves),
            bins_per_shelf: self.bins,
        })
    }

    const fn policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::from_block_flag(self.block_on_duplicate)
    }
}

fn create_output(path: &Path) -> std::io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}

fn write_duplicate_report(
    path: &Path,
    bay_duplicates: &DuplicateReport,
    bin_duplicates: &DuplicateReport,
) -> Result<(), Box<dyn std::error::Error>> {
    write_duplicates_csv(bay_duplicates, bin_duplicates, create_output(path)?)?;
    info!(path = %path.display(), "Wrote duplicate report");
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw: String = std::fs::read_to_string(&args.input)?;
    let format: InputFormat = args.input_format();
    let text_options: Option<TextOptions> = args.text_options();
    let groups: Vec<BayGroup> = load_groups(&raw, format, text_options.as_ref())?;
    info!(
        input = %args.input.display(),
        groups = groups.len(),
        "Loaded bay groups"
    );

    let request: GenerationRequest = GenerationRequest::new(groups, args.policy());
    let generation: Generation = match generate(&request) {
        Ok(generation) => generation,
        Err(CoreError::DuplicatesBlocked { report }) => {
            // Still hand the operator the report that stopped the run.
            if let Some(path) = &args.duplicates_output {
                write_duplicate_report(path, &report, &DuplicateReport::default())?;
            }
            return Err(CoreError::DuplicatesBlocked { report }.into());
        }
        Err(err) => return Err(err.into()),
    };

    let layout: ExportLayout = args.layout.into();
    match &args.output {
        Some(path) => {
            write_labels(&generation.rows, layout, create_output(path)?)?;
            info!(path = %path.display(), rows = generation.row_count(), "Wrote bin labels");
        }
        None => {
            let mut stdout: std::io::StdoutLock<'static> = std::io::stdout().lock();
            write_labels(&generation.rows, layout, &mut stdout)?;
            stdout.flush()?;
        }
    }

    if let Some(path) = &args.duplicates_output {
        write_duplicate_report(
            path,
            &generation.bay_duplicates,
            &generation.bin_duplicates,
        )?;
    }

    Ok(())
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
