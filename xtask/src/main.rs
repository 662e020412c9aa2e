// Copyright (C) 2024-2026 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! - `cargo xtask ci` runs clippy, rustdoc, rustfmt, the build, every test,
//!   and the sample runs
//! - `cargo xtask sample` generates labels from the files in `demos/` with
//!   the release CLI, in both layouts

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, path::Path, process::Output};

use cargo_metadata::{Metadata, MetadataCommand};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Directory holding the demo inputs, relative to the workspace root
const DEMO_DIR: &str = "demos";

/// Demo runs: input file, output file, extra CLI arguments
const SAMPLE_RUNS: [(&str, &str, &[&str]); 3] = [
    ("groups.json", "labels-long.csv", &["--layout", "long"]),
    ("groups.json", "labels-wide.csv", &["--layout", "wide"]),
    (
        "bays.txt",
        "labels-text.csv",
        &["--shelves", "A,B,C", "--bins", "4"],
    ),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run everything CI runs
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    Clippy {
        /// Apply suggested fixes
        #[arg(long)]
        fix: bool,
    },

    /// Build rustdoc for each workspace crate with warnings denied
    #[command(visible_alias = "d")]
    Docs,

    /// Run rustfmt on the nightly toolchain
    #[command(visible_alias = "fmt")]
    Format {
        /// Report unformatted files instead of rewriting them
        #[arg(long)]
        check: bool,
    },

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Write an lcov report to `target/lcov.info`
    #[command(visible_alias = "cov")]
    Coverage,

    /// Generate labels from the demo inputs
    #[command(visible_alias = "s")]
    Sample,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Clippy { fix } => clippy(fix),
            Self::Docs => docs(),
            Self::Format { check } => format(check),
            Self::Test => test(),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ]),
            Self::Sample => sample(),
        }
    }
}

/// Run everything CI runs, stopping at the first failure
fn ci() -> Result<()> {
    clippy(false)?;
    docs()?;
    format(true)?;
    Command::Build.run()?;
    test()?;
    sample()
}

/// Run clippy over every target, optionally applying fixes
fn clippy(fix: bool) -> Result<()> {
    let mut args: Vec<&str> = vec!["clippy", "--all-targets", "--all-features"];
    if fix {
        args.extend(["--fix", "--allow-dirty", "--allow-staged"]);
    }
    args.extend(["--", "-D", "warnings"]);
    run_cargo(&args)
}

/// Build rustdoc with docs.rs-equivalent flags
fn docs() -> Result<()> {
    for package in workspace_metadata()?.workspace_default_packages() {
        cmd!(
            "cargo",
            "doc",
            "--no-deps",
            "--all-features",
            "--package",
            package.name.as_str()
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }
    Ok(())
}

/// Run rustfmt through the nightly toolchain
fn format(check: bool) -> Result<()> {
    let mut args: Vec<&str> = vec!["fmt", "--all"];
    if check {
        args.push("--check");
    }
    cmd("cargo", args)
        // CARGO is set because we're running inside a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Run unit tests, then doc tests
fn test() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])?;
    run_cargo(&["test", "--doc", "--all-features"])
}

/// Run the CLI against each demo input, writing CSVs under `target/sample`
fn sample() -> Result<()> {
    let meta = workspace_metadata()?;
    let demos = meta.workspace_root.as_std_path().join(DEMO_DIR);
    let out_dir = meta.target_directory.as_std_path().join("sample");
    std::fs::create_dir_all(&out_dir).wrap_err("failed to create sample output directory")?;

    for (input, output, extra) in SAMPLE_RUNS {
        let output_path = out_dir.join(output);
        let duplicates_path = out_dir.join(format!("duplicates-{output}"));
        let mut args: Vec<String> = [
            "run",
            "--quiet",
            "--release",
            "--package",
            "bin-labels-cli",
            "--",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        args.extend(path_flag("--input", &demos.join(input)));
        args.extend(path_flag("--output", &output_path));
        args.extend(path_flag("--duplicates-output", &duplicates_path));
        args.extend(extra.iter().map(|arg| (*arg).to_string()));
        cmd("cargo", args).run_with_trace()?;
    }

    tracing::info!("sample output written to {}", out_dir.display());
    Ok(())
}

fn path_flag(flag: &str, path: &Path) -> [String; 2] {
    [flag.to_string(), path.display().to_string()]
}

fn workspace_metadata() -> Result<Metadata> {
    MetadataCommand::new()
        .no_deps()
        .exec()
        .wrap_err("failed to get cargo metadata")
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args.iter().copied()).run_with_trace()?;
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
