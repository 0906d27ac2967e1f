use anyhow::{Context, Result};
use clap::Parser;
use mksymbols::{
    Config, FontStyle, Generator, IconSet, SubsetError, SystemCommandRunner, TracingReporter,
};
use mksymbols_common::FILTER_SPEC;
use std::{io, path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};

/// Generates a self-contained stylesheet for a subset of Material Symbols.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The style to subset: outlined, rounded or sharp.
    #[arg(short, long, value_parser = parse_style)]
    style: FontStyle,

    /// The icons to include, by ligature name.
    #[arg(required = true)]
    icons: Vec<String>,

    /// The configuration file to use instead of `mksymbols.toml`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The directory holding the source fonts and generated files.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Skip checking for the source fonts before subsetting.
    #[arg(long)]
    skip_ensure: bool,

    /// Whether to enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_style(style: &str) -> Result<FontStyle, String> {
    style
        .parse()
        .map_err(|_| format!("unknown style '{style}' (expected outlined, rounded or sharp)"))
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(assets_dir) = &args.assets_dir {
        config.set_assets_dir(assets_dir)?;
    }

    if !args.skip_ensure {
        let report = mksymbols::ensure(&config, &TracingReporter)
            .context("Could not prepare the assets directory")?;
        if report.is_complete() {
            info!("Source fonts are in place.");
        } else if let Some(descriptor) = &report.descriptor {
            warn!(
                "Some source fonts are missing. Download them with `{} -i {}`.",
                config.download_tool,
                descriptor.display()
            );
        }
    }

    let icons = IconSet::new(args.icons)?;
    let generator = Generator::from_config(&config, SystemCommandRunner, TracingReporter);
    let files = generator.generate(args.style, &icons).map_err(|err| {
        if let SubsetError::SubsetTool { stdout, stderr, .. } = &err {
            for line in stdout.lines().chain(stderr.lines()) {
                error!("{}: {line}", config.subset_tool);
            }
        }
        err
    })?;
    let document = &files.document;
    info!(
        "Stylesheet for {} [{}] uses class '.{}'.",
        document.style(),
        document.icons(),
        document.class_name()
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { FILTER_SPEC } else { "info" })
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
