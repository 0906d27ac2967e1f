//! Checking that the source fonts are available before subsetting.

use crate::{
    assets::{AssetLocator, FontAsset},
    config::Config,
    download::download_descriptor,
};
use anyhow::*;
use mksymbols_common::{
    paths::{find_executable, path_to_string},
    report::{Label, Reporter},
};
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// What [`ensure`] found and did.
#[derive(Debug, Clone, Default)]
pub struct EnsureReport {
    /// Whether the assets directory had to be created.
    pub created_assets_dir: bool,
    /// Where the download tool was found, if anywhere.
    pub download_tool: Option<PathBuf>,
    pub missing: Vec<FontAsset>,
    /// The download descriptor written for the missing fonts.
    pub descriptor: Option<PathBuf>,
}
impl EnsureReport {
    /// Whether the download tool was found and every source font is present.
    ///
    /// When the download tool is missing the fonts are not checked, so this is `false`.
    pub fn is_complete(&self) -> bool {
        self.download_tool.is_some() && self.missing.is_empty()
    }
}

/// Prepares the assets directory, looking up the download tool on `PATH`.
pub fn ensure(config: &Config, reporter: &impl Reporter) -> Result<EnsureReport> {
    ensure_with(config, reporter, find_executable)
}

/// Prepares the assets directory.
///
/// Creates the directory if needed and, if any source fonts are missing, writes a download
/// descriptor for them. Nothing is downloaded here.
pub fn ensure_with(
    config: &Config,
    reporter: &impl Reporter,
    find_tool: impl Fn(&str) -> Option<PathBuf>,
) -> Result<EnsureReport> {
    let mut report = EnsureReport::default();
    let assets_dir = &config.assets_dir;
    reporter.report(Label::Ensure, &path_to_string(assets_dir));

    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir)
            .with_context(|| format!("Could not create {}", assets_dir.display()))?;
        reporter.report(Label::Create, &path_to_string(assets_dir));
        report.created_assets_dir = true;
    } else if !assets_dir.is_dir() {
        bail!("{} exists but is not a directory", assets_dir.display());
    }

    report.download_tool = find_tool(&config.download_tool);
    let Some(tool) = &report.download_tool else {
        warn!("Executable not found: {}", config.download_tool);
        return Ok(report);
    };
    info!("Found {} at {}", config.download_tool, tool.display());

    let locator = AssetLocator::new(assets_dir);
    report.missing = locator.assets().into_iter().filter(|x| !x.exists()).collect();
    if report.missing.is_empty() {
        info!("All source fonts are present.");
        return Ok(report);
    }

    for asset in &report.missing {
        reporter.report(Label::Missing, &path_to_string(&asset.path));
    }
    let styles: Vec<_> = report.missing.iter().map(|x| x.style).collect();
    let descriptor = download_descriptor(&config.download_url_prefix, assets_dir, &styles)?;
    fs::write(&config.descriptor_path, descriptor)
        .with_context(|| format!("Could not write {}", config.descriptor_path.display()))?;
    reporter.report(Label::Write, &path_to_string(&config.descriptor_path));
    report.descriptor = Some(config.descriptor_path.clone());

    Ok(report)
}
