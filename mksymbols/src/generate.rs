use crate::{
    assets::AssetLocator,
    config::Config,
    error::{Result, SubsetError},
    style::{FontStyle, IconSet},
    stylesheet::StylesheetDocument,
    subset::SubsetInvoker,
};
use mksymbols_common::{
    paths::path_to_string,
    process::CommandRunner,
    report::{format_size, Label, Reporter},
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// The files produced by a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub subset_font: PathBuf,
    pub stylesheet: PathBuf,
    pub document: StylesheetDocument,
}

/// Runs the whole pipeline: locate the source font, subset it, and write the stylesheet.
#[derive(Debug, Clone)]
pub struct Generator<R, P> {
    locator: AssetLocator,
    invoker: SubsetInvoker<R>,
    reporter: P,
}
impl<R: CommandRunner, P: Reporter> Generator<R, P> {
    pub fn new(locator: AssetLocator, invoker: SubsetInvoker<R>, reporter: P) -> Self {
        Generator { locator, invoker, reporter }
    }

    pub fn from_config(config: &Config, runner: R, reporter: P) -> Self {
        let invoker = SubsetInvoker::new(runner, &config.subset_tool);
        Generator::new(AssetLocator::new(&config.assets_dir), invoker, reporter)
    }

    /// Subsets the source font for `style` and writes a stylesheet embedding the result.
    pub fn generate(&self, style: FontStyle, icons: &IconSet) -> Result<GeneratedFiles> {
        let asset = self.locator.require(style)?;
        debug!("Using source font {}", asset.path.display());

        let subset = self.invoker.run(&asset.path, icons)?;
        debug!("Subsetting tool exited with status {}.", subset.status);
        self.report_written(&subset.path)?;

        let document = StylesheetDocument::build(style, icons, &subset.path)?;
        let stylesheet = self.locator.assets_dir().join(document.file_name());
        fs::write(&stylesheet, document.css()).map_err(SubsetError::io(&stylesheet))?;
        self.report_written(&stylesheet)?;

        Ok(GeneratedFiles { subset_font: subset.path, stylesheet, document })
    }

    fn report_written(&self, path: &Path) -> Result<()> {
        let size = fs::metadata(path).map_err(SubsetError::io(path))?.len();
        let message = format!("{} [{}]", path_to_string(path), format_size(size));
        self.reporter.report(Label::Write, &message);
        Ok(())
    }
}
