//! Invoking the external subsetting tool.

use crate::{
    error::{Result, SubsetError},
    style::IconSet,
};
use mksymbols_common::process::{CommandLine, CommandOutput, CommandRunner};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::info;

/// The font format requested from the subsetting tool. Stylesheets embed it as woff2.
pub const FLAVOR: &str = "woff2";

/// The prefix of the line the subsetting tool prints when it succeeds.
pub const RESULT_PREFIX: &str = "Wrote subset to ";

/// A subset font produced by the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetResult {
    pub status: i32,
    pub path: PathBuf,
}

/// Runs the external subsetting tool against a source font.
#[derive(Debug, Clone)]
pub struct SubsetInvoker<R> {
    runner: R,
    tool: OsString,
}
impl<R: CommandRunner> SubsetInvoker<R> {
    pub fn new(runner: R, tool: impl Into<OsString>) -> Self {
        SubsetInvoker { runner, tool: tool.into() }
    }

    /// Returns the argument vector used to subset `font_path`.
    pub fn command_line(&self, font_path: &Path, icons: &IconSet) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(4 + icons.len());
        argv.push(self.tool.clone());
        argv.push("--flavor".into());
        argv.push(FLAVOR.into());
        argv.push(font_path.into());
        argv.extend(icons.names().iter().map(OsString::from));
        argv
    }

    /// Subsets `font_path` down to the given icons, blocking until the tool exits.
    ///
    /// Anything the tool leaves on disk is kept even when this fails.
    pub fn run(&self, font_path: &Path, icons: &IconSet) -> Result<SubsetResult> {
        let argv = self.command_line(font_path, icons);
        info!("{}", CommandLine(&argv));

        let output = self.runner.run(&argv).map_err(|err| SubsetError::SubsetTool {
            status: None,
            stdout: String::new(),
            stderr: String::new(),
            reason: format!("could not run {:?}: {err:#}", self.tool),
        })?;

        let Some(status) = output.status.filter(|_| output.success()) else {
            return Err(tool_error(output, "tool exited unsuccessfully".to_string()));
        };
        let Some(path) = parse_result_path(&output.stdout) else {
            return Err(tool_error(output, "output did not name a subset font".to_string()));
        };
        if !path.is_file() {
            let reason = format!("reported output {} does not exist", path.display());
            return Err(tool_error(output, reason));
        }

        Ok(SubsetResult { status, path })
    }
}

fn tool_error(output: CommandOutput, reason: String) -> SubsetError {
    SubsetError::SubsetTool {
        status: output.status,
        stdout: output.stdout,
        stderr: output.stderr,
        reason,
    }
}

/// Extracts the output path from the subsetting tool's standard output.
pub fn parse_result_path(stdout: &str) -> Option<PathBuf> {
    stdout
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(RESULT_PREFIX))
        .map(str::trim)
        .find(|path| !path.is_empty())
        .map(PathBuf::from)
}
