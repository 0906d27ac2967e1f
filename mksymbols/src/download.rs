//! Download descriptors for fetching the source fonts with an external download manager.

use crate::{assets::source_file_name, style::FontStyle};
use anyhow::*;
use mksymbols_common::paths::path_to_string;
use std::path::Path;
use url::{form_urlencoded::byte_serialize, Url};

const INDENT: &str = "    ";

/// Returns the URL the source font for `style` is downloaded from.
pub fn source_url(prefix: &str, style: FontStyle) -> Result<Url> {
    let base = if prefix.ends_with('/') { prefix.to_string() } else { format!("{prefix}/") };
    let base = Url::parse(&base).with_context(|| format!("Invalid download URL prefix: {prefix}"))?;
    let file_name: String = byte_serialize(source_file_name(style).as_bytes()).collect();
    Ok(base.join(&file_name)?)
}

/// Renders a batch download job for the source fonts of `styles`, to be saved into `dir`.
pub fn download_descriptor(prefix: &str, dir: &Path, styles: &[FontStyle]) -> Result<String> {
    let dir = path_to_string(dir);
    let mut lines = Vec::new();
    for &style in styles {
        lines.push(source_url(prefix, style)?.to_string());
        lines.push(format!("{INDENT}out={}", source_file_name(style)));
        lines.push(format!("{INDENT}dir={dir}"));
        lines.push(format!("{INDENT}auto-file-renaming=false"));
        lines.push(format!("{INDENT}allow-overwrite=false"));
    }
    Ok(lines.join("\n"))
}
