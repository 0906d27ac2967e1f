use crate::{
    error::{Result, SubsetError},
    style::FontStyle,
};
use std::path::{Path, PathBuf};

/// Returns the file name of the full variable font for a style.
pub fn source_file_name(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Outlined => "MaterialSymbolsOutlined[FILL,GRAD,opsz,wght].ttf",
        FontStyle::Rounded => "MaterialSymbolsRounded[FILL,GRAD,opsz,wght].ttf",
        FontStyle::Sharp => "MaterialSymbolsSharp[FILL,GRAD,opsz,wght].ttf",
    }
}

/// A style's full source font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAsset {
    pub style: FontStyle,
    pub path: PathBuf,
}
impl FontAsset {
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Maps styles to the source fonts inside an assets directory.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    assets_dir: PathBuf,
}
impl AssetLocator {
    /// Creates a locator for `assets_dir`. A relative directory is taken relative to the working
    /// directory, so resolved paths are always absolute.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let assets_dir = assets_dir.into();
        let assets_dir = std::path::absolute(&assets_dir).unwrap_or(assets_dir);
        AssetLocator { assets_dir }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Resolves a style name, in any letter case, to its source font path.
    ///
    /// This does not check that the file exists.
    pub fn resolve(&self, style: &str) -> Result<PathBuf> {
        Ok(self.asset(style.parse()?).path)
    }

    pub fn asset(&self, style: FontStyle) -> FontAsset {
        FontAsset { style, path: self.assets_dir.join(source_file_name(style)) }
    }

    /// Returns the source font for a style, failing if it is not present on disk.
    pub fn require(&self, style: FontStyle) -> Result<FontAsset> {
        let asset = self.asset(style);
        if !asset.exists() {
            return Err(SubsetError::AssetNotFound {
                style: style.id().to_string(),
                path: Some(asset.path),
            });
        }
        Ok(asset)
    }

    /// Returns the source fonts for every style.
    pub fn assets(&self) -> Vec<FontAsset> {
        FontStyle::ALL.into_iter().map(|style| self.asset(style)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_style_resolves_to_its_own_file() {
        let locator = AssetLocator::new("/srv/data");
        let mut seen = HashSet::new();
        for style in FontStyle::ALL {
            for input in [style.id().to_string(), style.id().to_uppercase(), style.name().into()] {
                let path = locator.resolve(&input).unwrap();
                let file_name = path.file_name().unwrap().to_str().unwrap();
                assert!(file_name.contains(style.name()));
                for other in FontStyle::ALL.into_iter().filter(|x| *x != style) {
                    assert!(!file_name.contains(other.name()));
                }
                assert_eq!(path.parent().unwrap(), Path::new("/srv/data"));
                seen.insert(path);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn relative_directory_resolves_to_absolute_paths() {
        let locator = AssetLocator::new("data");
        let path = locator.resolve("rounded").unwrap();
        assert!(path.is_absolute());
        assert!(locator.assets_dir().is_absolute());
        let expected = std::env::current_dir().unwrap().join("data");
        assert_eq!(path, expected.join(source_file_name(FontStyle::Rounded)));
    }

    #[test]
    fn unknown_style_is_rejected() {
        let locator = AssetLocator::new("/srv/data");
        assert!(matches!(locator.resolve("filled"), Err(SubsetError::AssetNotFound { .. })));
        assert!(matches!(locator.resolve(""), Err(SubsetError::AssetNotFound { .. })));
    }

    #[test]
    fn require_checks_existence() {
        let dir = tempfile::tempdir().unwrap();
        let locator = AssetLocator::new(dir.path());

        let err = locator.require(FontStyle::Sharp).unwrap_err();
        match err {
            SubsetError::AssetNotFound { style, path } => {
                assert_eq!(style, "sharp");
                assert_eq!(path.unwrap(), dir.path().join(source_file_name(FontStyle::Sharp)));
            }
            other => panic!("unexpected error: {other}"),
        }

        std::fs::write(dir.path().join(source_file_name(FontStyle::Sharp)), b"ttf").unwrap();
        let asset = locator.require(FontStyle::Sharp).unwrap();
        assert_eq!(asset.style, FontStyle::Sharp);
        assert!(asset.exists());
    }
}
