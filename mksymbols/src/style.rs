use crate::error::{Result, SubsetError};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// One of the Material Symbols style variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontStyle {
    Outlined,
    Rounded,
    Sharp,
}
impl FontStyle {
    pub const ALL: [FontStyle; 3] = [FontStyle::Outlined, FontStyle::Rounded, FontStyle::Sharp];

    /// The capitalized name, as used in font file names and font family names.
    pub fn name(self) -> &'static str {
        match self {
            FontStyle::Outlined => "Outlined",
            FontStyle::Rounded => "Rounded",
            FontStyle::Sharp => "Sharp",
        }
    }

    /// The lowercase name, as used in class names and output file names.
    pub fn id(self) -> &'static str {
        match self {
            FontStyle::Outlined => "outlined",
            FontStyle::Rounded => "rounded",
            FontStyle::Sharp => "sharp",
        }
    }
}
impl FromStr for FontStyle {
    type Err = SubsetError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        FontStyle::ALL
            .into_iter()
            .find(|style| style.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| SubsetError::AssetNotFound { style: s.to_string(), path: None })
    }
}
impl Display for FontStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// The icons to keep in a subset, in the order the caller gave them.
///
/// Duplicates are kept as-is, since the order and contents feed into generated names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconSet {
    names: Vec<String>,
}
impl IconSet {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SubsetError::EmptyIconSet);
        }
        Ok(IconSet { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns the icon names joined with commas.
    pub fn joined(&self) -> String {
        self.names.join(",")
    }
}
impl Display for IconSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}
