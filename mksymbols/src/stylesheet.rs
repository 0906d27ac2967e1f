use crate::{
    error::{Result, SubsetError},
    style::{FontStyle, IconSet},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use mksymbols_common::report::format_size;
use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};
use tracing::debug;

/// Returns the font family name for a subset of a style.
///
/// This is the same for every call with the same style and icons.
pub fn font_family(style: FontStyle, icons: &IconSet) -> String {
    format!("Material Symbols {} [{}]", style.name(), icons.joined())
}

/// Returns the class name of the utility rule for a style.
pub fn class_name(style: FontStyle) -> String {
    format!("material-symbols-{}", style.id())
}

/// Returns the file name the stylesheet for a subset is saved as.
pub fn output_file_name(style: FontStyle, icons: &IconSet) -> String {
    format!("material-symbols-{}[{}].css", style.id(), icons.joined())
}

/// A stylesheet embedding a subset font.
#[derive(Debug, Clone)]
pub struct StylesheetDocument {
    style: FontStyle,
    icons: IconSet,
    css: String,
}
impl StylesheetDocument {
    /// Reads the subset font at `font_path` and builds a stylesheet embedding it.
    pub fn build(style: FontStyle, icons: &IconSet, font_path: &Path) -> Result<Self> {
        let data = fs::read(font_path).map_err(SubsetError::io(font_path))?;
        debug!("Embedding {} ({})...", font_path.display(), format_size(data.len() as u64));
        Ok(Self::from_font_data(style, icons, &data))
    }

    /// Builds a stylesheet embedding the given font data.
    pub fn from_font_data(style: FontStyle, icons: &IconSet, data: &[u8]) -> Self {
        let css = InlineStylesheet {
            font_family: &font_family(style, icons),
            class_name: &class_name(style),
            size: data.len() as u64,
            payload: &BASE64.encode(data),
        }
        .to_string();
        StylesheetDocument { style, icons: icons.clone(), css }
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn font_family(&self) -> String {
        font_family(self.style, &self.icons)
    }

    pub fn class_name(&self) -> String {
        class_name(self.style)
    }

    pub fn file_name(&self) -> String {
        output_file_name(self.style, &self.icons)
    }
}

struct InlineStylesheet<'a> {
    font_family: &'a str,
    class_name: &'a str,
    size: u64,
    payload: &'a str,
}
impl<'a> Display for InlineStylesheet<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "@font-face {{")?;
        writeln!(f, "    font-family: '{}';", self.font_family)?;
        writeln!(f, "    font-style: normal;")?;
        writeln!(f, "    font-weight: 100 700;")?;
        writeln!(f, "    /* size: {} */", format_size(self.size))?;
        writeln!(
            f,
            "    src: url(data:font/woff2;charset=utf-8;base64,{}) format('woff2');",
            self.payload
        )?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, ".{} {{", self.class_name)?;
        writeln!(f, "    font-family: '{}';", self.font_family)?;
        for (property, value) in ICON_CLASS_PROPERTIES {
            writeln!(f, "    {property}: {value};")?;
        }
        write!(f, "}}")
    }
}

const ICON_CLASS_PROPERTIES: &[(&str, &str)] = &[
    ("font-weight", "normal"),
    ("font-style", "normal"),
    ("font-size", "24px"),
    ("line-height", "1"),
    ("letter-spacing", "normal"),
    ("text-transform", "none"),
    ("display", "inline-block"),
    ("white-space", "nowrap"),
    ("word-wrap", "normal"),
    ("direction", "ltr"),
    ("-webkit-font-feature-settings", "'liga'"),
    ("-webkit-font-smoothing", "antialiased"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> IconSet {
        IconSet::new(["menu", "alarm_on"]).unwrap()
    }

    fn embedded_payload(css: &str) -> &str {
        let start = css.find("base64,").unwrap() + "base64,".len();
        let end = start + css[start..].find(')').unwrap();
        &css[start..end]
    }

    #[test]
    fn payload_decodes_to_font_bytes() {
        let mut data: Vec<u8> = (0..=255).collect();
        data.extend(b"wOF2\0\0\r\n");
        let doc = StylesheetDocument::from_font_data(FontStyle::Outlined, &icons(), &data);
        let payload = embedded_payload(doc.css());
        assert!(!payload.contains('\n'));
        assert_eq!(BASE64.decode(payload).unwrap(), data);
    }

    #[test]
    fn empty_font_embeds_empty_payload() {
        let doc = StylesheetDocument::from_font_data(FontStyle::Sharp, &icons(), &[]);
        assert_eq!(embedded_payload(doc.css()), "");
        assert!(doc.css().contains("/* size: 0.00KB */"));
    }

    #[test]
    fn names_are_deterministic() {
        let a = StylesheetDocument::from_font_data(FontStyle::Rounded, &icons(), b"font");
        let b = StylesheetDocument::from_font_data(FontStyle::Rounded, &icons(), b"font");
        assert_eq!(a.css(), b.css());
        assert_eq!(a.font_family(), "Material Symbols Rounded [menu,alarm_on]");
        assert_eq!(a.font_family(), b.font_family());
        assert_eq!(a.class_name(), "material-symbols-rounded");
        assert_eq!(a.file_name(), "material-symbols-rounded[menu,alarm_on].css");
    }

    #[test]
    fn both_rules_reference_the_same_family() {
        let doc = StylesheetDocument::from_font_data(FontStyle::Rounded, &icons(), b"font");
        let css = doc.css();
        let family = "font-family: 'Material Symbols Rounded [menu,alarm_on]';";
        assert_eq!(css.matches(family).count(), 2);
        assert_eq!(css.matches("@font-face {").count(), 1);
        assert_eq!(css.matches(".material-symbols-rounded {").count(), 1);
        let src = "src: url(data:font/woff2;charset=utf-8;base64,Zm9udA==) format('woff2');";
        assert!(css.contains(src));
    }

    #[test]
    fn layout() {
        let doc = StylesheetDocument::from_font_data(FontStyle::Sharp, &icons(), &[0; 2048]);
        let css = doc.css();
        assert_eq!(css, css.trim());
        assert!(css.starts_with(
            "@font-face {\n    font-family: 'Material Symbols Sharp [menu,alarm_on]';\n"
        ));
        assert!(css.contains("    /* size: 2.00KB */\n"));
        assert!(css.contains("}\n\n.material-symbols-sharp {\n"));
        assert!(css.contains("    -webkit-font-feature-settings: 'liga';\n"));
        assert!(css.ends_with("    -webkit-font-smoothing: antialiased;\n}"));
    }

    #[test]
    fn build_reads_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subset.woff2");
        fs::write(&path, b"wOF2 subset").unwrap();

        let doc = StylesheetDocument::build(FontStyle::Outlined, &icons(), &path).unwrap();
        assert_eq!(BASE64.decode(embedded_payload(doc.css())).unwrap(), b"wOF2 subset");
        assert_eq!(doc.style(), FontStyle::Outlined);
        assert_eq!(doc.icons(), &icons());
    }

    #[test]
    fn build_propagates_read_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.woff2");
        let err = StylesheetDocument::build(FontStyle::Outlined, &icons(), &path).unwrap_err();
        assert!(matches!(err, SubsetError::Io { path: failed, .. } if failed == path));
    }
}
