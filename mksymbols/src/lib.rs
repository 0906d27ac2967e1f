//! Builds small, self-contained stylesheets for a handful of Material Symbols icons.
//!
//! The source variable font for a style is subsetted by an external tool (`subset_gf_icons` by
//! default), and the resulting woff2 file is embedded into a stylesheet as a `data:` URI.

mod assets;
mod config;
mod download;
mod ensure;
mod error;
mod generate;
mod style;
mod stylesheet;
mod subset;

pub use assets::{source_file_name, AssetLocator, FontAsset};
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_DOWNLOAD_URL_PREFIX};
pub use download::{download_descriptor, source_url};
pub use ensure::{ensure, ensure_with, EnsureReport};
pub use error::{Result, SubsetError};
pub use generate::{GeneratedFiles, Generator};
pub use style::{FontStyle, IconSet};
pub use stylesheet::{class_name, font_family, output_file_name, StylesheetDocument};
pub use subset::{parse_result_path, SubsetInvoker, SubsetResult, FLAVOR, RESULT_PREFIX};

pub use mksymbols_common::{
    process::{CommandOutput, CommandRunner, SystemCommandRunner},
    report::{Label, Reporter, TracingReporter},
};
