//! Converters for generating test sources from Postman collections
//!
//! This module provides the converter trait, the script translators it
//! relies on, and the Playwright implementation.

pub mod assertions;
pub mod grouping;
pub mod playwright;
pub mod prerequest;
pub mod variables;

pub use playwright::PlaywrightConverter;
pub use variables::VariableSet;

use crate::models::collection::{Collection, Item};

/// Default name of the environment template file
pub const DEFAULT_ENV_TEMPLATE: &str = ".env.example";

/// Configuration options for converters
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// File name of the environment template, or `None` to skip it
    pub env_template: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            env_template: Some(DEFAULT_ENV_TEMPLATE.to_string()),
        }
    }
}

/// One generated test source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub file_name: String,
    /// Name of the folder or request it was generated from
    pub source_name: String,
    pub contents: String,
    /// Number of test script lines left for manual review
    pub unconverted_lines: usize,
}

/// Output of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedSuite {
    /// One file per top-level folder or request, in collection order
    pub files: Vec<GeneratedFile>,
    /// Every variable referenced by the converted requests
    pub variables: VariableSet,
    /// Environment template file name and contents, written next to the output directory
    pub env_template: Option<(String, String)>,
}

/// Trait for converting Postman collections to test sources
pub trait Converter {
    /// The output type of the conversion
    type Output;

    /// Convert an entire collection
    fn convert_collection(&self, collection: &Collection, options: &ConvertOptions) -> Self::Output;

    /// Convert a single top-level item, recording the variables it uses.
    ///
    /// Returns `None` for requests without a method or URL.
    fn convert_item(&self, item: &Item, variables: &mut VariableSet) -> Option<GeneratedFile>;
}

/// File-system safe name: anything outside `[A-Za-z0-9_-]` becomes `_`, lowercased
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Auth"), "auth");
        assert_eq!(sanitize_filename("Users / Get-by_id"), "users___get-by_id");
        assert_eq!(sanitize_filename("Café"), "caf_");
    }

    #[test]
    fn test_default_options_write_env_template() {
        let options = ConvertOptions::default();
        assert_eq!(options.env_template.as_deref(), Some(".env.example"));
    }
}
