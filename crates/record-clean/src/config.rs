//! Cleaning configuration.

use std::path::PathBuf;

/// Source file read when no path is given.
pub const DEFAULT_SOURCE_PATH: &str = "enriched_cities.json";

/// Destination file written when no path is given.
pub const DEFAULT_DEST_PATH: &str = "enriched_cities_clean.json";

/// Field removed from every record.
pub const DEFAULT_TARGET_FIELD: &str = "alternatenames";

/// JSON layout of the destination file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Single-line output.
    #[default]
    Compact,
    /// Indented output, two spaces per level.
    Pretty,
}

/// Parameters for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    /// Where to read records.
    pub source_path: PathBuf,
    /// Where to write the cleaned records.
    pub dest_path: PathBuf,
    /// Key stripped from each record.
    pub target_field: String,
    /// Layout of the written JSON.
    pub output_style: OutputStyle,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            dest_path: PathBuf::from(DEFAULT_DEST_PATH),
            target_field: DEFAULT_TARGET_FIELD.to_string(),
            output_style: OutputStyle::default(),
        }
    }
}

impl CleanConfig {
    /// Set the source path.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// Set the destination path.
    #[must_use]
    pub fn with_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest_path = path.into();
        self
    }

    /// Set the field to strip.
    #[must_use]
    pub fn with_target_field(mut self, field: impl Into<String>) -> Self {
        self.target_field = field.into();
        self
    }

    /// Set the output layout.
    #[must_use]
    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_files() {
        let config = CleanConfig::default();
        assert_eq!(config.source_path, PathBuf::from("enriched_cities.json"));
        assert_eq!(config.dest_path, PathBuf::from("enriched_cities_clean.json"));
        assert_eq!(config.target_field, "alternatenames");
        assert_eq!(config.output_style, OutputStyle::Compact);
    }

    #[test]
    fn test_builder_overrides() {
        let config = CleanConfig::default()
            .with_source("in.json")
            .with_destination("out/clean.json")
            .with_target_field("aliases")
            .with_output_style(OutputStyle::Pretty);
        assert_eq!(config.source_path, PathBuf::from("in.json"));
        assert_eq!(config.dest_path, PathBuf::from("out/clean.json"));
        assert_eq!(config.target_field, "aliases");
        assert_eq!(config.output_style, OutputStyle::Pretty);
    }
}
