//! Presentation-level configuration
//!
//! Resolved output settings: CLI flags win over the config file.

use ideator_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Merge CLI flags with file settings.
    ///
    /// JSON output never shows progress so stdout stays machine-readable.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(file_format).unwrap_or_default();
        Self {
            format,
            color,
            show_progress: !quiet && format != OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Full),
            Some(OutputFormat::Json),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Full);
        assert!(config.show_progress);
    }

    #[test]
    fn test_falls_back_to_file_then_default() {
        assert_eq!(
            OutputConfig::resolve(None, Some(OutputFormat::Full), true, false).format,
            OutputFormat::Full
        );
        assert_eq!(
            OutputConfig::resolve(None, None, true, false),
            OutputConfig::default()
        );
    }

    #[test]
    fn test_json_and_quiet_hide_progress() {
        assert!(!OutputConfig::resolve(Some(OutputFormat::Json), None, true, false).show_progress);
        assert!(!OutputConfig::resolve(None, None, true, true).show_progress);
    }
}
