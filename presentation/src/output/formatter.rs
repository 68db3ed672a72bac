//! Output formatter trait

use ideator_application::GenerationOutput;
use ideator_domain::OutputFormat;

/// Trait for formatting generation results
pub trait OutputFormatter {
    /// Format every branding field and the verdict
    fn format(&self, output: &GenerationOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &GenerationOutput) -> String;

    /// Format name, ticker, theme and verdict only
    fn format_summary(&self, output: &GenerationOutput) -> String;

    /// Dispatch on `format`
    fn render(&self, output: &GenerationOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(output),
            OutputFormat::Summary => self.format_summary(output),
            OutputFormat::Json => self.format_json(output),
        }
    }
}
