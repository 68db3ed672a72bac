//! Console output formatter for generation and lookup results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use ideator_application::{GenerationOutput, SymbolSuggestions};
use ideator_domain::{
    AlternativeName, IdeaAnalysis, TokenMetadata, TrendingIdeas, UniquenessVerdict,
};
use serde::Serialize;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete generation result
    pub fn format(output: &GenerationOutput) -> String {
        let record = &output.branding;
        let mut out = String::new();

        out.push_str(&Self::header("Token Branding"));
        out.push('\n');

        out.push_str(&Self::field("Name:", record.token_name()));
        out.push_str(&Self::field("Symbol:", &record.symbol().to_string()));
        out.push_str(&Self::field("Theme:", record.theme().as_str()));
        out.push_str(&Self::field("Tagline:", record.tagline()));
        out.push('\n');

        out.push_str(&Self::section_header("Visual Identity"));
        let palette = record.color_palette();
        out.push_str(&Self::field(
            "Palette:",
            &format!("{} ({})", palette.name, palette.joined()),
        ));
        out.push_str(&Self::field("Style:", record.visual_style()));
        out.push_str(&format!(
            "{}\n{}\n",
            "Logo prompt:".cyan().bold(),
            Self::indent(record.logo_prompt(), "  ")
        ));

        out.push_str(&Self::section_header("Description"));
        out.push_str(record.description());
        out.push('\n');

        if !record.external_signals().is_empty() {
            out.push_str(&Self::section_header("Trending Now"));
            for signal in record.external_signals() {
                out.push_str(&format!("  * {}\n", signal));
            }
        }

        out.push_str(&Self::section_header("Uniqueness"));
        out.push_str(&Self::verdict_lines(&output.uniqueness));

        let provenance = record.provenance();
        out.push_str(&format!(
            "\n{} name={} symbol={} confidence={:.2} generated={}\n",
            "Provenance:".dimmed(),
            provenance.name_strategy.as_str(),
            provenance.symbol_strategy.as_str(),
            record.confidence(),
            record.generated_at().to_rfc3339()
        ));

        out.push_str(&Self::footer());
        out
    }

    /// Format as JSON
    pub fn format_json(output: &GenerationOutput) -> String {
        Self::json(output)
    }

    /// Format name, ticker, theme and verdict only
    pub fn format_summary(output: &GenerationOutput) -> String {
        let record = &output.branding;
        let mut out = String::new();

        out.push_str(&format!(
            "{} {} {}\n",
            record.token_name().bold(),
            format!("({})", record.symbol()).yellow().bold(),
            format!("[{}]", record.theme()).dimmed()
        ));
        out.push_str(&format!("{}\n", record.tagline().italic()));
        out.push_str(&Self::verdict_lines(&output.uniqueness));
        out
    }

    /// Format a standalone uniqueness verdict
    pub fn format_verdict(name: &str, symbol: &str, verdict: &UniquenessVerdict) -> String {
        format!(
            "{} {} ({})\n{}",
            "Checked:".cyan().bold(),
            name,
            symbol,
            Self::verdict_lines(verdict)
        )
    }

    pub fn format_metadata(symbol: &str, metadata: &TokenMetadata) -> String {
        match (&metadata.data, &metadata.error) {
            (Some(entry), _) => {
                let mut out = format!(
                    "{} {} ({})\n",
                    "Found:".green().bold(),
                    entry.name,
                    entry.symbol.to_uppercase()
                );
                out.push_str(&Self::field("Registry id:", &entry.id));
                if let Some(rank) = entry.market_cap_rank {
                    out.push_str(&Self::field("Market cap rank:", &rank.to_string()));
                }
                if let Some(image) = &entry.image {
                    out.push_str(&Self::field("Image:", image));
                }
                out
            }
            (None, Some(error)) => format!(
                "{} could not look up {}: {}\n",
                "?".yellow().bold(),
                symbol,
                error
            ),
            (None, None) => format!("{} {} is not listed\n", "-".dimmed(), symbol),
        }
    }

    pub fn format_suggestions(suggestions: &SymbolSuggestions) -> String {
        if suggestions.alternatives.is_empty() {
            return format!(
                "{} no free variants of {} found\n",
                "!".yellow().bold(),
                suggestions.original_symbol
            );
        }
        let mut out = format!(
            "{} {}\n",
            "Free variants of".cyan().bold(),
            suggestions.original_symbol.bold()
        );
        for alt in &suggestions.alternatives {
            out.push_str(&format!("  {} {}\n", "v".green(), alt.symbol));
        }
        out
    }

    pub fn format_alternatives(alternatives: &[AlternativeName]) -> String {
        let mut out = Self::section_header("Alternative Names");
        for alt in alternatives {
            out.push_str(&format!(
                "  {:<20} {:<6} {}\n",
                alt.name,
                alt.symbol.as_str(),
                format!("[{}]", alt.theme).dimmed()
            ));
        }
        out
    }

    pub fn format_trending(ideas: &TrendingIdeas) -> String {
        let mut out = Self::section_header(&format!("Trends for {}", ideas.year));
        for trend in &ideas.trends {
            out.push_str(&format!("  * {}\n", trend));
        }
        let themes: Vec<&str> = ideas.themes.iter().map(|t| t.as_str()).collect();
        out.push_str(&format!("\n{} {}\n", "Themes:".cyan().bold(), themes.join(", ")));
        out.push_str(&format!("{}\n", "Use cases:".cyan().bold()));
        for use_case in &ideas.use_cases {
            out.push_str(&format!("  - {}\n", use_case));
        }
        out
    }

    pub fn format_analysis(analysis: &IdeaAnalysis) -> String {
        let mut out = Self::section_header("Idea Analysis");
        out.push_str(&Self::field("Themes:", &analysis.detected_themes.join(", ")));
        out.push_str(&Self::field(
            "Use cases:",
            &analysis.detected_use_cases.join(", "),
        ));
        out.push_str(&Self::field(
            "Length:",
            &format!("{} characters", analysis.idea_length),
        ));
        out.push_str(&Self::field(
            "Complexity:",
            &format!("{:?}", analysis.complexity),
        ));
        out.push_str(&Self::field(
            "Viability:",
            &format!("{:.0}%", analysis.viability * 100.0),
        ));
        out
    }

    /// Pretty JSON for any serializable result
    pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn verdict_lines(verdict: &UniquenessVerdict) -> String {
        let mut out = String::new();
        let status = if verdict.degraded {
            "? unverified".yellow().bold()
        } else if verdict.is_unique {
            "v unique".green().bold()
        } else {
            "x taken".red().bold()
        };
        out.push_str(&format!("{} {}\n", status, verdict.message));
        for conflict in &verdict.conflicts {
            out.push_str(&format!(
                "  - {} ({}) [{}]\n",
                conflict.existing_name, conflict.existing_symbol, conflict.external_id
            ));
        }
        out
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", label.cyan().bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &GenerationOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &GenerationOutput) -> String {
        Self::format_json(output)
    }

    fn format_summary(&self, output: &GenerationOutput) -> String {
        Self::format_summary(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ideator_domain::{
        Conflict, OutputFormat, ProjectIdea, RegistryEntry, rng_from_seed, synthesize_branding,
    };

    fn output(verdict: UniquenessVerdict) -> GenerationOutput {
        colored::control::set_override(false);
        let idea = ProjectIdea::new("A decentralized lending protocol for small businesses").unwrap();
        let record = synthesize_branding(&idea, Utc::now(), &mut rng_from_seed(Some(42)))
            .unwrap()
            .with_external_signals(vec!["ETH ETF approved".to_string()]);
        GenerationOutput {
            branding: record,
            uniqueness: verdict,
        }
    }

    #[test]
    fn test_full_contains_every_field() {
        let out = output(UniquenessVerdict::unique());
        let text = ConsoleFormatter.render(&out, OutputFormat::Full);
        assert!(text.contains(out.branding.token_name()));
        assert!(text.contains(out.branding.symbol().as_str()));
        assert!(text.contains(out.branding.tagline()));
        assert!(text.contains(out.branding.color_palette().name));
        assert!(text.contains("ETH ETF approved"));
        assert!(text.contains("v unique"));
    }

    #[test]
    fn test_summary_lists_conflicts() {
        let verdict = UniquenessVerdict::classify(
            "x",
            "BTC",
            &[RegistryEntry::new("bitcoin", "Bitcoin", "btc")],
        );
        let text = ConsoleFormatter.render(&output(verdict), OutputFormat::Summary);
        assert!(text.contains("x taken"));
        assert!(text.contains("Bitcoin (btc) [bitcoin]"));
        assert!(!text.contains("Logo prompt"));
    }

    #[test]
    fn test_degraded_is_marked_unverified() {
        let text = ConsoleFormatter::format_summary(&output(UniquenessVerdict::unverified(
            "API unavailable",
        )));
        assert!(text.contains("? unverified"));
    }

    #[test]
    fn test_json_round_trips_to_value() {
        let text = ConsoleFormatter.render(&output(UniquenessVerdict::unique()), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["branding"]["confidence"], 0.95);
        assert_eq!(value["uniqueness"]["isUnique"], true);
    }

    #[test]
    fn test_metadata_variants() {
        colored::control::set_override(false);
        let mut entry = RegistryEntry::new("bitcoin", "Bitcoin", "btc");
        entry.market_cap_rank = Some(1);
        let found = ConsoleFormatter::format_metadata("BTC", &TokenMetadata::found(entry));
        assert!(found.contains("Bitcoin (BTC)"));
        assert!(found.contains("Market cap rank: 1"));

        let missing = ConsoleFormatter::format_metadata("ZZZ", &TokenMetadata::not_found());
        assert!(missing.contains("ZZZ is not listed"));

        let failed =
            ConsoleFormatter::format_metadata("BTC", &TokenMetadata::unavailable("HTTP 429"));
        assert!(failed.contains("HTTP 429"));
    }

    #[test]
    fn test_verdict_lines_show_each_conflict() {
        colored::control::set_override(false);
        let verdict = UniquenessVerdict {
            is_unique: false,
            conflicts: vec![
                Conflict {
                    existing_name: "Alpha".into(),
                    existing_symbol: "ALP".into(),
                    external_id: "alpha".into(),
                },
                Conflict {
                    existing_name: "Alpine".into(),
                    existing_symbol: "ALP".into(),
                    external_id: "alpine".into(),
                },
            ],
            message: "Symbol already in use by: Alpha, Alpine".into(),
            degraded: false,
        };
        let text = ConsoleFormatter::format_verdict("Alp", "ALP", &verdict);
        assert_eq!(text.matches("  - ").count(), 2);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
