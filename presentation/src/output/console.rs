//! Console output formatter for datasets and probe reports

use colored::Colorize;
use hvad_application::ExportDatasetOutput;
use hvad_domain::analysis::{CategoryBalance, LengthSummary, TextCharacteristics};
use hvad_domain::core::string::truncate_chars;
use hvad_domain::{Dataset, LineDiagnostic, ProbeReport};

/// Diagnostics listed before the summary is cut short
const MAX_LISTED_DIAGNOSTICS: usize = 20;

/// Issues listed per quality check
const MAX_LISTED_ISSUES: usize = 20;

/// Questions are shortened to this many characters in lists
const QUESTION_PREVIEW_CHARS: usize = 80;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the summary of a loaded dataset
    pub fn format_load(dataset: &Dataset) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Hvad vil du helst"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Records:".cyan().bold(),
            dataset.len()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Files read:".cyan().bold(),
            dataset.files_read()
        ));

        output.push_str(&Self::section_header("Categories"));
        if dataset.category_counts().is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for (category, count) in dataset.category_counts() {
            output.push_str(&format!("  {:<24} {:>6}\n", category.as_str().yellow(), count));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the non-fatal warning summary of skipped lines.
    ///
    /// Returns an empty string when nothing was skipped.
    pub fn format_diagnostics(diagnostics: &[LineDiagnostic]) -> String {
        if diagnostics.is_empty() {
            return String::new();
        }

        let mut output = format!(
            "{} {} malformed line(s) skipped\n",
            "Warning:".yellow().bold(),
            diagnostics.len()
        );
        for diagnostic in diagnostics.iter().take(MAX_LISTED_DIAGNOSTICS) {
            output.push_str(&format!("  {}\n", diagnostic));
        }
        if diagnostics.len() > MAX_LISTED_DIAGNOSTICS {
            output.push_str(&format!(
                "  {}\n",
                format!("... and {} more", diagnostics.len() - MAX_LISTED_DIAGNOSTICS).dimmed()
            ));
        }
        output
    }

    /// Format the complete probe report
    pub fn format_probe(report: &ProbeReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Dataset Probe"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Generated:".dimmed(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Structure
        let structure = &report.structure;
        output.push_str(&Self::section_header("Structure"));
        output.push_str(&format!("  Total records:  {}\n", structure.total_records));
        output.push_str(&format!("  Categories:     {}\n", structure.num_categories));
        output.push_str(&format!("  Files read:     {}\n", structure.files_read));
        output.push_str(&format!("  Skipped lines:  {}\n", structure.skipped_lines));
        if !structure.categories.is_empty() {
            let names: Vec<&str> = structure.categories.iter().map(|c| c.as_str()).collect();
            output.push_str(&format!("  Names:          {}\n", names.join(", ")));
        }

        if let Some(balance) = &report.balance {
            output.push_str(&Self::format_balance(balance));
        }

        if let Some(characteristics) = &report.characteristics {
            output.push_str(&Self::format_characteristics(characteristics));
        }

        // Themes
        if !report.themes.is_empty() {
            output.push_str(&Self::section_header("Themes"));
            for theme in &report.themes {
                output.push_str(&format!(
                    "  {:<10} {:>6}  ({:.1}%)\n",
                    theme.theme, theme.count, theme.percentage
                ));
            }
        }

        // Quality
        output.push_str(&Self::section_header("Quality"));
        if report.quality.is_clean() {
            output.push_str(&format!("  {}\n", "No issues found".green()));
        }
        for (label, issues) in report.quality.sections() {
            output.push_str(&format!(
                "\n  {} ({})\n",
                label.yellow().bold(),
                issues.len()
            ));
            for issue in issues.iter().take(MAX_LISTED_ISSUES) {
                output.push_str(&format!(
                    "    #{} [{}] {}\n",
                    issue.index,
                    issue.category,
                    truncate_chars(&issue.question, QUESTION_PREVIEW_CHARS)
                ));
            }
            if issues.len() > MAX_LISTED_ISSUES {
                output.push_str(&format!(
                    "    {}\n",
                    format!("... and {} more", issues.len() - MAX_LISTED_ISSUES).dimmed()
                ));
            }
        }

        // Examples
        if !report.examples.is_empty() {
            output.push_str(&Self::section_header("Examples"));
            for group in &report.examples {
                output.push_str(&format!(
                    "\n  {}\n",
                    format!("── {} ({}) ──", group.category, group.total).yellow().bold()
                ));
                for record in &group.examples {
                    output.push_str(&format!(
                        "    {}\n      A: {}\n      B: {}\n",
                        truncate_chars(record.question(), QUESTION_PREVIEW_CHARS),
                        record.answer_a(),
                        record.answer_b()
                    ));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_balance(balance: &CategoryBalance) -> String {
        let mut output = Self::section_header("Category Balance");
        for (category, count) in &balance.counts {
            output.push_str(&format!("  {:<24} {:>6}\n", category.as_str(), count));
        }
        output.push_str(&format!(
            "\n  Mean {:.1}, std {:.1}, min {}, max {}\n",
            balance.mean, balance.std_dev, balance.min, balance.max
        ));
        let verdict = if balance.is_balanced {
            "balanced".green()
        } else {
            "unbalanced".red()
        };
        output.push_str(&format!(
            "  Variation {:.2}: {}\n",
            balance.variation(),
            verdict
        ));
        output
    }

    fn format_characteristics(characteristics: &TextCharacteristics) -> String {
        let mut output = Self::section_header("Text Characteristics");
        output.push_str(&Self::length_row(
            "Question chars",
            &characteristics.question_chars,
        ));
        output.push_str(&Self::length_row(
            "Answer A chars",
            &characteristics.answer_a_chars,
        ));
        output.push_str(&Self::length_row(
            "Answer B chars",
            &characteristics.answer_b_chars,
        ));
        output.push_str(&Self::length_row(
            "Question words",
            &characteristics.question_words,
        ));

        if !characteristics.top_openers.is_empty() {
            output.push_str(&format!("\n  {}\n", "Common openers:".cyan().bold()));
            for opener in &characteristics.top_openers {
                output.push_str(&format!("    {:>5}  {}\n", opener.count, opener.opener));
            }
        }
        output
    }

    fn length_row(label: &str, summary: &LengthSummary) -> String {
        format!(
            "  {:<16} mean {:>6.1}  median {:>6.1}  min {:>4}  max {:>4}\n",
            label, summary.mean, summary.median, summary.min, summary.max
        )
    }

    /// Format the result of an export
    pub fn format_export(output: &ExportDatasetOutput) -> String {
        format!(
            "{} Wrote {} records from {} categories to {}\n",
            "v".green(),
            output.records_written,
            output.dataset.category_counts().len(),
            output.path.display()
        )
    }

    /// Format a loaded dataset as JSON
    pub fn format_load_json(dataset: &Dataset) -> String {
        serde_json::to_string_pretty(dataset).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a probe report as JSON
    pub fn format_probe_json(report: &ProbeReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an export result as JSON
    pub fn format_export_json(output: &ExportDatasetOutput) -> String {
        let value = serde_json::json!({
            "path": output.path.display().to_string(),
            "records_written": output.records_written,
            "category_counts": output.dataset.category_counts(),
            "diagnostics": output.dataset.diagnostics(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
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
}
