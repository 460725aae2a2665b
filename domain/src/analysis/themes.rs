//! Danish theme keyword hits

use crate::dataset::Dataset;
use serde::Serialize;

/// Theme name and the lowercase keywords that signal it
const THEMES: &[(&str, &[&str])] = &[
    ("arbejde", &["arbejde", "job", "chef", "kontor", "løn"]),
    ("familie", &["familie", "mor", "far", "barn", "børn", "forældre"]),
    ("mad", &["mad", "spise", "pizza", "chokolade", "kaffe"]),
    ("krop", &["krop", "hoved", "arm", "ben", "øje", "næse"]),
    ("tid", &["dag", "uge", "måned", "år", "tid", "altid", "aldrig"]),
    ("valg", &["helst", "ville", "eller", "frem for"]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeCount {
    pub theme: &'static str,
    /// Questions mentioning at least one keyword of the theme
    pub count: usize,
    /// Share of all questions, 0-100
    pub percentage: f64,
}

/// Count keyword hits per theme, most frequent first.
///
/// Matching is a plain substring test on the lowercased question, so
/// "far" also hits "farlig". Themes with no hits are left out.
pub fn count_themes(dataset: &Dataset) -> Vec<ThemeCount> {
    let questions: Vec<String> = dataset
        .records()
        .iter()
        .map(|r| r.question().to_lowercase())
        .collect();
    if questions.is_empty() {
        return Vec::new();
    }

    let total = questions.len() as f64;
    let mut counts: Vec<ThemeCount> = THEMES
        .iter()
        .map(|&(theme, keywords)| {
            let count = questions
                .iter()
                .filter(|q| keywords.iter().any(|k| q.contains(*k)))
                .count();
            ThemeCount {
                theme,
                count,
                percentage: count as f64 / total * 100.0,
            }
        })
        .filter(|t| t.count > 0)
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
