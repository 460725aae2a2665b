//! Question and answer text characteristics

use crate::core::record::QuestionRecord;
use crate::core::string::word_count;
use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::HashMap;

/// Number of leading words that make up a question opener
const OPENER_WORDS: usize = 3;

/// Mean / median / range over a list of lengths
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    pub mean: f64,
    pub median: f64,
    pub min: usize,
    pub max: usize,
}

impl LengthSummary {
    pub fn from_values(values: &[usize]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let mean = sorted.iter().sum::<usize>() as f64 / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
        } else {
            sorted[n / 2] as f64
        };

        Some(Self {
            mean,
            median,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }
}

/// How often a question opener occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenerCount {
    pub opener: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCharacteristics {
    /// Question length in characters
    pub question_chars: LengthSummary,
    pub answer_a_chars: LengthSummary,
    pub answer_b_chars: LengthSummary,
    pub question_words: LengthSummary,
    /// Most frequent openers, ties in first-seen order
    pub top_openers: Vec<OpenerCount>,
}

impl TextCharacteristics {
    /// Returns None when the dataset has no records.
    pub fn compute(dataset: &Dataset, top_openers: usize) -> Option<Self> {
        let records = dataset.records();
        let question_words: Vec<usize> =
            records.iter().map(|r| word_count(r.question())).collect();

        Some(Self {
            question_chars: summarize(records, QuestionRecord::question)?,
            answer_a_chars: summarize(records, QuestionRecord::answer_a)?,
            answer_b_chars: summarize(records, QuestionRecord::answer_b)?,
            question_words: LengthSummary::from_values(&question_words)?,
            top_openers: rank_openers(records.iter().map(|r| r.question()), top_openers),
        })
    }
}

/// Character-length summary of one text field
fn summarize(
    records: &[QuestionRecord],
    field: impl Fn(&QuestionRecord) -> &str,
) -> Option<LengthSummary> {
    let lengths: Vec<usize> = records.iter().map(|r| field(r).chars().count()).collect();
    LengthSummary::from_values(&lengths)
}

/// The first few words of a question, or None for a question with no words
pub fn opener(question: &str) -> Option<String> {
    let words: Vec<&str> = question.split_whitespace().take(OPENER_WORDS).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn rank_openers<'a>(questions: impl Iterator<Item = &'a str>, limit: usize) -> Vec<OpenerCount> {
    let mut counts: Vec<OpenerCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for question in questions {
        let Some(opener) = opener(question) else {
            continue;
        };
        match index.get(&opener) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(opener.clone(), counts.len());
                counts.push(OpenerCount { opener, count: 1 });
            }
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::dataset::parse_record_line;

    fn dataset(rows: &[(&str, &str, &str)]) -> Dataset {
        let category = Category::try_new("mad").unwrap();
        let records = rows
            .iter()
            .map(|(q, a, b)| {
                let line = serde_json::json!({"question": q, "answer_A": a, "answer_B": b});
                parse_record_line(&line.to_string(), &category).unwrap()
            })
            .collect();
        Dataset::new(records, vec![], 1)
    }

    #[test]
    fn test_length_summary_odd() {
        let summary = LengthSummary::from_values(&[5, 1, 3]).unwrap();
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 5);
    }

    #[test]
    fn test_length_summary_even_median() {
        let summary = LengthSummary::from_values(&[4, 1, 2, 3]).unwrap();
        assert_eq!(summary.median, 2.5);
    }

    #[test]
    fn test_length_summary_empty() {
        assert!(LengthSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_opener_takes_three_words() {
        assert_eq!(
            opener("Ville du helst spise is?"),
            Some("Ville du helst".to_string())
        );
        assert_eq!(opener("Hund?"), Some("Hund?".to_string()));
        assert_eq!(opener("   "), None);
    }

    #[test]
    fn test_characteristics_count_characters_not_bytes() {
        let data = dataset(&[("Ville du helst være på ø?", "Ø", "Å")]);
        let stats = TextCharacteristics::compute(&data, 10).unwrap();
        assert_eq!(stats.question_chars.max, 25);
        assert_eq!(stats.answer_a_chars.max, 1);
        assert_eq!(stats.question_words.max, 6);
    }

    #[test]
    fn test_openers_ranked_by_frequency() {
        let data = dataset(&[
            ("Hvad ville du vælge, A eller B?", "A", "B"),
            ("Ville du helst spise is?", "Ja", "Nej"),
            ("Ville du helst flyve?", "Ja", "Nej"),
            ("Hvad ville du gøre?", "Løbe", "Gå"),
            ("Ville du helst sove?", "Ja", "Nej"),
        ]);
        let stats = TextCharacteristics::compute(&data, 1).unwrap();
        assert_eq!(
            stats.top_openers,
            vec![OpenerCount {
                opener: "Ville du helst".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_empty_dataset_has_no_characteristics() {
        assert!(TextCharacteristics::compute(&Dataset::default(), 10).is_none());
    }
}
