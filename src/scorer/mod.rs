// ===== cipherforge/src/scorer/mod.rs =====
pub mod loader;
pub mod tables;

pub use self::tables::{NgramTables, TablePreset};

/// Per-entry contribution for the audit report.
#[derive(Debug, Clone)]
pub struct GramDetail {
    pub gram: String,
    pub weight: f64,
    pub count: usize,
    pub contribution: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreDetails {
    pub total: f64,
    pub entries: Vec<GramDetail>,
}

/// Scores candidate plaintexts by weighted n-gram occurrence counts.
///
/// Deterministic and side-effect free: the same text always yields the
/// same score. Higher is more English-like.
pub struct Scorer {
    tables: NgramTables,
}

impl Scorer {
    pub fn new(tables: NgramTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &NgramTables {
        &self.tables
    }

    /// Fast scoring for the search loop.
    pub fn score(&self, text: &str) -> f64 {
        self.tables
            .entries
            .iter()
            .map(|(gram, weight)| count_occurrences(text, gram) as f64 * weight)
            .sum()
    }

    /// Detailed scoring for the audit report: one row per table entry
    /// that actually occurs in the text.
    pub fn score_debug(&self, text: &str) -> ScoreDetails {
        let mut details = ScoreDetails::default();

        for (gram, weight) in &self.tables.entries {
            let count = count_occurrences(text, gram);
            if count == 0 {
                continue;
            }
            let contribution = count as f64 * weight;
            details.total += contribution;
            details.entries.push(GramDetail {
                gram: gram.clone(),
                weight: *weight,
                count,
                contribution,
            });
        }

        details
    }
}

/// Non-overlapping left-to-right occurrence count: after a match the scan
/// resumes immediately past it, so "AAA" holds exactly one "AA".
pub fn count_occurrences(text: &str, gram: &str) -> usize {
    let text = text.as_bytes();
    let gram = gram.as_bytes();
    if gram.is_empty() || gram.len() > text.len() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;
    while pos + gram.len() <= text.len() {
        if &text[pos..pos + gram.len()] == gram {
            count += 1;
            pos += gram.len();
        } else {
            pos += 1;
        }
    }
    count
}
