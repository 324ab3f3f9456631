// ===== cipherforge/src/scorer/tables.rs =====
use clap::ValueEnum;

/// Weight given to every occurrence of a common bigram.
pub const WEIGHT_COMMON_BIGRAM: f64 = 1.0;
/// Weight given to every occurrence of a common trigram.
pub const WEIGHT_COMMON_TRIGRAM: f64 = 2.0;
/// Penalty for every occurrence of a letter that is rare in English.
pub const WEIGHT_RARE_LETTER: f64 = -1.0;
/// Penalty for every occurrence of a bigram that almost never occurs.
pub const WEIGHT_RARE_BIGRAM: f64 = -10.0;

const COMMON_BIGRAMS: &[&str] = &[
    "TH", "HE", "IN", "AN", "RE", "ND", "AT", "ON", "NT", "HA", "EN", "ES", "ST", "OR", "TE",
    "OF", "ED", "IS", "IT", "MY",
];

const COMMON_TRIGRAMS: &[&str] = &[
    "THE", "AND", "ING", "ENT", "HER", "FOR", "THA", "NTH", "INT", "TER", "EST", "RES", "HIS",
    "ERE", "HES", "ALL", "BUT", "WIT",
];

const RARE_LETTERS: &[&str] = &["Z", "X", "Q", "J"];

const RARE_BIGRAMS: &[&str] = &[
    "QZ", "XJ", "ZQ", "JQ", "VX", "ZZ", "XZ", "QJ", "QX", "ZX", "KQ", "WZ", "VQ", "QW", "XV",
    "KX", "JZ", "VZ", "WX", "QY", "XY", "JY", "QK",
];

// Leaner lists for the compact tuning of the same scoring contract.
const COMPACT_BIGRAMS: &[&str] = &["TH", "HE", "IN", "ER", "AN", "RE", "ON", "AT", "EN", "ND"];

const COMPACT_TRIGRAMS: &[&str] = &["THE", "AND", "ING", "ENT", "ION", "HER", "FOR", "TIO"];

const COMPACT_RARE_BIGRAMS: &[&str] = &["QZ", "ZQ", "JQ", "QJ", "VX", "XJ", "ZX", "WQ", "JX"];

/// Built-in tunings of the n-gram weight table. Same scoring contract,
/// different table contents.
#[derive(ValueEnum, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum TablePreset {
    #[default]
    Standard,
    Compact,
}

/// Immutable weighted n-gram table owned by a [`Scorer`](crate::scorer::Scorer).
///
/// Modeled as plain configuration data so alternate tunings (or other
/// languages entirely) can coexist as separate values.
#[derive(Debug, Clone)]
pub struct NgramTables {
    pub entries: Vec<(String, f64)>,
}

impl NgramTables {
    pub fn preset(preset: TablePreset) -> Self {
        match preset {
            TablePreset::Standard => Self::standard(),
            TablePreset::Compact => Self::compact(),
        }
    }

    pub fn standard() -> Self {
        Self::from_categories(&[
            (COMMON_BIGRAMS, WEIGHT_COMMON_BIGRAM),
            (COMMON_TRIGRAMS, WEIGHT_COMMON_TRIGRAM),
            (RARE_LETTERS, WEIGHT_RARE_LETTER),
            (RARE_BIGRAMS, WEIGHT_RARE_BIGRAM),
        ])
    }

    pub fn compact() -> Self {
        Self::from_categories(&[
            (COMPACT_BIGRAMS, WEIGHT_COMMON_BIGRAM),
            (COMPACT_TRIGRAMS, WEIGHT_COMMON_TRIGRAM),
            (RARE_LETTERS, WEIGHT_RARE_LETTER),
            (COMPACT_RARE_BIGRAMS, WEIGHT_RARE_BIGRAM),
        ])
    }

    fn from_categories(categories: &[(&[&str], f64)]) -> Self {
        let entries = categories
            .iter()
            .flat_map(|&(grams, weight)| grams.iter().map(move |&g| (g.to_string(), weight)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
