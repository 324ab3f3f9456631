use cipherforge::scorer::{count_occurrences, NgramTables, Scorer, TablePreset};
use rstest::rstest;

#[rstest]
#[case("AAA", "AA", 1)] // overlaps are not double counted
#[case("AAAA", "AA", 2)]
#[case("ABABAB", "AB", 3)]
#[case("THETHE", "THE", 2)]
#[case("", "TH", 0)]
#[case("TH", "TH", 1)]
#[case("XTHX", "TH", 1)]
#[case("T", "TH", 0)]
fn test_count_occurrences(#[case] text: &str, #[case] gram: &str, #[case] expected: usize) {
    assert_eq!(count_occurrences(text, gram), expected);
}

#[test]
fn test_empty_text_scores_zero() {
    let scorer = Scorer::new(NgramTables::standard());
    assert_eq!(scorer.score(""), 0.0);
}

#[test]
fn test_score_is_deterministic() {
    let scorer = Scorer::new(NgramTables::standard());
    let text = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    assert_eq!(scorer.score(text), scorer.score(text));
}

#[test]
fn test_known_score_values() {
    let scorer = Scorer::new(NgramTables::standard());

    // "THE": bigrams TH and HE (+1 each), trigram THE (+2).
    assert_eq!(scorer.score("THE"), 4.0);

    // "QZ": rare bigram (−10) plus rare letters Q and Z (−1 each).
    assert_eq!(scorer.score("QZ"), -12.0);
}

#[test]
fn test_rare_sequences_score_below_common_ones() {
    let scorer = Scorer::new(NgramTables::standard());
    assert!(scorer.score("THE AND THAT") > scorer.score("QZX JQZ XJQZ"));
}

#[test]
fn test_preset_weights_are_consistent() {
    for preset in [TablePreset::Standard, TablePreset::Compact] {
        let tables = NgramTables::preset(preset);
        assert!(!tables.is_empty());

        for (gram, weight) in &tables.entries {
            assert!(!gram.is_empty());
            assert!(gram.bytes().all(|b| b.is_ascii_uppercase()));
            assert_ne!(*weight, 0.0, "{} carries a zero weight", gram);
        }

        // Frequent trigrams must outweigh frequent bigrams, and the rare
        // penalties must dominate both.
        let weight_of = |g: &str| {
            tables
                .entries
                .iter()
                .find(|(gram, _)| gram == g)
                .map(|(_, w)| *w)
        };
        assert_eq!(weight_of("TH"), Some(1.0));
        assert_eq!(weight_of("THE"), Some(2.0));
        assert_eq!(weight_of("QZ"), Some(-10.0));
    }
}

#[test]
fn test_score_debug_matches_score() {
    let scorer = Scorer::new(NgramTables::standard());
    let text = "THERE IS NOTHING QUITE LIKE THE QUIET OF THE NIGHT";

    let details = scorer.score_debug(text);
    assert_eq!(details.total, scorer.score(text));
    assert!(details.entries.iter().all(|e| e.count > 0));

    let sum: f64 = details.entries.iter().map(|e| e.contribution).sum();
    assert_eq!(sum, details.total);
}
