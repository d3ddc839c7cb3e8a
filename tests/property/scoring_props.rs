//! Properties of the scoring primitives and normalization.

use column_suggest::{
    approximate_score, normalize, query_key, subsequence_score, substring_distances,
    Normalization,
};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d ]{0,20}").unwrap()
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Approximate: 0 exactly for containment, otherwise in (0, 1] at location 0.
    #[test]
    fn prop_approximate_range(
        candidate in text_strategy(),
        pattern in pattern_strategy(),
        distance in 1usize..200,
    ) {
        let score = approximate_score(&candidate, &pattern, distance, 0);
        prop_assert!((0.0..=1.0).contains(&score), "score {}", score);
        prop_assert_eq!(score == 0.0, candidate.contains(pattern.as_str()));
    }

    /// A start far past the end of the text is never better than the hit itself.
    #[test]
    fn prop_approximate_location_penalty(
        prefix in "[a-d]{0,10}",
        pattern in pattern_strategy(),
        extra in 0usize..40,
    ) {
        let candidate = format!("{} {}", prefix, pattern);
        let typo = format!("{}y", pattern);
        let hit = prefix.len() + 1;
        let at_hit = approximate_score(&candidate, &typo, 100, hit);
        let far = approximate_score(&candidate, &typo, 100, hit + 100 + extra);
        prop_assert!(at_hit <= far, "{} > {}", at_hit, far);
    }

    /// Subsequence: in [0, 1], and 1 exactly for containment.
    #[test]
    fn prop_subsequence_range(
        candidate in text_strategy(),
        pattern in pattern_strategy(),
        distance in 0usize..50,
    ) {
        let score = subsequence_score(&candidate, &pattern, distance);
        prop_assert!((0.0..=1.0).contains(&score), "score {}", score);
        prop_assert_eq!(score == 1.0, candidate.contains(pattern.as_str()));
    }

    /// Normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(value in "\\PC{0,24}") {
        let once = normalize(&value, Normalization::Alphanumeric);
        prop_assert_eq!(normalize(&once, Normalization::Alphanumeric), once.clone());
        prop_assert!(once.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' ') && !once.contains("  "));
    }

    /// Cache keys ignore case and spacing.
    #[test]
    fn prop_query_key_canonical(words in prop::collection::vec("[a-zA-Z]{1,5}", 1..4)) {
        let tidy = words.join(" ");
        let messy = format!("  {}\t", words.join("   "));
        prop_assert_eq!(query_key(&tidy), query_key(&messy));
        prop_assert_eq!(query_key(&query_key(&tidy)), query_key(&tidy));
    }

    /// Per-start edit counts are bounded by the pattern and zero only for containment.
    #[test]
    fn prop_substring_distances_bounded(
        text in text_strategy(),
        pattern in pattern_strategy(),
    ) {
        let p: Vec<char> = pattern.chars().collect();
        let t: Vec<char> = text.chars().collect();
        let distances = substring_distances(&p, &t);
        prop_assert_eq!(distances.len(), t.len() + 1);
        prop_assert!(distances.iter().all(|&d| d <= p.len()));
        prop_assert_eq!(distances.contains(&0), text.contains(pattern.as_str()));
    }
}
