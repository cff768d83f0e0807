#![allow(dead_code)]

//! Lexical similarity between two normalized texts.
//!
//! Builds a TF-IDF vector space over the two-document corpus `{a, b}` and
//! returns the cosine of the two document vectors as a percentage.
//!
//! Weighting:
//! - features are tokens of two or more letters
//! - `tf` is the raw token count
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, with `n = 2`
//! - vectors are L2-normalized, so the cosine is their dot product

use std::collections::BTreeMap;

use crate::analysis::normalizer::NormalizedText;

const CORPUS_SIZE: f64 = 2.0;
const MIN_FEATURE_LEN: usize = 2;

/// Similarity percentage in `[0, 100]`, rounded to two decimals.
pub fn similarity(a: &NormalizedText, b: &NormalizedText) -> f64 {
    round2(raw_similarity(a, b))
}

/// Unrounded similarity percentage in `[0, 100]`.
///
/// Degenerate corpora (no features at all, or one side without features)
/// score 0.0.
pub fn raw_similarity(a: &NormalizedText, b: &NormalizedText) -> f64 {
    let tf_a = term_counts(a);
    let tf_b = term_counts(b);

    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    let weights_a = tfidf_unit_vector(&tf_a, &tf_b);
    let weights_b = tfidf_unit_vector(&tf_b, &tf_a);

    // BTreeMap iteration is ordered, so the sum is the same in both directions.
    let cosine: f64 = weights_a
        .iter()
        .filter_map(|(term, wa)| weights_b.get(term).map(|wb| wa * wb))
        .sum();

    (cosine * 100.0).clamp(0.0, 100.0)
}

/// Rounds to two decimals, sending exact ties to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn term_counts(text: &NormalizedText) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for token in text.tokens().filter(|t| t.len() >= MIN_FEATURE_LEN) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn smoothed_idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}

/// TF-IDF weights of `doc`, L2-normalized. `other` is the second document of
/// the corpus and only contributes document frequencies.
fn tfidf_unit_vector<'a>(
    doc: &BTreeMap<&'a str, u32>,
    other: &BTreeMap<&str, u32>,
) -> BTreeMap<&'a str, f64> {
    let mut weights: BTreeMap<&str, f64> = doc
        .iter()
        .map(|(term, &count)| {
            let df = if other.contains_key(term) { 2.0 } else { 1.0 };
            (*term, count as f64 * smoothed_idf(df))
        })
        .collect();

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in weights.values_mut() {
            *w /= norm;
        }
    }
    weights
}
