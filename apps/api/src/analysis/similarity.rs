//! Cosine similarity and the overall match-score blend.
//!
//! Blend formula (documented decision — see DESIGN.md):
//! `overall = 100 · (0.7·√cosine + 0.3·overlap)`. The square root offsets
//! cosine's quadratic penalty on partial vocabulary overlap; both terms are
//! monotonic, so the blend is monotonic in similarity and in keyword overlap.

use serde::{Deserialize, Serialize};

use crate::analysis::tfidf::TermVector;

/// Cosine of the angle between two TF-IDF vectors, clamped to [0, 1].
/// Defined as 0 when either vector is all-zero — degenerate documents never
/// produce NaN.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_degenerate() || b.is_degenerate() {
        return 0.0;
    }
    (a.dot(b) / (a.norm() * b.norm())).clamp(0.0, 1.0)
}

/// Weights for blending cosine similarity with keyword overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendWeights {
    pub similarity: f64,
    pub overlap: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            similarity: 0.7,
            overlap: 0.3,
        }
    }
}

/// Overall match score on the 0–100 scale.
/// Inputs are expected in [0, 1]; output is clamped.
pub fn overall_score(cosine: f64, overlap: f64, weights: &BlendWeights) -> u32 {
    let blended = weights.similarity * cosine.max(0.0).sqrt() + weights.overlap * overlap;
    (blended * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Human-readable bucket for an overall score.
pub fn verdict(score: u32) -> &'static str {
    match score {
        75.. => "Excellent Match",
        50..=74 => "Good Match",
        30..=49 => "Fair Match",
        _ => "Poor Match",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tfidf::Corpus;
    use crate::analysis::tokenizer::tokenize;

    fn two_doc_vectors(a: &str, b: &str) -> (TermVector, TermVector) {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        let corpus = Corpus::from_token_docs(&[tokens_a.clone(), tokens_b.clone()]);
        (corpus.vectorize(&tokens_a), corpus.vectorize(&tokens_b))
    }

    #[test]
    fn test_self_similarity_is_one() {
        let (a, _) = two_doc_vectors("rust python aws docker", "rust python aws docker");
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_texts_similarity_is_one() {
        let (a, b) = two_doc_vectors("rust aws docker", "rust aws docker");
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_vocabulary_similarity_is_zero() {
        let (a, b) = two_doc_vectors("rust tokio axum", "marketing outreach branding");
        assert_eq!(cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_degenerate_vector_similarity_is_zero_not_nan() {
        let (a, _) = two_doc_vectors("rust tokio", "!!! ...");
        let corpus = Corpus::from_token_docs(&[tokenize("rust tokio")]);
        let empty = corpus.vectorize(&[]);
        let sim = cosine(&a, &empty);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn test_cosine_bounded() {
        let (a, b) = two_doc_vectors("rust go rust docker", "rust docker python");
        let sim = cosine(&a, &b);
        assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn test_overall_score_monotonic_in_similarity() {
        let w = BlendWeights::default();
        let mut previous = overall_score(0.0, 0.5, &w);
        for step in 1..=10 {
            let current = overall_score(step as f64 / 10.0, 0.5, &w);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_overall_score_monotonic_in_overlap() {
        let w = BlendWeights::default();
        let mut previous = overall_score(0.5, 0.0, &w);
        for step in 1..=10 {
            let current = overall_score(0.5, step as f64 / 10.0, &w);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_overall_score_extremes() {
        let w = BlendWeights::default();
        assert_eq!(overall_score(0.0, 0.0, &w), 0);
        assert_eq!(overall_score(1.0, 1.0, &w), 100);
    }

    #[test]
    fn test_overall_score_never_exceeds_100() {
        let w = BlendWeights {
            similarity: 1.0,
            overlap: 1.0,
        };
        assert_eq!(overall_score(1.0, 1.0, &w), 100);
    }

    #[test]
    fn test_verdict_buckets() {
        assert_eq!(verdict(100), "Excellent Match");
        assert_eq!(verdict(75), "Excellent Match");
        assert_eq!(verdict(74), "Good Match");
        assert_eq!(verdict(50), "Good Match");
        assert_eq!(verdict(49), "Fair Match");
        assert_eq!(verdict(30), "Fair Match");
        assert_eq!(verdict(29), "Poor Match");
        assert_eq!(verdict(0), "Poor Match");
    }
}
