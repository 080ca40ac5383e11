//! TF-IDF vectorizer.
//!
//! `Corpus` holds the document-frequency table for one snapshot of tokenized
//! documents; `TermVector` is the weighted representation of a single
//! document against that snapshot. Weighting: raw term count ×
//! `ln(1 + N / (1 + df))`. The additive smoothing keeps every weight strictly
//! positive and well-defined for a one-document corpus and for terms the
//! corpus has never seen (df = 0).

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Document-frequency statistics over one corpus snapshot.
///
/// Rebuilt from scratch per request — corpus mutation (upload/delete) is the
/// document store's concern, and the caller snapshots before vectorizing.
#[derive(Debug, Clone)]
pub struct Corpus {
    doc_count: usize,
    doc_freq: HashMap<String, usize>,
}

impl Corpus {
    /// Builds the df table from tokenized documents. A term's df counts
    /// documents containing it, not total occurrences.
    pub fn from_token_docs<T: AsRef<[String]>>(docs: &[T]) -> Self {
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in docs {
            let unique: HashSet<&String> = doc.as_ref().iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }
        Self {
            doc_count: docs.len(),
            doc_freq,
        }
    }

    pub fn len(&self) -> usize {
        self.doc_count
    }

    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    /// Smoothed inverse document frequency. Strictly positive for any
    /// non-empty corpus; degenerates to the constant `ln(1 + N/(1+df))`
    /// spread when N = 1.
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freq.get(term).copied().unwrap_or(0);
        (1.0 + self.doc_count as f64 / (1.0 + df as f64)).ln()
    }

    /// Vectorizes one tokenized document against this corpus's statistics.
    pub fn vectorize(&self, tokens: &[String]) -> TermVector {
        let mut counts: HashMap<&String, usize> = HashMap::new();
        // First-appearance order makes ranked-term ties deterministic.
        let mut order: Vec<&String> = Vec::new();
        for token in tokens {
            let entry = counts.entry(token).or_insert(0);
            if *entry == 0 {
                order.push(token);
            }
            *entry += 1;
        }

        let mut weights = HashMap::with_capacity(order.len());
        let mut ranked: Vec<(String, f64)> = Vec::with_capacity(order.len());
        for term in order {
            let weight = counts[term] as f64 * self.idf(term);
            weights.insert(term.clone(), weight);
            ranked.push((term.clone(), weight));
        }
        // Stable: equal-weight terms keep first-appearance order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        TermVector {
            weights,
            ranked,
            norm,
        }
    }
}

/// TF-IDF weights for one document. Absent terms weigh zero.
#[derive(Debug, Clone, Serialize)]
pub struct TermVector {
    weights: HashMap<String, f64>,
    /// Terms by descending weight, ties in first-appearance order.
    ranked: Vec<(String, f64)>,
    norm: f64,
}

impl TermVector {
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// True when no token survived normalization. Similarity against a
    /// degenerate vector is defined as 0, never NaN.
    pub fn is_degenerate(&self) -> bool {
        self.weights.is_empty() || self.norm == 0.0
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        // Iterate the smaller map.
        let (a, b) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        a.weights
            .iter()
            .map(|(term, w)| w * b.weight(term))
            .sum()
    }

    /// Terms ordered by descending weight (deterministic on ties).
    pub fn ranked_terms(&self) -> &[(String, f64)] {
        &self.ranked
    }

    pub fn term_set(&self) -> HashSet<&str> {
        self.weights.keys().map(String::as_str).collect()
    }
}
