//! Keyword gap analysis: which of the JD's top-weighted terms a resume
//! covers, and which it is missing.

use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::tfidf::TermVector;

/// Display caps. The overlap ratio is computed before capping.
pub const MATCHED_CAP: usize = 10;
pub const MISSING_CAP: usize = 15;

/// Matched/missing partition of the JD's terms, ordered by descending JD
/// TF-IDF weight. The two lists are always disjoint.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordBreakdown {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Fraction of JD terms present in the resume, in [0, 1]. Uncapped.
    #[serde(skip)]
    pub overlap_ratio: f64,
}

/// Partitions the JD's ranked terms against the resume's term set.
pub fn keyword_gap(jd: &TermVector, resume_terms: &HashSet<&str>) -> KeywordBreakdown {
    let ranked = jd.ranked_terms();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut matched_total = 0usize;

    for (term, _) in ranked {
        if resume_terms.contains(term.as_str()) {
            matched_total += 1;
            if matched.len() < MATCHED_CAP {
                matched.push(term.clone());
            }
        } else if missing.len() < MISSING_CAP {
            missing.push(term.clone());
        }
    }

    let overlap_ratio = if ranked.is_empty() {
        0.0
    } else {
        matched_total as f64 / ranked.len() as f64
    };

    KeywordBreakdown {
        matched,
        missing,
        overlap_ratio,
    }
}
