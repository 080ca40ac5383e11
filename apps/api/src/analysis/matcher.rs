//! Matching engine: the two public operations behind `/api/analysis/*`.
//!
//! Stateless pure pipeline — text in, scores out. Each call builds its own
//! corpus statistics from the documents it is handed; nothing is cached or
//! mutated, so one `Arc<MatchEngine>` is shared across requests without
//! locking.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::classifier::RoleClassifier;
use crate::analysis::keywords::keyword_gap;
use crate::analysis::similarity::{cosine, overall_score, verdict, BlendWeights};
use crate::analysis::tfidf::Corpus;
use crate::analysis::tokenizer::tokenize;
use crate::errors::AppError;

/// One resume snapshot handed to `match_against_corpus`. The caller (the
/// document store handler) snapshots the corpus before vectorizing.
#[derive(Debug, Clone)]
pub struct CandidateDoc {
    pub id: Uuid,
    pub name: String,
    pub text: String,
}

/// Result of comparing one JD against one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub similarity_score: u32,
    pub verdict: String,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub is_technical: bool,
}

/// One ranked entry of a corpus match.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub id: Uuid,
    pub name: String,
    pub match_percentage: u32,
    pub tfidf_similarity: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub is_technical: bool,
}

pub struct MatchEngine {
    classifier: RoleClassifier,
    weights: BlendWeights,
}

impl MatchEngine {
    pub fn new(classifier: RoleClassifier, weights: BlendWeights) -> Self {
        Self {
            classifier,
            weights,
        }
    }

    /// Compares one JD against one resume. IDF statistics come from the
    /// two-document corpus.
    pub fn analyze(&self, jd_text: &str, resume_text: &str) -> Result<AnalysisReport, AppError> {
        require_text("jd_text", jd_text)?;
        require_text("resume_text", resume_text)?;

        let jd_tokens = tokenize(jd_text);
        let resume_tokens = tokenize(resume_text);
        let is_technical = self.classifier.is_technical(&jd_tokens);

        let corpus = Corpus::from_token_docs(&[jd_tokens.clone(), resume_tokens.clone()]);
        let jd_vector = corpus.vectorize(&jd_tokens);
        let resume_vector = corpus.vectorize(&resume_tokens);

        let similarity = cosine(&jd_vector, &resume_vector);
        let breakdown = keyword_gap(&jd_vector, &resume_vector.term_set());
        let score = overall_score(similarity, breakdown.overlap_ratio, &self.weights);

        Ok(AnalysisReport {
            overall_score: score,
            similarity_score: to_percent(similarity),
            verdict: verdict(score).to_string(),
            matched_keywords: breakdown.matched,
            missing_keywords: breakdown.missing,
            is_technical,
        })
    }

    /// Ranks every candidate in the snapshot against the JD, non-increasing
    /// by match percentage; ties keep snapshot (insertion) order. An empty
    /// snapshot ranks to an empty list, not an error.
    pub fn match_against_corpus(
        &self,
        jd_text: &str,
        candidates: &[CandidateDoc],
    ) -> Result<Vec<RankedCandidate>, AppError> {
        require_text("jd_text", jd_text)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let jd_tokens = tokenize(jd_text);
        let is_technical = self.classifier.is_technical(&jd_tokens);

        let token_docs: Vec<Vec<String>> = candidates
            .iter()
            .map(|candidate| tokenize(&candidate.text))
            .collect();
        // IDF statistics come from the resume corpus; the JD is vectorized
        // against them (unseen JD terms get the df = 0 ceiling).
        let corpus = Corpus::from_token_docs(&token_docs);
        let jd_vector = corpus.vectorize(&jd_tokens);

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .zip(&token_docs)
            .map(|(candidate, tokens)| {
                let resume_vector = corpus.vectorize(tokens);
                let similarity = cosine(&jd_vector, &resume_vector);
                let breakdown = keyword_gap(&jd_vector, &resume_vector.term_set());
                let score = overall_score(similarity, breakdown.overlap_ratio, &self.weights);
                RankedCandidate {
                    id: candidate.id,
                    name: candidate.name.clone(),
                    match_percentage: score,
                    tfidf_similarity: to_percent(similarity),
                    matched_keywords: breakdown.matched,
                    missing_keywords: breakdown.missing,
                    is_technical,
                }
            })
            .collect();

        // Stable sort: equal scores keep insertion order.
        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        Ok(ranked)
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON_JD: &str = "Senior Python Developer with AWS and Docker experience";
    const PYTHON_RESUME: &str = "5 years Python, AWS, Docker, Kubernetes";
    const MARKETING_RESUME: &str = "Marketing manager with social media experience";

    fn engine() -> MatchEngine {
        MatchEngine::new(RoleClassifier::default(), BlendWeights::default())
    }

    fn candidate(name: &str, text: &str) -> CandidateDoc {
        CandidateDoc {
            id: Uuid::new_v4(),
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_analyze_strong_candidate_scores_high() {
        let report = engine().analyze(PYTHON_JD, PYTHON_RESUME).unwrap();
        assert!(
            report.overall_score > 70,
            "Expected >70, got {}",
            report.overall_score
        );
        assert!(report.is_technical);
        // "near-empty" gaps: at most the one non-overlapping JD term
        assert!(report.missing_keywords.len() <= 1);
    }

    #[test]
    fn test_analyze_weak_candidate_scores_low() {
        let report = engine().analyze(PYTHON_JD, MARKETING_RESUME).unwrap();
        assert!(
            report.overall_score < 30,
            "Expected <30, got {}",
            report.overall_score
        );
        for term in ["python", "aws", "docker"] {
            assert!(
                report.missing_keywords.contains(&term.to_string()),
                "missing_keywords lacked {term}: {:?}",
                report.missing_keywords
            );
        }
    }

    #[test]
    fn test_analyze_identical_texts_max_similarity() {
        let report = engine().analyze(PYTHON_JD, PYTHON_JD).unwrap();
        assert_eq!(report.similarity_score, 100);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.verdict, "Excellent Match");
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_analyze_empty_jd_rejected() {
        let err = engine().analyze("   ", PYTHON_RESUME).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_analyze_empty_resume_rejected() {
        let err = engine().analyze(PYTHON_JD, "\n\t ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_analyze_punctuation_only_resume_scores_zero() {
        // Survives validation but normalizes to nothing: similarity is
        // defined as 0, no error.
        let report = engine().analyze(PYTHON_JD, "!!! --- ...").unwrap();
        assert_eq!(report.similarity_score, 0);
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.verdict, "Poor Match");
    }

    #[test]
    fn test_matched_and_missing_disjoint() {
        let report = engine().analyze(PYTHON_JD, PYTHON_RESUME).unwrap();
        for term in &report.matched_keywords {
            assert!(!report.missing_keywords.contains(term));
        }
    }

    #[test]
    fn test_match_empty_corpus_returns_empty_list() {
        let ranked = engine().match_against_corpus(PYTHON_JD, &[]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_match_single_document_corpus_is_finite() {
        let ranked = engine()
            .match_against_corpus(PYTHON_JD, &[candidate("Ada", PYTHON_RESUME)])
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].match_percentage <= 100);
        assert!(ranked[0].tfidf_similarity <= 100);
    }

    #[test]
    fn test_match_ranking_sorted_non_increasing() {
        let corpus = vec![
            candidate("Marketing", MARKETING_RESUME),
            candidate("Engineer", PYTHON_RESUME),
            candidate("Adjacent", "Java developer, some Docker exposure"),
        ];
        let ranked = engine().match_against_corpus(PYTHON_JD, &corpus).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
        assert_eq!(ranked[0].name, "Engineer");
    }

    #[test]
    fn test_match_jd_clone_ranks_top() {
        let corpus = vec![
            candidate("Marketing", MARKETING_RESUME),
            candidate("Clone", PYTHON_JD),
            candidate("Engineer", PYTHON_RESUME),
        ];
        let ranked = engine().match_against_corpus(PYTHON_JD, &corpus).unwrap();
        assert_eq!(ranked[0].name, "Clone");
    }

    #[test]
    fn test_match_ties_keep_insertion_order() {
        let corpus = vec![
            candidate("First", MARKETING_RESUME),
            candidate("Second", MARKETING_RESUME),
            candidate("Third", MARKETING_RESUME),
        ];
        let ranked = engine().match_against_corpus(PYTHON_JD, &corpus).unwrap();
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_match_empty_jd_rejected() {
        let err = engine()
            .match_against_corpus("", &[candidate("Ada", PYTHON_RESUME)])
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_classification_carried_into_ranking() {
        let ranked = engine()
            .match_against_corpus(PYTHON_JD, &[candidate("Ada", PYTHON_RESUME)])
            .unwrap();
        assert!(ranked[0].is_technical);

        let non_tech = engine()
            .match_against_corpus(
                "Office manager needed for reception and scheduling",
                &[candidate("Ada", PYTHON_RESUME)],
            )
            .unwrap();
        assert!(!non_tech[0].is_technical);
    }
}
