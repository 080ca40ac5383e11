//! Rule-based Technical / Non-Technical role classifier.
//!
//! A JD is "technical" when enough distinct tokens land in a curated
//! technical vocabulary. Not a learned model — the vocabulary and the hit
//! threshold are both externally configurable (`TECH_VOCAB_PATH`,
//! `TECH_MIN_HITS`).

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

pub const DEFAULT_MIN_HITS: usize = 2;

/// Curated default vocabulary: languages, frameworks, infra and engineering
/// terms. Lower-case, matching the tokenizer's output (compounds included).
const DEFAULT_TECH_VOCAB: &[&str] = &[
    // languages
    "python", "java", "javascript", "typescript", "rust", "golang", "go",
    "c++", "c#", "ruby", "php", "swift", "kotlin", "scala", "sql", "html",
    "css", "bash", "shell", "f#",
    // frameworks & runtimes
    // ".NET" normalizes to the ambiguous "net" ("net profit"), so only the
    // spelled form is listed.
    "react", "angular", "vue", "node.js", "nodejs", "django", "flask",
    "spring", "rails", "express", "dotnet", "pytorch", "tensorflow",
    "laravel", "nextjs", "next.js",
    // infra & tooling
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible",
    "jenkins", "git", "github", "gitlab", "ci/cd", "linux", "unix",
    "postgresql", "postgres", "mysql", "mongodb", "redis", "kafka",
    "elasticsearch", "graphql", "grpc", "rest",
    // engineering terms
    "api", "apis", "backend", "frontend", "fullstack", "full-stack",
    "microservices", "devops", "sre", "algorithms", "database", "databases",
    "distributed", "scalability", "debugging", "engineering", "engineer",
    "developer", "programming", "software", "machine", "learning", "ml",
    "data", "cloud", "security", "testing", "automation",
];

/// Classifies a tokenized JD as technical or not by counting distinct
/// vocabulary hits.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    vocabulary: HashSet<String>,
    min_hits: usize,
}

impl Default for RoleClassifier {
    fn default() -> Self {
        Self::with_default_vocab(DEFAULT_MIN_HITS)
    }
}

impl RoleClassifier {
    pub fn new(vocabulary: HashSet<String>, min_hits: usize) -> Self {
        Self {
            vocabulary,
            min_hits: min_hits.max(1),
        }
    }

    pub fn with_default_vocab(min_hits: usize) -> Self {
        let vocabulary = DEFAULT_TECH_VOCAB
            .iter()
            .map(|term| term.to_string())
            .collect();
        Self::new(vocabulary, min_hits)
    }

    /// Loads a newline-delimited vocabulary file. Blank lines and `#`
    /// comments are skipped; terms are lower-cased to match the tokenizer.
    pub fn from_vocab_file(path: &Path, min_hits: usize) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read technical vocabulary at {}", path.display()))?;
        let vocabulary: HashSet<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();
        anyhow::ensure!(
            !vocabulary.is_empty(),
            "technical vocabulary at {} is empty",
            path.display()
        );
        Ok(Self::new(vocabulary, min_hits))
    }

    /// Number of distinct tokens found in the vocabulary.
    pub fn hits(&self, tokens: &[String]) -> usize {
        let unique: HashSet<&String> = tokens.iter().collect();
        unique
            .into_iter()
            .filter(|token| self.vocabulary.contains(token.as_str()))
            .count()
    }

    pub fn is_technical(&self, tokens: &[String]) -> bool {
        self.hits(tokens) >= self.min_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;
    use std::io::Write;

    #[test]
    fn test_technical_jd_classified_technical() {
        let classifier = RoleClassifier::default();
        let tokens = tokenize("Senior Python Developer with AWS and Docker experience");
        assert!(classifier.is_technical(&tokens));
    }

    #[test]
    fn test_non_technical_jd_classified_non_technical() {
        let classifier = RoleClassifier::default();
        let tokens = tokenize("Marketing manager with social media experience");
        assert!(!classifier.is_technical(&tokens));
    }

    #[test]
    fn test_hits_count_distinct_tokens() {
        let classifier = RoleClassifier::default();
        let tokens = tokenize("python python python");
        assert_eq!(classifier.hits(&tokens), 1);
    }

    #[test]
    fn test_threshold_is_respected() {
        let strict = RoleClassifier::with_default_vocab(4);
        let tokens = tokenize("Python developer using Docker");
        // 3 hits (python, developer, docker) < 4
        assert_eq!(strict.hits(&tokens), 3);
        assert!(!strict.is_technical(&tokens));
    }

    #[test]
    fn test_min_hits_floor_is_one() {
        let classifier = RoleClassifier::with_default_vocab(0);
        assert!(!classifier.is_technical(&tokenize("friendly office assistant")));
        assert!(classifier.is_technical(&tokenize("rust")));
    }

    #[test]
    fn test_compound_vocabulary_terms_match() {
        let classifier = RoleClassifier::default();
        let tokens = tokenize("CI/CD and Node.js work");
        assert_eq!(classifier.hits(&tokens), 2);
    }

    #[test]
    fn test_dotnet_spelled_form_counts_bare_net_does_not() {
        let classifier = RoleClassifier::default();
        // ".NET" loses its leading dot in normalization; the bare "net"
        // token is deliberately not vocabulary.
        assert_eq!(tokenize(".NET developer"), vec!["net", "developer"]);
        assert_eq!(classifier.hits(&tokenize(".NET developer")), 1);
        assert_eq!(classifier.hits(&tokenize("dotnet developer")), 2);
    }

    #[test]
    fn test_vocab_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# lab instruments").unwrap();
        writeln!(file, "Spectrometer").unwrap();
        writeln!(file, "centrifuge").unwrap();
        writeln!(file).unwrap();
        let classifier = RoleClassifier::from_vocab_file(file.path(), 1).unwrap();

        assert!(classifier.is_technical(&tokenize("spectrometer operation")));
        // default vocabulary no longer applies
        assert!(!classifier.is_technical(&tokenize("python aws docker")));
    }

    #[test]
    fn test_empty_vocab_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# only comments").unwrap();
        assert!(RoleClassifier::from_vocab_file(file.path(), 1).is_err());
    }
}
