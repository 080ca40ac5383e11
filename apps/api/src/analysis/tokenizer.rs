//! Tokenizer / normalizer for job descriptions and resumes.
//!
//! Deterministic and locale-independent: lower-cased ASCII rules, no ICU.
//! Compound policy: hyphen/slash/dot/plus/sharp-joined terms survive as a
//! single token (`CI/CD` → `ci/cd`, `C++` → `c++`, `Node.js` → `node.js`).
//! Leading/trailing punctuation is trimmed; interior joiners are kept.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Minimum token length after trimming. Drops bare digits and single letters.
pub const MIN_TOKEN_LEN: usize = 2;

/// English function words plus generic HR filler. The filler matters: scoring
/// must key on substantive vocabulary, not on "experience" appearing in both
/// texts.
const STOP_WORDS: &[&str] = &[
    // function words
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "for", "of",
    "in", "on", "at", "to", "from", "by", "with", "without", "as", "is",
    "are", "was", "were", "be", "been", "being", "am", "do", "does", "did",
    "have", "has", "had", "having", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "this", "that", "these",
    "those", "it", "its", "we", "you", "your", "our", "their", "they",
    "them", "what", "which", "who", "whom", "how", "when", "where", "why",
    "not", "no", "nor", "so", "than", "too", "very", "just", "about",
    "into", "over", "under", "here", "there", "all", "any", "both", "each",
    "few", "more", "most", "other", "some", "such", "only", "own", "same",
    "per", "via", "etc", "also", "well", "within", "across", "between",
    "up", "down", "out", "off", "new", "us",
    // HR filler
    "experience", "experienced", "senior", "junior", "years", "year",
    "skills", "skill", "work", "working", "strong", "knowledge", "ability",
    "proficient", "proficiency", "familiar", "familiarity", "plus",
    "preferred", "required", "requirements", "requirement", "role",
    "position", "job", "candidate", "candidates", "opportunity", "looking",
    "seeking", "nice", "good", "great", "excellent", "background",
    "relevant", "responsibilities", "including", "include", "includes",
    "using", "use", "used", "able",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Splits raw text into normalized tokens, preserving input order
/// (duplicates included — term frequency is counted downstream).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(normalize_token)
        .collect()
}

/// Normalizes a single whitespace-delimited word. Returns `None` for tokens
/// that trim to nothing, fall under the length floor, or are stop-words.
fn normalize_token(word: &str) -> Option<String> {
    let lowered = word.to_lowercase();
    // Trailing '+' and '#' are significant ("c++", "f#"); everything else
    // non-alphanumeric gets trimmed off the ends.
    let trimmed = lowered
        .trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
        .trim_end_matches(|c: char| !c.is_ascii_alphanumeric() && c != '+' && c != '#');

    if trimmed.chars().count() < MIN_TOKEN_LEN {
        return None;
    }
    if !trimmed.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if stop_words().contains(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}
