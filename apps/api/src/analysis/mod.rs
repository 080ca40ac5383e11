// Resume / job-description matching engine.
// Pure pipeline: tokenize → TF-IDF vectorize → cosine + keyword gap → rank.
// All HTTP concerns live in handlers; nothing below them touches the DB.

pub mod classifier;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;
