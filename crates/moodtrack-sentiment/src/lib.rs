//! Lexicon-based polarity/subjectivity estimation

mod lexicon;
mod estimator;

pub use estimator::{LexiconEntry, LexiconEstimator};
