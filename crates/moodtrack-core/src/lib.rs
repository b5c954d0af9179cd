//! Core mood types and the keyword + sentiment classifier

mod classifier;
mod config;
mod error;
mod estimator;
mod keywords;
mod types;

pub use classifier::{Classification, Classifier};
pub use config::ClassifierConfig;
pub use error::MoodError;
pub use estimator::{NeutralEstimator, SentimentEstimator};
pub use keywords::keywords;
pub use types::{MoodLabel, SentimentSignal};
