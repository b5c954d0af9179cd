pub mod classify;
pub mod library;
pub mod session;
pub mod version;

use moodtrack_core::{Classifier, ClassifierConfig};
use moodtrack_sentiment::LexiconEstimator;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClassifierConfig> {
    match path {
        Some(p) => {
            let config = ClassifierConfig::load(p)?;
            tracing::debug!(path = %p.display(), "loaded classifier config");
            Ok(config)
        }
        None => Ok(ClassifierConfig::default()),
    }
}

pub fn build_classifier(config: ClassifierConfig) -> Classifier<LexiconEstimator> {
    Classifier::new(config, LexiconEstimator::new())
}
