use crate::render;
use moodtrack_core::ClassifierConfig;

pub fn run(config: ClassifierConfig, text: &str, json: bool) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Please enter some text to analyze your mood");
    }

    let classifier = super::build_classifier(config);
    let result = classifier.classify_detailed(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render::classification(&result));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        assert!(run(ClassifierConfig::default(), "  ", false).is_err());
    }

    #[test]
    fn test_classify_runs() {
        assert!(run(ClassifierConfig::default(), "so tired today", true).is_ok());
    }
}
