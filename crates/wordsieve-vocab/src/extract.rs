use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;

/// Finds alphabetic words of at least `min_len` ASCII letters.
pub struct VocabularyExtractor {
    word: Regex,
}

impl VocabularyExtractor {
    pub fn new(min_len: usize) -> Result<Self> {
        let word = Regex::new(&format!(r"\b[a-zA-Z]{{{min_len},}}\b"))
            .with_context(|| format!("Failed to build word pattern for min length {min_len}"))?;
        Ok(Self { word })
    }

    /// Every matching word, lowercased, in text order. Duplicates are kept.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.word.find_iter(text).map(|m| m.as_str().to_ascii_lowercase()).collect()
    }
}

/// Drops repeats, keeping each word where it first appeared.
pub fn dedupe(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_lowercase_words_of_min_length() {
        let extractor = VocabularyExtractor::new(2).unwrap();
        assert_eq!(
            extractor.extract("Cat be run fast . a cat RUN 3d x2 well-known"),
            vec!["cat", "be", "run", "fast", "cat", "run", "well", "known"]
        );
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let extractor = VocabularyExtractor::new(2).unwrap();
        let unique = dedupe(extractor.extract("Dog cat DOG bird Cat dog"));
        assert_eq!(unique, vec!["dog", "cat", "bird"]);
    }

    #[test]
    fn dedupe_leaves_no_case_insensitive_duplicates() {
        let extractor = VocabularyExtractor::new(2).unwrap();
        let unique = dedupe(extractor.extract("The THE the tHe then Then"));
        let lowered: HashSet<String> = unique.iter().map(|w| w.to_lowercase()).collect();
        assert_eq!(lowered.len(), unique.len());
        assert_eq!(unique, vec!["the", "then"]);
    }

    #[test]
    fn min_length_is_configurable() {
        let extractor = VocabularyExtractor::new(4).unwrap();
        assert_eq!(extractor.extract("a an the then there"), vec!["then", "there"]);
    }
}
