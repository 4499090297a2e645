//! Whole-word, case-insensitive removal of removal-set members.
//!
//! Two strategies share one contract. [`TokenRemover`] walks maximal runs of
//! `[A-Za-z'-]` and drops runs found in the set, so `well-known` is only
//! removed when `well-known` itself is listed. [`AlternationRemover`] compiles
//! the set into a single `\b(?:w1|w2|..)\b` regex, which also removes `well`
//! out of `well-known`. Both collapse whitespace afterwards.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

use wordsieve_core::traits::WordRemover;
use wordsieve_core::types::MatchMode;

use crate::removal_set::RemovalSet;

lazy_static! {
    static ref WORD_RUN: Regex = Regex::new(r"[A-Za-z'\-]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Large block lists produce large alternations.
const ALTERNATION_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// Collapses every whitespace run to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

pub struct TokenRemover {
    words: RemovalSet,
}

impl TokenRemover {
    pub fn new(words: RemovalSet) -> Self { Self { words } }
}

impl WordRemover for TokenRemover {
    fn remove_words(&self, text: &str) -> String {
        if self.words.is_empty() {
            return collapse_whitespace(text);
        }
        let stripped = WORD_RUN.replace_all(text, |caps: &regex::Captures| {
            let run = &caps[0];
            if self.words.contains(run.to_lowercase().as_str()) { String::new() } else { run.to_string() }
        });
        collapse_whitespace(&stripped)
    }
}

pub struct AlternationRemover {
    pattern: Option<Regex>,
}

impl AlternationRemover {
    pub fn new(words: &RemovalSet) -> Result<Self> {
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }
        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        // longest first so a member never shadows a longer one sharing its prefix
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = sorted.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .size_limit(ALTERNATION_SIZE_LIMIT)
            .build()
            .with_context(|| format!("Failed to compile removal pattern for {} words", words.len()))?;
        Ok(Self { pattern: Some(pattern) })
    }
}

impl WordRemover for AlternationRemover {
    fn remove_words(&self, text: &str) -> String {
        let stripped = match &self.pattern {
            Some(re) => re.replace_all(text, ""),
            None => Cow::Borrowed(text),
        };
        collapse_whitespace(&stripped)
    }
}

/// Remover for `mode` over `words`.
pub fn build_remover(mode: MatchMode, words: &RemovalSet) -> Result<Box<dyn WordRemover>> {
    Ok(match mode {
        MatchMode::Token => Box::new(TokenRemover::new(words.clone())),
        MatchMode::Alternation => Box::new(AlternationRemover::new(words)?),
    })
}
