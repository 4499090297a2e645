//! wordsieve-lemma
//!
//! Part-of-speech aware lemmatization of English text lines: a treebank-style
//! tokenizer, a lexicon and rule based tagger, and a Morphy-like lemmatizer.

pub mod lemmatizer;
pub mod lexicon;
pub mod tagger;
pub mod tokenize;

use wordsieve_core::traits::Lemmatize;

pub use lemmatizer::Lemmatizer;
pub use tagger::Tagger;
pub use tokenize::{is_word, tokenize};

/// Tokenizes, tags and lemmatizes one line at a time.
///
/// Word tokens are replaced by their lowercase lemma; numbers and punctuation
/// are kept as they were. Tokens are re-joined with single spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextLemmatizer {
    tagger: Tagger,
    lemmatizer: Lemmatizer,
}

impl TextLemmatizer {
    pub fn new() -> Self {
        Self { tagger: Tagger::new(), lemmatizer: Lemmatizer::new() }
    }
}

impl Lemmatize for TextLemmatizer {
    fn lemmatize_line(&self, line: &str) -> String {
        let tokens = tokenize(line.trim());
        let tags = self.tagger.tag(&tokens);
        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| {
                if is_word(token) { self.lemmatizer.lemmatize_tagged(token, tag) } else { token.clone() }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn get_default_lemmatizer() -> Box<dyn Lemmatize> {
    Box::new(TextLemmatizer::new())
}
