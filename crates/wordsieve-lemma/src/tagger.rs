//! Part-of-speech tagging with Penn Treebank tags.
//!
//! Tagging is done in two passes. The first assigns each token a tag from the
//! closed-class lexicon, the irregular-verb table or its suffix. The second
//! walks left to right and rewrites tags that contradict the previous tag.

use crate::lemmatizer::comparative_base;
use crate::lexicon::{irregular_verb_tag, is_be_form, is_subject_pronoun, ADJECTIVES, FIXED};
use crate::tokenize::is_word;

const ADJECTIVE_SUFFIXES: [&str; 8] = ["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

#[derive(Debug, Default, Clone, Copy)]
pub struct Tagger;

impl Tagger {
    pub fn new() -> Self { Self }

    /// One tag per token, in order.
    pub fn tag(&self, tokens: &[String]) -> Vec<&'static str> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_ascii_lowercase()).collect();
        let mut tags: Vec<&'static str> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let sentence_start = i == 0 || tags[i - 1] == ".";
            tags.push(initial_tag(token, &lowered[i], sentence_start));
        }
        for i in 1..tags.len() {
            tags[i] = contextual_tag(tags[i - 1], &lowered[i - 1], tags[i]);
        }
        tags
    }
}

fn initial_tag(token: &str, lower: &str, sentence_start: bool) -> &'static str {
    if !is_word(token) {
        return punctuation_tag(token);
    }
    if let Some(tag) = FIXED.get(lower).copied() {
        return tag;
    }
    if let Some(tag) = irregular_verb_tag(lower) {
        return tag;
    }
    if !sentence_start && token.starts_with(|c: char| c.is_ascii_uppercase()) {
        return "NNP";
    }
    suffix_tag(lower)
}

fn punctuation_tag(token: &str) -> &'static str {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return "CD";
    }
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "-" => ":",
        _ => "SYM",
    }
}

fn suffix_tag(w: &str) -> &'static str {
    let n = w.len();
    if n > 4 && w.ends_with("ly") {
        return "RB";
    }
    if n > 4 && w.ends_with("ing") && w[..n - 3].bytes().any(|b| b"aeiouy".contains(&b)) {
        return "VBG";
    }
    if n > 4 && w.ends_with("ed") && !w.ends_with("eed") {
        return "VBD";
    }
    if n > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
        return "JJ";
    }
    if ADJECTIVES.contains(w) {
        return "JJ";
    }
    if comparative_base(w).is_some() {
        return if w.ends_with("est") { "JJS" } else { "JJR" };
    }
    if n > 3 && w.ends_with('s') && !["ss", "us", "is"].iter().any(|s| w.ends_with(s)) {
        return "NNS";
    }
    "NN"
}

fn contextual_tag(prev: &'static str, prev_lower: &str, cur: &'static str) -> &'static str {
    match (prev, cur) {
        // to run, can walk
        ("TO" | "MD", "NN" | "NNS" | "VBP" | "VBZ" | "VBD") => "VB",
        // the cat runs, she walks
        ("NN" | "NNP", "NNS") => "VBZ",
        ("PRP", "NNS") if is_subject_pronoun(prev_lower) => "VBZ",
        // they walk
        ("PRP", "NN") if is_subject_pronoun(prev_lower) => "VBP",
        // the running, the painted wall
        ("DT" | "PRP$", "VBG") => "NN",
        ("DT" | "PRP$", "VBD" | "VBN") => "JJ",
        // was taken
        (_, "VBD") if is_be_form(prev_lower) => "VBN",
        _ => cur,
    }
}
