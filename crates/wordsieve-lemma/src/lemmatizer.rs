//! Dictionary-free lemmatization by exception lookup and suffix detachment.
//!
//! Each word class first consults its exception table, then strips inflection
//! suffixes. Verb stems are repaired afterwards: a doubled final consonant is
//! undone (`runn` -> `run`) and a silent `e` is restored where English spelling
//! drops it (`mak` -> `make`). Adjective candidates must be known base
//! adjectives, so `clever` or `other` are never reduced.

use wordsieve_core::types::Pos;

use crate::lexicon::{ADJECTIVES, ADJ_EXC, ADV_EXC, NOUN_EXC, NOUN_INVARIANT, VERB_EXC};

/// Two-letter stem endings that take a silent `e` when preceded by a consonant.
const E_TAILS: [&str; 12] = ["at", "ar", "id", "ib", "in", "ir", "ud", "ut", "ul", "um", "ag", "ur"];

#[derive(Debug, Default, Clone, Copy)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self { Self }

    /// Lemma of `word` read as `pos`. The result is always lowercase.
    pub fn lemmatize(&self, word: &str, pos: Pos) -> String {
        let w = word.to_ascii_lowercase();
        match pos {
            Pos::Noun => noun(&w),
            Pos::Verb => verb(&w),
            Pos::Adjective => adjective(&w),
            Pos::Adverb => ADV_EXC.get(w.as_str()).map(|b| b.to_string()).unwrap_or(w),
        }
    }

    /// Lemma for a Penn Treebank tag. Proper nouns go through the noun rules.
    pub fn lemmatize_tagged(&self, word: &str, tag: &str) -> String {
        self.lemmatize(word, Pos::from_treebank(tag))
    }
}

fn noun(w: &str) -> String {
    if let Some(base) = NOUN_EXC.get(w) {
        return base.to_string();
    }
    if NOUN_INVARIANT.contains(w) || w.len() <= 3 || !w.ends_with('s') || ["ss", "us", "is", "'s"].iter().any(|s| w.ends_with(s)) {
        return w.to_string();
    }
    if w.len() > 4 {
        if let Some(stem) = w.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if ["sses", "ches", "shes", "xes", "zzes"].iter().any(|s| w.ends_with(s)) {
        return w[..w.len() - 2].to_string();
    }
    w[..w.len() - 1].to_string()
}

fn verb(w: &str) -> String {
    if let Some(base) = VERB_EXC.get(w) {
        return base.to_string();
    }
    if w.len() <= 3 {
        return w.to_string();
    }
    if w.ends_with('s') {
        if ["ss", "us", "is"].iter().any(|s| w.ends_with(s)) {
            return w.to_string();
        }
        if w.len() > 4 {
            if let Some(stem) = w.strip_suffix("ies") {
                return format!("{stem}y");
            }
        }
        if ["sses", "ches", "shes", "xes", "zzes"].iter().any(|s| w.ends_with(s)) {
            return w[..w.len() - 2].to_string();
        }
        return w[..w.len() - 1].to_string();
    }
    if let Some(stem) = w.strip_suffix("ied") {
        return if w.len() > 4 { format!("{stem}y") } else { w[..w.len() - 1].to_string() };
    }
    if w.ends_with("eed") {
        return w.to_string();
    }
    if w.len() >= 5 {
        if let Some(stem) = w.strip_suffix("ed").or_else(|| w.strip_suffix("ing")) {
            if has_vowel(stem) {
                return repair_stem(stem);
            }
        }
    }
    w.to_string()
}

fn adjective(w: &str) -> String {
    if let Some(base) = ADJ_EXC.get(w) {
        return base.to_string();
    }
    comparative_base(w).unwrap_or_else(|| w.to_string())
}

/// Base adjective behind a comparative or superlative form, if it is a known one.
pub(crate) fn comparative_base(w: &str) -> Option<String> {
    for suffix in ["est", "er"] {
        let Some(stem) = w.strip_suffix(suffix) else { continue };
        if stem.len() < 2 {
            continue;
        }
        let mut candidates = vec![stem.to_string()];
        if let Some(undoubled) = undouble(stem) {
            candidates.push(undoubled.to_string());
        }
        candidates.push(format!("{stem}e"));
        if let Some(head) = stem.strip_suffix('i') {
            candidates.push(format!("{head}y"));
        }
        if let Some(found) = candidates.into_iter().find(|c| ADJECTIVES.contains(c.as_str())) {
            return Some(found);
        }
    }
    None
}

/// Undoes consonant doubling and restores a dropped `e` on a verb stem.
fn repair_stem(stem: &str) -> String {
    if let Some(undoubled) = undouble(stem) {
        return undoubled.to_string();
    }
    if needs_silent_e(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn undouble(stem: &str) -> Option<&str> {
    let b = stem.as_bytes();
    let n = b.len();
    if n >= 4 && b[n - 1] == b[n - 2] && b"bdgkmnprt".contains(&b[n - 1]) {
        Some(&stem[..n - 1])
    } else {
        None
    }
}

fn needs_silent_e(stem: &str) -> bool {
    let b = stem.as_bytes();
    let n = b.len();
    if n < 2 {
        return false;
    }
    let last = b[n - 1];
    let before = b[n - 2];
    if last == b'v' || last == b'c' {
        return true;
    }
    if stem.ends_with("iz") || stem.ends_with("yz") || stem.ends_with("plet") || stem.ends_with("elet") || stem.ends_with("mpet") {
        return true;
    }
    if last == b'l' && is_consonant(b, n - 2) && !b"lrw".contains(&before) {
        return true;
    }
    if last == b'g' && b"rdl".contains(&before) {
        return true;
    }
    if last == b's' && before != b's' && !stem.ends_with("cus") {
        return true;
    }
    if last == b'z' && is_vowel(b, n - 2) {
        return true;
    }
    if n >= 3 && is_consonant(b, n - 3) && E_TAILS.iter().any(|t| stem.ends_with(t)) {
        return true;
    }
    // one-syllable consonant-vowel-consonant stems: mak(e), writ(e), hop(e)
    n >= 3
        && vowel_groups(b) == 1
        && is_consonant(b, n - 1)
        && !b"wxy".contains(&last)
        && is_vowel(b, n - 2)
        && is_consonant(b, n - 3)
}

fn is_vowel(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => true,
        b'y' => i > 0 && !is_vowel(b, i - 1),
        _ => false,
    }
}

fn is_consonant(b: &[u8], i: usize) -> bool {
    b[i].is_ascii_alphabetic() && !is_vowel(b, i)
}

fn has_vowel(s: &str) -> bool {
    let b = s.as_bytes();
    (0..b.len()).any(|i| is_vowel(b, i))
}

fn vowel_groups(b: &[u8]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for i in 0..b.len() {
        let v = is_vowel(b, i);
        if v && !in_group {
            groups += 1;
        }
        in_group = v;
    }
    groups
}
