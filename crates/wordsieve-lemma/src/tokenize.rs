use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(
        r"[A-Za-z]+(?:['\-][A-Za-z]+)*'?|\d+(?:[.,:]\d+)*|\.\.\.|--|\S"
    ).unwrap();
    static ref WORD_RE: Regex = Regex::new(r"^[A-Za-z\-']+$").unwrap();
}

const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Splits a line into word, number and punctuation tokens.
///
/// Contractions are split the way treebank tokenizers do it: `don't` becomes
/// `do` + `n't`, `she's` becomes `she` + `'s`, `dogs'` becomes `dogs` + `'`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(line) {
        split_clitics(m.as_str(), &mut tokens);
    }
    tokens
}

/// True for tokens made only of ASCII letters, hyphens and apostrophes.
pub fn is_word(token: &str) -> bool {
    WORD_RE.is_match(token)
}

fn split_clitics(token: &str, out: &mut Vec<String>) {
    if !token.contains('\'') || token.len() < 2 {
        out.push(token.to_string());
        return;
    }
    if let Some(head) = token.strip_suffix('\'') {
        split_clitics(head, out);
        out.push("'".to_string());
        return;
    }
    let lower = token.to_ascii_lowercase();
    if lower.ends_with("n't") && token.len() > 3 {
        let cut = token.len() - 3;
        out.push(token[..cut].to_string());
        out.push(token[cut..].to_string());
        return;
    }
    for clitic in CLITICS {
        if lower.ends_with(clitic) && token.len() > clitic.len() {
            let cut = token.len() - clitic.len();
            out.push(token[..cut].to_string());
            out.push(token[cut..].to_string());
            return;
        }
    }
    out.push(token.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentence_punctuation() {
        assert_eq!(tokenize("Cats are running fast."), vec!["Cats", "are", "running", "fast", "."]);
    }

    #[test]
    fn splits_contractions_and_possessives() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("She's here"), vec!["She", "'s", "here"]);
        assert_eq!(tokenize("the dogs' bowls"), vec!["the", "dogs", "'", "bowls"]);
    }

    #[test]
    fn keeps_hyphenated_words_and_numbers_whole() {
        assert_eq!(tokenize("well-known 3.14 items, 1,000"), vec!["well-known", "3.14", "items", ",", "1,000"]);
    }

    #[test]
    fn word_shape() {
        assert!(is_word("n't"));
        assert!(is_word("well-known"));
        assert!(!is_word("3.14"));
        assert!(!is_word("."));
        assert!(!is_word("café"));
    }
}
