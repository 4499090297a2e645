/// Turns one line of raw text into a line of space-separated lemmas.
pub trait Lemmatize: Send + Sync {
    fn lemmatize_line(&self, line: &str) -> String;
}

/// Strips removal-set words from a whole document.
///
/// Implementations must be idempotent and must collapse whitespace runs to a
/// single space with no leading or trailing whitespace.
pub trait WordRemover: Send + Sync {
    fn remove_words(&self, text: &str) -> String;
}
