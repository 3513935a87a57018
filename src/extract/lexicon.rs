//! Lexical-analysis capability used by the cell classifier.
//!
//! The classifier's fallback path needs a tokenizer and a part-of-speech
//! tagger, but only as a weak signal. Rather than binding to a specific
//! NLP library, the two functions are taken behind a trait so any lexical
//! pipeline can be substituted.

/// Tokenizer and tagger used as a cell-classification signal.
///
/// Both functions are pure. The only tag value the classifier ever
/// inspects is [`Lexicon::PERSON_NAME_TAG`]; every other label is treated
/// as opaque.
pub trait Lexicon {
    /// Tag value marking a personal-name token.
    const PERSON_NAME_TAG: &'static str = "nr";

    /// Split text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Return the part-of-speech-like label for one token.
    fn tag(&self, token: &str) -> String;
}

/// Whitespace tokenizer with no tagging knowledge.
///
/// This is the bundled default: it splits on Unicode whitespace and never
/// tags a token as a personal name, so the classifier's name-entity branch
/// stays inert unless a real lexical pipeline is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceLexicon;

impl Lexicon for WhitespaceLexicon {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn tag(&self, _token: &str) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenize() {
        let lex = WhitespaceLexicon;
        assert_eq!(
            lex.tokenize("quarterly revenue  report"),
            vec!["quarterly", "revenue", "report"]
        );
        assert!(lex.tokenize("   ").is_empty());
    }

    #[test]
    fn test_never_tags_names() {
        let lex = WhitespaceLexicon;
        assert_ne!(lex.tag("Smith"), WhitespaceLexicon::PERSON_NAME_TAG);
    }
}
