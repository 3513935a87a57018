//! Semantic classification of table cell text.
//!
//! Each cell is assigned one of a fixed set of categories by an ordered
//! list of pattern rules; strings no rule claims fall through to a
//! token-count heuristic backed by the [`Lexicon`] trait. The rule order
//! is significant — patterns overlap, and the first match wins (`"2024"`
//! is a date, not a number).

use crate::extract::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

/// Derived semantic category of one cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Calendar expression: full date, year, year-month, month-day, quarter
    Date,
    /// Year with a single-letter suffix, e.g. `2023A`; kept distinct from
    /// plain dates for header matching
    DateCode,
    /// Digits and numeric punctuation only
    Numeric,
    /// Identifier-like: digits, uppercase letters, and code punctuation
    CodeLike,
    /// English word or short phrase
    EnglishWord,
    /// Number followed by a unit or currency suffix
    NumericUnit,
    /// Exactly one character
    SingleChar,
    /// Single token tagged as a personal name
    NameEntity,
    /// Free text of more than 3 tokens
    LongText,
    /// Free text of 12 or more tokens
    VeryLongText,
    /// Anything else
    Other,
}

/// Ordered pattern rules. First match wins; order must not be changed.
static RULES: Lazy<Vec<(Regex, CellType)>> = Lazy::new(|| {
    [
        (r"^(20|19)[0-9]{2}[年/.-][0-9]{1,2}[月/.-][0-9]{1,2}日*$", CellType::Date),
        (r"^(20|19)[0-9]{2}年*$", CellType::Date),
        (r"^(20|19)[0-9]{2}[年/.-][0-9]{1,2}月*$", CellType::Date),
        (r"^[0-9]{1,2}[月/.-][0-9]{1,2}日*$", CellType::Date),
        (r"^第*[一二三四1-4]季度$", CellType::Date),
        (r"^(20|19)[0-9]{2}年*[一二三四1-4]季度$", CellType::Date),
        (r"^(20|19)[0-9]{2}[ABCDE]$", CellType::DateCode),
        (r"^[0-9.,+%/ -]+$", CellType::Numeric),
        (r"^[0-9A-Z/._~-]+$", CellType::CodeLike),
        (r"^[A-Z]*[a-z' -]+$", CellType::EnglishWord),
        (r"^[0-9.,+-]+[0-9A-Za-z/$￥%<>（）()' -]+$", CellType::NumericUnit),
        (r"^.{1}$", CellType::SingleChar),
    ]
    .into_iter()
    .map(|(pattern, ty)| (Regex::new(pattern).expect("static pattern"), ty))
    .collect()
});

/// Classify one cell's text.
///
/// Total over all inputs: every string, including the empty string, maps
/// to exactly one category. The `lexicon` is only consulted when no
/// pattern rule matches.
pub fn classify<L: Lexicon>(text: &str, lexicon: &L) -> CellType {
    for (pattern, ty) in RULES.iter() {
        if pattern.is_match(text) {
            return *ty;
        }
    }

    let tokens: Vec<String> = lexicon
        .tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() > 1)
        .collect();

    if tokens.len() > 3 {
        return if tokens.len() < 12 {
            CellType::LongText
        } else {
            CellType::VeryLongText
        };
    }

    if tokens.len() == 1 && lexicon.tag(&tokens[0]) == L::PERSON_NAME_TAG {
        return CellType::NameEntity;
    }

    CellType::Other
}
