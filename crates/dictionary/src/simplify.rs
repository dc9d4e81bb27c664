use once_cell::sync::Lazy;
use regex::Regex;

pub const SIMPLE_LIMIT: usize = 100;
pub const MEDIUM_LIMIT: usize = 200;
pub const ADVANCED_LIMIT: usize = 400;

const ELLIPSIS: &str = "...";

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("Invalid regex"));
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("Invalid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingLevel {
    Simple,
    Medium,
    Advanced,
}

/// Cuts a definition down to one of three reading levels.
///
/// `Simple` keeps the first sentence, `Medium` the first two, and both are
/// then capped. What happens to `Advanced` and whether annotations are
/// removed first depends on the source profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplifier {
    strip_annotations: bool,
    advanced_limit: Option<usize>,
}

impl Simplifier {
    /// Wiktionary glosses: drop `(...)` and `[...]` notes, cap every level.
    pub const WIKTIONARY: Simplifier = Simplifier {
        strip_annotations: true,
        advanced_limit: Some(ADVANCED_LIMIT),
    };

    /// WordNet glosses are kept as is at the advanced level.
    pub const WORDNET: Simplifier = Simplifier {
        strip_annotations: false,
        advanced_limit: None,
    };

    pub fn simplify(&self, text: &str, level: ReadingLevel) -> String {
        let stripped;
        let text = if self.strip_annotations {
            stripped = strip_annotations(text);
            stripped.as_str()
        } else {
            text
        };

        match level {
            ReadingLevel::Simple => {
                let first_sentence = text.split('.').next().unwrap_or_default();
                truncate_with_ellipsis(first_sentence, SIMPLE_LIMIT)
            }
            ReadingLevel::Medium => {
                let sentences: Vec<&str> = text.split('.').take(2).collect();
                truncate_with_ellipsis(&sentences.join(". "), MEDIUM_LIMIT)
            }
            ReadingLevel::Advanced => match self.advanced_limit {
                Some(limit) => truncate_with_ellipsis(text, limit),
                None => text.to_owned(),
            },
        }
    }

    /// All three levels at once, in simple, medium, advanced order.
    pub fn levels(&self, text: &str) -> (String, String, String) {
        (
            self.simplify(text, ReadingLevel::Simple),
            self.simplify(text, ReadingLevel::Medium),
            self.simplify(text, ReadingLevel::Advanced),
        )
    }
}

/// Removes non-nested parenthesized and bracketed notes.
pub fn strip_annotations(text: &str) -> String {
    let text = PARENTHESIZED.replace_all(text, "");
    BRACKETED.replace_all(&text, "").into_owned()
}

/// Keeps the first `limit` chars, marking the cut with an ellipsis.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &text[..end]),
        None => text.to_owned(),
    }
}
