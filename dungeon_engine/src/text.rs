//! Prose helpers and output formatting.
//!
//! Turn descriptions are built from many small sentences which are joined and
//! wrapped here. Anything that must keep its own layout (help text, error
//! messages) is passed through untouched as [`Output::Raw`].

use textwrap::{Options, WrapAlgorithm, fill};
use variantly::Variantly;

pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Output {
    /// Sentences to be joined into one paragraph and wrapped.
    Wrapped(Vec<String>),
    /// Text printed exactly as-is.
    Raw(String),
}

impl Output {
    pub fn render(&self, width: usize) -> String {
        match self {
            Output::Wrapped(parts) => wrap(&join(parts), width),
            Output::Raw(text) => text.clone(),
        }
    }
}

/// Join non-empty sentences with single spaces.
pub fn join(parts: &[String]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse whitespace and fill the text to `width` columns.
pub fn wrap(text: &str, width: usize) -> String {
    let words = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let options = Options::new(width).wrap_algorithm(WrapAlgorithm::FirstFit);
    fill(&words, options)
}

/// Prefix a noun phrase with the right indefinite article.
pub fn a(phrase: &str) -> String {
    let article = match phrase.chars().next() {
        Some(first) if "aeiouAEIOU".contains(first) => "an",
        _ => "a",
    };
    format!("{article} {phrase}")
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English list: "a", "a and b", "a, b, and c".
pub fn commify<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [one, two] => format!("{} and {}", one.as_ref(), two.as_ref()),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head}, and {}", last.as_ref())
        },
    }
}

/// Words that turn what follows into a question.
const QUESTION_WORDS: &[&str] = &[
    "who", "what", "where", "when", "why", "how", "which", "is", "are", "am", "do", "does", "did", "can",
    "could", "will", "would", "should", "may", "have", "has",
];

/// Turn shouted input into a sentence: "MAGIC WORD" becomes "Magic word."
/// and "WHAT IS THE MAGIC WORD" becomes "What is the magic word?"
pub fn sentence(words: &str) -> String {
    let lower = words.trim().to_lowercase();
    let question = lower
        .split_whitespace()
        .next()
        .is_some_and(|first| QUESTION_WORDS.contains(&first));
    let mut text = capitalize(&lower);
    if !text.is_empty() && !text.ends_with(['.', '!', '?']) {
        text.push(if question { '?' } else { '.' });
    }
    text
}
