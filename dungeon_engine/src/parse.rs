//! Small combinator for turning command tokens into actions.
//!
//! A [`Parse`] is either a value plus whatever was consumed to get it, or a
//! failure carrying the last good value and maybe an error message. Chaining
//! never fails outright: the first message set wins and every later step
//! passes it along, so a command parser reads top to bottom in the same
//! order its error messages take precedence. Only [`Parse::to_action`]
//! turns a failure into a [`BadCommand`].

use thiserror::Error;

use crate::room::Direction;
use crate::world::ItemId;

/// Said when a command fails without anything more specific to say.
pub const FALLBACK_MESSAGE: &str = "I don't understand that.";

/// Conjunction accepted between items: "TAKE AXE AND BREAD".
pub const AND: &str = "AND";
/// Introduces the tool in "ATTACK X WITH Y".
pub const WITH: &str = "WITH";

/// A command the player typed that can't be carried out. The message is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BadCommand(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse<T, U> {
    value: Option<T>,
    previous: Option<U>,
    error: Option<String>,
}

impl<T, U> Parse<T, U> {
    pub fn succeeded(value: T, previous: Option<U>) -> Self {
        Self {
            value: Some(value),
            previous,
            error: None,
        }
    }

    /// A failure with no message yet; `previous` is the last value consumed.
    pub fn failed(previous: Option<U>) -> Self {
        Self {
            value: None,
            previous,
            error: None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn previous(&self) -> Option<&U> {
        self.previous.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Try to transform the value. On `None` the consumed value becomes `previous`.
    pub fn maybe<X>(self, f: impl FnOnce(T) -> Option<X>) -> Parse<X, T>
    where
        T: Clone,
    {
        match self.value {
            Some(value) => Parse {
                value: f(value.clone()),
                previous: Some(value),
                error: None,
            },
            None => Parse {
                value: None,
                previous: None,
                error: self.error,
            },
        }
    }

    pub fn map<X>(self, f: impl FnOnce(T) -> X) -> Parse<X, U> {
        Parse {
            value: self.value.map(f),
            previous: self.previous,
            error: self.error,
        }
    }

    /// Succeed only if the value is exactly `expected`.
    pub fn expect(self, expected: T) -> Parse<T, T>
    where
        T: Clone + PartialEq,
    {
        self.maybe(|value| (value == expected).then_some(value))
    }

    /// Set the message, unless there is a value or a message already.
    #[must_use]
    pub fn or(self, message: impl Into<String>) -> Self {
        if self.value.is_some() || self.error.is_some() {
            return self;
        }
        Self {
            error: Some(message.into()),
            ..self
        }
    }

    /// Like [`Parse::or`], built from the value that failed to transform.
    /// Does nothing when there is no such value.
    #[must_use]
    pub fn or_else(self, f: impl FnOnce(&U) -> String) -> Self {
        if self.value.is_some() || self.error.is_some() {
            return self;
        }
        let error = self.previous.as_ref().map(f);
        Self { error, ..self }
    }

    /// Combine two parses; whichever fails first owns the error.
    pub fn zip<X, V>(self, other: Parse<X, V>) -> Parse<(T, X), T> {
        match (self.value, other.value) {
            (Some(first), Some(second)) => Parse::succeeded((first, second), None),
            (None, _) => Parse {
                value: None,
                previous: None,
                error: self.error,
            },
            (Some(first), None) => Parse {
                value: None,
                previous: Some(first),
                error: other.error,
            },
        }
    }

    /// Finish the parse.
    ///
    /// # Errors
    /// - the parse failed: returns its message, or [`FALLBACK_MESSAGE`] if none was set
    /// - `f` itself rejects the value
    pub fn to_action<A>(self, f: impl FnOnce(T) -> Result<A, BadCommand>) -> Result<A, BadCommand> {
        match self.value {
            Some(value) => f(value),
            None => Err(BadCommand(self.error.unwrap_or_else(|| FALLBACK_MESSAGE.to_string()))),
        }
    }
}

/// Token `index`, if present.
pub fn arg(args: &[String], index: usize) -> Parse<&str, &[String]> {
    match args.get(index) {
        Some(token) => Parse::succeeded(token.as_str(), Some(args)),
        None => Parse::failed(None),
    }
}

/// Every token from `start` on, joined with spaces.
pub fn rest(args: &[String], start: usize) -> Parse<String, &[String]> {
    match args.get(start..) {
        Some(words) if !words.is_empty() => Parse::succeeded(words.join(" "), Some(args)),
        _ => Parse::failed(None),
    }
}

pub fn direction(args: &[String], index: usize) -> Parse<Direction, &str> {
    arg(args, index).maybe(Direction::parse)
}

/// One or more items joined by AND, starting at token `start`. Repeats are ignored.
/// Fails on the first token `resolve` doesn't recognize, with that token as `previous`.
pub fn items<'a>(args: &'a [String], start: usize, resolve: impl Fn(&str) -> Option<ItemId>) -> Parse<Vec<ItemId>, &'a str> {
    let mut found = Vec::new();
    for token in args.iter().skip(start).map(String::as_str).filter(|token| *token != AND) {
        match resolve(token) {
            Some(id) if found.contains(&id) => {},
            Some(id) => found.push(id),
            None => return Parse::failed(Some(token)),
        }
    }
    if found.is_empty() {
        Parse::failed(None)
    } else {
        Parse::succeeded(found, None)
    }
}
