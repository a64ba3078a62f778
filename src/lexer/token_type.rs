use crate::error::{Error, ErrorKind, Result};
use regex::Regex;
use std::fmt;

/// # Summary
///
/// `Matched` is the successful report of a single token type applied at a
/// given offset of the input. It contains the decoded payload and the
/// absolute byte offset immediately past the consumed span.
///
/// # Methods
///
/// `new`: build a match report.
/// `data`: borrow the payload.
/// `end`: return the offset past the consumed span.
/// `map`: transform the payload, leaving the consumed span untouched.
/// `into_data`: consume the report and return the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    data: T,
    end: usize,
}

impl<T> Matched<T> {
    /// Build a new match report.
    pub fn new(data: T, end: usize) -> Self {
        Self { data, end }
    }

    /// Borrow the decoded payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Return the offset immediately past the consumed span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Transform the payload, leaving the consumed span untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Matched<U> {
        Matched {
            data: f(self.data),
            end: self.end,
        }
    }

    /// Consume the report and return the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// # Summary
///
/// `TokenType` is a single lexing rule: applied at an offset of the input,
/// it either consumes a prefix of what starts there, producing a decoded
/// payload and the offset past the consumed span, or reports no match.
///
/// Implementations must be pure functions of `(input, start)`, must not
/// read past the end of the input, and must only report matches that end
/// strictly after `start`; the lexer ignores candidates that do not
/// advance.
///
/// # Methods
///
/// `matches`: apply the rule at a given offset of the input.
/// `skip`: whether matched spans are consumed without emitting a token.
/// `map`: derive a rule with a transformed payload.
/// `into_skip`: derive a rule that consumes the same spans and ignores
/// them.
pub trait TokenType {
    /// The payload decoded from a matched span.
    type Data;

    /// Apply the rule to `input` at byte offset `start`.
    fn matches(&self, input: &str, start: usize) -> Option<Matched<Self::Data>>;

    /// Whether tokens of this rule are elided from the lexer's output.
    fn skip(&self) -> bool {
        false
    }

    /// Derive a rule whose payload is `f` applied to this rule's payload.
    /// The skip flag of the rule is preserved.
    fn map<U, F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Data) -> U,
    {
        Mapped {
            inner: self,
            f,
            skip: None,
        }
    }

    /// Derive a rule that consumes the same spans, discards their payload
    /// and never emits a token. This is the way to declare whitespace or
    /// comment rules.
    fn into_skip<U: Default>(self) -> Mapped<Self, fn(Self::Data) -> U>
    where
        Self: Sized,
    {
        Mapped {
            inner: self,
            f: discard::<Self::Data, U>,
            skip: Some(true),
        }
    }
}

fn discard<T, U: Default>(_: T) -> U {
    U::default()
}

/// # Summary
///
/// `Literal` matches one fixed, non-empty string exactly at the offset it
/// is applied to. Its payload is `()`, as the matched text is always the
/// literal itself.
#[derive(Debug, Clone)]
pub struct Literal {
    literal: String,
}

impl Literal {
    /// Build a new `Literal`. An empty string is a configuration error.
    pub fn new(literal: impl Into<String>) -> Result<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return ErrorKind::EmptyLiteral.err();
        }
        Ok(Self { literal })
    }
}

impl TokenType for Literal {
    type Data = ();

    fn matches(&self, input: &str, start: usize) -> Option<Matched<()>> {
        let end = start + self.literal.len();
        if input.get(start..end)? == self.literal {
            Some(Matched::new((), end))
        } else {
            None
        }
    }
}

/// # Summary
///
/// `Chars` matches the longest run of one or more characters drawn from a
/// fixed, non-empty set. It is not anchored to a fixed length: it extends
/// as far as the input keeps providing members of the set, and reports no
/// match if the character at the offset itself is not a member. Its
/// payload is the matched run.
#[derive(Debug, Clone)]
pub struct Chars {
    chars: Vec<char>,
}

impl Chars {
    /// Build a new `Chars` from the accepted characters, given as a string
    /// of the set's members. An empty set is a configuration error.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return ErrorKind::EmptyCharSet.err();
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }
}

impl TokenType for Chars {
    type Data = String;

    fn matches(&self, input: &str, start: usize) -> Option<Matched<String>> {
        let mut end = start;
        for c in input.get(start..)?.chars() {
            if !self.chars.contains(&c) {
                break;
            }
            end += c.len_utf8();
        }
        if end > start {
            Some(Matched::new(input[start..end].to_string(), end))
        } else {
            None
        }
    }
}

/// # Summary
///
/// `Pattern` matches a regular expression anchored exactly at the offset
/// it is applied to, the way a sticky pattern engine would: a match
/// starting any later is no match at all. A zero-length match is also
/// treated as no match, so that a `Pattern` always advances the lexer.
/// Its payload is the matched text.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Build a new `Pattern` from a regular expression, compiled anchored
    /// to the offset it is applied to. A malformed expression is a
    /// configuration error.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"\A(?:{})", pattern)).map_err(|error| {
            Error::new(ErrorKind::InvalidPattern {
                pattern: pattern.to_string(),
                message: error.to_string(),
            })
        })?;
        Ok(Self { regex })
    }
}

impl TokenType for Pattern {
    type Data = String;

    fn matches(&self, input: &str, start: usize) -> Option<Matched<String>> {
        let found = self.regex.find(input.get(start..)?)?;
        if found.end() == 0 {
            return None;
        }
        Some(Matched::new(
            found.as_str().to_string(),
            start + found.end(),
        ))
    }
}

/// # Summary
///
/// `Mapped` wraps another token type and transforms its payload through a
/// pure function, leaving the consumed span untouched. The skip flag of
/// the wrapped rule is preserved unless overridden.
///
/// `Mapped` values are built through [`TokenType::map`] and
/// [`TokenType::into_skip`].
#[derive(Clone)]
pub struct Mapped<M, F> {
    inner: M,
    f: F,
    skip: Option<bool>,
}

impl<M, F> Mapped<M, F> {
    /// Override the skip flag of the wrapped rule.
    pub fn with_skip(mut self, skip: bool) -> Self {
        self.skip = Some(skip);
        self
    }
}

impl<M, U, F> TokenType for Mapped<M, F>
where
    M: TokenType,
    F: Fn(M::Data) -> U,
{
    type Data = U;

    fn matches(&self, input: &str, start: usize) -> Option<Matched<U>> {
        self.inner
            .matches(input, start)
            .map(|matched| matched.map(&self.f))
    }

    fn skip(&self) -> bool {
        self.skip.unwrap_or_else(|| self.inner.skip())
    }
}

impl<M: fmt::Debug, F> fmt::Debug for Mapped<M, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}
