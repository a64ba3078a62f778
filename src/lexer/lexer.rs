use super::token_type::{Literal, Matched, TokenType};
use crate::error::{ErrorKind, Result};
use crate::position::{LineBreaks, Position};
use newty::newty;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Chars, Pattern};

    fn arithmetic() -> Lexer<String> {
        LexerBuilder::new()
            .with_token("WS", Chars::new(" ").unwrap().into_skip())
            .with_token("NUM", Chars::new("0123456789").unwrap())
            .with_literal("PLUS", "+")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn token() {
        let tokens = arithmetic().lex("12").unwrap();
        let token = &tokens[0];
        assert_eq!(token.name(), "NUM");
        assert_eq!(token.data(), "12");
        assert_eq!(token.to_string(), "(NUM)");
        assert_eq!(token.start(), Position::new(0, 1, 1));
        assert_eq!(token.end(), Position::new(2, 1, 3));
    }

    #[test]
    fn lex_arithmetic() {
        let tokens = arithmetic().lex("12 + 3").unwrap();
        let expected = [("NUM", "12", 0, 2), ("PLUS", "", 3, 4), ("NUM", "3", 5, 6)];
        assert_eq!(tokens.len(), expected.len());
        for (token, (name, data, start, end)) in tokens.iter().zip(expected) {
            assert_eq!(token.name(), name);
            assert_eq!(token.data(), data);
            assert_eq!(token.start().index(), start);
            assert_eq!(token.end().index(), end);
        }
    }

    #[test]
    fn empty_input() {
        assert!(arithmetic().lex("").unwrap().is_empty());
    }

    #[test]
    fn deterministic() {
        let lexer = arithmetic();
        assert_eq!(lexer.lex("12 + 3").unwrap(), lexer.lex("12 + 3").unwrap());
    }

    #[test]
    fn spans_are_contiguous() {
        let tokens = arithmetic().lex("1+2+34").unwrap();
        let mut index = 0;
        for token in &tokens {
            assert_eq!(token.start().index(), index);
            index = token.end().index();
        }
        assert_eq!(index, 6);
    }

    #[test]
    fn longest_match_wins() {
        // EQ is declared first, yet ARROW wins on its longer match
        let lexer: Lexer<String> = LexerBuilder::new()
            .with_literal("EQ", "=")
            .unwrap()
            .with_literal("ARROW", "=>")
            .unwrap()
            .build()
            .unwrap();
        let tokens = lexer.lex("=>=").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].name(), "ARROW");
        assert_eq!(tokens[1].name(), "EQ");
    }

    #[test]
    fn ties_go_to_the_earliest_rule() {
        let lexer: Lexer<String> = LexerBuilder::new()
            .with_token("WORD", Pattern::new("[a-z]+").unwrap())
            .with_token("KEYWORD", Pattern::new("if").unwrap())
            .build()
            .unwrap();
        let tokens = lexer.lex("if").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name(), "WORD");
    }

    #[test]
    fn skipped_spans_still_advance() {
        let tokens = arithmetic().lex("  12").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].start(), Position::new(2, 1, 3));
    }

    #[test]
    fn position_tracking() {
        let lexer: Lexer<String> = LexerBuilder::new()
            .with_token("WORD", Chars::new("abcd").unwrap())
            .with_token("NL", Chars::new("\n").unwrap().into_skip())
            .build()
            .unwrap();
        let tokens = lexer.lex("ab\ncd").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].start(), Position::new(3, 2, 1));
        assert_eq!(tokens[1].end(), Position::new(5, 2, 3));
    }

    #[test]
    fn unexpected_input() {
        let error = arithmetic().lex("#12").unwrap_err();
        assert_eq!(
            *error.kind(),
            ErrorKind::UnexpectedInput {
                position: Position::new(0, 1, 1)
            }
        );

        let error = arithmetic().lex("12 #3").unwrap_err();
        assert_eq!(
            error.to_string(),
            "unexpected input at character 3 (line 1, column 4)"
        );
    }

    #[test]
    fn duplicate_rule() {
        let error = LexerBuilder::<String>::new()
            .with_literal("A", "a")
            .unwrap()
            .with_literal("A", "b")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(
            *error.kind(),
            ErrorKind::DuplicateRule {
                name: String::from("A")
            }
        );
    }

    #[test]
    fn rule_lookup() {
        let lexer = arithmetic();
        assert!(lexer.contains("NUM"));
        assert!(!lexer.contains("MINUS"));
        assert_eq!(lexer.id("PLUS"), Some(RuleId(2)));
        assert_eq!(lexer.id("MINUS"), None);
        assert_eq!(lexer.name(RuleId(0)), "WS");
    }

    #[test]
    fn mapped_payloads() {
        let lexer: Lexer<u64> = LexerBuilder::new()
            .with_token("WS", Chars::new(" ").unwrap().into_skip())
            .with_token(
                "NUM",
                Chars::new("0123456789")
                    .unwrap()
                    .map(|text| text.parse().unwrap()),
            )
            .build()
            .unwrap();
        let tokens = lexer.lex("12 3").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(*tokens[0].data(), 12);
        assert_eq!(*tokens[1].data(), 3);
    }
}

newty! {
    pub id RuleId
}

/// # Summary
///
/// `Token` contains information about a lexed token, thus it contains
///  - `name`: the name of the rule that produced the token;
///  - `data`: the payload decoded by that rule;
///  - `start` and `end`: the positions bounding the consumed span.
///
/// Tokens are immutable, and only produced by [`Lexer::lex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<T> {
    name: Rc<str>,
    data: T,
    start: Position,
    end: Position,
}

impl<T> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.name)
    }
}

impl<T> Token<T> {
    fn new(name: Rc<str>, data: T, start: Position, end: Position) -> Self {
        Self {
            name,
            data,
            start,
            end,
        }
    }

    /// Return the name of the rule that produced the token.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the payload of the token.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consume the token and return its payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Return the position of the first character of the consumed span.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Return the position immediately past the consumed span.
    pub fn end(&self) -> Position {
        self.end
    }
}

struct Rule<T> {
    name: Rc<str>,
    token_type: Box<dyn TokenType<Data = T>>,
}

/// # Summary
///
/// A builder for a [`Lexer`] object. Rules are declared one by one, and
/// their declaration order is meaningful: when two rules match spans of
/// the same length at the same position, the one declared first wins.
///
/// # Attribute specificators
///
/// `with_token`: declare a rule from a name and a token type.
/// `with_literal`: declare a rule matching a fixed string.
pub struct LexerBuilder<T> {
    rules: Vec<Rule<T>>,
}

impl<T> LexerBuilder<T> {
    /// Instantiate a new `LexerBuilder`.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Declare a rule from a name and any token type.
    pub fn with_token(
        mut self,
        name: impl Into<Rc<str>>,
        token_type: impl TokenType<Data = T> + 'static,
    ) -> Self {
        self.rules.push(Rule {
            name: name.into(),
            token_type: Box::new(token_type),
        });
        self
    }

    /// Declare a rule matching a fixed string: sugar for a non-skipping
    /// [`Literal`] whose payload is `T::default()`.
    pub fn with_literal(self, name: impl Into<Rc<str>>, literal: &str) -> Result<Self>
    where
        T: Default + 'static,
    {
        Ok(self.with_token(name, Literal::new(literal)?.map(|()| T::default())))
    }

    /// Build the lexer. Declaring two rules under the same name is a
    /// configuration error.
    pub fn build(self) -> Result<Lexer<T>> {
        let mut name_map = HashMap::with_capacity(self.rules.len());
        for (id, rule) in self.rules.iter().enumerate() {
            if name_map.insert(rule.name.clone(), RuleId(id)).is_some() {
                return ErrorKind::DuplicateRule {
                    name: rule.name.to_string(),
                }
                .err();
            }
        }
        Ok(Lexer {
            rules: self.rules,
            name_map,
        })
    }
}

impl<T> Default for LexerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LexerBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| &rule.name))
            .finish()
    }
}

/// # Summary
///
/// `Lexer` is the main object that is used for lexing. It owns a named,
/// ordered collection of token types, fixed at construction, and consumes
/// input strings into sequences of [`Token`]s by maximal munch: at every
/// position every rule is tried, and the one consuming the most input
/// wins, earlier-declared rules winning ties.
///
/// A `Lexer` is immutable once built, so a single instance can serve any
/// number of independent `lex` calls.
///
/// # Methods
///
/// `lex`: consume an input string into a sequence of tokens.
/// `contains`: return whether a name is a configured rule.
/// `id`: return the identifier of a rule, from its name.
/// `name`: return the name of a rule, from its identifier.
pub struct Lexer<T> {
    rules: Vec<Rule<T>>,
    name_map: HashMap<Rc<str>, RuleId>,
}

impl<T> Lexer<T> {
    /// Consume `input` into a sequence of tokens, or fail at the first
    /// position where no rule matches. Spans matched by skip rules are
    /// consumed but produce no token.
    pub fn lex(&self, input: &str) -> Result<Vec<Token<T>>> {
        let line_breaks = LineBreaks::new(input);
        let mut tokens = Vec::new();
        let mut position = Position::default();
        while position.index() < input.len() {
            let mut best: Option<(RuleId, Matched<T>)> = None;
            for (id, rule) in self.rules.iter().enumerate() {
                if let Some(matched) = rule.token_type.matches(input, position.index()) {
                    // a candidate that does not advance could stall the scan
                    if matched.end() <= position.index() {
                        continue;
                    }
                    if best
                        .as_ref()
                        .map_or(true, |(_, best)| matched.end() > best.end())
                    {
                        best = Some((RuleId(id), matched));
                    }
                }
            }
            let (id, matched) = match best {
                Some(best) => best,
                None => return ErrorKind::UnexpectedInput { position }.err(),
            };
            let start = position;
            position = line_breaks.advance(start, matched.end());
            let rule = &self.rules[id.0];
            if !rule.token_type.skip() {
                tokens.push(Token::new(
                    rule.name.clone(),
                    matched.into_data(),
                    start,
                    position,
                ));
            }
        }
        Ok(tokens)
    }

    /// Return whether `name` is a configured rule.
    pub fn contains(&self, name: &str) -> bool {
        self.name_map.contains_key(name)
    }

    /// Return the identifier of the rule called `name`.
    pub fn id(&self, name: &str) -> Option<RuleId> {
        self.name_map.get(name).copied()
    }

    /// Return the name of the rule identified by `id`.
    pub fn name(&self, id: RuleId) -> &str {
        &self.rules[id.0].name
    }
}

impl<T> fmt::Debug for Lexer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| &rule.name))
            .finish()
    }
}
