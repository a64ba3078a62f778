//! # Lexer
//!
//! This module contains the structs and primitives related to tokenization,
//! or lexing. The most useful are:
//!  - [`TokenType`], the interface every lexing rule implements, along with
//!    the built-in rules [`Literal`], [`Chars`] and [`Pattern`] and the
//!    derived rule [`Mapped`];
//!  - the [`Lexer`], which owns the named, ordered collection of rules and
//!    drives the maximal-munch scan;
//!  - [`LexerBuilder`], as the name explains, the builder struct for
//!    [`Lexer`]. It is highly recommended to construct [`Lexer`] through
//!    its builder;
//!  - [`Token`], the basic interface to deal with the result of the
//!    tokenization. The goal of a lexer is to turn a stream of characters
//!    into a stream of tokens.

#[allow(clippy::module_inception)]
mod lexer;
mod token_type;

pub use lexer::{Lexer, LexerBuilder, RuleId, Token};
pub use token_type::{Chars, Literal, Mapped, Matched, Pattern, TokenType};
