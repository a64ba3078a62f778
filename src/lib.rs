//! # Munch
//!
//! A configurable lexer library. A [`lexer::Lexer`] owns a named, ordered
//! collection of lexing rules ([`lexer::TokenType`]s), and turns an input
//! string into the sequence of tokens obtained by always picking, at the
//! current position, the rule that consumes the most input.
//!
//! Rules are composed from a few primitives: fixed strings
//! ([`lexer::Literal`]), runs of characters drawn from a set
//! ([`lexer::Chars`]), anchored regular expressions ([`lexer::Pattern`]),
//! and payload transformations over any of them ([`lexer::Mapped`]).
//!
//! ```rust
//! use munch::error::Result;
//! use munch::lexer::{Chars, LexerBuilder, TokenType};
//!
//! # fn main() -> Result<()> {
//! let lexer = LexerBuilder::new()
//!     .with_token("WS", Chars::new(" \t")?.into_skip())
//!     .with_token("NUM", Chars::new("0123456789")?)
//!     .with_literal("PLUS", "+")?
//!     .build()?;
//! let tokens = lexer.lex("12 + 3")?;
//! assert_eq!(
//!     tokens.iter().map(|token| token.name()).collect::<Vec<_>>(),
//!     ["NUM", "PLUS", "NUM"],
//! );
//! assert_eq!(tokens[0].data(), "12");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod lexer;
pub mod position;
