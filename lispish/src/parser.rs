//! Parse token sequences into trees.
//!
//! The grammar is LL(1): every nonterminal is a type implementing [`Parse`],
//! and a single token of lookahead (see [`Peek`]) is enough to pick a
//! production. Parsing never backtracks and stops at the first mismatch.
use std::fmt::Display;

use delegate::delegate;
use smol_str::SmolStr;

use crate::lexer::{Span, Token, TokenKind};
use crate::tree::Program;

/// A token sequence terminated by an end of input marker, ready to be parsed.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    /// Appends the end of input marker to `tokens`.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut tokens: Vec<Token> = tokens.into_iter().collect();
        let offset = tokens.last().map_or(0, |token| token.span().end);
        tokens.push(Token::end(offset));
        Self { tokens }
    }

    /// The tokens including the trailing end of input marker.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            tokens: &self.tokens,
            index: 0,
        }
    }

    #[inline]
    pub fn parser(&self) -> Parser<'_> {
        Parser::new(self.cursor())
    }
}

/// A parser that is stepping through a [`TokenBuffer`].
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    #[inline]
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    #[inline]
    pub fn parse<T: Parse>(&mut self) -> Result<T> {
        T::parse(self)
    }

    #[inline]
    pub fn peek<T: Peek>(&self) -> bool {
        T::peek(self.cursor)
    }

    /// Consume the current token if its text is `expected`.
    pub fn literal(&mut self, expected: &str) -> Result<Token> {
        self.step(|cursor| {
            cursor
                .literal(expected)
                .ok_or_else(|| cursor.error(format!("`{expected}`")))
        })
    }

    /// Consume the current token if it is an atom.
    pub fn atom(&mut self) -> Result<Token> {
        self.step(|cursor| cursor.atom().ok_or_else(|| cursor.error("an atom")))
    }

    #[inline]
    pub fn step<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(Cursor<'a>) -> Result<(T, Cursor<'a>)>,
    {
        let (result, cursor) = f(self.cursor)?;
        self.cursor = cursor;
        Ok(result)
    }

    #[inline]
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    delegate! {
        to self.cursor {
            pub fn is_end(&self) -> bool;
            pub fn token(&self) -> &'a Token;
            pub fn span(&self) -> Span;
            pub fn peek_literal(&self, text: &str) -> bool;
            pub fn error(&self, expected: impl Display) -> ParseError;
        }
    }
}

/// A position in a [`TokenBuffer`].
///
/// Cursors only move forward and never move past the end of input marker.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    /// The token under the cursor; the end of input marker once all tokens are consumed.
    #[inline]
    pub fn token(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.token().kind() == TokenKind::End
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.token().span()
    }

    fn advance(self) -> Self {
        Self {
            tokens: self.tokens,
            index: (self.index + 1).min(self.tokens.len() - 1),
        }
    }

    /// The current token and the cursor after it, if the token's text is `expected`.
    pub fn literal(self, expected: &str) -> Option<(Token, Self)> {
        let token = self.token();
        if token.text() == expected {
            Some((token.clone(), self.advance()))
        } else {
            None
        }
    }

    /// The current token and the cursor after it, if the token is an atom.
    pub fn atom(self) -> Option<(Token, Self)> {
        let token = self.token();
        if token.kind().is_atom() {
            Some((token.clone(), self.advance()))
        } else {
            None
        }
    }

    pub fn peek_literal(&self, text: &str) -> bool {
        self.token().is_literal(text)
    }

    /// An error reporting that `expected` was wanted instead of the current token.
    pub fn error(&self, expected: impl Display) -> ParseError {
        let token = self.token();
        ParseError {
            found: token.text().into(),
            kind: token.kind(),
            expected: expected.to_string().into(),
            span: token.span(),
        }
    }
}

/// Trait for tree nodes that can be parsed from a token sequence.
pub trait Parse: Sized {
    fn parse(parser: &mut Parser<'_>) -> Result<Self>;
}

impl<V: Parse> Parse for Box<V> {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        Ok(Box::new(parser.parse()?))
    }
}

/// Trait for tree nodes that can be recognised by looking at the current token.
pub trait Peek: Sized {
    fn peek(cursor: Cursor<'_>) -> bool;
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected token `{found}` of type {kind}, expected {expected}")]
pub struct ParseError {
    found: SmolStr,
    kind: TokenKind,
    expected: SmolStr,
    span: Span,
}

impl ParseError {
    /// Text of the offending token; empty at the end of input.
    pub fn found(&self) -> &str {
        &self.found
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Shorthand for a result specialised to parse errors.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Parse a [`Program`] from a token sequence produced by [`tokenize`].
///
/// [`tokenize`]: crate::lexer::tokenize
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Program> {
    let buffer = TokenBuffer::new(tokens);
    let mut parser = buffer.parser();
    match parser.parse::<Program>() {
        Ok(program) => {
            tracing::debug!(expressions = program.len(), "parsed program");
            Ok(program)
        }
        Err(error) => {
            tracing::debug!(%error, "parse failed");
            Err(error)
        }
    }
}
