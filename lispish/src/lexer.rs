//! Turn source text into a sequence of [`Token`]s.
use std::fmt;
use std::ops::Range;

use logos::Logos;
use smol_str::SmolStr;

/// Span within a string.
pub type Span = Range<usize>;

/// Raw token classes recognised by the scanner.
///
/// Logos picks the longest match, so the identifier patterns are written to
/// never start where a number could start (`[+-]?\.?[0-9]`). That way the
/// number patterns always win at such a position, and `3abc` scans as an
/// integer followed by an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"\s+")]
enum LexerToken {
    #[token("(")]
    #[token(")")]
    Literal,
    #[regex(r"[+\-]?[0-9]*\.[0-9]+")]
    Real,
    #[regex(r"[+\-]?[0-9]+")]
    Int,
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    #[regex(r#"[^\s"()+\-.0-9][^\s"()]*"#)]
    #[regex(r#"[+\-]([^\s"().0-9][^\s"()]*)?"#)]
    #[regex(r#"[+\-]?\.([^\s"()0-9][^\s"()]*)?"#)]
    Id,
}

/// The lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Id,
    Int,
    Real,
    String,
    /// A single `(` or `)`.
    Literal,
    /// Marker appended after the last token by the parser. Never produced by [`tokenize`].
    End,
}

impl TokenKind {
    /// Whether a token of this kind forms an atom on its own.
    pub fn is_atom(self) -> bool {
        matches!(
            self,
            TokenKind::Id | TokenKind::Int | TokenKind::Real | TokenKind::String
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TokenKind::Id => "ID",
            TokenKind::Int => "INT",
            TokenKind::Real => "REAL",
            TokenKind::String => "STRING",
            TokenKind::Literal => "LITERAL",
            TokenKind::End => "END",
        })
    }
}

impl From<LexerToken> for TokenKind {
    fn from(token: LexerToken) -> Self {
        match token {
            LexerToken::Literal => TokenKind::Literal,
            LexerToken::Real => TokenKind::Real,
            LexerToken::Int => TokenKind::Int,
            LexerToken::String => TokenKind::String,
            LexerToken::Id => TokenKind::Id,
        }
    }
}

/// A classified run of source text.
///
/// The text is kept exactly as it appears in the source; string tokens keep
/// their quotes and escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: SmolStr,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end of input marker, positioned at `offset`.
    pub fn end(offset: usize) -> Self {
        Self::new(TokenKind::End, "", offset..offset)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Whether this is the literal token `text`.
    pub fn is_literal(&self, text: &str) -> bool {
        self.kind == TokenKind::Literal && self.text == text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string starting at offset {}", .0.start)]
    UnterminatedString(Span),
    #[error("unrecognized input at offset {}", .0.start)]
    Unrecognized(Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString(span) => span.clone(),
            LexError::Unrecognized(span) => span.clone(),
        }
    }
}

/// Split `source` into tokens.
///
/// Fails on the first position where no token can be recognised; tokens that
/// were already produced are discarded.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = LexerToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let token = match token {
            Ok(token) => token,
            Err(()) => {
                let error = if source[span.start..].starts_with('"') {
                    LexError::UnterminatedString(span)
                } else {
                    LexError::Unrecognized(span)
                };
                tracing::debug!(%error, "tokenize failed");
                return Err(error);
            }
        };

        tokens.push(Token::new(token.into(), lexer.slice(), span));
    }

    tracing::debug!(tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::{tokenize, LexError, TokenKind};
    use rstest::rstest;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| (token.kind(), token.text().to_string()))
            .collect()
    }

    #[rstest]
    #[case("foo", TokenKind::Id)]
    #[case("+", TokenKind::Id)]
    #[case("-", TokenKind::Id)]
    #[case(".", TokenKind::Id)]
    #[case("+.", TokenKind::Id)]
    #[case("-a", TokenKind::Id)]
    #[case("+-1", TokenKind::Id)]
    #[case("..5", TokenKind::Id)]
    #[case("a+2", TokenKind::Id)]
    #[case("\\x", TokenKind::Id)]
    #[case("42", TokenKind::Int)]
    #[case("+5", TokenKind::Int)]
    #[case("-17", TokenKind::Int)]
    #[case("3.14", TokenKind::Real)]
    #[case("-.5", TokenKind::Real)]
    #[case(".25", TokenKind::Real)]
    #[case("+0.0", TokenKind::Real)]
    #[case(r#""""#, TokenKind::String)]
    #[case(r#""bananas""#, TokenKind::String)]
    #[case(r#""Say \"Hi\"""#, TokenKind::String)]
    #[case("\"a\nb\"", TokenKind::String)]
    #[case("(", TokenKind::Literal)]
    #[case(")", TokenKind::Literal)]
    fn test_single_token(#[case] source: &str, #[case] kind: TokenKind) {
        assert_eq!(vec![(kind, source.to_string())], kinds_and_texts(source));
    }

    #[rstest]
    #[case("3abc", &[(TokenKind::Int, "3"), (TokenKind::Id, "abc")])]
    #[case("1.2.3", &[(TokenKind::Real, "1.2"), (TokenKind::Real, ".3")])]
    #[case("1.", &[(TokenKind::Int, "1"), (TokenKind::Id, ".")])]
    #[case("1e5", &[(TokenKind::Int, "1"), (TokenKind::Id, "e5")])]
    #[case("1+2", &[(TokenKind::Int, "1"), (TokenKind::Int, "+2")])]
    #[case(r#""a"b"#, &[(TokenKind::String, r#""a""#), (TokenKind::Id, "b")])]
    #[case(r#"ab"c""#, &[(TokenKind::Id, "ab"), (TokenKind::String, r#""c""#)])]
    #[case("(a)", &[(TokenKind::Literal, "("), (TokenKind::Id, "a"), (TokenKind::Literal, ")")])]
    fn test_adjacent_tokens(#[case] source: &str, #[case] expected: &[(TokenKind, &str)]) {
        let expected: Vec<_> = expected
            .iter()
            .map(|(kind, text)| (*kind, text.to_string()))
            .collect();
        assert_eq!(expected, kinds_and_texts(source));
    }

    #[test]
    fn test_add_expression() {
        assert_eq!(
            vec![
                (TokenKind::Literal, "(".to_string()),
                (TokenKind::Id, "+".to_string()),
                (TokenKind::Int, "3".to_string()),
                (TokenKind::Int, "4".to_string()),
                (TokenKind::Literal, ")".to_string()),
            ],
            kinds_and_texts("(+ 3 4)")
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize(" \t\r\n ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "(define foo\n  \"bar baz\")";
        for token in tokenize(source).unwrap() {
            assert_eq!(token.text(), &source[token.span()]);
        }
    }

    #[rstest]
    #[case(r#""abc"#, 0)]
    #[case(r#"(define foo "Say \"Cheese!\)"#, 12)]
    #[case("a \"b\\\nc\"", 2)]
    fn test_unterminated_string(#[case] source: &str, #[case] offset: usize) {
        let error = tokenize(source).unwrap_err();
        assert!(matches!(error, LexError::UnterminatedString(_)));
        assert_eq!(offset, error.span().start);
    }
}
