//! Lexer and parser for a small s-expression language.
//!
//! # Syntax
//!
//! Source text is split into tokens, in order of precedence:
//!
//! - **Whitespace** separates tokens and is otherwise ignored.
//!
//! - **Literals** are the single characters `(` and `)`.
//!
//! - **Reals** have an optional sign, optional integer digits, a decimal
//!   point and at least one fractional digit: `3.14`, `-.5`.
//!
//! - **Integers** have an optional sign and at least one digit: `42`, `+7`.
//!
//! - **Strings** are enclosed in double quotes. A backslash escapes the
//!   character after it, so `"Say \"Hi\""` is a single string. The token keeps
//!   the quotes and escapes verbatim; use [`Atom::value`] to decode it.
//!
//! - **Identifiers** are any other run of characters up to whitespace, `"`,
//!   `(` or `)`: `define`, `+`, `list->vector`.
//!
//! The tokens are then parsed with the grammar
//!
//! ```text
//! Program ::= { SExpr }
//! SExpr   ::= Atom | List
//! List    ::= "(" ")" | "(" Seq ")"
//! Seq     ::= SExpr Seq | SExpr
//! Atom    ::= ID | INT | REAL | STRING
//! ```
//!
//! into a [`Program`] whose shape follows the derivation exactly.
//!
//! ```
//! let program = lispish::from_str("(+ 3 4)").unwrap();
//! assert_eq!(1, program.len());
//! assert_eq!("(+ 3 4)", lispish::to_string(&program));
//! ```

pub(crate) mod escape;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod tree;
pub mod value;

pub use lexer::{tokenize, LexError, Span, Token, TokenKind};
pub use parser::{parse, ParseError};
pub use printer::{to_string, to_string_pretty, to_tree_string};
pub use tree::{Atom, List, Node, Program, SExpr, Seq, Tag};
pub use value::{Value, ValueError};

/// An error from either stage of [`from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn span(&self) -> Span {
        match self {
            Error::Lex(error) => error.span(),
            Error::Parse(error) => error.span(),
        }
    }
}

/// Tokenize and parse `source`.
pub fn from_str(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse(tokens)?)
}

#[cfg(test)]
mod test {
    use crate::{from_str, parse, to_string, to_string_pretty, tokenize, Error, Tag, TokenKind};
    use crate::{Node, Program};
    use proptest::prelude::*;

    /// A generated s-expression, rendered with single spaces.
    #[derive(Debug, Clone)]
    enum Expr {
        Atom(String),
        List(Vec<Expr>),
    }

    impl Expr {
        fn render(&self) -> String {
            match self {
                Expr::Atom(atom) => atom.clone(),
                Expr::List(items) => {
                    let items: Vec<_> = items.iter().map(Expr::render).collect();
                    format!("({})", items.join(" "))
                }
            }
        }
    }

    fn atom() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z*/<>=!?][a-z0-9+.-]{0,6}",
            "[+-]?[0-9]{1,6}",
            "[+-]?[0-9]{0,3}\\.[0-9]{1,3}",
            r#""([a-z (). ]|\\[a-z"\\])*""#,
        ]
    }

    fn expr() -> impl Strategy<Value = Expr> {
        atom().prop_map(Expr::Atom).prop_recursive(6, 64, 6, |inner| {
            proptest::collection::vec(inner, 0..6).prop_map(Expr::List)
        })
    }

    fn separator() -> impl Strategy<Value = String> {
        "[ \t\n]{1,3}"
    }

    fn program() -> impl Strategy<Value = (Vec<Expr>, String)> {
        proptest::collection::vec((expr(), separator()), 0..8).prop_map(|items| {
            let source: String = items
                .iter()
                .map(|(expr, separator)| format!("{}{separator}", expr.render()))
                .collect();
            (items.into_iter().map(|(expr, _)| expr).collect(), source)
        })
    }

    fn token_texts(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| (token.kind(), token.text().to_string()))
            .collect()
    }

    proptest! {
        #[test]
        fn tokens_cover_source((_, source) in program()) {
            let tokens = tokenize(&source).unwrap();
            let mut position = 0;
            for token in &tokens {
                let span = token.span();
                prop_assert!(source[position..span.start].chars().all(char::is_whitespace));
                prop_assert_eq!(token.text(), &source[span.clone()]);
                position = span.end;
            }
            prop_assert!(source[position..].chars().all(char::is_whitespace));
        }

        #[test]
        fn one_child_per_expression((exprs, source) in program()) {
            let program = from_str(&source).unwrap();
            let children = Node::from(&program).children();
            prop_assert_eq!(exprs.len(), children.len());
            prop_assert!(children.iter().all(|child| child.tag() == Tag::SExpr));
        }

        #[test]
        fn parsing_is_deterministic((_, source) in program()) {
            let first: Program = parse(tokenize(&source).unwrap()).unwrap();
            let second: Program = parse(tokenize(&source).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn printed_source_has_same_tokens((_, source) in program(), width in 0..120usize) {
            let program = from_str(&source).unwrap();
            prop_assert_eq!(token_texts(&source), token_texts(&to_string(&program)));
            prop_assert_eq!(token_texts(&source), token_texts(&to_string_pretty(&program, width)));
        }
    }

    #[test]
    fn test_escaped_quotes_stay_verbatim() {
        let tokens = tokenize(r#""Say \"Hi\"""#).unwrap();
        assert_eq!(1, tokens.len());
        assert_eq!(TokenKind::String, tokens[0].kind());
        assert_eq!(r#""Say \"Hi\"""#, tokens[0].text());
    }

    #[test]
    fn test_missing_close_paren() {
        assert!(matches!(from_str("(+ 3 4"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_lex_error_wins_over_parse_error() {
        let error = from_str(r#"(define foo "Say \"Cheese!\)"#).unwrap_err();
        assert!(matches!(error, Error::Lex(_)));
        assert_eq!(12, error.span().start);
    }
}
