//! Concrete syntax trees.
//!
//! Every grammar rule has its own type and the tree mirrors the derivation
//! exactly: nothing is elided, so a list of `n` items is a chain of `n` [`Seq`]
//! nodes. [`Node`] gives a uniform view over all of them for code that wants
//! to walk the tree by tag, text and children.
//!
//! ```text
//! Program ::= { SExpr }
//! SExpr   ::= Atom | List
//! List    ::= "(" ")" | "(" Seq ")"
//! Seq     ::= SExpr Seq | SExpr
//! Atom    ::= ID | INT | REAL | STRING
//! ```
use std::fmt;

use crate::lexer::{Token, TokenKind};
use crate::parser::{Cursor, Parse, Parser, Peek, Result};

/// The root of a parse: a sequence of s-expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub exprs: Vec<SExpr>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

impl Parse for Program {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        let mut exprs = Vec::new();
        while !parser.is_end() {
            exprs.push(parser.parse()?);
        }
        Ok(Self { exprs })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExpr {
    Atom(Atom),
    List(List),
}

impl Parse for SExpr {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        // Anything that is not an atom is handed to `List`, which reports the error.
        if parser.peek::<Atom>() {
            Ok(SExpr::Atom(parser.parse()?))
        } else {
            Ok(SExpr::List(parser.parse()?))
        }
    }
}

/// A parenthesised list, keeping both parenthesis tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum List {
    Empty { open: Token, close: Token },
    Items { open: Token, seq: Seq, close: Token },
}

impl List {
    pub fn open(&self) -> &Token {
        match self {
            List::Empty { open, .. } | List::Items { open, .. } => open,
        }
    }

    pub fn close(&self) -> &Token {
        match self {
            List::Empty { close, .. } | List::Items { close, .. } => close,
        }
    }

    pub fn seq(&self) -> Option<&Seq> {
        match self {
            List::Empty { .. } => None,
            List::Items { seq, .. } => Some(seq),
        }
    }

    /// The elements of the list in order.
    pub fn items(&self) -> SeqIter<'_> {
        SeqIter { next: self.seq() }
    }
}

impl Parse for List {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        let open = parser.literal("(")?;
        if parser.peek_literal(")") {
            let close = parser.literal(")")?;
            Ok(List::Empty { open, close })
        } else {
            let seq = parser.parse()?;
            let close = parser.literal(")")?;
            Ok(List::Items { open, seq, close })
        }
    }
}

/// One or more s-expressions, as a right-leaning chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seq {
    pub head: Box<SExpr>,
    pub tail: Option<Box<Seq>>,
}

impl Seq {
    /// Iterate over the s-expressions of this chain without recursing.
    pub fn iter(&self) -> SeqIter<'_> {
        SeqIter { next: Some(self) }
    }
}

impl Parse for Seq {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        let head = parser.parse()?;
        let tail = if parser.peek_literal(")") {
            None
        } else {
            Some(parser.parse()?)
        };
        Ok(Self { head, tail })
    }
}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a SExpr;
    type IntoIter = SeqIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the s-expressions in a [`Seq`] chain.
#[derive(Debug, Clone)]
pub struct SeqIter<'a> {
    next: Option<&'a Seq>,
}

impl<'a> Iterator for SeqIter<'a> {
    type Item = &'a SExpr;

    fn next(&mut self) -> Option<Self::Item> {
        let seq = self.next?;
        self.next = seq.tail.as_deref();
        Some(&seq.head)
    }
}

/// A single identifier, number or string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub token: Token,
}

impl Peek for Atom {
    fn peek(cursor: Cursor<'_>) -> bool {
        cursor.token().kind().is_atom()
    }
}

impl Parse for Atom {
    fn parse(parser: &mut Parser<'_>) -> Result<Self> {
        Ok(Self {
            token: parser.atom()?,
        })
    }
}

/// The grammar rule or token kind a [`Node`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Program,
    SExpr,
    List,
    Seq,
    Atom,
    Token(TokenKind),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Program => f.pad("Program"),
            Tag::SExpr => f.pad("SExpr"),
            Tag::List => f.pad("List"),
            Tag::Seq => f.pad("Seq"),
            Tag::Atom => f.pad("Atom"),
            Tag::Token(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

/// A borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Program(&'a Program),
    SExpr(&'a SExpr),
    List(&'a List),
    Seq(&'a Seq),
    Atom(&'a Atom),
    Token(&'a Token),
}

impl<'a> Node<'a> {
    pub fn tag(self) -> Tag {
        match self {
            Node::Program(_) => Tag::Program,
            Node::SExpr(_) => Tag::SExpr,
            Node::List(_) => Tag::List,
            Node::Seq(_) => Tag::Seq,
            Node::Atom(_) => Tag::Atom,
            Node::Token(token) => Tag::Token(token.kind()),
        }
    }

    /// The token text for leaves, empty otherwise.
    pub fn text(self) -> &'a str {
        match self {
            Node::Token(token) => token.text(),
            _ => "",
        }
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, Node::Token(_))
    }

    /// The direct children, in the order of the grammar rule.
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Program(program) => program.exprs.iter().map(Node::SExpr).collect(),
            Node::SExpr(SExpr::Atom(atom)) => vec![Node::Atom(atom)],
            Node::SExpr(SExpr::List(list)) => vec![Node::List(list)],
            Node::List(List::Empty { open, close }) => vec![Node::Token(open), Node::Token(close)],
            Node::List(List::Items { open, seq, close }) => {
                vec![Node::Token(open), Node::Seq(seq), Node::Token(close)]
            }
            Node::Seq(Seq { head, tail }) => {
                let mut children = vec![Node::SExpr(head)];
                children.extend(tail.as_deref().map(Node::Seq));
                children
            }
            Node::Atom(atom) => vec![Node::Token(&atom.token)],
            Node::Token(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(value: &'a Program) -> Self {
        Node::Program(value)
    }
}

impl<'a> From<&'a SExpr> for Node<'a> {
    fn from(value: &'a SExpr) -> Self {
        Node::SExpr(value)
    }
}

impl<'a> From<&'a List> for Node<'a> {
    fn from(value: &'a List) -> Self {
        Node::List(value)
    }
}

impl<'a> From<&'a Seq> for Node<'a> {
    fn from(value: &'a Seq) -> Self {
        Node::Seq(value)
    }
}

impl<'a> From<&'a Atom> for Node<'a> {
    fn from(value: &'a Atom) -> Self {
        Node::Atom(value)
    }
}

impl<'a> From<&'a Token> for Node<'a> {
    fn from(value: &'a Token) -> Self {
        Node::Token(value)
    }
}

#[cfg(test)]
mod test {
    use super::{List, Node, Program, SExpr, Tag};
    use crate::lexer::{tokenize, TokenKind};
    use crate::parser::parse;

    fn parse_str(source: &str) -> Program {
        parse(tokenize(source).unwrap()).unwrap()
    }

    /// Tags and texts of a node and all of its descendants, depth first.
    fn shape(node: Node<'_>) -> Vec<(Tag, usize, String)> {
        let mut out = vec![(node.tag(), node.children().len(), node.text().to_string())];
        for child in node.children() {
            out.extend(shape(child));
        }
        out
    }

    #[test]
    fn test_empty_program() {
        let program = parse_str("  ");
        assert!(program.is_empty());
        assert!(Node::from(&program).children().is_empty());
    }

    #[test]
    fn test_empty_list() {
        let program = parse_str("()");
        let [SExpr::List(list)] = program.exprs.as_slice() else {
            panic!("expected a single list, got {program:?}");
        };
        assert!(matches!(list, List::Empty { .. }));

        let children = Node::List(list).children();
        assert_eq!(2, children.len());
        assert!(children.iter().all(|child| child.is_leaf()));
        assert_eq!("(", children[0].text());
        assert_eq!(")", children[1].text());
        assert_eq!(Tag::Token(TokenKind::Literal), children[0].tag());
    }

    #[test]
    fn test_add_expression_shape() {
        let program = parse_str("(+ 3 4)");
        let literal = Tag::Token(TokenKind::Literal);
        let expected = vec![
            (Tag::Program, 1, ""),
            (Tag::SExpr, 1, ""),
            (Tag::List, 3, ""),
            (literal, 0, "("),
            (Tag::Seq, 2, ""),
            (Tag::SExpr, 1, ""),
            (Tag::Atom, 1, ""),
            (Tag::Token(TokenKind::Id), 0, "+"),
            (Tag::Seq, 2, ""),
            (Tag::SExpr, 1, ""),
            (Tag::Atom, 1, ""),
            (Tag::Token(TokenKind::Int), 0, "3"),
            (Tag::Seq, 1, ""),
            (Tag::SExpr, 1, ""),
            (Tag::Atom, 1, ""),
            (Tag::Token(TokenKind::Int), 0, "4"),
            (literal, 0, ")"),
        ];
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(tag, children, text)| (tag, children, text.to_string()))
            .collect();
        assert_eq!(expected, shape(Node::from(&program)));
    }

    #[test]
    fn test_nested_lists() {
        let program = parse_str("(+ 3.14 (* 4 7))");
        let [SExpr::List(list)] = program.exprs.as_slice() else {
            panic!("expected a single list");
        };
        let items: Vec<_> = list.items().collect();
        assert_eq!(3, items.len());
        assert!(matches!(items[1], SExpr::Atom(atom) if atom.token.kind() == TokenKind::Real));

        let SExpr::List(inner) = items[2] else {
            panic!("expected a nested list");
        };
        let inner: Vec<_> = inner
            .items()
            .map(|item| match item {
                SExpr::Atom(atom) => atom.token.text().to_string(),
                SExpr::List(_) => panic!("unexpected list"),
            })
            .collect();
        assert_eq!(vec!["*", "4", "7"], inner);
    }

    #[test]
    fn test_top_level_expressions() {
        let program = parse_str("(define foo 3) foo \"bar\" ()");
        assert_eq!(4, program.len());
        assert!(Node::from(&program)
            .children()
            .iter()
            .all(|child| child.tag() == Tag::SExpr));
    }

    #[test]
    fn test_tag_padding() {
        assert_eq!("Seq  |", format!("{:<5}|", Tag::Seq));
        assert_eq!("INT  |", format!("{:<5}|", Tag::Token(TokenKind::Int)));
    }
}
