//! Print trees as text.
//!
//! [`to_string`] and [`to_string_pretty`] render a tree back into source text.
//! Tokens are written verbatim, so the output tokenizes to the same sequence
//! of tokens as the input it was parsed from. [`to_tree_string`] dumps the
//! derivation itself, one node per line.
mod dump;
mod pretty;
mod simple;
pub use dump::to_tree_string;
pub use pretty::to_string_pretty;
pub use simple::to_string;

use crate::lexer::Token;
use crate::tree::{Atom, List, Program, SExpr, Seq};

/// Trait for types that can print trees as source text.
pub trait Printer: Sized {
    type Error;

    /// Print a token as it appeared in the source.
    fn token(&mut self, token: &Token) -> Result<(), Self::Error>;

    /// Print a parenthesised list given a function that prints the contents.
    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Print a printable value.
    fn print(&mut self, value: impl Print) -> Result<(), Self::Error> {
        value.print(self)
    }
}

/// Trait for types that can be printed as source text.
pub trait Print {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error>;
}

impl<T: Print + ?Sized> Print for &T {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        (*self).print(printer)
    }
}

impl<T: Print> Print for Box<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(self.as_ref())
    }
}

impl<T: Print> Print for [T] {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        for item in self {
            printer.print(item)?;
        }
        Ok(())
    }
}

impl<T: Print> Print for Vec<T> {
    #[inline]
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(self.as_slice())
    }
}

impl Print for Token {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.token(self)
    }
}

impl Print for Program {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.print(&self.exprs)
    }
}

impl Print for SExpr {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        match self {
            SExpr::Atom(atom) => printer.print(atom),
            SExpr::List(list) => printer.print(list),
        }
    }
}

impl Print for List {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.list(|printer| match self.seq() {
            Some(seq) => printer.print(seq),
            None => Ok(()),
        })
    }
}

/// Prints the items of the chain, without delimiters.
impl Print for Seq {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        for item in self {
            printer.print(item)?;
        }
        Ok(())
    }
}

impl Print for Atom {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.token(&self.token)
    }
}
