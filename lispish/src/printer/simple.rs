use std::convert::Infallible;

use super::{Print, Printer};
use crate::lexer::Token;

/// Prints everything on one line with single spaces between siblings.
struct SimplePrinter {
    needs_whitespace: bool,
    string: String,
}

impl SimplePrinter {
    pub fn new() -> Self {
        Self {
            needs_whitespace: false,
            string: String::new(),
        }
    }
}

impl Printer for SimplePrinter {
    type Error = Infallible;

    fn token(&mut self, token: &Token) -> Result<(), Self::Error> {
        if self.needs_whitespace {
            self.string.push(' ');
        }

        self.needs_whitespace = true;
        self.string.push_str(token.text());
        Ok(())
    }

    fn list<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        if self.needs_whitespace {
            self.string.push(' ');
        }

        self.string.push('(');
        self.needs_whitespace = false;
        f(self)?;
        self.string.push(')');
        self.needs_whitespace = true;

        Ok(())
    }
}

/// Print a `T` as source text on a single line.
///
/// This function does not produce any line breaks, indentation, or unnecessary whitespace.
/// Where human readability is a concern, consider using the [`to_string_pretty`] function instead.
///
/// [`to_string_pretty`]: `crate::printer::to_string_pretty`
pub fn to_string<T: Print>(value: T) -> String {
    let mut printer = SimplePrinter::new();
    let _ = value.print(&mut printer);
    printer.string
}
