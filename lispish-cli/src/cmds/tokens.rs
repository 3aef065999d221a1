use clap::Args;
use lispish::Token;
use std::io::Write;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl TokensArgs {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let source = self.input.read()?;
        let tokens = lispish::tokenize(&source)?;
        write_tokens(out, &tokens)?;
        Ok(())
    }
}

/// One token per line: the kind padded to 21 columns, a tab, then the text.
pub(crate) fn write_tokens(out: &mut impl Write, tokens: &[Token]) -> std::io::Result<()> {
    for token in tokens {
        writeln!(out, "{:<21}\t: {}", token.kind(), token.text())?;
    }
    Ok(())
}
