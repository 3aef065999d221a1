use clap::Args;
use std::io::Write;

use super::tokens::write_tokens;
use super::InputArgs;

const WIDTH: usize = 50;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl CheckArgs {
    /// Writes a report section by section, so everything up to a failing stage is still shown.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let source = self.input.read()?;
        let rule = "-".repeat(WIDTH);

        writeln!(out, "{}", "=".repeat(WIDTH))?;
        writeln!(out, "Input: {source}")?;
        writeln!(out, "{rule}")?;

        let tokens = lispish::tokenize(&source)?;
        writeln!(out, "Tokens")?;
        writeln!(out, "{rule}")?;
        write_tokens(out, &tokens)?;
        writeln!(out, "{rule}")?;

        let program = lispish::parse(tokens)?;
        writeln!(out, "Parse Tree")?;
        writeln!(out, "{rule}")?;
        write!(out, "{}", lispish::to_tree_string(&program))?;
        writeln!(out, "{rule}")?;

        tracing::info!(expressions = program.len(), "check passed");
        Ok(())
    }
}
