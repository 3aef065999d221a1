use clap::Args;
use std::io::Write;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct FmtArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum line width of the output
    #[arg(short, long, env = "LISPISH_WIDTH", default_value_t = 80)]
    pub width: usize,
}

impl FmtArgs {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let source = self.input.read()?;
        let program = lispish::from_str(&source)?;
        writeln!(out, "{}", lispish::to_string_pretty(&program, self.width))?;
        Ok(())
    }
}
