use clap::Args;
use std::io::Write;

use super::InputArgs;

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl TreeArgs {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let source = self.input.read()?;
        let program = lispish::from_str(&source)?;
        write!(out, "{}", lispish::to_tree_string(&program))?;
        Ok(())
    }
}
