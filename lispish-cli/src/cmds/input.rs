use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where the source text comes from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// File to read; standard input is used when neither a file nor `--expr` is given
    #[arg(conflicts_with = "expr")]
    pub file: Option<PathBuf>,

    /// Source text given on the command line
    #[arg(short, long)]
    pub expr: Option<String>,
}

impl InputArgs {
    pub fn read(&self) -> anyhow::Result<String> {
        if let Some(expr) = &self.expr {
            return Ok(expr.clone());
        }

        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read standard input")?;
                Ok(source)
            }
        }
    }
}
