use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod cmds;

pub use cmds::{CheckArgs, FmtArgs, InputArgs, TokensArgs, TreeArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct LispishApplication {
    /// Log more detail to stderr; repeat for trace output. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: LispishCommands,
}

impl LispishApplication {
    /// Install a stderr subscriber for the library's tracing events.
    pub fn init_logging(&self) {
        let default = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[derive(Subcommand)]
pub enum LispishCommands {
    /// Print the input, its tokens and its parse tree
    Check(CheckArgs),
    /// Print the tokens of the input
    Tokens(TokensArgs),
    /// Print the parse tree of the input
    Tree(TreeArgs),
    /// Print the input reformatted to a line width
    Fmt(FmtArgs),
}

impl LispishCommands {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            LispishCommands::Check(args) => args.run(out),
            LispishCommands::Tokens(args) => args.run(out),
            LispishCommands::Tree(args) => args.run(out),
            LispishCommands::Fmt(args) => args.run(out),
        }
    }
}
