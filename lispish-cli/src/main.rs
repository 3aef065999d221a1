use clap::Parser;
use lispish_cli::LispishApplication;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = LispishApplication::parse();
    cli.init_logging();

    let mut stdout = std::io::stdout().lock();
    let result = cli.command.run(&mut stdout);
    let _ = stdout.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
