//! Scriptguard CLI - compare SQL view definitions and list the tables a query reads

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::{CommandTimer, ExitCode};
use commands::{clean, compare, normalize, tables};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExitCode>() {
            Some(ExitCode(code)) => std::process::ExitCode::from(*code as u8),
            None => {
                eprintln!("Error: {:#}", err);
                std::process::ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let timer = CommandTimer::start(command_name(&cli.command), &cli.global);
    let result = match &cli.command {
        cli::Commands::Compare(args) => compare::execute(args, &cli.global),
        cli::Commands::Tables(args) => tables::execute(args, &cli.global),
        cli::Commands::Clean(args) => clean::execute(args, &cli.global),
        cli::Commands::Normalize(args) => normalize::execute(args, &cli.global),
    };
    timer.finish();
    result
}

fn command_name(command: &cli::Commands) -> &'static str {
    match command {
        cli::Commands::Compare(_) => "compare",
        cli::Commands::Tables(_) => "tables",
        cli::Commands::Clean(_) => "clean",
        cli::Commands::Normalize(_) => "normalize",
    }
}
