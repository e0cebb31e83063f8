mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use basen::{error, types, Context};
use cli::{Cli, Command};
use commands::CommandHandler;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc { codec, r#in, out, json } => Box::new(commands::EncCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::Dec {
            codec,
            r#in,
            out,
            mode,
            force,
            json,
        } => Box::new(commands::DecCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            mode: mode.into(),
            force,
            json,
        }),

        Command::Conv {
            from,
            to,
            r#in,
            out,
            mode,
            json,
        } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            mode: mode.into(),
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { codec, json } => Box::new(commands::InfoCommand { codec, json }),

        Command::Verify { codec, r#in, mode, json } => Box::new(commands::VerifyCommand {
            codec,
            input: types::InputSource::parse(&r#in),
            mode: mode.into(),
            json,
        }),

        Command::Demo => Box::new(commands::DemoCommand),

        Command::Bench => Box::new(commands::BenchCommand),
    };

    handler.execute(&ctx)
}
