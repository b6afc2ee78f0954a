use std::convert::Infallible;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_run::cli::Cli;
use env_run::{launch, logging, EnvBuilder, Error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_filter());

    match run(cli) {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("Error: {err}");
            if matches!(err, Error::Usage) {
                eprintln!();
                eprint!("{}", Cli::command().render_help());
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// Loads the env files, then execs the command. Only returns on failure.
fn run(cli: Cli) -> Result<Infallible, Error> {
    let (env_files, request) = cli.into_parts()?;

    let env = env_files
        .iter()
        .fold(EnvBuilder::new(), |builder, path| builder.with_file(path, false))
        .with_process_env()
        .build()?;

    Err(launch(&request, &env).into())
}
