mod app;
mod cli;
mod error;
mod logging;
mod output;
mod source;

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use quoteboard_core::{select, FetchConfig, LifecycleState};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level)?;

    let config = FetchConfig::resolve(cli.endpoint.as_deref())?;
    let client = source::build_client(cli.fixture.as_deref())?;

    if cli.format == OutputFormat::Table && std::io::stderr().is_terminal() {
        let loading = select(&LifecycleState::Loading);
        output::render_to(&mut std::io::stderr(), &loading, cli.format, cli.pretty)?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = app::run_with(client, &config.endpoint, cli.format, cli.pretty, &mut out).await?;
    Ok(ExitCode::from(code))
}
