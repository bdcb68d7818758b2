use std::io;
use std::process::ExitCode;

use clap::Parser;
use nexevent_auth::AuthConfig;
use nexevent_auth::Authenticator;
use nexevent_cli::run;
use nexevent_cli::Cli;
use nexevent_cli::Outcome;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexevent_cli=info,nexevent_auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AuthConfig::load()?;

    tracing::debug!(
        expiration_hours = config.jwt.expiration_hours,
        leeway_seconds = config.jwt.leeway_seconds,
        memory_kib = config.password.memory_kib,
        iterations = config.password.iterations,
        parallelism = config.password.parallelism,
        "Configuration loaded"
    );

    let authenticator = Authenticator::from_config(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = run(cli.command, &authenticator, stdin.lock(), &mut stdout).await?;

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::FAILURE,
    })
}
