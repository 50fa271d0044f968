//! svcutil - operational CLI for svcutil-based services.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the configuration snapshot (connecting a secret backend for
//!   the local stack) and run the requested command against it.
//!
//! Does NOT handle:
//! - Configuration merge semantics (see crates/config).
//! - Secret backend transport (see crates/secrets).
//!
//! Invariants:
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can provide clap
//!   env-backed defaults.
//! - Exit code 2 is reserved for fatal configuration errors.

mod args;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Commands};
use error::{ExitCode, ExitCodeExt};
use svcutil_config::{ConfigLoader, Stack};
use svcutil_secrets::{SecretBackend, SecretStore};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values.
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(e.exit_code().as_i32());
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let stack: Stack = cli.stack.parse()?;

    let mut loader = ConfigLoader::new()
        .with_stack(stack)
        .with_local_vars_path(cli.local_vars.clone());

    // Only the local stack resolves secrets at startup; other stacks rely
    // on the environment injected by the deployment platform.
    if stack.is_local() {
        let backend: SecretBackend = cli.secret_backend.parse()?;
        loader = loader.with_secret_store(SecretStore::connect(backend).await);
    }

    let config = loader.build().await?;

    match cli.command {
        Commands::Check => commands::check::run(&config),
        Commands::Get { ref name } => commands::get::run(&config, name),
        Commands::Notify {
            ref title,
            ref message,
            ref link,
        } => commands::notify::run(&config, title, message, link.as_deref()).await,
    }
}
