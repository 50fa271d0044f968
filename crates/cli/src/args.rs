//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use svcutil_config::constants::DEFAULT_LOCAL_VARS_PATH;

/// Operational CLI for svcutil-based services: resolve and inspect
/// configuration, read single values, send a test notification.
#[derive(Parser, Debug)]
#[command(name = "svcutil", version, about)]
pub struct Cli {
    /// Deployment stack (local, sand, dev, test, stage, prod).
    #[arg(long, global = true, env = "APP_STACK", default_value = "local")]
    pub stack: String,

    /// Secret backend used for the local stack (secretsmanager, ssm).
    #[arg(
        long,
        global = true,
        env = "SECRET_BACKEND",
        default_value = "secretsmanager"
    )]
    pub secret_backend: String,

    /// Path of the local vars YAML file (consulted only for the local stack).
    #[arg(
        long,
        global = true,
        env = "LOCAL_VARS_PATH",
        default_value = DEFAULT_LOCAL_VARS_PATH
    )]
    pub local_vars: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the configuration snapshot and print a redacted summary.
    Check,

    /// Print the resolved value for a single configuration key.
    Get {
        /// Configuration key name, e.g. DB_HOST.
        name: String,
    },

    /// Send a test notification through the configured webhook.
    Notify {
        /// Notification title.
        title: String,

        /// Notification message body.
        message: String,

        /// Optional link appended to the message.
        #[arg(long)]
        link: Option<String>,
    },
}
