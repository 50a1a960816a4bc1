//! dashboard-access - access control service and inspection tool
//!
//! `serve` runs the HTTP surface; the other subcommands answer access
//! questions offline and print JSON.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_access::navigation::filtered_navigation;
use dashboard_access::server;
use dashboard_access::server::types::MatrixRow;
use dashboard_access::utils::logging::{LogFormat, init_tracing};
use dashboard_access::{Config, Permission, Requirement, Role, check_detailed};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dashboard-access", version, about)]
struct Cli {
    /// Configuration file
    #[arg(
        long,
        global = true,
        env = "DASHBOARD_ACCESS_CONFIG",
        default_value = "config/access.yaml"
    )]
    config: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, env = "DASHBOARD_ACCESS_LOG", default_value = "info")]
    log_level: String,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the role-permission matrix
    Matrix {
        /// Only this role
        #[arg(long)]
        role: Option<Role>,
    },
    /// Check permissions for a role
    Check {
        #[arg(long)]
        role: Role,
        /// Grant when any permission is held instead of all
        #[arg(long)]
        any: bool,
        #[arg(required = true)]
        permissions: Vec<Permission>,
    },
    /// Print the navigation visible to a role
    Nav {
        #[arg(long)]
        role: Role,
    },
    /// Parse a configuration file, apply environment overrides and validate
    Validate,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve => server::run_server(Some(cli.config.as_path())).await?,
        Command::Matrix { role } => {
            let matrix: Vec<MatrixRow> = MatrixRow::all()
                .into_iter()
                .filter(|row| role.is_none_or(|role| row.role == role))
                .collect();
            print_json(&matrix)?;
        }
        Command::Check {
            role,
            any,
            permissions,
        } => {
            let requirement = Requirement::list(permissions, !any);
            print_json(&check_detailed(role, &requirement))?;
        }
        Command::Nav { role } => print_json(&filtered_navigation(role))?,
        Command::Validate => {
            let config = Config::load(&cli.config)
                .await
                .with_context(|| format!("Invalid configuration: {}", cli.config.display()))?;
            print_json(&config)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(&cli.log_level, format);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
