use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{process_all, process_employees};
use payroll_engine::config::ConfigLoader;
use payroll_engine::records::{load_attendance, load_employees};
use payroll_engine::report::format_computation;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    /// Payroll configuration file; built-in tables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Employee roster CSV
    #[arg(long, global = true, default_value = "data/employees.csv")]
    employees: PathBuf,

    /// Attendance log CSV
    #[arg(long, global = true, default_value = "data/attendance.csv")]
    attendance: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Compute weekly payroll for specific employees", arg_required_else_help = true)]
    Employee {
        /// Employee numbers
        #[arg(required = true)]
        ids: Vec<String>,
    },
    #[command(about = "Compute weekly payroll for every employee on the roster")]
    All,
    #[command(about = "Serve the payroll API over HTTP")]
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => {
            info!("Using built-in payroll configuration");
            ConfigLoader::default()
        }
    };

    match cli.command {
        Commands::Employee { ids } => {
            let roster = load_employees(&cli.employees)?;
            let records = load_attendance(&cli.attendance)?;
            let results = process_employees(
                ids.iter().map(String::as_str),
                &roster,
                &records,
                loader.config(),
            );
            for result in results {
                match result {
                    Ok(computation) => print!("{}", format_computation(&computation)),
                    Err(error) => println!("{}.", error),
                }
            }
        }
        Commands::All => {
            let roster = load_employees(&cli.employees)?;
            let records = load_attendance(&cli.attendance)?;
            for computation in process_all(&roster, &records, loader.config()) {
                print!("{}", format_computation(&computation));
            }
        }
        Commands::Serve { addr } => {
            let router = create_router(AppState::new(loader));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!(%addr, "Payroll API listening");
            axum::serve(listener, router).await?;
        }
    }

    Ok(())
}
