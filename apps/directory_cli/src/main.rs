use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    config::load_settings, DirectoryController, DirectoryView, EmployeeSource,
    HttpEmployeeSource,
};
use shared::domain::EmployeeId;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "directory", about = "Team Directory from the command line")]
struct Args {
    /// Employee list endpoint; overrides settings file and environment.
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Settings file (defaults to ./directory.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print raw records as JSON instead of cards.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every employee.
    List,
    /// Show employees whose first name, last name or role contains QUERY.
    Search { query: String },
    /// Show a single employee by id.
    Show { id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_url = endpoint;
    }
    let source = HttpEmployeeSource::new(&settings.endpoint_url)?;
    tracing::info!(endpoint = %source.endpoint(), "using employee endpoint");

    match args.command {
        Command::Show { id } => show(&source, EmployeeId(id), args.json).await,
        Command::Search { query } if args.json => {
            match source.search_employees(&query).await {
                Ok(employees) => {
                    println!("{}", serde_json::to_string_pretty(&employees)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(failure) => Ok(report_failure(failure.message())),
            }
        }
        Command::List if args.json => match source.list_employees().await {
            Ok(employees) => {
                println!("{}", serde_json::to_string_pretty(&employees)?);
                Ok(ExitCode::SUCCESS)
            }
            Err(failure) => Ok(report_failure(failure.message())),
        },
        Command::List => Ok(print_directory(source, None).await),
        Command::Search { query } => Ok(print_directory(source, Some(query)).await),
    }
}

async fn print_directory(source: HttpEmployeeSource, query: Option<String>) -> ExitCode {
    let mut controller = DirectoryController::new(source);
    controller.mount().await;
    if let Some(query) = query {
        controller.search(query);
    }

    let view = DirectoryView::from_state(controller.state());
    if let DirectoryView::Error { message } = &view {
        return report_failure(message);
    }
    print!("{}", render::render_view(&view));
    ExitCode::SUCCESS
}

async fn show(source: &HttpEmployeeSource, id: EmployeeId, json: bool) -> Result<ExitCode> {
    let employee = match source.find_employee(id).await {
        Ok(employee) => employee,
        Err(failure) => return Ok(report_failure(failure.message())),
    };
    match employee {
        Some(employee) if json => println!("{}", serde_json::to_string_pretty(&employee)?),
        Some(employee) => print!("{}", render::render_employee(&employee)),
        None => {
            eprintln!("No employee with ID {id}.");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn report_failure(message: &str) -> ExitCode {
    eprintln!("{}", client_core::view::ERROR_TITLE);
    eprintln!("{message}");
    ExitCode::FAILURE
}
