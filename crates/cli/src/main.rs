mod commands;

use crate::commands::{
    handle_bucket, handle_collection, handle_database, handle_provision, handle_seed,
    handle_status, handle_teardown, ProvisionArgs, SeedArgs, TeardownArgs,
};

use clap::{Parser, Subcommand};
use common::error::OpsError;
use std::path::PathBuf;
use time::macros::format_description;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "occtl", about = "Provision the Occasionton Appwrite backend")]
pub struct Cli {
    #[arg(
        long = "env-file",
        short = 'e',
        help = "path to a .env file with the APPWRITE_* variables",
        global = true
    )]
    pub env_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Create the database, recreate bucket and collection, seed events
    Provision(ProvisionArgs),
    /// Create the events database if it is absent
    Database,
    /// Recreate the image storage bucket (destroys existing files)
    Bucket,
    /// Recreate the events collection and its attributes
    Collection,
    /// Insert event documents into the collection
    Seed(SeedArgs),
    /// Delete the collection, bucket and database
    Teardown(TeardownArgs),
    /// Report endpoint health and which resources exist
    Status,
}

fn run_cmd(func: Result<(), OpsError>) {
    if let Err(e) = func {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let time_format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:2]");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_timer(fmt::time::LocalTime::new(time_format))
                .with_target(false)
                .with_level(true)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .with_span_events(fmt::format::FmtSpan::NONE)
                .compact(),
        )
        .with(filter)
        .init();

    let cli = Cli::parse();

    match &cli.env_file {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                eprintln!("Failed to load env file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => {
            // A .env alongside the invocation is optional.
            dotenvy::dotenv().ok();
        }
    }

    match cli.command {
        Cmd::Provision(args) => run_cmd(handle_provision(&args)),
        Cmd::Database => run_cmd(handle_database()),
        Cmd::Bucket => run_cmd(handle_bucket()),
        Cmd::Collection => run_cmd(handle_collection()),
        Cmd::Seed(args) => run_cmd(handle_seed(&args)),
        Cmd::Teardown(args) => run_cmd(handle_teardown(&args)),
        Cmd::Status => run_cmd(handle_status()),
    }
}
