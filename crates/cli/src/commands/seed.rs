use crate::commands::connect;
use clap::Args;
use common::error::OpsError;
use provisioner::{load_seed_file, sample_events, seed_events};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// YAML file of events to insert; defaults to the built-in sample set
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn handle_seed(args: &SeedArgs) -> Result<(), OpsError> {
    let (settings, client) = connect()?;

    let events = match &args.file {
        Some(path) => load_seed_file(path)?,
        None => sample_events()?,
    };

    let runtime = Runtime::new().map_err(OpsError::provision)?;
    let report = runtime.block_on(seed_events(
        &client,
        &settings.database_id,
        &settings.events_collection_id,
        &events,
    ))?;

    if !report.is_complete() {
        return Err(OpsError::seed_msg(format!(
            "{} of {} seed documents failed",
            report.failures.len(),
            report.attempted()
        )));
    }
    Ok(())
}
