use crate::commands::connect;
use clap::Args;
use common::error::OpsError;
use log::info;
use provisioner::{load_seed_file, provision_all, sample_events, DatabaseOutcome};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Debug, Args)]
pub struct ProvisionArgs {
    /// Seed events from this YAML file instead of the built-in sample set
    #[arg(long, value_name = "FILE")]
    pub seed_file: Option<PathBuf>,

    /// Provision the resources only, skip seeding
    #[arg(long)]
    pub skip_seed: bool,
}

pub fn handle_provision(args: &ProvisionArgs) -> Result<(), OpsError> {
    let (settings, client) = connect()?;

    let events = if args.skip_seed {
        Vec::new()
    } else {
        match &args.seed_file {
            Some(path) => load_seed_file(path)?,
            None => sample_events()?,
        }
    };

    let runtime = Runtime::new().map_err(OpsError::provision)?;
    let summary = runtime.block_on(provision_all(&client, &settings, &events))?;

    let database = match summary.database {
        DatabaseOutcome::Created => "created",
        DatabaseOutcome::AlreadyExists => "already existed",
    };
    info!(
        "Provisioning complete: database {}, bucket `{}`, collection `{}`, {} events seeded",
        database, summary.bucket.id, summary.collection.id, summary.seed.created
    );
    Ok(())
}
