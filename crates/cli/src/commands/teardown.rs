use crate::commands::connect;
use clap::Args;
use common::error::OpsError;
use log::info;
use provisioner::teardown;
use tokio::runtime::Runtime;

#[derive(Debug, Args)]
pub struct TeardownArgs {
    /// Confirm deletion of the collection, bucket and database
    #[arg(long)]
    pub yes: bool,
}

pub fn handle_teardown(args: &TeardownArgs) -> Result<(), OpsError> {
    if !args.yes {
        return Err(OpsError::provision_msg(
            "teardown deletes the collection, bucket and database; re-run with --yes to confirm",
        ));
    }

    let (settings, client) = connect()?;
    let runtime = Runtime::new().map_err(OpsError::provision)?;
    let report = runtime.block_on(teardown(
        &client,
        &settings.database_id,
        &settings.events_collection_id,
    ))?;

    info!(
        "Teardown complete: collection {}, bucket {}, database {}",
        deleted_label(report.collection_deleted),
        deleted_label(report.bucket_deleted),
        deleted_label(report.database_deleted)
    );
    Ok(())
}

fn deleted_label(deleted: bool) -> &'static str {
    if deleted {
        "deleted"
    } else {
        "already absent"
    }
}
