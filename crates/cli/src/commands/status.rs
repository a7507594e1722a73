use crate::commands::connect;
use common::error::OpsError;
use log::info;
use provisioner::{check_status, schema};
use tokio::runtime::Runtime;

pub fn handle_status() -> Result<(), OpsError> {
    let (settings, client) = connect()?;
    let runtime = Runtime::new().map_err(OpsError::provision)?;
    let report = runtime.block_on(check_status(
        &client,
        &settings.database_id,
        &settings.events_collection_id,
    ))?;

    info!(
        "Database `{}`: {}",
        settings.database_id,
        present_label(report.database)
    );
    info!(
        "Bucket `{}`: {}",
        schema::EVENTS_BUCKET_ID,
        present_label(report.bucket)
    );
    info!(
        "Collection `{}`: {}",
        settings.events_collection_id,
        present_label(report.collection)
    );
    Ok(())
}

fn present_label(present: bool) -> &'static str {
    if present {
        "present"
    } else {
        "absent"
    }
}
