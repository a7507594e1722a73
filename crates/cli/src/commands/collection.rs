use crate::commands::connect;
use common::error::OpsError;
use provisioner::{recreate_collection, schema};
use tokio::runtime::Runtime;

pub fn handle_collection() -> Result<(), OpsError> {
    let (settings, client) = connect()?;
    let runtime = Runtime::new().map_err(OpsError::provision)?;
    runtime.block_on(recreate_collection(
        &client,
        &settings.database_id,
        &schema::events_collection(&settings.events_collection_id),
    ))?;
    Ok(())
}
