use crate::commands::connect;
use common::error::OpsError;
use provisioner::{recreate_bucket, schema};
use tokio::runtime::Runtime;

pub fn handle_bucket() -> Result<(), OpsError> {
    let (_settings, client) = connect()?;
    let runtime = Runtime::new().map_err(OpsError::provision)?;
    runtime.block_on(recreate_bucket(&client, &schema::events_bucket()))?;
    Ok(())
}
