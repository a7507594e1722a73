use crate::commands::connect;
use common::error::OpsError;
use provisioner::{ensure_database, schema};
use tokio::runtime::Runtime;

pub fn handle_database() -> Result<(), OpsError> {
    let (settings, client) = connect()?;
    let runtime = Runtime::new().map_err(OpsError::provision)?;
    runtime.block_on(ensure_database(
        &client,
        &schema::occasionton_database(&settings.database_id),
    ))?;
    Ok(())
}
