use appwrite_client::{AppwriteClient, AppwriteClientError};
use common::error::OpsError;
use log::info;

use crate::schema::EVENTS_BUCKET_ID;

/// Read-only snapshot of which resources currently exist.
#[derive(Debug)]
pub struct StatusReport {
    pub health: String,
    pub database: bool,
    pub bucket: bool,
    pub collection: bool,
}

pub async fn check_status(
    client: &AppwriteClient,
    database_id: &str,
    collection_id: &str,
) -> Result<StatusReport, OpsError> {
    let health = client.health().await.map_err(OpsError::provision)?;
    info!("Endpoint reachable, health status: {}", health.status);

    let database = exists(client.get_database(database_id).await)?;
    let bucket = exists(client.get_bucket(EVENTS_BUCKET_ID).await)?;
    let collection = exists(client.get_collection(database_id, collection_id).await)?;

    Ok(StatusReport {
        health: health.status,
        database,
        bucket,
        collection,
    })
}

fn exists<T>(result: Result<T, AppwriteClientError>) -> Result<bool, OpsError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(OpsError::provision(e)),
    }
}
