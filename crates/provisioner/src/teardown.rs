use appwrite_client::{AppwriteClient, AppwriteClientError};
use common::error::OpsError;
use log::info;

use crate::schema::EVENTS_BUCKET_ID;

/// `true` means the resource was deleted this run; `false` means it was
/// already absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeardownReport {
    pub collection_deleted: bool,
    pub bucket_deleted: bool,
    pub database_deleted: bool,
}

/// Delete collection, bucket, then database. The inverse of a provision
/// run; a missing resource is a skip so teardown is re-runnable too.
pub async fn teardown(
    client: &AppwriteClient,
    database_id: &str,
    collection_id: &str,
) -> Result<TeardownReport, OpsError> {
    let collection_deleted = deleted(
        client.delete_collection(database_id, collection_id).await,
        "collection",
        collection_id,
    )?;
    let bucket_deleted = deleted(
        client.delete_bucket(EVENTS_BUCKET_ID).await,
        "bucket",
        EVENTS_BUCKET_ID,
    )?;
    let database_deleted = deleted(
        client.delete_database(database_id).await,
        "database",
        database_id,
    )?;

    Ok(TeardownReport {
        collection_deleted,
        bucket_deleted,
        database_deleted,
    })
}

fn deleted(
    result: Result<(), AppwriteClientError>,
    what: &str,
    id: &str,
) -> Result<bool, OpsError> {
    match result {
        Ok(()) => {
            info!("Deleted {} `{}`", what, id);
            Ok(true)
        }
        Err(e) if e.is_not_found() => {
            info!("The {} `{}` is already absent", what, id);
            Ok(false)
        }
        Err(e) => Err(OpsError::provision(e)),
    }
}
