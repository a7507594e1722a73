pub mod bucket;
pub mod collection;
pub mod database;
pub mod schema;
pub mod seed;
pub mod status;
pub mod teardown;

pub use bucket::recreate_bucket;
pub use collection::recreate_collection;
pub use database::{ensure_database, DatabaseOutcome};
pub use seed::{load_seed_file, sample_events, seed_events, EventSeed, SeedFailure, SeedReport};
pub use status::{check_status, StatusReport};
pub use teardown::{teardown, TeardownReport};

use appwrite_client::{AppwriteClient, Bucket, Collection};
use common::config::AppwriteSettings;
use common::error::OpsError;

#[derive(Debug)]
pub struct ProvisionSummary {
    pub database: DatabaseOutcome,
    pub bucket: Bucket,
    pub collection: Collection,
    pub seed: SeedReport,
}

/// The full run: database, bucket, collection with attributes, then seed
/// documents, strictly in that order. Each step must finish before the next
/// starts; a failed step stops the run. A seed run with any failed items
/// fails the whole provision after all items were attempted.
pub async fn provision_all(
    client: &AppwriteClient,
    settings: &AppwriteSettings,
    events: &[EventSeed],
) -> Result<ProvisionSummary, OpsError> {
    let database =
        ensure_database(client, &schema::occasionton_database(&settings.database_id)).await?;
    let bucket = recreate_bucket(client, &schema::events_bucket()).await?;
    let collection = recreate_collection(
        client,
        &settings.database_id,
        &schema::events_collection(&settings.events_collection_id),
    )
    .await?;
    let seed = seed_events(
        client,
        &settings.database_id,
        &settings.events_collection_id,
        events,
    )
    .await?;

    if !seed.is_complete() {
        return Err(OpsError::seed_msg(format!(
            "{} of {} seed documents failed",
            seed.failures.len(),
            seed.attempted()
        )));
    }

    Ok(ProvisionSummary {
        database,
        bucket,
        collection,
        seed,
    })
}
