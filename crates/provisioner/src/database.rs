use appwrite_client::AppwriteClient;
use common::error::OpsError;
use common::types::schema::DatabaseSpec;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseOutcome {
    Created,
    AlreadyExists,
}

/// Create the database if it is absent. Unlike the bucket and collection
/// there is no delete-before-create here; an existing database (remote
/// conflict) is a skip, not a failure, so re-runs go on to the later steps.
pub async fn ensure_database(
    client: &AppwriteClient,
    spec: &DatabaseSpec,
) -> Result<DatabaseOutcome, OpsError> {
    match client.create_database(&spec.id, &spec.name, spec.enabled).await {
        Ok(db) => {
            info!("Database `{}` created", db.id);
            Ok(DatabaseOutcome::Created)
        }
        Err(e) if e.is_conflict() => {
            warn!("Database `{}` already exists, skipping", spec.id);
            Ok(DatabaseOutcome::AlreadyExists)
        }
        Err(e) => Err(OpsError::provision(e)),
    }
}
