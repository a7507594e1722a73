use appwrite_client::{AppwriteClient, Bucket};
use common::error::OpsError;
use common::types::schema::BucketSpec;
use log::{info, warn};

/// Delete-then-create the storage bucket. A missing bucket is fine; any
/// other delete failure aborts before the create. Destroys the previous
/// bucket's files.
pub async fn recreate_bucket(
    client: &AppwriteClient,
    spec: &BucketSpec,
) -> Result<Bucket, OpsError> {
    warn!(
        "Recreating bucket `{}`; any existing files in it will be destroyed",
        spec.id
    );
    match client.delete_bucket(&spec.id).await {
        Ok(()) => info!("Existing bucket `{}` deleted", spec.id),
        Err(e) if e.is_not_found() => info!("Bucket `{}` does not exist, skipping delete", spec.id),
        Err(e) => return Err(OpsError::provision(e)),
    }

    let bucket = client
        .create_bucket(&spec.id, &spec.name, &spec.permissions)
        .await
        .map_err(OpsError::provision)?;
    info!("Storage bucket `{}` created", bucket.id);
    Ok(bucket)
}
