use appwrite_client::{AppwriteClient, AppwriteClientError, Attribute, Collection};
use common::error::OpsError;
use common::types::schema::{AttributeKind, AttributeSpec, CollectionSpec};
use log::info;

/// Delete-then-create the collection, then walk the attribute list in
/// declared order. The first attribute failure aborts the remaining ones;
/// attributes already created are not rolled back, so a partial schema is
/// possible and a re-run starts from the delete.
pub async fn recreate_collection(
    client: &AppwriteClient,
    database_id: &str,
    spec: &CollectionSpec,
) -> Result<Collection, OpsError> {
    match client.delete_collection(database_id, &spec.id).await {
        Ok(()) => info!("Existing collection `{}` deleted", spec.id),
        Err(e) if e.is_not_found() => {
            info!("Collection `{}` does not exist, skipping delete", spec.id)
        }
        Err(e) => return Err(OpsError::provision(e)),
    }

    let collection = client
        .create_collection(database_id, &spec.id, &spec.name, &spec.permissions)
        .await
        .map_err(OpsError::provision)?;
    info!("Collection `{}` created", collection.id);

    for attr in &spec.attributes {
        create_attribute(client, database_id, &spec.id, attr)
            .await
            .map_err(OpsError::provision)?;
        info!("Created {} attribute `{}`", kind_label(attr.kind), attr.key);
    }

    Ok(collection)
}

/// One typed endpoint call per attribute. Defaults mirror the deployed
/// schema: empty string for optional text and datetime fields, `false` for
/// booleans, nulls for numeric bounds and array attributes.
async fn create_attribute(
    client: &AppwriteClient,
    database_id: &str,
    collection_id: &str,
    attr: &AttributeSpec,
) -> Result<Attribute, AppwriteClientError> {
    match attr.kind {
        AttributeKind::String { size } => {
            let default = if attr.required || attr.array {
                None
            } else {
                Some("")
            };
            client
                .create_string_attribute(
                    database_id,
                    collection_id,
                    &attr.key,
                    size,
                    attr.required,
                    default,
                    attr.array,
                )
                .await
        }
        AttributeKind::Boolean => {
            client
                .create_boolean_attribute(
                    database_id,
                    collection_id,
                    &attr.key,
                    attr.required,
                    Some(false),
                    attr.array,
                )
                .await
        }
        AttributeKind::Integer => {
            client
                .create_integer_attribute(
                    database_id,
                    collection_id,
                    &attr.key,
                    attr.required,
                    None,
                    None,
                    None,
                    attr.array,
                )
                .await
        }
        AttributeKind::Float => {
            client
                .create_float_attribute(
                    database_id,
                    collection_id,
                    &attr.key,
                    attr.required,
                    None,
                    None,
                    None,
                    attr.array,
                )
                .await
        }
        AttributeKind::DateTime => {
            let default = if attr.required { None } else { Some("") };
            client
                .create_datetime_attribute(
                    database_id,
                    collection_id,
                    &attr.key,
                    attr.required,
                    default,
                    attr.array,
                )
                .await
        }
    }
}

fn kind_label(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::String { .. } => "string",
        AttributeKind::Boolean => "boolean",
        AttributeKind::Integer => "integer",
        AttributeKind::Float => "float",
        AttributeKind::DateTime => "datetime",
    }
}
