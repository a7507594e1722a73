use serde::Deserialize;
use serde_json::Value;

/// Server representations of provisioned resources. System fields come back
/// `$`-prefixed on the wire; only the fields the provisioner reads are kept.

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bucket {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "databaseId", default)]
    pub database_id: String,
    pub name: String,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<String>,
}

/// Attribute creation is asynchronous server-side; the response carries the
/// definition plus a `status` that starts at `processing`.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub key: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    #[serde(default)]
    pub status: String,
    pub required: bool,
    #[serde(default)]
    pub array: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$collectionId", default)]
    pub collection_id: String,
    #[serde(flatten)]
    pub data: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub name: String,
    pub status: String,
}
