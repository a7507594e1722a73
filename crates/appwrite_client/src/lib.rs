mod error;
mod responses;

pub use error::AppwriteClientError;
pub use responses::{Attribute, Bucket, Collection, Database, Document, HealthStatus};

use common::types::permissions::Permission;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Document-id sentinel that tells the server to generate a unique id.
pub const UNIQUE_ID: &str = "unique()";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Authenticated handle on one Appwrite project's REST API.
///
/// Project id and API key ride along as default headers on every request;
/// the handle is immutable after construction.
#[derive(Debug)]
pub struct AppwriteClient {
    http: Client,
    base_url: String,
}

impl AppwriteClient {
    /// `endpoint` is the full API base including the `/v1` suffix, e.g.
    /// `https://cloud.appwrite.io/v1`.
    pub fn new(
        endpoint: &str,
        project_id: &str,
        api_key: &str,
    ) -> Result<AppwriteClient, AppwriteClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Appwrite-Project",
            HeaderValue::from_str(project_id).map_err(|e| {
                AppwriteClientError::invalid_request(format!("project id is not a valid header value: {e}"))
            })?,
        );
        headers.insert(
            "X-Appwrite-Key",
            HeaderValue::from_str(api_key).map_err(|e| {
                AppwriteClientError::invalid_request(format!("API key is not a valid header value: {e}"))
            })?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    // ---------------- databases ----------------

    pub async fn create_database(
        &self,
        database_id: &str,
        name: &str,
        enabled: bool,
    ) -> Result<Database, AppwriteClientError> {
        let resp = self
            .http
            .post(format!("{}/databases", self.base_url))
            .json(&json!({
                "databaseId": database_id,
                "name": name,
                "enabled": enabled,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn get_database(&self, database_id: &str) -> Result<Database, AppwriteClientError> {
        let resp = self
            .http
            .get(format!("{}/databases/{}", self.base_url, database_id))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn delete_database(&self, database_id: &str) -> Result<(), AppwriteClientError> {
        let resp = self
            .http
            .delete(format!("{}/databases/{}", self.base_url, database_id))
            .send()
            .await?;
        Self::expect_empty(resp).await
    }

    // ---------------- collections ----------------

    pub async fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[Permission],
    ) -> Result<Collection, AppwriteClientError> {
        let resp = self
            .http
            .post(format!(
                "{}/databases/{}/collections",
                self.base_url, database_id
            ))
            .json(&json!({
                "collectionId": collection_id,
                "name": name,
                "permissions": render_permissions(permissions),
                "documentSecurity": false,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn get_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<Collection, AppwriteClientError> {
        let resp = self
            .http
            .get(format!(
                "{}/databases/{}/collections/{}",
                self.base_url, database_id, collection_id
            ))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn delete_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<(), AppwriteClientError> {
        let resp = self
            .http
            .delete(format!(
                "{}/databases/{}/collections/{}",
                self.base_url, database_id, collection_id
            ))
            .send()
            .await?;
        Self::expect_empty(resp).await
    }

    // ---------------- attributes ----------------

    pub async fn create_string_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        size: u32,
        required: bool,
        default: Option<&str>,
        array: bool,
    ) -> Result<Attribute, AppwriteClientError> {
        let resp = self
            .http
            .post(self.attribute_url(database_id, collection_id, "string"))
            .json(&json!({
                "key": key,
                "size": size,
                "required": required,
                "default": default,
                "array": array,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn create_boolean_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        default: Option<bool>,
        array: bool,
    ) -> Result<Attribute, AppwriteClientError> {
        let resp = self
            .http
            .post(self.attribute_url(database_id, collection_id, "boolean"))
            .json(&json!({
                "key": key,
                "required": required,
                "default": default,
                "array": array,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn create_integer_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: Option<i64>,
        max: Option<i64>,
        default: Option<i64>,
        array: bool,
    ) -> Result<Attribute, AppwriteClientError> {
        let resp = self
            .http
            .post(self.attribute_url(database_id, collection_id, "integer"))
            .json(&json!({
                "key": key,
                "required": required,
                "min": min,
                "max": max,
                "default": default,
                "array": array,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn create_float_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: Option<f64>,
        max: Option<f64>,
        default: Option<f64>,
        array: bool,
    ) -> Result<Attribute, AppwriteClientError> {
        let resp = self
            .http
            .post(self.attribute_url(database_id, collection_id, "float"))
            .json(&json!({
                "key": key,
                "required": required,
                "min": min,
                "max": max,
                "default": default,
                "array": array,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn create_datetime_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        default: Option<&str>,
        array: bool,
    ) -> Result<Attribute, AppwriteClientError> {
        let resp = self
            .http
            .post(self.attribute_url(database_id, collection_id, "datetime"))
            .json(&json!({
                "key": key,
                "required": required,
                "default": default,
                "array": array,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    // ---------------- documents ----------------

    pub async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: &Value,
    ) -> Result<Document, AppwriteClientError> {
        let resp = self
            .http
            .post(format!(
                "{}/databases/{}/collections/{}/documents",
                self.base_url, database_id, collection_id
            ))
            .json(&json!({
                "documentId": document_id,
                "data": data,
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    // ---------------- storage ----------------

    pub async fn create_bucket(
        &self,
        bucket_id: &str,
        name: &str,
        permissions: &[Permission],
    ) -> Result<Bucket, AppwriteClientError> {
        let resp = self
            .http
            .post(format!("{}/storage/buckets", self.base_url))
            .json(&json!({
                "bucketId": bucket_id,
                "name": name,
                "permissions": render_permissions(permissions),
            }))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn get_bucket(&self, bucket_id: &str) -> Result<Bucket, AppwriteClientError> {
        let resp = self
            .http
            .get(format!("{}/storage/buckets/{}", self.base_url, bucket_id))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<(), AppwriteClientError> {
        let resp = self
            .http
            .delete(format!("{}/storage/buckets/{}", self.base_url, bucket_id))
            .send()
            .await?;
        Self::expect_empty(resp).await
    }

    // ---------------- health ----------------

    pub async fn health(&self) -> Result<HealthStatus, AppwriteClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::expect_json(resp).await
    }

    fn attribute_url(&self, database_id: &str, collection_id: &str, kind: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/attributes/{}",
            self.base_url, database_id, collection_id, kind
        )
    }

    async fn expect_json<T: DeserializeOwned>(resp: Response) -> Result<T, AppwriteClientError> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn expect_empty(resp: Response) -> Result<(), AppwriteClientError> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn api_error(resp: Response) -> AppwriteClientError {
        let status = resp.status();
        let body: ApiErrorBody = resp.json().await.unwrap_or_else(|_| ApiErrorBody {
            message: "could not parse error body".into(),
        });

        match status {
            StatusCode::NOT_FOUND => AppwriteClientError::not_found(body.message),
            StatusCode::CONFLICT => AppwriteClientError::conflict(body.message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppwriteClientError::unauthorized(body.message)
            }
            StatusCode::BAD_REQUEST => AppwriteClientError::invalid_request(body.message),
            status => AppwriteClientError::unexpected(format!(
                "{} (status {})",
                body.message,
                status.as_u16()
            )),
        }
    }
}

fn render_permissions(permissions: &[Permission]) -> Vec<String> {
    permissions.iter().map(Permission::to_string).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use common::types::permissions::open_access;
    use test_utils::{
        appwrite_error, attribute_body, bucket_body, database_body, document_body,
        TEST_API_KEY, TEST_BUCKET_ID, TEST_COLLECTION_ID, TEST_DATABASE_ID, TEST_PROJECT_ID,
    };
    use uuid::Uuid;
    use wiremock::matchers::{body_json, body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> AppwriteClient {
        AppwriteClient::new(&server.uri(), TEST_PROJECT_ID, TEST_API_KEY)
            .expect("client should build")
    }

    #[tokio::test]
    async fn create_database_sends_auth_headers_and_parses_system_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases"))
            .and(header("X-Appwrite-Project", TEST_PROJECT_ID))
            .and(header("X-Appwrite-Key", TEST_API_KEY))
            .and(body_json(serde_json::json!({
                "databaseId": TEST_DATABASE_ID,
                "name": "Occasionton Database",
                "enabled": true,
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(database_body(TEST_DATABASE_ID, "Occasionton Database")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let db = client(&server)
            .create_database(TEST_DATABASE_ID, "Occasionton Database", true)
            .await
            .expect("create should succeed");

        assert_eq!(db.id, TEST_DATABASE_ID);
        assert_eq!(db.name, "Occasionton Database");
        assert!(db.enabled);
    }

    #[tokio::test]
    async fn create_database_conflict_maps_to_conflict_variant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases"))
            .respond_with(appwrite_error(
                409,
                "Database with the requested ID already exists.",
            ))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_database(TEST_DATABASE_ID, "Occasionton Database", true)
            .await
            .expect_err("conflict expected");

        assert!(err.is_conflict());
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn delete_bucket_404_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/storage/buckets/{TEST_BUCKET_ID}")))
            .respond_with(appwrite_error(
                404,
                "Bucket with the requested ID could not be found.",
            ))
            .mount(&server)
            .await;

        let err = client(&server)
            .delete_bucket(TEST_BUCKET_ID)
            .await
            .expect_err("not found expected");

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_bucket_204_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/storage/buckets/{TEST_BUCKET_ID}")))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        client(&server)
            .delete_bucket(TEST_BUCKET_ID)
            .await
            .expect("delete should succeed");
    }

    #[tokio::test]
    async fn create_bucket_renders_permission_strings() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/storage/buckets"))
            .and(body_json(serde_json::json!({
                "bucketId": TEST_BUCKET_ID,
                "name": "EventsImageBucket",
                "permissions": [
                    "read(\"any\")",
                    "write(\"any\")",
                    "update(\"any\")",
                    "delete(\"any\")",
                ],
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(bucket_body(TEST_BUCKET_ID, "EventsImageBucket")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let bucket = client(&server)
            .create_bucket(TEST_BUCKET_ID, "EventsImageBucket", &open_access())
            .await
            .expect("create should succeed");

        assert_eq!(bucket.id, TEST_BUCKET_ID);
        assert_eq!(bucket.permissions.len(), 4);
    }

    #[tokio::test]
    async fn create_string_attribute_sends_documented_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!(
                "/databases/{TEST_DATABASE_ID}/collections/{TEST_COLLECTION_ID}/attributes/string"
            )))
            .and(body_json(serde_json::json!({
                "key": "tags",
                "size": 30,
                "required": false,
                "default": null,
                "array": true,
            })))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(attribute_body("tags", "string", false, true)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let attr = client(&server)
            .create_string_attribute(
                TEST_DATABASE_ID,
                TEST_COLLECTION_ID,
                "tags",
                30,
                false,
                None,
                true,
            )
            .await
            .expect("create should succeed");

        assert_eq!(attr.key, "tags");
        assert_eq!(attr.attr_type, "string");
        assert!(attr.array);
    }

    #[tokio::test]
    async fn create_document_passes_unique_id_sentinel() {
        let server = MockServer::start().await;
        let doc_id = Uuid::new_v4().to_string();
        Mock::given(method("POST"))
            .and(path(format!(
                "/databases/{TEST_DATABASE_ID}/collections/{TEST_COLLECTION_ID}/documents"
            )))
            .and(body_partial_json(serde_json::json!({
                "documentId": UNIQUE_ID,
                "data": { "title": "Rust Meetup" },
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(document_body(TEST_COLLECTION_ID, &doc_id)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let doc = client(&server)
            .create_document(
                TEST_DATABASE_ID,
                TEST_COLLECTION_ID,
                UNIQUE_ID,
                &serde_json::json!({ "title": "Rust Meetup" }),
            )
            .await
            .expect("create should succeed");

        assert_eq!(doc.id, doc_id);
    }

    #[tokio::test]
    async fn server_error_maps_to_unexpected_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!(
                "/databases/{TEST_DATABASE_ID}/collections/{TEST_COLLECTION_ID}"
            )))
            .respond_with(appwrite_error(500, "Internal server error"))
            .mount(&server)
            .await;

        let err = client(&server)
            .delete_collection(TEST_DATABASE_ID, TEST_COLLECTION_ID)
            .await
            .expect_err("unexpected expected");

        assert!(matches!(err, AppwriteClientError::Unexpected { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_unauthorized_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/databases/{TEST_DATABASE_ID}")))
            .respond_with(appwrite_error(
                401,
                "The current user is not authorized to perform the requested action.",
            ))
            .mount(&server)
            .await;

        let err = client(&server)
            .get_database(TEST_DATABASE_ID)
            .await
            .expect_err("unauthorized expected");

        assert!(matches!(err, AppwriteClientError::Unauthorized { .. }));
    }
}
