use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::env;
use std::sync::Mutex;
use wiremock::ResponseTemplate;

/// Global mutex to serialize tests that mutate process environment
/// variables. Concurrent mutation would leak values between tests.
pub static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Canonical ids used across the workspace's tests. These match the fixed
/// Occasionton resource ids so mock request paths read like the real thing.
pub const TEST_PROJECT_ID: &str = "occasionton-test";
pub const TEST_API_KEY: &str = "standard_deadbeef";
pub const TEST_DATABASE_ID: &str = "occasiontonDb";
pub const TEST_COLLECTION_ID: &str = "eventsColId";
pub const TEST_BUCKET_ID: &str = "EventsImageBucketId";

/// Run `f` with the given environment variables applied, restoring the
/// previous values afterwards even if `f` panics. `None` unsets a variable.
/// Takes the global [`ENV_MUTEX`] for the duration.
pub fn with_env<F, T>(vars: &[(&str, Option<&str>)], f: F) -> T
where
    F: FnOnce() -> T,
{
    let _lock = ENV_MUTEX.lock().unwrap();

    struct Restore(Vec<(String, Option<String>)>);
    impl Drop for Restore {
        fn drop(&mut self) {
            for (name, previous) in self.0.drain(..) {
                match previous {
                    Some(value) => env::set_var(&name, value),
                    None => env::remove_var(&name),
                }
            }
        }
    }

    let saved = vars
        .iter()
        .map(|(name, _)| (name.to_string(), env::var(name).ok()))
        .collect();
    let _guard = Restore(saved);

    for (name, value) in vars {
        match value {
            Some(value) => env::set_var(name, value),
            None => env::remove_var(name),
        }
    }

    f()
}

/// Response body in the platform's error shape.
pub fn appwrite_error(code: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(code).set_body_json(json!({
        "message": message,
        "code": code,
        "type": "general_error",
    }))
}

pub fn database_body(id: &str, name: &str) -> Value {
    json!({
        "$id": id,
        "name": name,
        "$createdAt": "2026-01-10T09:00:00.000+00:00",
        "$updatedAt": "2026-01-10T09:00:00.000+00:00",
        "enabled": true,
    })
}

pub fn bucket_body(id: &str, name: &str) -> Value {
    json!({
        "$id": id,
        "name": name,
        "$permissions": ["read(\"any\")", "write(\"any\")", "update(\"any\")", "delete(\"any\")"],
        "fileSecurity": false,
        "enabled": true,
    })
}

pub fn collection_body(database_id: &str, id: &str, name: &str) -> Value {
    json!({
        "$id": id,
        "databaseId": database_id,
        "name": name,
        "$permissions": ["read(\"any\")", "write(\"any\")", "update(\"any\")", "delete(\"any\")"],
        "documentSecurity": false,
        "enabled": true,
        "attributes": [],
    })
}

pub fn attribute_body(key: &str, kind: &str, required: bool, array: bool) -> Value {
    json!({
        "key": key,
        "type": kind,
        "status": "processing",
        "required": required,
        "array": array,
    })
}

pub fn document_body(collection_id: &str, id: &str) -> Value {
    json!({
        "$id": id,
        "$collectionId": collection_id,
        "$databaseId": TEST_DATABASE_ID,
        "$permissions": [],
    })
}

pub fn health_body() -> Value {
    json!({ "name": "http", "ping": 12, "status": "pass" })
}
