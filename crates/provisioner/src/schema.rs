use common::types::permissions::open_access;
use common::types::schema::{AttributeSpec, BucketSpec, CollectionSpec, DatabaseSpec};

pub const DATABASE_NAME: &str = "Occasionton Database";

pub const EVENTS_COLLECTION_NAME: &str = "Events";

/// The image bucket has no environment variable; its id is fixed.
pub const EVENTS_BUCKET_ID: &str = "EventsImageBucketId";
pub const EVENTS_BUCKET_NAME: &str = "EventsImageBucket";

pub fn occasionton_database(database_id: &str) -> DatabaseSpec {
    DatabaseSpec::new(database_id, DATABASE_NAME)
}

pub fn events_bucket() -> BucketSpec {
    BucketSpec {
        id: EVENTS_BUCKET_ID.to_string(),
        name: EVENTS_BUCKET_NAME.to_string(),
        permissions: open_access(),
    }
}

/// The events schema. Creation order is part of the contract: a failed
/// attribute aborts everything after it.
pub fn events_collection(collection_id: &str) -> CollectionSpec {
    CollectionSpec {
        id: collection_id.to_string(),
        name: EVENTS_COLLECTION_NAME.to_string(),
        permissions: open_access(),
        attributes: vec![
            AttributeSpec::string("title", 100, true),
            AttributeSpec::string("description", 500, true),
            AttributeSpec::datetime("date", true),
            AttributeSpec::string("location", 255, true),
            AttributeSpec::string("image", 2048, true),
            AttributeSpec::string("category", 50, true),
            AttributeSpec::string_array("tags", 30),
            AttributeSpec::string_array("attendees", 30),
            AttributeSpec::string("host", 100, true),
            AttributeSpec::float("price", true),
            AttributeSpec::integer("maxAttendees", true),
            AttributeSpec::boolean("isFeatured", false),
            AttributeSpec::string("startTime", 100, false),
            AttributeSpec::string("endTime", 100, false),
        ],
    }
}
