pub mod permissions;
pub mod schema;

pub use permissions::{open_access, Permission, PermissionAction, Role};
pub use schema::{AttributeKind, AttributeSpec, BucketSpec, CollectionSpec, DatabaseSpec};
