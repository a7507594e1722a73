pub mod bucket;
pub mod collection;
pub mod database;
pub mod provision;
pub mod seed;
pub mod status;
pub mod teardown;

pub use bucket::handle_bucket;
pub use collection::handle_collection;
pub use database::handle_database;
pub use provision::{handle_provision, ProvisionArgs};
pub use seed::{handle_seed, SeedArgs};
pub use status::handle_status;
pub use teardown::{handle_teardown, TeardownArgs};

use appwrite_client::AppwriteClient;
use common::config::AppwriteSettings;
use common::error::OpsError;

/// Settings from the environment plus an authenticated client. Every
/// subcommand starts here so a bad environment fails before any request.
pub(crate) fn connect() -> Result<(AppwriteSettings, AppwriteClient), OpsError> {
    let settings = AppwriteSettings::from_env().map_err(OpsError::config)?;
    let client = AppwriteClient::new(&settings.endpoint, &settings.project_id, &settings.api_key)
        .map_err(OpsError::config)?;
    Ok((settings, client))
}
