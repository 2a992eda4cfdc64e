pub mod static_credentials;

use async_trait::async_trait;

use crate::models::SessionToken;

/// Verifies admin credentials. `Ok(None)` means the pair was rejected;
/// `Err` means the check itself could not be carried out.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str) -> anyhow::Result<Option<SessionToken>>;
}
