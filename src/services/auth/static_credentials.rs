use async_trait::async_trait;
use uuid::Uuid;

use super::Authenticator;
use crate::models::SessionToken;

/// Plain-text comparison against a single configured credential pair.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

#[async_trait]
impl Authenticator for StaticCredentials {
    async fn authenticate(&self, username: &str, password: &str) -> anyhow::Result<Option<SessionToken>> {
        if username == self.username && password == self.password {
            Ok(Some(SessionToken::new(Uuid::new_v4().to_string())))
        } else {
            Ok(None)
        }
    }
}
