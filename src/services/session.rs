use crate::errors::AppError;
use crate::models::{SessionStatus, SessionToken};
use crate::services::auth::Authenticator;

/// Login state for the single admin. Nothing else in the controller is
/// reachable until `attempt_login` succeeds.
pub struct SessionGate {
    authenticator: Box<dyn Authenticator>,
    username: String,
    password: String,
    token: Option<SessionToken>,
}

impl SessionGate {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            username: String::new(),
            password: String::new(),
            token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `username` is only revealed to the holder of the live token.
    pub fn status(&self, token: &str) -> SessionStatus {
        let authorized = self.authorize(token).is_ok();
        SessionStatus {
            authenticated: self.is_authenticated(),
            username: authorized.then(|| self.username.clone()),
        }
    }

    /// A rejected attempt never ends a live session. While logged out the
    /// input buffers are kept so the form can be corrected.
    pub async fn attempt_login(&mut self, username: &str, password: &str) -> Result<SessionToken, AppError> {
        let issued = self
            .authenticator
            .authenticate(username, password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "authentication provider failed");
                AppError::AuthProvider(e.to_string())
            })?;

        match issued {
            Some(token) => {
                tracing::info!(username = %username, "admin logged in");
                self.username = username.to_string();
                self.password = password.to_string();
                self.token = Some(token.clone());
                Ok(token)
            }
            None => {
                tracing::warn!(username = %username, "rejected login attempt");
                if !self.is_authenticated() {
                    self.username = username.to_string();
                    self.password = password.to_string();
                }
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Clears the session and both buffers. A live session can only be
    /// ended by its own token.
    pub fn logout(&mut self, token: &str) -> Result<(), AppError> {
        if self.is_authenticated() {
            self.authorize(token)?;
            tracing::info!(username = %self.username, "admin logged out");
        }
        self.token = None;
        self.username.clear();
        self.password.clear();
        Ok(())
    }

    pub fn authorize(&self, token: &str) -> Result<(), AppError> {
        match &self.token {
            Some(current) if current.as_str() == token => Ok(()),
            _ => Err(AppError::Unauthorized),
        }
    }
}
