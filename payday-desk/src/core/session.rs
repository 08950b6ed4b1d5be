//! Session persistence
//!
//! The signed-in identity and its role set, persisted as JSON under a
//! named storage key so it survives restarts. Logout removes the record
//! entirely. There is no token refresh or expiry handling; the session
//! gates navigation only, not the API itself.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the session record is persisted under.
pub const SESSION_STORAGE_KEY: &str = "payday-session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Signed-in identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }
}

/// File-backed session store
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            file_path: dir.join(format!("{SESSION_STORAGE_KEY}.json")),
        }
    }

    /// Load the persisted session, if any.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let session: Session = serde_json::from_str(&content)?;
        tracing::debug!(username = %session.username, "Loaded persisted session");
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(username = %session.username, "Session persisted");
        Ok(())
    }

    /// Record a successful sign-in and persist it.
    pub fn login(
        &self,
        username: impl Into<String>,
        display_name: Option<String>,
        roles: Vec<String>,
    ) -> Result<Session, SessionError> {
        let session = Session {
            username: username.into(),
            display_name,
            roles,
            is_authenticated: true,
        };
        self.save(&session)?;
        Ok(session)
    }

    /// Destroy the persisted session.
    pub fn logout(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}
