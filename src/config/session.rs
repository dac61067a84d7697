//! Stored login session
//!
//! The session holds the signed-in user and the API tokens issued at login.
//! It is loaded once at startup and cleared on logout; token memory is wiped
//! when the session is dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::paths::FintrackPaths;
use crate::error::FintrackError;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// Access and refresh tokens issued by the API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"[redacted]")
            .field("refresh_token", &"[redacted]")
            .finish()
    }
}

/// Current session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tokens: Option<SessionTokens>,
}

impl Session {
    /// Load the stored session, or an empty one if none is stored
    pub fn load(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let path = paths.session_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| FintrackError::Io(format!("Failed to read session file: {}", e)))?;

        let session: Session = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Session(format!("Stored session is corrupt: {}", e)))?;

        if session.user.is_some() != session.tokens.is_some() {
            return Err(FintrackError::Session(
                "Stored session has a user without tokens or tokens without a user".into(),
            ));
        }

        Ok(session)
    }

    /// Sign in and persist the session
    pub fn login(
        &mut self,
        paths: &FintrackPaths,
        user: User,
        tokens: SessionTokens,
    ) -> Result<(), FintrackError> {
        if !user.email.contains('@') {
            return Err(FintrackError::Session(format!(
                "'{}' is not an email address",
                user.email
            )));
        }
        if tokens.access_token.is_empty() {
            return Err(FintrackError::Session("Access token is empty".into()));
        }

        self.user = Some(user);
        self.tokens = Some(tokens);
        self.save(paths)?;

        tracing::info!(user = ?self.user.as_ref().map(|u| &u.email), "logged in");
        Ok(())
    }

    /// Clear the session and delete the stored copy
    pub fn logout(&mut self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        self.user = None;
        // Dropping the tokens zeroizes them.
        self.tokens = None;

        let path = paths.session_file();
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| FintrackError::Io(format!("Failed to remove session file: {}", e)))?;
        }

        tracing::info!("logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.tokens.is_some()
    }

    fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let mut contents = serde_json::to_string_pretty(self)?;
        let result = std::fs::write(paths.session_file(), &contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write session file: {}", e)));
        contents.zeroize();
        result
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user {
            Some(user) if self.tokens.is_some() => {
                write!(f, "Logged in as {} <{}>", user.full_name, user.email)
            }
            _ => write!(f, "Not logged in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
        }
    }

    #[test]
    fn test_empty_when_nothing_stored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let session = Session::load(&paths).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.to_string(), "Not logged in");
    }

    #[test]
    fn test_login_persists_and_logout_clears() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut session = Session::default();
        session
            .login(&paths, user(), SessionTokens::new("access", "refresh"))
            .unwrap();
        assert!(paths.session_file().exists());

        let loaded = Session::load(&paths).unwrap();
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.user, Some(user()));
        assert_eq!(loaded.to_string(), "Logged in as Ada Lovelace <ada@example.com>");

        session.logout(&paths).unwrap();
        assert!(!session.is_authenticated());
        assert!(!paths.session_file().exists());
        assert!(!Session::load(&paths).unwrap().is_authenticated());
    }

    #[test]
    fn test_logout_without_session_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut session = Session::default();
        assert!(session.logout(&paths).is_ok());
    }

    #[test]
    fn test_login_rejects_bad_email() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut bad = user();
        bad.email = "not-an-email".to_string();
        let mut session = Session::default();
        let err = session
            .login(&paths, bad, SessionTokens::new("a", "r"))
            .unwrap_err();
        assert!(matches!(err, FintrackError::Session(_)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.session_file(), r#"{"user": {"id": "u1"}}"#).unwrap();

        let err = Session::load(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Session(_)));
    }

    #[test]
    fn test_tokens_are_redacted_in_debug() {
        let tokens = SessionTokens::new("secret-access", "secret-refresh");
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("secret"));
    }
}
