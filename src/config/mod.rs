//! Configuration module for fintrack
//!
//! This module provides:
//! - path resolution for the settings and session files
//! - user settings persistence
//! - the stored login session
//! - `AppContext`, which bundles all three for one CLI invocation

pub mod paths;
pub mod session;
pub mod settings;

pub use paths::FintrackPaths;
pub use session::{Session, SessionTokens, User};
pub use settings::{Settings, Theme};

use crate::error::FintrackError;

/// Settings and session for one run, loaded at startup
#[derive(Debug)]
pub struct AppContext {
    pub paths: FintrackPaths,
    pub settings: Settings,
    pub session: Session,
}

impl AppContext {
    /// Resolve paths from the environment and load settings and session
    pub fn init() -> Result<Self, FintrackError> {
        Self::with_paths(FintrackPaths::new()?)
    }

    /// Load settings and session from an explicit location
    pub fn with_paths(paths: FintrackPaths) -> Result<Self, FintrackError> {
        let settings = Settings::load_or_create(&paths)?;
        let session = match Session::load(&paths) {
            Ok(session) => session,
            Err(FintrackError::Session(reason)) => {
                tracing::warn!(%reason, "ignoring unusable stored session");
                Session::default()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            base_dir = %paths.base_dir().display(),
            authenticated = session.is_authenticated(),
            "initialized app context"
        );

        Ok(Self {
            paths,
            settings,
            session,
        })
    }

    /// Persist the current settings
    pub fn save_settings(&self) -> Result<(), FintrackError> {
        self.settings.save(&self.paths)
    }

    /// Sign in
    pub fn login(&mut self, user: User, tokens: SessionTokens) -> Result<(), FintrackError> {
        self.session.login(&self.paths, user, tokens)
    }

    /// Sign out and forget the stored session
    pub fn logout(&mut self) -> Result<(), FintrackError> {
        self.session.logout(&self.paths)
    }
}
