//! File-backed auth session.
//!
//! The only state the console persists across runs is the session token,
//! stored as a single line in a file at a configured path. Loading happens
//! once at construction, so every consumer sees a fully initialized session.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Session {
    token_path: PathBuf,
    token: Option<String>,
}

impl Session {
    /// Loads the persisted token if the file exists. A missing file means a
    /// logged-out session, not an error.
    pub fn load(token_path: impl AsRef<Path>) -> Result<Self> {
        let token_path = token_path.as_ref().to_path_buf();

        let token = if token_path.exists() {
            let contents = fs::read_to_string(&token_path)?;
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        } else {
            None
        };

        Ok(Self { token_path, token })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Stores a fresh token in memory and on disk.
    pub fn store(&mut self, token: String) -> Result<()> {
        fs::write(&self.token_path, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Clears the token unconditionally. Safe to call when already logged
    /// out.
    pub fn clear(&mut self) -> Result<()> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)?;
        }
        self.token = None;
        Ok(())
    }
}
