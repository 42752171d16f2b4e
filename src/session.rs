//! Session handling
//!
//! The authentication client is injected into [`SessionController`] rather
//! than reached through global state, so tests can substitute their own.
//! [`LocalSession`] is the bundled client: it keeps the signed-in user in a
//! small JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use crate::error::{ExplorerError, Result};
use crate::types::Route;

/// Authentication collaborator
pub trait AuthClient: Send {
    /// End the current session
    fn sign_out(&mut self) -> Result<()>;

    /// Start a new session
    fn sign_in(&mut self) -> Result<()>;

    /// Name of the signed-in user, if any
    fn current_user(&self) -> Option<String>;
}

/// Navigation collaborator
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Signs the user out and sends them to the login screen
pub struct SessionController {
    auth: Box<dyn AuthClient>,
    login_route: Route,
}

impl SessionController {
    pub fn new(auth: Box<dyn AuthClient>, login_route: Route) -> Self {
        Self { auth, login_route }
    }

    /// Sign out, then navigate to the login route.
    ///
    /// Navigation happens whether or not sign-out succeeded; a failure is
    /// only logged.
    pub fn logout(&mut self, nav: &mut dyn Navigator) {
        match self.auth.sign_out() {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!("Sign-out failed, continuing to {}: {}", self.login_route, e),
        }
        nav.navigate(self.login_route);
    }

    /// Sign back in and return to `route`.
    ///
    /// Unlike logout, a failed sign-in keeps the user where they are.
    pub fn login(&mut self, nav: &mut dyn Navigator, route: Route) -> Result<()> {
        self.auth.sign_in()?;
        info!("Signed in as {}", self.current_user().unwrap_or_default());
        nav.navigate(route);
        Ok(())
    }

    pub fn current_user(&self) -> Option<String> {
        self.auth.current_user()
    }
}

/// Contents of the session file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub user: String,
    /// Seconds since the Unix epoch
    pub signed_in_at: u64,
}

/// File-backed session
///
/// The file is read once at construction; after that the signed-in user is
/// tracked in memory and the file is only touched by sign-in and sign-out.
#[derive(Debug, Clone)]
pub struct LocalSession {
    path: PathBuf,
    user: String,
    signed_in: Option<String>,
}

impl LocalSession {
    pub fn new(path: impl Into<PathBuf>, user: impl Into<String>) -> Self {
        let mut session = Self {
            path: path.into(),
            user: user.into(),
            signed_in: None,
        };
        session.signed_in = match session.load() {
            Ok(record) => record.map(|r| r.user),
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", session.path, e);
                None
            }
        };
        session
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the session file, if one exists
    pub fn load(&self) -> Result<Option<SessionRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl AuthClient for LocalSession {
    fn sign_out(&mut self) -> Result<()> {
        self.signed_in = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            // Already signed out
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExplorerError::session(format!(
                "Failed to remove session file {:?}: {}",
                self.path, e
            ))),
        }
    }

    fn sign_in(&mut self) -> Result<()> {
        let signed_in_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let record = SessionRecord {
            user: self.user.clone(),
            signed_in_at,
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.path, json).map_err(|e| {
            ExplorerError::session(format!(
                "Failed to write session file {:?}: {}",
                self.path, e
            ))
        })?;
        self.signed_in = Some(record.user);
        Ok(())
    }

    fn current_user(&self) -> Option<String> {
        self.signed_in.clone()
    }
}
