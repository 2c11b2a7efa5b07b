//! Login accounts
//!
//! Username/password/role table used by the console to pick a menu.
//! Passwords are stored and compared in plaintext: this gates menus,
//! it does not protect data.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::snapshot::{read_snapshot, write_snapshot, SnapshotKind};

/// What a logged-in user may do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full record management
    Faculty,
    /// Read-only access to a single profile
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Faculty => f.write_str("faculty"),
            Role::Student => f.write_str("student"),
        }
    }
}

impl FromStr for Role {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faculty" | "f" => Ok(Role::Faculty),
            "student" | "s" => Ok(Role::Student),
            other => Err(GradebookError::InvalidInput(format!("unknown role: {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    password: String,
    role: Role,
}

/// A successfully authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub role: Role,
}

/// Account table persisted as its own snapshot
pub struct AccountStore {
    path: PathBuf,
    accounts: BTreeMap<String, Account>,
}

impl AccountStore {
    /// Open the account table at `path`; a missing file means no accounts yet
    pub fn open(path: &Path) -> Result<Self> {
        let accounts = if path.exists() {
            read_snapshot(path, SnapshotKind::Accounts)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened account store with {} accounts", accounts.len());

        Ok(Self {
            path: path.to_path_buf(),
            accounts,
        })
    }

    /// Create an account and persist the table
    pub fn register(&mut self, username: &str, password: &str, role: Role) -> Result<()> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(GradebookError::InvalidCredentials);
        }
        if self.accounts.contains_key(username) {
            return Err(GradebookError::UsernameTaken(username.to_string()));
        }

        self.accounts.insert(
            username.to_string(),
            Account {
                password: password.to_string(),
                role,
            },
        );

        if let Err(e) = write_snapshot(&self.path, SnapshotKind::Accounts, &self.accounts) {
            self.accounts.remove(username);
            return Err(e);
        }

        tracing::info!("Registered {} account {:?}", role, username);
        Ok(())
    }

    /// Check credentials; username, password and role must all match
    pub fn login(&self, username: &str, password: &str, role: Role) -> Result<User> {
        let username = username.trim();
        match self.accounts.get(username) {
            Some(account) if account.password == password && account.role == role => {
                tracing::info!("{} {:?} logged in", role, username);
                Ok(User {
                    username: username.to_string(),
                    role,
                })
            }
            _ => {
                tracing::warn!("Failed login for {:?}", username);
                Err(GradebookError::AuthenticationFailed)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
