//! Session persistence via OS keyring
//!
//! This module provides storage and retrieval of the login session using
//! the operating system's native credential store (Keychain on macOS,
//! Secret Service on Linux, Windows Credential Manager on Windows).
//!
//! The session is serialized to JSON before storage and deserialized on
//! load. The keyring is stateless; [`SessionStore`] is a zero-field struct
//! that acts as a namespaced accessor. Every privileged API call reads the
//! session first; an absent session aborts the command with a login hint
//! before any request is built.

use serde::{Deserialize, Serialize};

use crate::error::{FarmgateError, Result};

const SERVICE: &str = "farmgate";
const ACCOUNT: &str = "farmgate_session";

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Role selected at login.
///
/// The server resolves permissions from the token; the client only keeps
/// the role to decide which screens to offer (buyer cart vs. farmer
/// dashboard) and to echo it back in the login payload's `user_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Farmer,
    Buyer,
}

impl UserRole {
    /// Wire value sent as `user_type` in the login payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Buyer => "buyer",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = FarmgateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "farmer" => Ok(UserRole::Farmer),
            "buyer" => Ok(UserRole::Buyer),
            other => Err(FarmgateError::InvalidInput(format!(
                "unknown role '{}', expected 'farmer' or 'buyer'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A stored login session.
///
/// `token` is the opaque credential issued by `/users/login/` and sent as
/// `Authorization: Token <t>` on every privileged request. The client
/// never inspects token shape or expiry; a stale token simply produces a
/// server-side error on the next call.
///
/// `user_id` is the numeric identity the chat endpoints key on. It is not
/// part of the login response; it is backfilled from the `sender` field
/// echoed by the first successful message send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential issued at login.
    pub token: String,

    /// Numeric local-user identifier, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Role the user logged in as.
    pub role: UserRole,
}

impl Session {
    /// Create a fresh session from a login response token and role.
    pub fn new(token: impl Into<String>, role: UserRole) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            role,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Stateless accessor for the OS native keyring.
///
/// The session is stored under a single service/account pair; saving
/// overwrites any previous session, so at most one identity is active at
/// a time.
///
/// # Examples
///
/// ```no_run
/// use farmgate::session::{Session, SessionStore, UserRole};
///
/// # fn example() -> farmgate::error::Result<()> {
/// let store = SessionStore;
/// store.save(&Session::new("abc123", UserRole::Buyer))?;
/// assert!(store.load()?.is_some());
/// store.clear()?;
/// # Ok(())
/// # }
/// ```
pub struct SessionStore;

impl SessionStore {
    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(SERVICE, ACCOUNT).map_err(|e| FarmgateError::Keyring(e).into())
    }

    /// Persists a [`Session`], overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`FarmgateError::Serialization`] if JSON serialization
    /// fails or [`FarmgateError::Keyring`] if the OS credential store
    /// rejects the write.
    pub fn save(&self, session: &Session) -> Result<()> {
        let json_str = serde_json::to_string(session).map_err(FarmgateError::Serialization)?;
        Self::entry()?
            .set_password(&json_str)
            .map_err(FarmgateError::Keyring)?;
        tracing::debug!(role = %session.role, "session saved");
        Ok(())
    }

    /// Loads the stored [`Session`].
    ///
    /// Returns `Ok(None)` when no session has been saved (or when the
    /// stored value is blank), allowing callers to distinguish between
    /// "not logged in yet" and a genuine keyring error.
    pub fn load(&self) -> Result<Option<Session>> {
        match Self::entry()?.get_password() {
            Ok(json_str) => {
                if json_str.trim().is_empty() {
                    return Ok(None);
                }
                let session: Session =
                    serde_json::from_str(&json_str).map_err(FarmgateError::Serialization)?;
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(FarmgateError::Keyring(e).into()),
        }
    }

    /// Loads the stored session, failing when none exists.
    ///
    /// This is the gate every privileged command goes through before any
    /// HTTP request is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`FarmgateError::NotLoggedIn`] when no session is stored.
    pub fn require(&self) -> Result<Session> {
        self.load()?.ok_or_else(|| FarmgateError::NotLoggedIn.into())
    }

    /// Deletes the stored session.
    ///
    /// This is a no-op when no session exists, so it is safe to call
    /// `farmgate logout` twice in a row.
    pub fn clear(&self) -> Result<()> {
        match Self::entry()?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(FarmgateError::Keyring(e).into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
