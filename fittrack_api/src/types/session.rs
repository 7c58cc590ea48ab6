//! Session types for the authentication gate.

use serde::{Deserialize, Serialize};

/// Minimized, serializable user: only the fields pages are allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Minimized session handed to gated pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

/// Full user record as the auth provider returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Session as the auth provider returns it, before minimization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderSession {
    pub user: ProviderUser,
}

impl ProviderSession {
    /// Strips the session down to the serializable id/email/name fields.
    pub fn minimized(&self) -> Session {
        Session {
            user: SessionUser {
                id: self.user.id.clone(),
                email: self.user.email.clone(),
                name: self.user.name.clone(),
            },
        }
    }
}
