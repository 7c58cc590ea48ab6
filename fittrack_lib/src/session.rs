//! Server-side session gating for page rendering.
//!
//! A page-load hook asks a [`SessionStore`] for the current session.
//! Unauthenticated requests are redirected to the login path; authenticated
//! ones receive a minimized, serializable session carrying only
//! id/email/name. Lookup failures are logged and treated as unauthenticated.

use fittrack_api::types::{ProviderSession, Session};
use fittrack_api::Client;

use crate::error::FitTrackError;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/home";

/// Result of a session lookup.
pub struct AuthResult {
    pub authenticated: bool,
    /// Minimized session, present only when authenticated.
    pub session: Option<Session>,
}

/// Outcome of gating a page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Render the page. Carries the minimized session for gated pages;
    /// `None` for public pages reached while logged out.
    Allow(Option<Session>),
    /// Redirect to the given path instead of rendering.
    Redirect(String),
}

/// Source of the current authenticated session.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    async fn current_session(&self) -> Result<Option<ProviderSession>, FitTrackError>;
}

/// Checks whether the user is authenticated. A session without a user id
/// counts as unauthenticated, and lookup errors never propagate.
pub async fn get_server_auth<S: SessionStore>(store: &S) -> AuthResult {
    match store.current_session().await {
        Ok(Some(provider)) if !provider.user.id.is_empty() => AuthResult {
            authenticated: true,
            session: Some(provider.minimized()),
        },
        Ok(_) => AuthResult {
            authenticated: false,
            session: None,
        },
        Err(e) => {
            tracing::error!("session lookup failed: {}", e);
            AuthResult {
                authenticated: false,
                session: None,
            }
        }
    }
}

/// Gate for pages that require authentication: redirects to the login path
/// when there is no session, otherwise allows with the minimized session.
pub async fn require_session<S: SessionStore>(store: &S) -> Gate {
    match get_server_auth(store).await {
        AuthResult {
            authenticated: true,
            session: Some(session),
        } => Gate::Allow(Some(session)),
        _ => Gate::Redirect(LOGIN_PATH.to_string()),
    }
}

/// Gate for auth pages (login, forgot-password): sends already-authenticated
/// users to the home path instead of rendering the page.
pub async fn redirect_authenticated<S: SessionStore>(store: &S) -> Gate {
    if get_server_auth(store).await.authenticated {
        Gate::Redirect(HOME_PATH.to_string())
    } else {
        Gate::Allow(None)
    }
}

/// Session store backed by the application's `/api/auth/session` endpoint.
pub struct ApiSessionStore<'a> {
    client: &'a Client,
}

impl<'a> ApiSessionStore<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }
}

impl SessionStore for ApiSessionStore<'_> {
    async fn current_session(&self) -> Result<Option<ProviderSession>, FitTrackError> {
        Ok(self.client.get::<Option<ProviderSession>>("auth/session").await?)
    }
}
