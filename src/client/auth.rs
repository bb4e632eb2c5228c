//! Session-wide authentication state

use std::sync::Arc;

use tokio::sync::watch;

use super::{ApiClient, ClientResult};
use crate::models::User;

/// Whether the session belongs to a signed-in user
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// A token is stored but the profile has not been resolved yet
    Unknown,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Authentication context shared by every page of a session.
///
/// Created from the token store (`Unknown` when a token is present,
/// `Anonymous` otherwise), resolved by [`AuthContext::initialize`], and
/// torn down by [`AuthContext::logout`]. Views observe changes through
/// [`AuthContext::subscribe`].
#[derive(Clone)]
pub struct AuthContext {
    api: ApiClient,
    state: Arc<watch::Sender<AuthState>>,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        let initial = if api.tokens().load().is_some() {
            AuthState::Unknown
        } else {
            AuthState::Anonymous
        };
        let (state, _) = watch::channel(initial);
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Resolve a stored token into a user with the "who am I" query.
    ///
    /// A rejected token is cleared. The result is only applied while the
    /// state is still `Unknown`, so a `login` or `logout` that happened
    /// during the query wins.
    pub async fn initialize(&self) -> AuthState {
        if self.api.tokens().load().is_none() {
            self.state.send_replace(AuthState::Anonymous);
            return self.state();
        }

        let resolved = match self.api.me().await {
            Ok(user) => AuthState::Authenticated(user),
            Err(e) => {
                tracing::info!("Stored session rejected: {}", e);
                AuthState::Anonymous
            }
        };

        let rejected = resolved == AuthState::Anonymous;
        let applied = self.state.send_if_modified(|state| {
            if *state == AuthState::Unknown {
                *state = resolved;
                true
            } else {
                false
            }
        });

        if applied && rejected {
            if let Err(e) = self.api.tokens().clear() {
                tracing::warn!("Failed to clear stored token: {}", e);
            }
        }

        self.state()
    }

    /// Persist the token and mark the session authenticated
    pub fn login(&self, token: &str, user: User) -> ClientResult<()> {
        self.api.tokens().save(token)?;
        self.state.send_replace(AuthState::Authenticated(user));
        Ok(())
    }

    /// Forget the token and the user
    pub fn logout(&self) -> ClientResult<()> {
        let cleared = self.api.tokens().clear();
        self.state.send_replace(AuthState::Anonymous);
        cleared
    }
}
