use tracing::info;

use crate::error::Result;
use crate::models::User;
use crate::storage::LocalStore;

/// Explicit session lifecycle around the local store.
///
/// Hydrated once at startup, mutated only through [`login`]/[`logout`],
/// and injected into whatever needs the identity, instead of ambient
/// reads of persistent storage scattered across views.
///
/// [`login`]: SessionContext::login
/// [`logout`]: SessionContext::logout
#[derive(Debug)]
pub struct SessionContext {
    store: LocalStore,
    token: Option<String>,
    user: Option<User>,
}

impl SessionContext {
    /// Reconstruct the previous session (if any) from the local store.
    pub fn hydrate(store: LocalStore) -> Self {
        let token = store.token().map(str::to_string);
        let user = store.user().cloned();
        if let Some(u) = &user {
            info!("session hydrated for {}", u.email);
        }
        SessionContext { store, token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn login(&mut self, token: String, user: User) -> Result<()> {
        self.store.set_session(token.clone(), user.clone())?;
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.clear_session()?;
        self.token = None;
        self.user = None;
        info!("session cleared");
        Ok(())
    }

    pub fn push_search(&mut self, movie_id: i64) -> Result<()> {
        self.store.push_search(movie_id)
    }

    pub fn search_history(&self) -> &[i64] {
        self.store.search_history()
    }
}
