use contracts::system::auth::AuthUser;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<AuthUser>,
}

/// Signed-in state of the dashboard.
///
/// Created once at start-up from the stored token and handed to the HTTP
/// client, which reads the token from it and ends it on a 401.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<AuthState>,
}

impl Session {
    /// Session restored from localStorage, if a token was kept.
    pub fn restore() -> Self {
        let access_token = storage::get_token();
        if access_token.is_some() {
            log::info!("restored session from storage");
        }
        Self {
            state: RwSignal::new(AuthState {
                access_token,
                user_info: None,
            }),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current token without subscribing to changes.
    pub fn token(&self) -> Option<String> {
        self.state
            .try_with_untracked(|s| s.access_token.clone())
            .flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user_info.clone())
    }

    pub fn sign_in(&self, token: String, user: Option<AuthUser>) {
        storage::save_token(&token);
        self.state.set(AuthState {
            access_token: Some(token),
            user_info: user,
        });
    }

    /// Drop the token everywhere; the shell falls back to the login page.
    pub fn invalidate(&self) {
        storage::clear_token();
        let was_signed_in = self
            .state
            .try_update(|s| std::mem::take(s).access_token.is_some())
            .unwrap_or(false);
        if was_signed_in {
            log::info!("session ended");
        }
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}
