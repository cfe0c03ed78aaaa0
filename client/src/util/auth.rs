//! Shared auth operations and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login` / `logout` instead of touching the API directly so the
//! session signal is the single place the signed-in user lives. Route
//! components apply identical redirect behavior through the `install_*`
//! helpers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::net::session_expiry;
use crate::net::types::Role;
use crate::state::auth::{AuthState, SESSION_EXPIRED_MESSAGE};
use crate::util::nav::{self, AFTER_LOGIN, FORBIDDEN, NavTarget, TO_LOGIN};
use crate::util::validation::Credentials;

/// Sign in with validated credentials and publish the user to the session.
///
/// # Errors
///
/// Returns the API failure unchanged; the session stays anonymous.
pub async fn login(auth: RwSignal<AuthState>, credentials: &Credentials) -> Result<(), ApiError> {
    let user = crate::net::api::login(&credentials.email, &credentials.password).await?;
    leptos::logging::log!("signed in as {} ({})", user.username, user.role.badge_class());
    auth.update(|a| a.sign_in(user));
    Ok(())
}

/// Clear the session immediately and end it server-side in the background.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::logout);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::api::logout());
}

/// Log out, then leave for `/login` with a single replacing navigation.
pub fn logout_and_leave<F>(auth: RwSignal<AuthState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    logout(auth);
    nav::go(navigate, TO_LOGIN);
}

/// Route the global 401 signal into the session signal.
pub fn install_session_expiry(auth: RwSignal<AuthState>) {
    session_expiry::set_handler(move || expire_session(auth));
}

/// Apply one expiry signal. A 401 seen while already anonymous (a visitor
/// who never signed in) leaves the session and its notice untouched.
pub(crate) fn expire_session(auth: RwSignal<AuthState>) {
    if auth.with_untracked(should_redirect_unauth) {
        return;
    }
    if auth.try_update(|a| a.expire(SESSION_EXPIRED_MESSAGE)).unwrap_or(false) {
        leptos::logging::warn!("session expired; returning to login");
    }
}

/// Protected routes send anonymous visitors to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_authenticated()
}

/// Redirect decision for a protected page.
///
/// On mount any anonymous visitor is sent away. Afterwards only an expiry
/// does so: a voluntary logout navigates by itself and must not be followed
/// by a second redirect.
pub fn unauth_redirect(state: &AuthState, on_mount: bool) -> Option<NavTarget> {
    let leave = should_redirect_unauth(state) && (on_mount || state.has_expired_message());
    leave.then_some(TO_LOGIN)
}

/// A signed-in user whose role is not `required`.
pub fn lacks_role(state: &AuthState, required: Role) -> bool {
    state.role().is_some_and(|role| role != required)
}

/// Where the login page sends a visitor who is already signed in.
pub fn login_mount_redirect(state: &AuthState) -> Option<NavTarget> {
    state.is_authenticated().then_some(AFTER_LOGIN)
}

/// Redirect to `/login` when the page mounts without a user or the session
/// later expires.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |prev: Option<()>| {
        if let Some(target) = auth.with(|a| unauth_redirect(a, prev.is_none())) {
            nav::go(&navigate, target);
        }
    });
}

/// Redirect signed-in users without `required` back to the dashboard.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(|state| lacks_role(state, required)) {
            nav::go(&navigate, FORBIDDEN);
        }
    });
}
