use std::cell::RefCell;

use leptos_router::location::State;

use super::*;
use crate::net::types::User;
use crate::state::auth::SessionPhase;

fn signed_in(role: Role) -> AuthState {
    AuthState { user: Some(User { username: "Alice".to_owned(), role }), ..AuthState::default() }
}

#[test]
fn should_redirect_unauth_when_user_missing() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&signed_in(Role::User)));
}

#[test]
fn lacks_role_only_for_signed_in_users_with_other_role() {
    assert!(lacks_role(&signed_in(Role::User), Role::Admin));
    assert!(!lacks_role(&signed_in(Role::Admin), Role::Admin));
    // Anonymous visitors are handled by the unauth redirect instead.
    assert!(!lacks_role(&AuthState::default(), Role::Admin));
}

#[test]
fn login_mount_redirect_sends_authenticated_users_to_dashboard() {
    assert_eq!(login_mount_redirect(&signed_in(Role::User)), Some(AFTER_LOGIN));
    assert_eq!(login_mount_redirect(&AuthState::default()), None);
}

#[test]
fn login_mount_redirect_uses_replace() {
    let target = login_mount_redirect(&signed_in(Role::Admin)).unwrap();
    assert_eq!(target.path, "/dashboard");
    assert!(target.replace);
}

// =============================================================
// Unauth redirect
// =============================================================

#[test]
fn unauth_redirect_on_mount_for_anonymous() {
    assert_eq!(unauth_redirect(&AuthState::default(), true), Some(TO_LOGIN));
    assert_eq!(unauth_redirect(&signed_in(Role::User), true), None);
}

#[test]
fn unauth_redirect_skips_voluntary_logout() {
    let mut state = signed_in(Role::User);
    state.logout();
    assert_eq!(unauth_redirect(&state, false), None);
}

#[test]
fn unauth_redirect_follows_expiry_after_mount() {
    let mut state = signed_in(Role::User);
    state.expire(SESSION_EXPIRED_MESSAGE);
    assert_eq!(unauth_redirect(&state, false), Some(TO_LOGIN));
}

// =============================================================
// Logout and expiry against the session signal
// =============================================================

type NavCall = (String, bool, bool);

/// Records `(path, replace, history state is empty)` per navigation.
fn recording_navigate(calls: &RefCell<Vec<NavCall>>) -> impl Fn(&str, NavigateOptions) + '_ {
    move |path: &str, opts: NavigateOptions| {
        calls.borrow_mut().push((path.to_owned(), opts.replace, opts.state == State::default()));
    }
}

#[test]
fn logout_and_leave_clears_session_and_navigates_once() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(signed_in(Role::Admin));
        let calls = RefCell::new(Vec::new());

        logout_and_leave(auth, &recording_navigate(&calls));

        assert_eq!(auth.with_untracked(AuthState::phase), SessionPhase::Anonymous);
        assert!(auth.with_untracked(|a| !a.has_expired_message()));
        assert_eq!(calls.into_inner(), vec![("/login".to_owned(), true, true)]);
    });
}

#[test]
fn expire_session_ignores_anonymous_401() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        expire_session(auth);
        assert_eq!(auth.get_untracked(), AuthState::default());
    });
}

#[test]
fn expire_session_ends_authenticated_session() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(signed_in(Role::User));
        expire_session(auth);
        auth.with_untracked(|a| {
            assert_eq!(a.phase(), SessionPhase::Anonymous);
            assert_eq!(a.auth_expired_message, SESSION_EXPIRED_MESSAGE);
        });
    });
}
