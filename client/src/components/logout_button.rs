//! Logout button shared by every authenticated page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard and admin pages must log out identically: clear the session,
//! then replace the current history entry with `/login` carrying no state.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::logout_and_leave;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| logout_and_leave(auth, &navigate);

    view! {
        <button class="btn page-header__logout" type="button" on:click=on_logout>
            "登出"
        </button>
    }
}
