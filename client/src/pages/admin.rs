//! Admin-only page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::logout_button::LogoutButton;
use crate::components::role_badge::RoleBadge;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};
use crate::util::nav::DASHBOARD_PATH;

/// Static admin content. Anonymous visitors go to `/login`, non-admins back
/// to `/dashboard`.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_role_redirect(auth, Role::Admin, navigate);

    view! {
        <div class="admin-page">
            <header class="page-header">
                <a class="page-header__back" href=DASHBOARD_PATH>
                    "← 返回"
                </a>
                <h1 class="page-header__title">"管理後台"</h1>
                <span class="page-header__spacer"></span>
                {move || auth.with(AuthState::role).map(|role| view! { <RoleBadge role=role/> })}
                <LogoutButton/>
            </header>

            <main class="admin-page__content">
                <section class="admin-card">
                    <h2>"管理員專屬頁面"</h2>
                    <p>"只有具備管理員角色的帳號可以檢視此頁面。"</p>
                </section>
            </main>
        </div>
    }
}
