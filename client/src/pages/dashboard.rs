//! Dashboard page with a role-aware header and the product list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches products once on mount when a user
//! is signed in; an expired session produces no local error because the
//! global expiry handling already sends the user to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::logout_button::LogoutButton;
use crate::components::product_card::ProductCard;
use crate::components::role_badge::RoleBadge;
use crate::state::auth::AuthState;
use crate::state::products::ProductsState;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::ADMIN_PATH;

/// Dashboard page. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let products = RwSignal::new(ProductsState::default());

    #[cfg(feature = "hydrate")]
    {
        if auth.with_untracked(should_fetch_products) {
            let mounted = crate::util::mount::MountGuard::install();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_products().await;
                if let Err(e) = &result {
                    leptos::logging::warn!("product fetch failed: {e}");
                }
                if mounted.is_mounted() {
                    products.update(|p| p.apply_fetch_result(result));
                }
            });
        }
    }

    let is_admin = move || auth.with(show_admin_link);

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1 class="page-header__title">"儀表板"</h1>
                <span class="page-header__spacer"></span>
                <Show when=is_admin>
                    <a class="page-header__admin-link" href=ADMIN_PATH>
                        "管理後台"
                    </a>
                </Show>
                {move || auth.with(AuthState::role).map(|role| view! { <RoleBadge role=role/> })}
                <LogoutButton/>
            </header>

            <main class="dashboard-page__content">
                {move || {
                    auth.with(welcome_text)
                        .map(|text| {
                            view! {
                                <section class="welcome-card">
                                    <h2>{text}</h2>
                                </section>
                            }
                        })
                }}

                <section class="products">
                    <h2 class="products__title">"商品列表"</h2>
                    <Show when=move || products.with(|p| p.loading)>
                        <p class="products__loading">
                            <span class="spinner" aria-hidden="true"></span>
                            "載入商品中..."
                        </p>
                    </Show>
                    <Show when=move || products.with(|p| p.error.is_some())>
                        <p class="products__error" role="alert">
                            {move || products.with(|p| p.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show when=move || products.with(ProductsState::is_empty_listing)>
                        <p class="products__empty">"目前沒有商品"</p>
                    </Show>
                    <ul class="products__grid">
                        {move || {
                            products
                                .get()
                                .items
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </main>
        </div>
    }
}

/// Greeting for the signed-in user; nothing while anonymous.
fn welcome_text(state: &AuthState) -> Option<String> {
    state.user.as_ref().map(|u| format!("Welcome, {} 👋", u.username))
}

/// Product calls need a session; an anonymous visit is about to be
/// redirected and would only provoke a 401.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
fn should_fetch_products(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Only admins see the link into the admin area.
fn show_admin_link(state: &AuthState) -> bool {
    state.is_admin()
}
