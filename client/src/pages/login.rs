//! Login page with client-side validation and session-expiry notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route for anonymous visitors. Validation runs locally before the
//! auth API is called; the form stays locked while a login call is in
//! flight so a second submit cannot start.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::login_form::LoginFormState;
use crate::util::auth::login_mount_redirect;
use crate::util::nav;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginFormState::default());
    let expired_notice = RwSignal::new(None::<String>);

    // Mount-time checks read the session untracked so they run exactly once.
    let navigate_mount = navigate.clone();
    Effect::new(move || {
        if let Some(target) = auth.with_untracked(login_mount_redirect) {
            nav::go(&navigate_mount, target);
            return;
        }
        if let Some(notice) = take_expired_notice(auth) {
            expired_notice.set(Some(notice));
        }
    });

    #[cfg(feature = "hydrate")]
    let mounted = crate::util::mount::MountGuard::install();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                let result = crate::util::auth::login(auth, &credentials).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("login failed: {e}");
                }
                if !mounted.is_mounted() {
                    return;
                }
                if let Some(target) = form.try_update(|f| f.finish_submit(result)).flatten() {
                    nav::go(&navigate, target);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &navigate);
        }
    };

    let disabled = move || form.with(LoginFormState::inputs_disabled);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"歡迎回來"</h1>
                <p class="login-card__subtitle">"請登入您的帳號"</p>
                <Show when=move || expired_notice.with(Option::is_some)>
                    <p class="login-message login-message--expired" role="alert">
                        {move || expired_notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <label class="login-label" for="login-email">
                        "Email"
                    </label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        disabled=disabled
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                    />
                    <FieldError message=move || form.with(|f| f.field_errors.email)/>
                    <label class="login-label" for="login-password">
                        "密碼"
                    </label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="至少 8 個字元，需包含英數"
                        prop:value=move || form.with(|f| f.password.clone())
                        disabled=disabled
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                    />
                    <FieldError message=move || form.with(|f| f.field_errors.password)/>
                    <Show when=move || form.with(|f| f.submit_error.is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || form.with(|f| f.submit_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=disabled>
                        <Show when=disabled>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        {move || submit_label(disabled())}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Take the pending expiry notice. The session is only written (and its
/// subscribers notified) when there is a notice to take.
fn take_expired_notice(auth: RwSignal<AuthState>) -> Option<String> {
    if !auth.with_untracked(AuthState::has_expired_message) {
        return None;
    }
    auth.try_update(AuthState::take_auth_expired_message).flatten()
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "登入中..." } else { "登入" }
}

/// Inline message under a form field.
#[component]
fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="login-field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
