//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::nav::DASHBOARD_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-Hant">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, wires the global session-expiry signal into
/// it, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    crate::util::auth::install_session_expiry(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "找不到頁面。".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
