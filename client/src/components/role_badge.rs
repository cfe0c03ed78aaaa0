//! Role badge shown in page headers.

use leptos::prelude::*;

use crate::net::types::Role;

/// Pill showing the signed-in user's role, styled by role.
#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    view! { <span class=format!("role-badge {}", role.badge_class())>{role.label()}</span> }
}
