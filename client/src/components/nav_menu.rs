//! Role-filtered module navigation.

use leptos::prelude::*;
use session::{ModuleProfile, visible_items};

use crate::state::auth::AuthState;
use crate::util::nav_tables::nav_table;

/// Renders nothing until the session is mounted, so restricted entries never
/// flash before the role is known.
#[component]
pub fn NavMenu(module: ModuleProfile) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let items = move || {
        let state = auth.get();
        if !state.mounted {
            return Vec::new();
        }
        visible_items(nav_table(module), state.role.as_deref())
    };

    view! {
        <nav class="nav-menu">
            {move || {
                items()
                    .into_iter()
                    .map(|item| view! { <a class="nav-menu__item" href=item.href>{item.label}</a> })
                    .collect_view()
            }}
        </nav>
    }
}
