//! Module home route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboards, tables and forms for each module talk to that module's own
//! backend and are mounted under this page; it only owns the session shell
//! and a role-aware welcome.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;
use session::ModuleProfile;

use crate::components::session_layout::SessionLayout;
use crate::state::auth::AuthState;

/// Greeting line for the module home.
pub fn welcome_message(module: ModuleProfile, state: &AuthState) -> String {
    match state.role.as_deref() {
        Some(role) => format!("Welcome to {}, {} ({role}).", module.title(), state.display_name()),
        None => format!("Welcome to {}.", module.title()),
    }
}

#[component]
pub fn ModulePage() -> impl IntoView {
    let params = use_params_map();
    let module = move || params.read().get("module").and_then(|m| m.parse::<ModuleProfile>().ok());

    move || match module() {
        Some(module) => view! {
            <SessionLayout module=module>
                <ModuleHome module=module/>
            </SessionLayout>
        }
        .into_any(),
        None => view! { <div class="not-found">"Page not found."</div> }.into_any(),
    }
}

#[component]
fn ModuleHome(module: ModuleProfile) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let message = move || welcome_message(module, &auth.get());

    view! {
        <section class="module-home">
            <h1>{module.title()}</h1>
            <p>{message}</p>
        </section>
    }
}
