//! Module layout that owns the session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bootstraps the module session, provides it through context, and once a
//! signed-in session is known runs the inactivity watchdog. The warning opens
//! a "stay signed in" modal; idle clears the session, which the unauth
//! redirect turns into a trip to the module login route.

#[cfg(test)]
#[path = "session_layout_test.rs"]
mod session_layout_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{IdleConfig, ModuleProfile};

use crate::components::idle_warning_modal::IdleWarningModal;
use crate::components::nav_menu::NavMenu;
use crate::state::auth::AuthState;
use crate::util::auth::{install_unauth_redirect, logout, use_auth_bootstrap};
use crate::util::idle_timer::{IdleHandlers, use_idle_timer};

pub const SESSION_TIMEOUT: Duration = Duration::from_secs(15 * 60);
pub const SESSION_WARNING: Duration = Duration::from_secs(13 * 60);

/// Watchdog config for `state`: enabled only for a known, signed-in session.
pub fn session_idle_config(state: &AuthState) -> IdleConfig {
    IdleConfig::default()
        .with_timeout(SESSION_TIMEOUT)
        .with_warning(SESSION_WARNING)
        .with_disabled(!state.is_authenticated())
}

#[component]
pub fn SessionLayout(module: ModuleProfile, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_bootstrap(module);
    provide_context(auth);

    install_unauth_redirect(auth, module.login_route(), use_navigate());

    let warning_open = RwSignal::new(false);
    let idle_config = Signal::derive(move || session_idle_config(&auth.get()));
    let handlers = IdleHandlers {
        on_warning: Some(Callback::new(move |()| warning_open.set(true))),
        on_active: Some(Callback::new(move |()| warning_open.set(false))),
        on_idle: Some(Callback::new(move |()| {
            warning_open.set(false);
            log::info!("{module} session idle, signing out");
            logout(module, auth);
        })),
    };
    let idle = use_idle_timer(idle_config, handlers);
    provide_context(idle);

    let on_stay = Callback::new(move |()| {
        warning_open.set(false);
        idle.reset();
    });
    let on_sign_out = Callback::new(move |()| {
        warning_open.set(false);
        logout(module, auth);
    });
    let user_name = move || auth.get().display_name();
    let role_label = move || auth.get().role.unwrap_or_else(|| "guest".to_owned());

    view! {
        <Show
            when=move || auth.get().mounted
            fallback=|| view! { <div class="session-layout__loading">"Loading session..."</div> }
        >
            <div class="session-layout">
                <header class="session-layout__header">
                    <span class="session-layout__module">{module.title()}</span>
                    <NavMenu module=module/>
                    <span class="session-layout__user">{user_name}" · "{role_label}</span>
                    <button class="btn" on:click=move |_| on_sign_out.run(())>"Sign out"</button>
                </header>
                <main class="session-layout__main">{children()}</main>
            </div>
            <Show when=move || warning_open.get()>
                <IdleWarningModal on_stay=on_stay on_sign_out=on_sign_out/>
            </Show>
        </Show>
    }
}
