//! Module login landing page.
//!
//! Sign-in itself happens on the institute login portal, which hands the
//! session back through the `auth_data` cookie on return.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;
use session::ModuleProfile;

pub const LOGIN_PORTAL_PATH: &str = "/auth/login";

/// Portal URL that returns to `module` after sign-in.
pub fn login_portal_href(module: ModuleProfile) -> String {
    format!("{LOGIN_PORTAL_PATH}?module={}&next={}", module.slug(), module.home_route())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let params = use_params_map();
    let module = move || params.read().get("module").and_then(|m| m.parse::<ModuleProfile>().ok());

    view! {
        <div class="login-page">
            <div class="login-card">
                {move || match module() {
                    Some(module) => {
                        view! {
                            <h1>{module.title()}</h1>
                            <p class="login-card__subtitle">"Your session has ended or you are not signed in."</p>
                            <a href=login_portal_href(module) class="login-button" rel="external">
                                "Sign in"
                            </a>
                        }
                            .into_any()
                    }
                    None => view! { <h1>"Unknown module"</h1> }.into_any(),
                }}
            </div>
        </div>
    }
}
