//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, module::ModulePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Session state is provided per module by `SessionLayout`, not here, since
/// each module bootstraps its own session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/campus.css"/>
        <Title text="Campus"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(ParamSegment("module"), StaticSegment("login")) view=LoginPage/>
                <Route path=ParamSegment("module") view=ModulePage/>
            </Routes>
        </Router>
    }
}
