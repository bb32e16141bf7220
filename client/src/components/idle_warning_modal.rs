//! "Still there?" modal shown when the idle warning fires.

use leptos::prelude::*;

use crate::components::session_layout::{SESSION_TIMEOUT, SESSION_WARNING};

#[component]
pub fn IdleWarningModal(on_stay: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    let remaining_minutes = SESSION_TIMEOUT.saturating_sub(SESSION_WARNING).as_secs().div_ceil(60);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" || ev.key() == "Enter" {
            ev.prevent_default();
            on_stay.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_stay.run(())>
            <div
                class="dialog idle-warning"
                role="alertdialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Are you still there?"</h2>
                <p>
                    "You will be signed out in about " {remaining_minutes} " min due to inactivity."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_sign_out.run(())>"Sign out"</button>
                    <button class="btn btn--primary" on:click=move |_| on_stay.run(())>"Stay signed in"</button>
                </div>
            </div>
        </div>
    }
}
