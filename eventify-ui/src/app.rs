//! App Root Component
//!
//! Switches between the login page and the dashboard depending on whether an
//! identity is stored.

use leptos::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Login};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let identity = state.identity;

    let on_login = move |_| identity.set(session::load_identity());
    let on_logout = move |_| {
        session::clear_identity();
        identity.set(None);
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            {move || match identity.get() {
                Some(email) => view! { <Dashboard email=email on_logout=on_logout /> }.into_view(),
                None => view! { <Login on_login=on_login /> }.into_view(),
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}
