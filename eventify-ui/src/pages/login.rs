//! Login Page
//!
//! Collects an email and stores it locally. The password field is part of
//! the form but its value is never read.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::session;

/// Login page component
#[component]
pub fn Login(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let email_input = create_node_ref::<html::Input>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email = email_input
            .get()
            .map(|input| input.value())
            .unwrap_or_default();
        let email = email.trim();

        if email.is_empty() {
            state.show_error("Enter email");
            return;
        }

        session::save_identity(email);
        on_login.call(());
    };

    view! {
        <main class="flex-1 flex flex-col items-center justify-center px-4">
            <h1 class="text-3xl font-bold mb-2">"Welcome to Eventify"</h1>
            <p class="text-gray-400 mb-8">"Sign in to explore and book events"</p>

            <form on:submit=on_submit class="w-full max-w-sm bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        node_ref=email_input
                        name="email"
                        type="email"
                        required
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        required
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Login"
                </button>

                <p class="text-gray-500 text-sm text-center">"(Demo only: email stored locally)"</p>
            </form>
        </main>
    }
}
