//! Navigation Component
//!
//! Header bar with the logged-in email and the dashboard actions.

use leptos::*;

/// Navigation header component
#[component]
pub fn Nav(
    email: String,
    #[prop(into)] on_events: Callback<()>,
    #[prop(into)] on_bookings: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <span class="text-xl font-bold text-white">"Eventify"</span>

                    <div class="flex items-center space-x-2">
                        <span class="px-3 py-1 rounded-full bg-gray-700 text-sm text-gray-300">
                            {email}
                        </span>
                        <NavButton label="Events" on_click=on_events />
                        <NavButton label="My Bookings" on_click=on_bookings />
                        <NavButton label="Logout" on_click=on_logout />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton(label: &'static str, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click.call(())
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            {label}
        </button>
    }
}
