//! Dashboard Page
//!
//! Event catalog with ticket selection, and the user's bookings.

use leptos::*;

use crate::components::{BookingCard, EventCard, Nav};
use crate::state::catalog::EVENTS;
use crate::state::global::{GlobalState, ViewMode};

/// Dashboard page component
#[component]
pub fn Dashboard(
    email: String,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    state.reset_dashboard();

    let email = store_value(email);

    let show_events = move |_| state.view.set(ViewMode::Events);
    let show_bookings = move |_| {
        let email = email.get_value();
        spawn_local(async move { state.view_bookings(email).await });
    };
    let cancel = move |booking_id: String| {
        let email = email.get_value();
        spawn_local(async move { state.cancel_booking(email, booking_id).await });
    };

    view! {
        <Nav
            email=email.get_value()
            on_events=show_events
            on_bookings=show_bookings
            on_logout=on_logout
        />

        <main class="flex-1 container mx-auto px-4 py-8">
            <section class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || match state.view.get() {
                    ViewMode::Events => EVENTS
                        .iter()
                        .map(|event| view! { <EventCard event=*event email=email /> })
                        .collect_view(),
                    ViewMode::Bookings => {
                        let bookings = state.bookings.get();
                        if bookings.is_empty() {
                            view! { <p class="text-gray-400">"No bookings found."</p> }.into_view()
                        } else {
                            bookings
                                .into_iter()
                                .map(|booking| view! { <BookingCard booking=booking on_cancel=cancel /> })
                                .collect_view()
                        }
                    }
                }}
            </section>
        </main>
    }
}
