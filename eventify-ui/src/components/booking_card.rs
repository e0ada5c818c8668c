//! Booking Card Component

use leptos::*;

use crate::state::global::Booking;

#[component]
pub fn BookingCard(booking: Booking, #[prop(into)] on_cancel: Callback<String>) -> impl IntoView {
    let cancelled = booking.is_cancelled();
    let id = booking.id.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 space-y-2">
            <h3 class="text-lg font-semibold">{booking.event_title.clone()}</h3>
            <p>{format!("Tickets: {}", booking.quantity)}</p>
            <p>"Status: " <strong>{booking.status.clone()}</strong></p>
            <p class="text-gray-400 text-sm">{booking.created_display()}</p>

            {if cancelled {
                view! { <p class="text-gray-400 text-sm">"Cancelled"</p> }.into_view()
            } else {
                view! {
                    <button
                        on:click=move |_| on_cancel.call(id.clone())
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors"
                    >
                        "Cancel"
                    </button>
                }
                .into_view()
            }}
        </div>
    }
}
