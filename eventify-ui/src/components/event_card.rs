//! Event Card Component
//!
//! One catalog entry with a quantity stepper and a Book button.

use leptos::*;

use crate::state::catalog::Event;
use crate::state::global::GlobalState;

#[component]
pub fn EventCard(event: Event, email: StoredValue<String>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = event.id;

    let quantity = move || state.quantity(id);
    let book = move |_| {
        let email = email.get_value();
        spawn_local(async move { state.book_event(email, id).await });
    };

    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <img src=event.image alt=event.title class="w-full h-40 object-cover" />

            <div class="p-4 space-y-2">
                <h3 class="text-lg font-semibold">{event.title}</h3>
                <p class="text-gray-400">{event.city}</p>
                <p class="text-gray-400">{event.date}</p>
                <p>{format!("Price: ₹{}", event.price)}</p>

                <div class="flex items-center space-x-3">
                    <button
                        on:click=move |_| state.adjust_quantity(id, -1)
                        class="w-8 h-8 bg-gray-700 hover:bg-gray-600 rounded-lg"
                    >
                        "−"
                    </button>
                    <span class="w-6 text-center">{quantity}</span>
                    <button
                        on:click=move |_| state.adjust_quantity(id, 1)
                        class="w-8 h-8 bg-gray-700 hover:bg-gray-600 rounded-lg"
                    >
                        "+"
                    </button>
                </div>

                <p class="font-semibold">
                    {move || format!("Total: ₹{}", event.total(quantity()))}
                </p>

                <button
                    on:click=book
                    class="w-full py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Book"
                </button>
            </div>
        </div>
    }
}
