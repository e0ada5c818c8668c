//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the dashboard
//! actions that drive the booking API.

use leptos::*;
use std::collections::HashMap;

use super::catalog::EVENTS;
use crate::api;

/// Smallest selectable ticket quantity
pub const MIN_QUANTITY: u8 = 1;
/// Largest selectable ticket quantity
pub const MAX_QUANTITY: u8 = 10;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Logged-in email, mirrored from local storage
    pub identity: RwSignal<Option<String>>,
    /// Which list the dashboard shows
    pub view: RwSignal<ViewMode>,
    /// Selected ticket quantity per event id
    pub quantities: RwSignal<HashMap<u32, u8>>,
    /// Last bookings snapshot from the API
    pub bookings: RwSignal<Vec<Booking>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Dashboard view selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Events,
    Bookings,
}

/// Booking record from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "WireBooking")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_title: String,
    pub quantity: u32,
    pub status: String,
    pub created_at: String,
}

/// Mongo documents may carry a virtual `id` next to `_id`
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBooking {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    event_title: String,
    quantity: u32,
    status: String,
    #[serde(default)]
    created_at: String,
}

impl TryFrom<WireBooking> for Booking {
    type Error = String;

    fn try_from(wire: WireBooking) -> Result<Self, Self::Error> {
        let id = wire
            .object_id
            .or(wire.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;

        Ok(Self {
            id,
            event_title: wire.event_title,
            quantity: wire.quantity,
            status: wire.status,
            created_at: wire.created_at,
        })
    }
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case("cancelled")
    }

    /// Creation time in the browser's local timezone
    pub fn created_display(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| {
                dt.with_timezone(&chrono::Local)
                    .format("%d/%m/%Y, %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Quantity after applying `delta`, kept within `MIN_QUANTITY..=MAX_QUANTITY`
pub fn clamp_quantity(current: u8, delta: i32) -> u8 {
    i32::from(current)
        .saturating_add(delta)
        .clamp(i32::from(MIN_QUANTITY), i32::from(MAX_QUANTITY)) as u8
}

fn initial_quantities() -> HashMap<u32, u8> {
    EVENTS.iter().map(|e| (e.id, MIN_QUANTITY)).collect()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        identity: create_rw_signal(super::session::load_identity()),
        view: create_rw_signal(ViewMode::default()),
        quantities: create_rw_signal(initial_quantities()),
        bookings: create_rw_signal(Vec::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Reset transient dashboard state for a fresh session
    pub fn reset_dashboard(&self) {
        self.view.set(ViewMode::Events);
        self.quantities.set(initial_quantities());
        self.bookings.set(Vec::new());
    }

    pub fn quantity(&self, event_id: u32) -> u8 {
        self.quantities
            .with(|q| q.get(&event_id).copied())
            .unwrap_or(MIN_QUANTITY)
    }

    pub fn adjust_quantity(&self, event_id: u32, delta: i32) {
        self.quantities.update(|q| {
            let current = q.get(&event_id).copied().unwrap_or(MIN_QUANTITY);
            q.insert(event_id, clamp_quantity(current, delta));
        });
    }

    /// Book the selected quantity of an event
    pub async fn book_event(&self, user_email: String, event_id: u32) {
        let Some(event) = EVENTS.iter().find(|e| e.id == event_id) else {
            return;
        };
        let quantity = self.quantity(event_id);

        match api::create_booking(event.title, &user_email, quantity).await {
            Ok(()) => self.show_success("🎟 Booking confirmed!"),
            Err(e) => {
                log_failure("Booking failed", &e);
                self.show_error("Booking failed");
            }
        }
    }

    /// Replace the bookings snapshot and switch to the bookings view
    pub async fn view_bookings(&self, user_email: String) {
        match api::fetch_bookings(&user_email).await {
            Ok(bookings) => {
                self.bookings.set(bookings);
                self.view.set(ViewMode::Bookings);
            }
            Err(e) => {
                log_failure("Failed to load bookings", &e);
                self.show_error("Failed to load bookings");
            }
        }
    }

    /// Confirm, delete, then refetch the bookings list
    pub async fn cancel_booking(&self, user_email: String, booking_id: String) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Cancel this booking?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        match api::cancel_booking(&booking_id).await {
            Ok(()) => self.view_bookings(user_email).await,
            Err(e) => {
                log_failure("Cancel failed", &e);
                self.show_error("Cancellation failed");
            }
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

fn log_failure(context: &str, error: &api::ApiFailure) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(1, -1), 1);
        assert_eq!(clamp_quantity(1, 1), 2);
        assert_eq!(clamp_quantity(10, 1), 10);
        assert_eq!(clamp_quantity(5, i32::MIN), 1);
        assert_eq!(clamp_quantity(5, i32::MAX), 10);
    }

    #[test]
    fn test_initial_quantities() {
        let q = initial_quantities();
        assert_eq!(q.len(), 5);
        assert!(q.values().all(|&v| v == MIN_QUANTITY));
    }

    #[test]
    fn test_booking_from_api() {
        let booking: Booking = serde_json::from_str(
            r#"{"_id": "b1", "eventTitle": "Music Concert", "userEmail": "a@b.com",
                "quantity": 3, "status": "cancelled", "createdAt": "2026-01-05T09:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(booking.id, "b1");
        assert_eq!(booking.quantity, 3);
        assert!(booking.is_cancelled());
    }

    #[test]
    fn test_booking_prefers_object_id() {
        let booking: Booking = serde_json::from_str(
            r#"{"_id": "b1", "id": "virtual", "eventTitle": "Food Carnival",
                "quantity": 2, "status": "confirmed"}"#,
        )
        .unwrap();

        assert_eq!(booking.id, "b1");
        assert_eq!(booking.created_at, "");
        assert!(!booking.is_cancelled());
    }

    #[test]
    fn test_created_display_fallback() {
        let booking = Booking {
            id: "b1".to_string(),
            event_title: "Art Exhibition".to_string(),
            quantity: 1,
            status: "pending".to_string(),
            created_at: "yesterday".to_string(),
        };
        assert_eq!(booking.created_display(), "yesterday");
        assert!(!booking.is_cancelled());
    }
}
