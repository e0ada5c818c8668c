//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod booking_card;
pub mod event_card;
pub mod nav;
pub mod toast;

pub use booking_card::BookingCard;
pub use event_card::EventCard;
pub use nav::Nav;
pub use toast::Toast;
