//! State Management
//!
//! Global reactive state, the event catalog and identity persistence.

pub mod catalog;
pub mod global;
pub mod session;

pub use catalog::{Event, EVENTS};
pub use global::{provide_global_state, Booking, GlobalState, ViewMode};
