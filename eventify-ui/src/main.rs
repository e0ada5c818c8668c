//! Eventify Web
//!
//! Event booking frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Email login kept in browser local storage (demo only, no real auth)
//! - Event catalog with per-event ticket quantities
//! - Booking creation, listing and cancellation against the booking API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The booking API base URL is fixed at build time through
//! `EVENTIFY_API_URL`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
