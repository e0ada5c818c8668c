//! HTTP API Client
//!
//! Functions for communicating with the booking REST API.

use std::fmt;

use gloo_net::http::{Request, Response};

use crate::state::global::Booking;

/// API base URL used when none was set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Booking API base URL, fixed at build time
pub fn get_api_base() -> String {
    option_env!("EVENTIFY_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Why an API call failed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// The request could not be sent or the response not read
    Network(String),
    /// The server answered with a non-success status
    Status { status: u16, body: String },
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Network(e) => write!(f, "Network error: {}", e),
            ApiFailure::Status { status, body } => write!(f, "API error {}: {}", status, body),
        }
    }
}

fn network(e: gloo_net::Error) -> ApiFailure {
    ApiFailure::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiFailure> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiFailure::Status { status, body })
}

// ============ API Functions ============

/// Create a booking. The response body is ignored.
pub async fn create_booking(
    event_title: &str,
    user_email: &str,
    quantity: u8,
) -> Result<(), ApiFailure> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct BookRequest<'a> {
        event_title: &'a str,
        user_email: &'a str,
        quantity: u8,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/book", api_base))
        .json(&BookRequest {
            event_title,
            user_email,
            quantity,
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    check(response).await?;
    Ok(())
}

/// Fetch all bookings for an email
pub async fn fetch_bookings(user_email: &str) -> Result<Vec<Booking>, ApiFailure> {
    let api_base = get_api_base();
    let email: String = js_sys::encode_uri_component(user_email).into();

    let response = Request::get(&format!("{}/api/bookings?userEmail={}", api_base, email))
        .send()
        .await
        .map_err(network)?;

    check(response).await?.json().await.map_err(network)
}

/// Delete a booking
pub async fn cancel_booking(booking_id: &str) -> Result<(), ApiFailure> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/api/booking/{}", api_base, booking_id))
        .send()
        .await
        .map_err(network)?;

    check(response).await?;
    Ok(())
}
