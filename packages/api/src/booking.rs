//! # Booking controller
//!
//! A booking is an exclusive hold on one device, advertised as lasting
//! [`BOOKING_HOLD`]. The hold is enforced by the server; the client keeps no timer
//! and only remembers *whether* it holds a booking, not which device.
//!
//! While [`BookingState::booking`] is true the map is covered by a blocking
//! overlay that only offers "unbook". That overlay is the only guard against
//! booking twice: [`BookingController::book`] itself does not check.
//!
//! Failed book/unbook calls are logged and leave the state untouched.

use std::time::Duration;

use crate::client::DeviceApi;
use crate::error::Result;
use crate::models::BookingStatus;

/// Advertised length of a booking.
pub const BOOKING_HOLD: Duration = Duration::from_secs(10 * 60);

pub const UNBOOKED_NOTICE: &str = "Successfully unbooked";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingState {
    pub booking: bool,
}

/// Confirmation shown after a successful booking.
pub fn booked_notice(name: &str) -> String {
    format!(
        "Successfully booked device {} for {} mins",
        name,
        BOOKING_HOLD.as_secs() / 60
    )
}

pub struct BookingController<A> {
    api: A,
    state: BookingState,
}

impl<A: DeviceApi> BookingController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BookingState::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    /// Whether the blocking overlay must be shown.
    pub fn overlay_visible(&self) -> bool {
        self.state.booking
    }

    pub async fn fetch_status(&mut self, token: &str) -> Result<BookingState> {
        let result = self.api.status(token).await;
        self.apply_status(result)
    }

    pub fn apply_status(&mut self, result: Result<BookingStatus>) -> Result<BookingState> {
        match result {
            Ok(status) => {
                self.state.booking = status.booking;
                Ok(self.state)
            }
            Err(e) => {
                tracing::error!("Failed to fetch booking status: {}", e);
                Err(e)
            }
        }
    }

    /// Book `name`. Returns the confirmation notice.
    pub async fn book(&mut self, token: &str, name: &str) -> Result<String> {
        let result = self.api.book(token, name).await;
        self.apply_book(name, result)
    }

    pub fn apply_book(&mut self, name: &str, result: Result<()>) -> Result<String> {
        if let Err(e) = result {
            tracing::error!("Booking device {} failed: {}", name, e);
            return Err(e);
        }
        self.state.booking = true;
        tracing::info!("Booked device {}", name);
        Ok(booked_notice(name))
    }

    /// Release the current booking. Returns the confirmation notice.
    pub async fn unbook(&mut self, token: &str) -> Result<String> {
        let result = self.api.unbook(token).await;
        self.apply_unbook(result)
    }

    pub fn apply_unbook(&mut self, result: Result<()>) -> Result<String> {
        if let Err(e) = result {
            tracing::error!("Unbooking failed: {}", e);
            return Err(e);
        }
        self.state.booking = false;
        tracing::info!("Booking released");
        Ok(UNBOOKED_NOTICE.to_string())
    }
}
