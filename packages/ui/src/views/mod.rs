mod booking_overlay;
pub use booking_overlay::BookingOverlay;
