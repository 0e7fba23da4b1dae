//! Wire models for the device API.

mod booking;
mod device;
mod login;

pub use booking::BookingStatus;
pub use device::{Device, DeviceData};
pub use login::{Credentials, LoginResponse};
