//! Session state machine and the controller that drives it.

mod controller;
mod session;

pub use controller::AuthController;
pub use session::{AuthState, Redirect, Session, View};
