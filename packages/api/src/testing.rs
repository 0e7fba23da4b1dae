//! Test doubles for the controller seams.

use std::cell::RefCell;
use std::rc::Rc;

use crate::auth::{Redirect, View};
use crate::client::DeviceApi;
use crate::error::{ApiError, Result};
use crate::models::{BookingStatus, Credentials, Device, LoginResponse};

/// Scripted DeviceApi that records every call.
#[derive(Clone, Debug)]
pub(crate) struct FakeApi {
    login: Result<LoginResponse>,
    devices: Result<Vec<Device>>,
    status: Result<BookingStatus>,
    book: Result<()>,
    unbook: Result<()>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Ok(LoginResponse::accepted("token-123")),
            devices: Ok(Vec::new()),
            status: Ok(BookingStatus::default()),
            book: Ok(()),
            unbook: Ok(()),
            calls: Rc::default(),
        }
    }
}

impl FakeApi {
    pub fn accepting(token: &str) -> Self {
        Self {
            login: Ok(LoginResponse::accepted(token)),
            ..Self::default()
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            login: Ok(LoginResponse::rejected(message)),
            ..Self::default()
        }
    }

    pub fn with_devices(mut self, devices: Vec<Device>) -> Self {
        self.devices = Ok(devices);
        self
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Ok(status);
        self
    }

    pub fn with_status_error(mut self, error: ApiError) -> Self {
        self.status = Err(error);
        self
    }

    pub fn with_book_status(mut self, status: u16) -> Self {
        self.book = Err(ApiError::Booking { status });
        self
    }

    pub fn with_unbook_status(mut self, status: u16) -> Self {
        self.unbook = Err(ApiError::Booking { status });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl DeviceApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.record(format!("login {}", credentials.email));
        self.login.clone()
    }

    async fn devices(&self, token: &str) -> Result<Vec<Device>> {
        self.record(format!("devices {token}"));
        self.devices.clone()
    }

    async fn status(&self, token: &str) -> Result<BookingStatus> {
        self.record(format!("status {token}"));
        self.status.clone()
    }

    async fn book(&self, token: &str, name: &str) -> Result<()> {
        self.record(format!("book {token} {name}"));
        self.book.clone()
    }

    async fn unbook(&self, token: &str) -> Result<()> {
        self.record(format!("unbook {token}"));
        self.unbook.clone()
    }
}

/// Redirect that remembers where it was sent.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingRedirect {
    views: Rc<RefCell<Vec<View>>>,
}

impl RecordingRedirect {
    pub fn views(&self) -> Vec<View> {
        self.views.borrow().clone()
    }

    pub fn last(&self) -> Option<View> {
        self.views.borrow().last().copied()
    }
}

impl Redirect for RecordingRedirect {
    fn redirect(&self, view: View) {
        self.views.borrow_mut().push(view);
    }
}
