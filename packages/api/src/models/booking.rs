use serde::{Deserialize, Serialize};

/// Body of `GET /api/status`.
///
/// A missing `booking` field reads as "not booking".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatus {
    #[serde(default)]
    pub booking: bool,
}
