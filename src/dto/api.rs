//! Response envelopes of the console JSON API.

use serde::Deserialize;

use crate::domain::staff::{Conductor, Driver, StaffMember};
use crate::source::errors::{SourceError, SourceResult};

/// `{"success": true, "data": ...}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Splits the envelope into the payload or the backend's failure reason.
    pub fn into_result(self) -> SourceResult<T> {
        if !self.success {
            return Err(SourceError::Rejected(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| SourceError::Decode("successful response without data".to_string()))
    }
}

/// The staff endpoint returns drivers and conductors side by side instead of `data`.
#[derive(Debug, Deserialize)]
pub struct StaffRoster {
    pub success: bool,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub conductors: Vec<Conductor>,
    pub error: Option<String>,
}

impl StaffRoster {
    /// Drivers first, then conductors, each in the order received.
    pub fn into_members(self) -> SourceResult<Vec<StaffMember>> {
        if !self.success {
            return Err(SourceError::Rejected(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(self
            .drivers
            .into_iter()
            .map(StaffMember::from)
            .chain(self.conductors.into_iter().map(StaffMember::from))
            .collect())
    }
}
