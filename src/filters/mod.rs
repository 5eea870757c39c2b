//! Filter criteria backing the list screens.
//!
//! Every screen has a form struct holding the raw filter inputs and a typed
//! filter built from it with `TryFrom`. Empty inputs mean "any".

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

pub mod booking;
pub mod bus;
pub mod payment;
pub mod route;
pub mod staff;
pub mod user;

/// Longest search string accepted by the search boxes.
pub const MAX_SEARCH_LEN: u64 = 100;

/// Typed criteria that select records of type `T`.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

#[derive(Debug, Error)]
/// Errors that can occur when turning filter inputs into criteria.
pub enum FilterError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid activity status: {0}")]
    InvalidActivity(String),

    #[error("invalid staff tab: {0}")]
    InvalidTab(String),
}

/// Active/inactive selector shared by buses, routes and users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Active,
    Inactive,
}

impl Activity {
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            Activity::Active => is_active,
            Activity::Inactive => !is_active,
        }
    }
}

/// Parses "active" / "inactive"; blank means no restriction.
pub(crate) fn parse_activity(raw: &str) -> Result<Option<Activity>, FilterError> {
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "active" => Ok(Some(Activity::Active)),
        "inactive" => Ok(Some(Activity::Inactive)),
        other => Err(FilterError::InvalidActivity(other.to_string())),
    }
}

/// Parses a `YYYY-MM-DD` date; blank means no restriction.
pub(crate) fn parse_date(raw: &str) -> Result<Option<NaiveDate>, FilterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FilterError::InvalidDate(trimmed.to_string()))
}

/// Trims and lower-cases a free-text input, dropping it when blank.
pub(crate) fn normalize_search(raw: &str) -> Option<String> {
    Some(raw.trim().to_lowercase()).filter(|s| !s.is_empty())
}

/// Trims a select-box value, dropping it when blank.
pub(crate) fn non_empty(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}

/// Case-insensitive substring match; `needle` must already be lower-case.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
