use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::BookingId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub booking_reference: String,
    pub passenger_name: String,
    pub passenger_category: String,
    pub journey_date: NaiveDateTime,
    pub fare_amount: f64,
    pub status: BookingStatus,
    pub route_number: String,
}

impl Record for Booking {
    type Id = BookingId;

    const NOUN: &'static str = "bookings";

    fn id(&self) -> BookingId {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Other(s) => s,
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "pending" => BookingStatus::Pending,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}
