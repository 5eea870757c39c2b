use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{PaymentId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub payment_method: String,
    /// A payment the backend never settled has no status and decodes blank.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PaymentStatus,
    pub payment_date: Option<NaiveDateTime>,
    pub booking_reference: String,
}

impl Record for Payment {
    type Id = PaymentId;

    const NOUN: &'static str = "payments";

    fn id(&self) -> PaymentId {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Other(String),
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Other(String::new())
    }
}

impl PaymentStatus {
    pub fn is_blank(&self) -> bool {
        matches!(self, PaymentStatus::Other(s) if s.trim().is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Other(s) => s,
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for PaymentStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "completed" => PaymentStatus::Completed,
            "pending" => PaymentStatus::Pending,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        status.as_str().to_string()
    }
}
