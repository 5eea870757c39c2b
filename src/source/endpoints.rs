//! Console API endpoints per record type.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Record;
use crate::domain::booking::Booking;
use crate::domain::bus::Bus;
use crate::domain::payment::Payment;
use crate::domain::route::Route;
use crate::domain::staff::StaffMember;
use crate::domain::user::User;
use crate::dto::api::{ApiResponse, StaffRoster};
use crate::dto::stats::{
    BookingStats, BusStats, PaymentStats, RouteStats, StaffStats, StatCards, UserStats,
};
use crate::source::errors::SourceResult;

/// A record type with a list endpoint and a stats endpoint on the console API.
pub trait Listing: Record + Sized + Send + 'static {
    /// Path of the endpoint returning every record.
    const LIST_PATH: &'static str;
    /// Path of the endpoint returning the summary counters.
    const STATS_PATH: &'static str;

    type Stats: DeserializeOwned + StatCards + Send;

    /// Turns the list endpoint's JSON body into records.
    fn decode_list(body: Value) -> SourceResult<Vec<Self>>;

    fn decode_stats(body: Value) -> SourceResult<Self::Stats> {
        serde_json::from_value::<ApiResponse<Self::Stats>>(body)?.into_result()
    }
}

/// Decodes the standard `{"success": ..., "data": [...]}` list envelope.
fn decode_data<T: DeserializeOwned>(body: Value) -> SourceResult<Vec<T>> {
    serde_json::from_value::<ApiResponse<Vec<T>>>(body)?.into_result()
}

impl Listing for Booking {
    const LIST_PATH: &'static str = "/admin/api/bookings/all";
    const STATS_PATH: &'static str = "/admin/api/bookings/stats";

    type Stats = BookingStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        decode_data(body)
    }
}

impl Listing for Bus {
    const LIST_PATH: &'static str = "/admin/api/buses/all";
    const STATS_PATH: &'static str = "/admin/api/buses/stats";

    type Stats = BusStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        decode_data(body)
    }
}

impl Listing for Route {
    const LIST_PATH: &'static str = "/admin/api/routes/all";
    const STATS_PATH: &'static str = "/admin/api/routes/stats";

    type Stats = RouteStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        decode_data(body)
    }
}

impl Listing for Payment {
    const LIST_PATH: &'static str = "/admin/api/payments/all";
    const STATS_PATH: &'static str = "/admin/api/payments/stats";

    type Stats = PaymentStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        decode_data(body)
    }
}

impl Listing for User {
    const LIST_PATH: &'static str = "/admin/api/users/all";
    const STATS_PATH: &'static str = "/admin/api/users/stats";

    type Stats = UserStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        decode_data(body)
    }
}

impl Listing for StaffMember {
    const LIST_PATH: &'static str = "/admin/api/staff";
    const STATS_PATH: &'static str = "/admin/api/staff/stats";

    type Stats = StaffStats;

    fn decode_list(body: Value) -> SourceResult<Vec<Self>> {
        serde_json::from_value::<StaffRoster>(body)?.into_members()
    }
}
