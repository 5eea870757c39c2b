use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::booking::{Booking, BookingStatus};
use crate::filters::{
    FilterError, MAX_SEARCH_LEN, RecordFilter, contains_ignore_case, non_empty, normalize_search,
    parse_date,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the bookings filter bar.
pub struct BookingFilterForm {
    /// Booking status select, blank for any.
    #[serde(default)]
    pub status: String,
    /// Journey date as `YYYY-MM-DD`, blank for any.
    #[serde(default)]
    pub date: String,
    /// Matches the booking reference or passenger name.
    #[serde(default)]
    #[validate(length(max = MAX_SEARCH_LEN))]
    pub search: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub journey_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl BookingFilter {
    pub fn status(mut self, status: impl Into<BookingStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn journey_date(mut self, date: NaiveDate) -> Self {
        self.journey_date = Some(date);
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = normalize_search(term);
        self
    }
}

impl TryFrom<BookingFilterForm> for BookingFilter {
    type Error = FilterError;

    fn try_from(form: BookingFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            status: non_empty(&form.status).map(BookingStatus::from),
            journey_date: parse_date(&form.date)?,
            search: normalize_search(&form.search),
        })
    }
}

impl RecordFilter<Booking> for BookingFilter {
    fn matches(&self, booking: &Booking) -> bool {
        let status = self
            .status
            .as_ref()
            .is_none_or(|s| s.as_str().eq_ignore_ascii_case(booking.status.as_str()));
        let date = self
            .journey_date
            .is_none_or(|d| booking.journey_date.date() == d);
        let search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&booking.booking_reference, term)
                || contains_ignore_case(&booking.passenger_name, term)
        });

        status && date && search
    }
}
