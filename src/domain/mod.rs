//! Records listed by the admin console screens.

use std::fmt::{Debug, Display};

pub mod booking;
pub mod bus;
pub mod payment;
pub mod route;
pub mod staff;
pub mod types;
pub mod user;

/// An entity the list controller can hold.
///
/// The controller never looks inside a record beyond its identifier; filters
/// and views are the only code that reads entity fields.
pub trait Record {
    type Id: Clone + Debug + Display + PartialEq;

    /// Plural noun used in user-facing messages, e.g. "bookings".
    const NOUN: &'static str;

    fn id(&self) -> Self::Id;
}

