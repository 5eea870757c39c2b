//! Table cells for each record type.

use serde::Serialize;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::bus::Bus;
use crate::domain::payment::{Payment, PaymentStatus};
use crate::domain::route::Route;
use crate::domain::staff::{Shift, StaffMember, StaffStatus};
use crate::domain::user::User;
use crate::format::{self, NOT_AVAILABLE};

/// One table cell: plain text, optionally drawn as a coloured badge.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub badge: Option<&'static str>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
        }
    }

    pub fn badge(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            badge: Some(class),
        }
    }
}

/// Records that render as a table row.
pub trait TableRow {
    /// Column headings, one per cell.
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

pub fn booking_status_class(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "success",
        BookingStatus::Pending => "warning",
        BookingStatus::Cancelled => "danger",
        BookingStatus::Completed => "info",
        BookingStatus::Other(_) => "secondary",
    }
}

pub fn payment_status_class(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Completed => "success",
        PaymentStatus::Pending => "warning",
        status if status.is_blank() => "secondary",
        _ => "danger",
    }
}

pub fn activity_class(is_active: bool) -> &'static str {
    if is_active { "success" } else { "danger" }
}

/// Missing or unknown staff statuses are drawn as inactive.
pub fn staff_status_class(status: Option<&StaffStatus>) -> &'static str {
    match status {
        Some(StaffStatus::Active) => "status-active",
        Some(StaffStatus::OnLeave) => "status-leave",
        _ => "status-inactive",
    }
}

pub fn shift_class(shift: Option<&Shift>) -> &'static str {
    match shift {
        Some(Shift::Evening) => "shift-evening",
        Some(Shift::Night) => "shift-night",
        _ => "shift-morning",
    }
}

impl TableRow for Booking {
    fn headers() -> &'static [&'static str] {
        &[
            "Reference",
            "Passenger",
            "Route",
            "Journey Date",
            "Fare",
            "Category",
            "Status",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.booking_reference),
            Cell::text(&self.passenger_name),
            Cell::text(format::or_default(Some(self.route_number.as_str()), NOT_AVAILABLE)),
            Cell::text(format::date(&self.journey_date)),
            Cell::text(format::money(self.fare_amount)),
            Cell::badge(&self.passenger_category, "secondary"),
            Cell::badge(self.status.as_str(), booking_status_class(&self.status)),
        ]
    }
}

impl TableRow for Bus {
    fn headers() -> &'static [&'static str] {
        &["Bus Number", "Registration", "Type", "Capacity", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.bus_number),
            Cell::text(&self.registration_number),
            Cell::badge(&self.bus_type, "info"),
            Cell::text(format!("{} seats", self.capacity)),
            Cell::badge(
                format::active_label(self.is_active),
                activity_class(self.is_active),
            ),
        ]
    }
}

impl TableRow for Route {
    fn headers() -> &'static [&'static str] {
        &["Route", "Name", "From", "To", "Distance", "Fare", "Status"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.route_number),
            Cell::text(&self.route_name),
            Cell::text(&self.start_location),
            Cell::text(&self.end_location),
            Cell::text(format!("{} km", self.distance_km)),
            Cell::text(format::money(self.fare)),
            Cell::badge(
                format::active_label(self.is_active),
                activity_class(self.is_active),
            ),
        ]
    }
}

impl TableRow for Payment {
    fn headers() -> &'static [&'static str] {
        &[
            "Transaction",
            "Booking",
            "Amount",
            "Method",
            "Status",
            "Date",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(format::or_default(
                self.transaction_id.as_deref(),
                NOT_AVAILABLE,
            )),
            Cell::text(&self.booking_reference),
            Cell::text(format::money(self.amount)),
            Cell::badge(&self.payment_method, "info"),
            Cell::badge(
                format::or_default(Some(self.status.as_str()), NOT_AVAILABLE),
                payment_status_class(&self.status),
            ),
            Cell::text(
                self.payment_date
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format::date),
            ),
        ]
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Phone", "Role", "Status", "Joined"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.full_name),
            Cell::text(&self.email),
            Cell::text(format::or_default(self.phone.as_deref(), NOT_AVAILABLE)),
            Cell::badge(&self.role, "primary"),
            Cell::badge(
                format::active_label(self.is_active),
                activity_class(self.is_active),
            ),
            Cell::text(
                self.created_at
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format::date),
            ),
        ]
    }
}

impl TableRow for StaffMember {
    fn headers() -> &'static [&'static str] {
        &[
            "Name",
            "Staff ID",
            "Phone",
            "Experience",
            "Shift",
            "Status",
            "Bus",
            "Route",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        let not_assigned = "Not Assigned";
        vec![
            Cell::text(&self.full_name),
            Cell::text(&self.badge_id),
            Cell::text(format::or_default(self.phone.as_deref(), NOT_AVAILABLE)),
            Cell::text(format!("{} years", self.experience_years.unwrap_or(0))),
            Cell::badge(
                self.shift
                    .as_ref()
                    .map_or(NOT_AVAILABLE, Shift::as_str),
                shift_class(self.shift.as_ref()),
            ),
            Cell::badge(
                self.status
                    .as_ref()
                    .map_or("Inactive", StaffStatus::as_str),
                staff_status_class(self.status.as_ref()),
            ),
            Cell::text(format::or_default(
                self.assignment.assigned_bus_number.as_deref(),
                not_assigned,
            )),
            Cell::text(
                self.assignment
                    .route_label()
                    .unwrap_or_else(|| not_assigned.to_string()),
            ),
        ]
    }
}
