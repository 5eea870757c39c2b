//! Label/value pairs for the record details panel.

use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::bus::Bus;
use crate::domain::payment::Payment;
use crate::domain::route::Route;
use crate::domain::staff::{StaffKind, StaffMember};
use crate::domain::user::User;
use crate::format::{self, NOT_AVAILABLE};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

fn field(label: &'static str, value: impl Into<String>) -> DetailField {
    DetailField {
        label,
        value: value.into(),
    }
}

/// Records that can be opened in the details panel.
pub trait RecordDetails {
    /// Panel heading, e.g. "Booking Details".
    fn title(&self) -> &'static str;
    fn details(&self) -> Vec<DetailField>;
}

impl RecordDetails for Booking {
    fn title(&self) -> &'static str {
        "Booking Details"
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            field("Booking Reference", &self.booking_reference),
            field("Passenger Name", &self.passenger_name),
            field("Passenger Category", &self.passenger_category),
            field(
                "Route Number",
                format::or_default(Some(self.route_number.as_str()), NOT_AVAILABLE),
            ),
            field("Journey Date", format::date_time(&self.journey_date)),
            field("Fare Amount", format::money(self.fare_amount)),
            field("Status", self.status.as_str().to_uppercase()),
            field("Booking ID", format!("#{}", self.id)),
        ]
    }
}

impl RecordDetails for Bus {
    fn title(&self) -> &'static str {
        "Bus Details"
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            field("Bus Number", &self.bus_number),
            field("Registration Number", &self.registration_number),
            field("Bus Type", &self.bus_type),
            field("Capacity", format!("{} seats", self.capacity)),
            field("Status", format::active_label(self.is_active)),
            field("Bus ID", format!("#{}", self.id)),
        ]
    }
}

impl RecordDetails for Route {
    fn title(&self) -> &'static str {
        "Route Details"
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            field("Route Number", &self.route_number),
            field("Route Name", &self.route_name),
            field("Start Location", &self.start_location),
            field("End Location", &self.end_location),
            field("Distance", format!("{} km", self.distance_km)),
            field("Fare", format::money(self.fare)),
            field("Status", format::active_label(self.is_active)),
            field("Route ID", format!("#{}", self.id)),
        ]
    }
}

impl RecordDetails for Payment {
    fn title(&self) -> &'static str {
        "Payment Details"
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            field(
                "Transaction ID",
                format::or_default(self.transaction_id.as_deref(), NOT_AVAILABLE),
            ),
            field("Booking Reference", &self.booking_reference),
            field("Amount", format::money(self.amount)),
            field("Payment Method", self.payment_method.to_uppercase()),
            field(
                "Status",
                format::or_default(Some(self.status.as_str()), NOT_AVAILABLE).to_uppercase(),
            ),
            field(
                "Payment Date",
                self.payment_date
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format::date_time),
            ),
            field("Payment ID", format!("#{}", self.id)),
        ]
    }
}

impl RecordDetails for User {
    fn title(&self) -> &'static str {
        "User Details"
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            field("Full Name", &self.full_name),
            field("Email", &self.email),
            field("Phone", format::or_default(self.phone.as_deref(), "Not provided")),
            field("Role", self.role.to_uppercase()),
            field("Status", format::active_label(self.is_active)),
            field(
                "Joined Date",
                self.created_at
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), format::date),
            ),
            field("User ID", format!("#{}", self.id)),
        ]
    }
}

impl RecordDetails for StaffMember {
    fn title(&self) -> &'static str {
        match self.kind {
            StaffKind::Driver => "Driver Details",
            StaffKind::Conductor => "Conductor Details",
        }
    }

    fn details(&self) -> Vec<DetailField> {
        let not_assigned = "Not assigned";
        let mut fields = vec![
            field("Full Name", &self.full_name),
            field("Staff ID", &self.badge_id),
            field("Phone", format::or_default(self.phone.as_deref(), "Not provided")),
            field("Email", format::or_default(self.email.as_deref(), "Not provided")),
            field(
                "Experience",
                format!("{} years", self.experience_years.unwrap_or(0)),
            ),
            field(
                "Shift",
                self.shift
                    .as_ref()
                    .map_or_else(|| not_assigned.to_string(), |s| s.to_string()),
            ),
            field(
                "Status",
                self.status
                    .as_ref()
                    .map_or_else(|| "Inactive".to_string(), |s| s.to_string()),
            ),
            field(
                "Assigned Bus",
                format::or_default(
                    self.assignment.assigned_bus_number.as_deref(),
                    not_assigned,
                ),
            ),
            field(
                "Assigned Route",
                self.assignment
                    .route_label()
                    .unwrap_or_else(|| not_assigned.to_string()),
            ),
        ];

        match self.kind {
            StaffKind::Driver => fields.push(field(
                "License Number",
                format::or_default(self.credential.as_deref(), NOT_AVAILABLE),
            )),
            StaffKind::Conductor => fields.push(field(
                "Employee ID",
                format::or_default(self.credential.as_deref(), NOT_AVAILABLE),
            )),
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{BusId, PaymentId};

    #[test]
    fn bus_details_follow_panel_layout() {
        let bus = Bus {
            id: BusId::new(9).expect("valid id"),
            bus_number: "B-09".to_string(),
            registration_number: "DL1PC0009".to_string(),
            capacity: 52,
            bus_type: "AC".to_string(),
            is_active: false,
        };

        let details = bus.details();

        assert_eq!(bus.title(), "Bus Details");
        assert_eq!(details[3], field("Capacity", "52 seats"));
        assert_eq!(details[4], field("Status", "Inactive"));
        assert_eq!(details[5], field("Bus ID", "#9"));
    }

    #[test]
    fn payment_details_fill_missing_values() {
        let payment = Payment {
            id: PaymentId::new(5).expect("valid id"),
            transaction_id: None,
            amount: 99.9,
            payment_method: "upi".to_string(),
            status: "completed".into(),
            payment_date: None,
            booking_reference: "BK005".to_string(),
        };

        let details = payment.details();

        assert_eq!(details[0].value, "N/A");
        assert_eq!(details[2].value, "₹99.90");
        assert_eq!(details[3].value, "UPI");
        assert_eq!(details[5].value, "N/A");
    }
}
