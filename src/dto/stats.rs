//! Summary counters shown above each list.

use serde::{Deserialize, Serialize};

use crate::format;

/// One labelled counter card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Stats payloads know how to present themselves as cards.
pub trait StatCards {
    fn cards(&self) -> Vec<StatCard>;
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BookingStats {
    pub total: u64,
    pub confirmed: u64,
    pub pending: u64,
    pub cancelled: u64,
}

impl StatCards for BookingStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Bookings", self.total),
            StatCard::new("Confirmed", self.confirmed),
            StatCard::new("Pending", self.pending),
            StatCard::new("Cancelled", self.cancelled),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BusStats {
    pub total: u64,
    pub active: u64,
    pub ac_buses: u64,
    pub avg_capacity: u64,
}

impl StatCards for BusStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Buses", self.total),
            StatCard::new("Active Buses", self.active),
            StatCard::new("AC Buses", self.ac_buses),
            StatCard::new("Avg Capacity", self.avg_capacity),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RouteStats {
    pub total: u64,
    pub active: u64,
    pub total_distance: u64,
    pub avg_fare: u64,
}

impl StatCards for RouteStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Routes", self.total),
            StatCard::new("Active Routes", self.active),
            StatCard::new("Total Distance", format!("{} km", self.total_distance)),
            StatCard::new("Avg Fare", format!("₹{}", self.avg_fare)),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UserStats {
    pub total: u64,
    pub active: u64,
    pub admins: u64,
    pub passengers: u64,
}

impl StatCards for UserStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Users", self.total),
            StatCard::new("Active Users", self.active),
            StatCard::new("Admins", self.admins),
            StatCard::new("Passengers", self.passengers),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PaymentStats {
    pub total: u64,
    pub completed: u64,
    pub total_revenue: f64,
    pub today_revenue: f64,
}

impl StatCards for PaymentStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Payments", self.total),
            StatCard::new("Completed", self.completed),
            StatCard::new("Total Revenue", format::money(self.total_revenue)),
            StatCard::new("Today's Revenue", format::money(self.today_revenue)),
        ]
    }
}

/// Missing counters count as zero.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StaffStats {
    pub total_drivers: u64,
    pub total_conductors: u64,
    pub active_drivers: u64,
    pub active_conductors: u64,
    pub on_leave_drivers: u64,
    pub on_leave_conductors: u64,
    pub total_staff: u64,
    pub active_staff: u64,
}

impl StatCards for StaffStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Drivers", self.total_drivers),
            StatCard::new("Total Conductors", self.total_conductors),
            StatCard::new("Active Staff", self.active_staff),
            StatCard::new(
                "On Leave",
                self.on_leave_drivers + self.on_leave_conductors,
            ),
        ]
    }
}
