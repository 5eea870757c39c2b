//! Drivers and conductors shown on the staff screen.
//!
//! The API returns the two kinds in separate arrays with slightly different
//! fields; both are folded into [`StaffMember`] so one controller can list
//! them side by side.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::StaffId;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StaffKind {
    Driver,
    Conductor,
}

impl Display for StaffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffKind::Driver => write!(f, "driver"),
            StaffKind::Conductor => write!(f, "conductor"),
        }
    }
}

/// Drivers and conductors are numbered independently, so identity needs both parts.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct StaffKey {
    pub kind: StaffKind,
    pub id: StaffId,
}

impl Display for StaffKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum StaffStatus {
    Active,
    OnLeave,
    Inactive,
    Other(String),
}

impl StaffStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::OnLeave => "On Leave",
            StaffStatus::Inactive => "Inactive",
            StaffStatus::Other(s) => s,
        }
    }
}

impl Display for StaffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for StaffStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" => StaffStatus::Active,
            "on leave" => StaffStatus::OnLeave,
            "inactive" => StaffStatus::Inactive,
            _ => StaffStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for StaffStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<StaffStatus> for String {
    fn from(status: StaffStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Shift {
    Morning,
    Evening,
    Night,
    Other(String),
}

impl Shift {
    pub fn as_str(&self) -> &str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
            Shift::Other(s) => s,
        }
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Shift {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "morning" => Shift::Morning,
            "evening" => Shift::Evening,
            "night" => Shift::Night,
            _ => Shift::Other(s.to_string()),
        }
    }
}

impl From<String> for Shift {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<Shift> for String {
    fn from(shift: Shift) -> Self {
        shift.as_str().to_string()
    }
}

/// Current bus and route assignment, each part optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub assigned_bus_id: Option<i32>,
    pub assigned_route_id: Option<i32>,
    pub assigned_bus_number: Option<String>,
    pub assigned_route_number: Option<String>,
    pub assigned_route_name: Option<String>,
}

impl Assignment {
    /// Route label such as "42A - Central Station Loop".
    pub fn route_label(&self) -> Option<String> {
        let number = self.assigned_route_number.as_deref()?;
        Some(match self.assigned_route_name.as_deref() {
            Some(name) if !name.is_empty() => format!("{number} - {name}"),
            _ => number.to_string(),
        })
    }
}

/// Driver row as returned in the `drivers` array.
#[derive(Clone, Debug, Deserialize)]
pub struct Driver {
    pub id: StaffId,
    pub driver_id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub license_number: Option<String>,
    pub experience_years: Option<u32>,
    pub shift: Option<Shift>,
    pub status: Option<StaffStatus>,
    #[serde(flatten)]
    pub assignment: Assignment,
}

/// Conductor row as returned in the `conductors` array.
#[derive(Clone, Debug, Deserialize)]
pub struct Conductor {
    pub id: StaffId,
    pub conductor_id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub employee_id: Option<String>,
    pub experience_years: Option<u32>,
    pub shift: Option<Shift>,
    pub role: Option<String>,
    pub status: Option<StaffStatus>,
    #[serde(flatten)]
    pub assignment: Assignment,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StaffMember {
    pub kind: StaffKind,
    pub id: StaffId,
    /// Human-facing badge number (`driver_id` or `conductor_id`).
    pub badge_id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub experience_years: Option<u32>,
    pub shift: Option<Shift>,
    pub status: Option<StaffStatus>,
    /// Driving license for drivers, employee number for conductors.
    pub credential: Option<String>,
    pub assignment: Assignment,
}

impl From<Driver> for StaffMember {
    fn from(driver: Driver) -> Self {
        Self {
            kind: StaffKind::Driver,
            id: driver.id,
            badge_id: driver.driver_id,
            full_name: driver.full_name,
            phone: driver.phone,
            email: driver.email,
            experience_years: driver.experience_years,
            shift: driver.shift,
            status: driver.status,
            credential: driver.license_number,
            assignment: driver.assignment,
        }
    }
}

impl From<Conductor> for StaffMember {
    fn from(conductor: Conductor) -> Self {
        Self {
            kind: StaffKind::Conductor,
            id: conductor.id,
            badge_id: conductor.conductor_id,
            full_name: conductor.full_name,
            phone: conductor.phone,
            email: conductor.email,
            experience_years: conductor.experience_years,
            shift: conductor.shift,
            status: conductor.status,
            credential: conductor.employee_id,
            assignment: conductor.assignment,
        }
    }
}

impl Record for StaffMember {
    type Id = StaffKey;

    const NOUN: &'static str = "staff";

    fn id(&self) -> StaffKey {
        StaffKey {
            kind: self.kind,
            id: self.id,
        }
    }
}
