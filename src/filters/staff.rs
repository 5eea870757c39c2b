use serde::Deserialize;
use validator::Validate;

use crate::domain::staff::{Shift, StaffKind, StaffMember, StaffStatus};
use crate::filters::{FilterError, RecordFilter, non_empty};

/// Which staff list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaffTab {
    #[default]
    Drivers,
    Conductors,
    All,
}

impl StaffTab {
    fn admits(self, kind: StaffKind) -> bool {
        match self {
            StaffTab::Drivers => kind == StaffKind::Driver,
            StaffTab::Conductors => kind == StaffKind::Conductor,
            StaffTab::All => true,
        }
    }
}

impl TryFrom<&str> for StaffTab {
    type Error = FilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "" | "drivers" => Ok(StaffTab::Drivers),
            "conductors" => Ok(StaffTab::Conductors),
            "all" => Ok(StaffTab::All),
            other => Err(FilterError::InvalidTab(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the staff tabs and filter buttons.
pub struct StaffFilterForm {
    #[serde(default)]
    pub tab: String,
    /// "all" or a status label such as "On Leave".
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub shift: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffFilter {
    pub tab: StaffTab,
    pub status: Option<StaffStatus>,
    pub shift: Option<Shift>,
}

impl StaffFilter {
    /// Switching tabs starts from a clean filter.
    pub fn for_tab(tab: StaffTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: Option<StaffStatus>) -> Self {
        self.status = status;
        self
    }

    /// Selects `shift`, or clears the shift filter when it is already selected.
    pub fn toggle_shift(mut self, shift: Shift) -> Self {
        self.shift = if self.shift.as_ref() == Some(&shift) {
            None
        } else {
            Some(shift)
        };
        self
    }
}

impl TryFrom<StaffFilterForm> for StaffFilter {
    type Error = FilterError;

    fn try_from(form: StaffFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let status = non_empty(&form.status)
            .filter(|s| !s.eq_ignore_ascii_case("all"))
            .map(StaffStatus::from);

        let filter = Self::for_tab(StaffTab::try_from(form.tab.as_str())?).with_status(status);
        Ok(match non_empty(&form.shift) {
            Some(shift) => filter.toggle_shift(Shift::from(shift)),
            None => filter,
        })
    }
}

impl RecordFilter<StaffMember> for StaffFilter {
    fn matches(&self, member: &StaffMember) -> bool {
        let tab = self.tab.admits(member.kind);
        let status = self
            .status
            .as_ref()
            .is_none_or(|s| member.status.as_ref() == Some(s));
        let shift = self
            .shift
            .as_ref()
            .is_none_or(|s| member.shift.as_ref() == Some(s));

        tab && status && shift
    }
}
