use serde::Deserialize;
use validator::Validate;

use crate::domain::bus::Bus;
use crate::filters::{
    Activity, FilterError, MAX_SEARCH_LEN, RecordFilter, contains_ignore_case, non_empty,
    normalize_search, parse_activity,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the fleet filter bar.
pub struct BusFilterForm {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub bus_type: String,
    /// Matches the bus or registration number.
    #[serde(default)]
    #[validate(length(max = MAX_SEARCH_LEN))]
    pub search: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BusFilter {
    pub activity: Option<Activity>,
    pub bus_type: Option<String>,
    pub search: Option<String>,
}

impl TryFrom<BusFilterForm> for BusFilter {
    type Error = FilterError;

    fn try_from(form: BusFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            activity: parse_activity(&form.status)?,
            bus_type: non_empty(&form.bus_type).map(str::to_string),
            search: normalize_search(&form.search),
        })
    }
}

impl RecordFilter<Bus> for BusFilter {
    fn matches(&self, bus: &Bus) -> bool {
        let activity = self.activity.is_none_or(|a| a.matches(bus.is_active));
        let bus_type = self
            .bus_type
            .as_deref()
            .is_none_or(|t| t.eq_ignore_ascii_case(&bus.bus_type));
        let search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&bus.bus_number, term)
                || contains_ignore_case(&bus.registration_number, term)
        });

        activity && bus_type && search
    }
}
