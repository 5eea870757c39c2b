use serde::Deserialize;
use validator::Validate;

use crate::domain::route::Route;
use crate::filters::{
    Activity, FilterError, MAX_SEARCH_LEN, RecordFilter, contains_ignore_case, normalize_search,
    parse_activity,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the routes filter bar.
pub struct RouteFilterForm {
    #[serde(default)]
    pub status: String,
    /// Matches the route number or name.
    #[serde(default)]
    #[validate(length(max = MAX_SEARCH_LEN))]
    pub search: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteFilter {
    pub activity: Option<Activity>,
    pub search: Option<String>,
}

impl TryFrom<RouteFilterForm> for RouteFilter {
    type Error = FilterError;

    fn try_from(form: RouteFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            activity: parse_activity(&form.status)?,
            search: normalize_search(&form.search),
        })
    }
}

impl RecordFilter<Route> for RouteFilter {
    fn matches(&self, route: &Route) -> bool {
        let activity = self.activity.is_none_or(|a| a.matches(route.is_active));
        let search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&route.route_number, term)
                || contains_ignore_case(&route.route_name, term)
        });

        activity && search
    }
}
