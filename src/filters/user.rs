use serde::Deserialize;
use validator::Validate;

use crate::domain::user::User;
use crate::filters::{
    Activity, FilterError, MAX_SEARCH_LEN, RecordFilter, contains_ignore_case, normalize_search,
    parse_activity,
};

#[derive(Debug, Default, Deserialize, Validate)]
/// Raw inputs of the users filter bar.
pub struct UserFilterForm {
    /// Partial role name, e.g. "admin".
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    /// Matches the full name or email.
    #[serde(default)]
    #[validate(length(max = MAX_SEARCH_LEN))]
    pub search: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub role: Option<String>,
    pub activity: Option<Activity>,
    pub search: Option<String>,
}

impl TryFrom<UserFilterForm> for UserFilter {
    type Error = FilterError;

    fn try_from(form: UserFilterForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            role: normalize_search(&form.role),
            activity: parse_activity(&form.status)?,
            search: normalize_search(&form.search),
        })
    }
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        let role = self
            .role
            .as_deref()
            .is_none_or(|r| contains_ignore_case(&user.role, r));
        let activity = self.activity.is_none_or(|a| a.matches(user.is_active));
        let search = self.search.as_deref().is_none_or(|term| {
            contains_ignore_case(&user.full_name, term) || contains_ignore_case(&user.email, term)
        });

        role && activity && search
    }
}
