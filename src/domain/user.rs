use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::Record;
use crate::domain::types::{UserId, null_as_default};

/// A registered console or passenger account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(default = "default_role", deserialize_with = "role_or_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
}

fn default_role() -> String {
    "passenger".to_string()
}

fn role_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_role))
}

impl Record for User {
    type Id = UserId;

    const NOUN: &'static str = "users";

    fn id(&self) -> UserId {
        self.id
    }
}
