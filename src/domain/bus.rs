use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::Record;
use crate::domain::types::{BusId, null_as_default};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bus {
    pub id: BusId,
    pub bus_number: String,
    pub registration_number: String,
    pub capacity: u32,
    #[serde(default = "default_bus_type", deserialize_with = "bus_type_or_default")]
    pub bus_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

fn default_bus_type() -> String {
    "Standard".to_string()
}

fn bus_type_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_bus_type))
}

impl Record for Bus {
    type Id = BusId;

    const NOUN: &'static str = "buses";

    fn id(&self) -> BusId {
        self.id
    }
}
