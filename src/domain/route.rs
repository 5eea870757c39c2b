use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{RouteId, null_as_default};

/// A bus route as listed on the routes screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub id: RouteId,
    pub route_number: String,
    pub route_name: String,
    pub start_location: String,
    pub end_location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance_km: f64,
    pub fare: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl Record for Route {
    type Id = RouteId;

    const NOUN: &'static str = "routes";

    fn id(&self) -> RouteId {
        self.id
    }
}
