use crate::domain::common::MasterRecord;
use serde::{Deserialize, Serialize};

/// Working location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "locationID")]
    pub location_id: i64,

    #[serde(rename = "locationName")]
    pub location_name: String,
}

impl MasterRecord for Location {
    fn id(&self) -> i64 {
        self.location_id
    }

    fn name(&self) -> &str {
        &self.location_name
    }

    fn new_named(name: &str) -> Self {
        Self {
            location_id: 0,
            location_name: name.to_string(),
        }
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            location_id: self.location_id,
            location_name: name.to_string(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "location"
    }

    fn resource() -> &'static str {
        "Locations"
    }

    fn element_name() -> &'static str {
        "Location"
    }

    fn list_name() -> &'static str {
        "Locations"
    }
}
