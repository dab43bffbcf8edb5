use crate::domain::common::MasterRecord;
use serde::{Deserialize, Serialize};

/// Designation (job title)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    #[serde(rename = "designationID")]
    pub designation_id: i64,

    #[serde(rename = "designationName")]
    pub designation_name: String,
}

impl MasterRecord for Designation {
    fn id(&self) -> i64 {
        self.designation_id
    }

    fn name(&self) -> &str {
        &self.designation_name
    }

    fn new_named(name: &str) -> Self {
        Self {
            designation_id: 0,
            designation_name: name.to_string(),
        }
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            designation_id: self.designation_id,
            designation_name: name.to_string(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "designation"
    }

    fn resource() -> &'static str {
        "Designations"
    }

    fn element_name() -> &'static str {
        "Designation"
    }

    fn list_name() -> &'static str {
        "Designations"
    }
}
