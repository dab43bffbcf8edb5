use crate::domain::common::MasterRecord;
use serde::{Deserialize, Serialize};

/// Department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "deptID")]
    pub dept_id: i64,

    #[serde(rename = "deptName")]
    pub dept_name: String,
}

impl MasterRecord for Department {
    fn id(&self) -> i64 {
        self.dept_id
    }

    fn name(&self) -> &str {
        &self.dept_name
    }

    fn new_named(name: &str) -> Self {
        Self {
            dept_id: 0,
            dept_name: name.to_string(),
        }
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            dept_id: self.dept_id,
            dept_name: name.to_string(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "department"
    }

    fn resource() -> &'static str {
        "Departments"
    }

    fn element_name() -> &'static str {
        "Department"
    }

    fn list_name() -> &'static str {
        "Departments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body() {
        let json = serde_json::to_value(Department::new_named("Engineering")).unwrap();
        assert_eq!(json, serde_json::json!({"deptID": 0, "deptName": "Engineering"}));
    }

    #[test]
    fn test_renamed_keeps_id() {
        let dept = Department { dept_id: 9, dept_name: "Ops".into() };
        let renamed = dept.renamed("Operations");
        assert_eq!(renamed.dept_id, 9);
        assert_eq!(renamed.dept_name, "Operations");
        // no status on departments
        assert_eq!(renamed.clone().with_active(false), renamed);
        assert_eq!(renamed.is_active(), None);
    }
}
