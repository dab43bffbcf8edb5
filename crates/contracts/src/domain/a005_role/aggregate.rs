use crate::domain::common::MasterRecord;
use serde::{Deserialize, Serialize};

/// Employee role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "roleId")]
    pub role_id: i64,

    #[serde(rename = "roleName")]
    pub role_name: String,
}

impl MasterRecord for Role {
    fn id(&self) -> i64 {
        self.role_id
    }

    fn name(&self) -> &str {
        &self.role_name
    }

    fn new_named(name: &str) -> Self {
        Self {
            role_id: 0,
            role_name: name.to_string(),
        }
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            role_id: self.role_id,
            role_name: name.to_string(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "role"
    }

    fn resource() -> &'static str {
        "Roles"
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let role: Role = serde_json::from_str(r#"{"roleId": 2, "roleName": "Admin"}"#).unwrap();
        assert_eq!(role.id(), 2);
        assert_eq!(role.name(), "Admin");
        assert_eq!(Role::full_name(), "a005_role");
    }
}
