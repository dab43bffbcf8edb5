use crate::shared::lenient::{number_or_null, string_or_null};
use serde::{Deserialize, Serialize};

/// Collection path of the employee resource
pub const EMPLOYEES_PATH: &str = "/Employees";

/// Employee record as exchanged with the backend.
///
/// Used both for `GET /Employees` responses and for create/update bodies.
/// Master-data links are ids only: `departmentID`, `roleID`, `designation`
/// (designation id) and `workingLocation` (location id).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(rename = "empID", skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<i64>,

    // Personal
    #[serde(rename = "fullName", deserialize_with = "string_or_null")]
    pub full_name: String,
    #[serde(rename = "nickName", deserialize_with = "string_or_null")]
    pub nick_name: String,
    #[serde(rename = "fatherName", deserialize_with = "string_or_null")]
    pub father_name: String,
    #[serde(rename = "motherName", deserialize_with = "string_or_null")]
    pub mother_name: String,
    #[serde(rename = "maritalStatus", deserialize_with = "string_or_null")]
    pub marital_status: String,
    #[serde(deserialize_with = "string_or_null")]
    pub qualification: String,
    #[serde(deserialize_with = "string_or_null")]
    pub gender: String,
    /// `yyyy-mm-dd`, possibly with a time suffix in responses
    pub dob: Option<String>,

    // Contact
    #[serde(deserialize_with = "string_or_null")]
    pub email: String,
    #[serde(deserialize_with = "string_or_null")]
    pub mobile1: String,
    #[serde(deserialize_with = "string_or_null")]
    pub mobile2: String,

    // Address
    #[serde(rename = "pAddress", deserialize_with = "string_or_null")]
    pub p_address: String,
    #[serde(rename = "pPinCode", deserialize_with = "number_or_null")]
    pub p_pin_code: i64,
    #[serde(rename = "pDistrict", deserialize_with = "string_or_null")]
    pub p_district: String,
    #[serde(rename = "cAddress", deserialize_with = "string_or_null")]
    pub c_address: String,
    #[serde(rename = "cPinCode", deserialize_with = "number_or_null")]
    pub c_pin_code: i64,
    #[serde(rename = "cDistrict", deserialize_with = "string_or_null")]
    pub c_district: String,

    // Identity
    #[serde(rename = "aadhaarNumber", deserialize_with = "number_or_null")]
    pub aadhaar_number: i64,
    #[serde(rename = "panNumber", deserialize_with = "string_or_null")]
    pub pan_number: String,

    // Professional
    #[serde(rename = "roleID", deserialize_with = "number_or_null")]
    pub role_id: i64,
    #[serde(rename = "departmentID", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<i64>,
    #[serde(rename = "workingLocation", skip_serializing_if = "Option::is_none")]
    pub working_location: Option<i64>,
    pub doj: Option<String>,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    pub fn item_path(id: i64) -> String {
        format!("{}/{}", EMPLOYEES_PATH, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_response_decodes() {
        let json = r#"{"empID": 12, "fullName": "Asha Rao", "departmentID": 3, "designation": 4, "workingLocation": 1, "roleID": 2}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.emp_id, Some(12));
        assert_eq!(emp.department_id, Some(3));
        assert_eq!(emp.designation, Some(4));
        assert_eq!(emp.working_location, Some(1));
        assert!(emp.is_active);
        assert_eq!(emp.mobile1, "");
    }

    #[test]
    fn test_nulls_and_numeric_phones_decode() {
        let json = r#"{"empID": 3, "nickName": null, "mobile1": 9876543210, "pPinCode": "560001", "aadhaarNumber": null}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.nick_name, "");
        assert_eq!(emp.mobile1, "9876543210");
        assert_eq!(emp.p_pin_code, 560001);
        assert_eq!(emp.aadhaar_number, 0);
    }

    #[test]
    fn test_create_body_omits_missing_links() {
        let emp = Employee {
            full_name: "Asha".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert!(json.get("empID").is_none());
        assert!(json.get("departmentID").is_none());
        assert_eq!(json["fullName"], "Asha");
        assert_eq!(Employee::item_path(5), "/Employees/5");
    }
}
