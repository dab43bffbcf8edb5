//! Turns the wizard draft into an `Employee` body and sends it.

use super::draft::EmployeeDraft;
use crate::shared::api::{ApiError, ApiRequest, ApiTransport};
use crate::shared::date_utils::{api_to_display, display_to_api};
use crate::shared::notice::Notice;
use contracts::domain::a006_employee::{Employee, EMPLOYEES_PATH};

/// Text substituted for missing required strings on create
pub const PLACEHOLDER_TEXT: &str = "string";
/// Date substituted for a missing or invalid date on create
pub const FALLBACK_DATE: &str = "2024-12-05";

pub const CREATE_FAILED: &str = "Failed to register employee. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update employee";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update { emp_id: i64 },
}

/// Create body plus the names of the fields that got placeholder values
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedEmployee {
    pub employee: Employee,
    pub placeholders: Vec<&'static str>,
}

fn parse_number(value: &str) -> Option<i64> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Field renames and conversions shared by create and update
fn map_draft(draft: &EmployeeDraft) -> Employee {
    Employee {
        emp_id: draft.emp_id,
        full_name: draft.full_name.trim().to_string(),
        nick_name: draft.nick_name.trim().to_string(),
        father_name: draft.father_name.trim().to_string(),
        mother_name: draft.mother_name.trim().to_string(),
        marital_status: draft.marital_status.clone(),
        qualification: draft.qualification.clone(),
        gender: draft.gender.clone(),
        dob: display_to_api(&draft.dob),
        email: draft.email.trim().to_string(),
        mobile1: draft.mobile1.trim().to_string(),
        mobile2: draft.mobile2.trim().to_string(),
        p_address: draft.p_address.trim().to_string(),
        p_pin_code: parse_number(&draft.p_pin_code).unwrap_or(0),
        p_district: draft.p_district.trim().to_string(),
        c_address: draft.c_address.trim().to_string(),
        c_pin_code: parse_number(&draft.c_pin_code).unwrap_or(0),
        c_district: draft.c_district.trim().to_string(),
        aadhaar_number: parse_number(&draft.aadhaar_number).unwrap_or(0),
        pan_number: draft.pan_number.trim().to_uppercase(),
        role_id: draft.role_id.unwrap_or(0),
        department_id: draft.department_id,
        designation: draft.designation_id,
        working_location: draft.working_location_id,
        doj: display_to_api(&draft.doj),
        is_active: draft.is_active.unwrap_or(true),
    }
}

/// Create body: missing required values get placeholders, each one recorded
pub fn build_create_payload(draft: &EmployeeDraft) -> PreparedEmployee {
    let mut employee = map_draft(draft);
    employee.emp_id = None;
    let mut placeholders = Vec::new();

    let texts: [(&'static str, &mut String); 12] = [
        ("fullName", &mut employee.full_name),
        ("nickName", &mut employee.nick_name),
        ("fatherName", &mut employee.father_name),
        ("motherName", &mut employee.mother_name),
        ("maritalStatus", &mut employee.marital_status),
        ("qualification", &mut employee.qualification),
        ("gender", &mut employee.gender),
        ("email", &mut employee.email),
        ("pAddress", &mut employee.p_address),
        ("pDistrict", &mut employee.p_district),
        ("cAddress", &mut employee.c_address),
        ("cDistrict", &mut employee.c_district),
    ];
    for (name, value) in texts {
        if value.is_empty() {
            *value = PLACEHOLDER_TEXT.to_string();
            placeholders.push(name);
        }
    }

    for (name, value) in [("dob", &mut employee.dob), ("doj", &mut employee.doj)] {
        if value.is_none() {
            *value = Some(FALLBACK_DATE.to_string());
            placeholders.push(name);
        }
    }

    let numbers = [
        ("pPinCode", &draft.p_pin_code),
        ("cPinCode", &draft.c_pin_code),
        ("aadhaarNumber", &draft.aadhaar_number),
    ];
    for (name, raw) in numbers {
        if parse_number(raw).is_none() {
            placeholders.push(name);
        }
    }
    if employee.pan_number.is_empty() {
        employee.pan_number = "0".to_string();
        placeholders.push("panNumber");
    }
    if draft.role_id.is_none() {
        placeholders.push("roleID");
    }
    if draft.is_active.is_none() {
        placeholders.push("isActive");
    }

    PreparedEmployee {
        employee,
        placeholders,
    }
}

/// Update body: the draft as entered, no placeholders
pub fn build_update_payload(draft: &EmployeeDraft, emp_id: i64) -> Employee {
    Employee {
        emp_id: Some(emp_id),
        ..map_draft(draft)
    }
}

fn number_text(value: i64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Draft for the update wizard from a fetched employee.
/// Master display names are filled in later from the loaded lists.
pub fn draft_from_employee(employee: &Employee) -> EmployeeDraft {
    EmployeeDraft {
        emp_id: employee.emp_id,
        full_name: employee.full_name.clone(),
        nick_name: employee.nick_name.clone(),
        father_name: employee.father_name.clone(),
        mother_name: employee.mother_name.clone(),
        dob: employee.dob.as_deref().map(api_to_display).unwrap_or_default(),
        gender: employee.gender.clone(),
        marital_status: employee.marital_status.clone(),
        qualification: employee.qualification.clone(),
        email: employee.email.clone(),
        mobile1: employee.mobile1.clone(),
        mobile2: employee.mobile2.clone(),
        p_address: employee.p_address.clone(),
        p_pin_code: number_text(employee.p_pin_code),
        p_district: employee.p_district.clone(),
        c_address: employee.c_address.clone(),
        c_pin_code: number_text(employee.c_pin_code),
        c_district: employee.c_district.clone(),
        aadhaar_number: number_text(employee.aadhaar_number),
        pan_number: employee.pan_number.clone(),
        working_location_id: employee.working_location,
        department_id: employee.department_id,
        designation_id: employee.designation,
        role_id: (employee.role_id != 0).then_some(employee.role_id),
        doj: employee.doj.as_deref().map(api_to_display).unwrap_or_default(),
        is_active: Some(employee.is_active),
        ..Default::default()
    }
}

fn failure_notice(error: &ApiError, fallback: &str) -> Notice {
    Notice::error(error.user_message(fallback))
}

/// Send the draft. `Ok` carries the success notice, `Err` the error notice.
///
/// Create counts as success only on HTTP 200/201.
pub async fn submit_employee<A: ApiTransport + ?Sized>(
    api: &A,
    mode: SubmitMode,
    draft: &EmployeeDraft,
) -> Result<Notice, Notice> {
    let (request, fallback) = match mode {
        SubmitMode::Create => {
            let prepared = build_create_payload(draft);
            if !prepared.placeholders.is_empty() {
                log::warn!(
                    "Registering employee with placeholder values for: {}",
                    prepared.placeholders.join(", ")
                );
            }
            (ApiRequest::post(EMPLOYEES_PATH, &prepared.employee), CREATE_FAILED)
        }
        SubmitMode::Update { emp_id } => (
            ApiRequest::put(Employee::item_path(emp_id), &build_update_payload(draft, emp_id)),
            UPDATE_FAILED,
        ),
    };

    let request = request.map_err(|e| failure_notice(&e, fallback))?;
    log::info!("Submitting employee: {:?} {}", request.method, request.path);

    let response = api
        .send(request)
        .await
        .map_err(|e| failure_notice(&e, fallback))?;

    let accepted = match mode {
        SubmitMode::Create => matches!(response.status, 200 | 201),
        SubmitMode::Update { .. } => response.is_success(),
    };
    if accepted {
        return Ok(Notice::success(match mode {
            SubmitMode::Create => "Employee registered successfully!",
            SubmitMode::Update { .. } => "Employee updated successfully",
        }));
    }

    let error = ApiError::Status {
        status: response.status,
        body: response.body,
    };
    log::error!("Employee submission rejected: {}", error);
    Err(failure_notice(&error, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::FakeTransport;
    use crate::shared::api::Method;
    use serde_json::json;

    fn filled() -> EmployeeDraft {
        EmployeeDraft {
            full_name: "Asha Rao".into(),
            nick_name: "Asha".into(),
            father_name: "Mohan Rao".into(),
            mother_name: "Leela Rao".into(),
            dob: "5/7/1990".into(),
            gender: "Female".into(),
            marital_status: "Single".into(),
            qualification: "B.Tech".into(),
            email: "asha@example.com".into(),
            mobile1: "9876543210".into(),
            p_address: "12 MG Road".into(),
            p_pin_code: "560001".into(),
            p_district: "Bengaluru".into(),
            c_address: "12 MG Road".into(),
            c_pin_code: "560001".into(),
            c_district: "Bengaluru".into(),
            aadhaar_number: "1234 5678 9012".into(),
            pan_number: "abcde1234f".into(),
            department: "Engineering".into(),
            department_id: Some(9),
            designation_id: Some(4),
            working_location_id: Some(2),
            role_id: Some(1),
            doj: "01/04/2024".into(),
            is_active: Some(true),
            bank_name: "HDFC".into(),
            bank_id: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_payload_renames_and_converts() {
        let prepared = build_create_payload(&filled());
        assert!(prepared.placeholders.is_empty(), "{:?}", prepared.placeholders);
        let body = serde_json::to_value(&prepared.employee).unwrap();
        assert_eq!(body["dob"], json!("1990-07-05"));
        assert_eq!(body["doj"], json!("2024-04-01"));
        assert_eq!(body["departmentID"], json!(9));
        assert_eq!(body["designation"], json!(4));
        assert_eq!(body["workingLocation"], json!(2));
        assert_eq!(body["roleID"], json!(1));
        assert_eq!(body["pPinCode"], json!(560001));
        assert_eq!(body["aadhaarNumber"], json!(123456789012_i64));
        assert_eq!(body["panNumber"], json!("ABCDE1234F"));
        assert_eq!(body["mobile1"], json!("9876543210"));
        assert_eq!(body["mobile2"], json!(""));
        assert!(body.get("empID").is_none());
        assert!(body.get("bankName").is_none());
    }

    #[test]
    fn test_create_payload_placeholders() {
        let prepared = build_create_payload(&EmployeeDraft::default());
        let e = &prepared.employee;
        assert_eq!(e.full_name, PLACEHOLDER_TEXT);
        assert_eq!(e.c_district, PLACEHOLDER_TEXT);
        assert_eq!(e.dob.as_deref(), Some(FALLBACK_DATE));
        assert_eq!(e.doj.as_deref(), Some(FALLBACK_DATE));
        assert_eq!(e.p_pin_code, 0);
        assert_eq!(e.role_id, 0);
        assert_eq!(e.pan_number, "0");
        assert!(e.is_active);
        for field in ["fullName", "dob", "pPinCode", "roleID", "isActive", "panNumber"] {
            assert!(prepared.placeholders.contains(&field), "missing {}", field);
        }
    }

    #[test]
    fn test_update_payload_has_no_placeholders() {
        let mut draft = filled();
        draft.nick_name.clear();
        draft.dob.clear();
        let employee = build_update_payload(&draft, 12);
        assert_eq!(employee.emp_id, Some(12));
        assert_eq!(employee.nick_name, "");
        assert_eq!(employee.dob, None);
    }

    #[test]
    fn test_draft_from_employee() {
        let employee = Employee {
            emp_id: Some(12),
            full_name: "Asha Rao".into(),
            dob: Some("1990-07-05T00:00:00".into()),
            p_pin_code: 560001,
            aadhaar_number: 0,
            role_id: 2,
            department_id: Some(9),
            designation: Some(4),
            working_location: Some(1),
            is_active: false,
            ..Default::default()
        };
        let draft = draft_from_employee(&employee);
        assert_eq!(draft.emp_id, Some(12));
        assert_eq!(draft.dob, "05/07/1990");
        assert_eq!(draft.p_pin_code, "560001");
        assert_eq!(draft.aadhaar_number, "");
        assert_eq!(draft.role_id, Some(2));
        assert_eq!(draft.designation_id, Some(4));
        assert_eq!(draft.working_location_id, Some(1));
        assert_eq!(draft.is_active, Some(false));
    }

    #[tokio::test]
    async fn test_create_success_on_201() {
        let api = FakeTransport::new().respond(Method::Post, "/Employees", 201, json!({"empID": 30}));
        let outcome = submit_employee(&api, SubmitMode::Create, &filled()).await;
        assert_eq!(outcome, Ok(Notice::success("Employee registered successfully!")));
        assert_eq!(api.requests_to(Method::Post, "/Employees").len(), 1);
    }

    #[tokio::test]
    async fn test_create_other_2xx_is_failure() {
        let api = FakeTransport::new().respond(Method::Post, "/Employees", 204, json!(null));
        let outcome = submit_employee(&api, SubmitMode::Create, &filled()).await;
        assert_eq!(outcome, Err(Notice::error(CREATE_FAILED)));
    }

    #[tokio::test]
    async fn test_create_validation_messages_are_joined() {
        let api = FakeTransport::new().respond(
            Method::Post,
            "/Employees",
            400,
            json!({"errors": {"Email": ["Invalid email."], "Mobile1": ["Invalid mobile."]}}),
        );
        let outcome = submit_employee(&api, SubmitMode::Create, &filled()).await;
        assert_eq!(outcome, Err(Notice::error("Invalid email., Invalid mobile.")));
    }

    #[tokio::test]
    async fn test_update_puts_to_item_path() {
        let api = FakeTransport::new().respond(Method::Put, "/Employees/12", 204, json!(null));
        let outcome = submit_employee(&api, SubmitMode::Update { emp_id: 12 }, &filled()).await;
        assert_eq!(outcome, Ok(Notice::success("Employee updated successfully")));
        let puts = api.requests_to(Method::Put, "/Employees/12");
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].body.as_ref().unwrap()["empID"], json!(12));
    }

    #[tokio::test]
    async fn test_update_network_failure() {
        let api = FakeTransport::new().fail(
            Method::Put,
            "/Employees/12",
            ApiError::Network("offline".into()),
        );
        let outcome = submit_employee(&api, SubmitMode::Update { emp_id: 12 }, &filled()).await;
        assert_eq!(outcome, Err(Notice::error(UPDATE_FAILED)));
    }
}
