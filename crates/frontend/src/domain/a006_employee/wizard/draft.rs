use serde::{Deserialize, Serialize};

/// In-progress employee form, accumulated across all wizard steps.
///
/// Serialized flat with camelCase keys; every field has a default so partial
/// or older drafts still load. Dates are kept in display form `dd/mm/yyyy`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// Set only when updating an existing employee
    #[serde(rename = "empID", skip_serializing_if = "Option::is_none")]
    pub emp_id: Option<i64>,

    // Personal
    pub full_name: String,
    pub nick_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub dob: String,
    pub gender: String,
    pub marital_status: String,
    pub qualification: String,

    // Contact
    pub email: String,
    pub mobile1: String,
    pub mobile2: String,

    // Address
    pub p_address: String,
    pub p_pin_code: String,
    pub p_district: String,
    pub is_same_as_permanent: bool,
    pub c_address: String,
    pub c_pin_code: String,
    pub c_district: String,

    // Identity
    pub aadhaar_number: String,
    pub pan_number: String,

    // Professional
    pub working_location: String,
    pub working_location_id: Option<i64>,
    pub department: String,
    pub department_id: Option<i64>,
    pub designation: String,
    pub designation_id: Option<i64>,
    pub role_name: String,
    pub role_id: Option<i64>,
    pub doj: String,
    pub is_active: Option<bool>,

    // Bank
    pub bank_id: Option<i64>,
    pub bank_name: String,
    pub branch_name: String,
    pub account_no: String,
    pub ifsc_code: String,
}

/// Identity sub-section, persisted under its own key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityDraft {
    pub aadhaar_number: String,
    pub pan_number: String,
}

/// Bank sub-section, persisted under its own key
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankDraft {
    pub bank_id: Option<i64>,
    pub bank_name: String,
    pub branch_name: String,
    pub account_no: String,
    pub ifsc_code: String,
}

/// Free-text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FullName,
    NickName,
    FatherName,
    MotherName,
    Gender,
    MaritalStatus,
    Qualification,
    Email,
    Mobile1,
    Mobile2,
    PermanentAddress,
    PermanentPinCode,
    PermanentDistrict,
    CurrentAddress,
    CurrentPinCode,
    CurrentDistrict,
    AadhaarNumber,
    PanNumber,
    BranchName,
    AccountNo,
    IfscCode,
}

impl TextField {
    pub fn label(self) -> &'static str {
        match self {
            TextField::FullName => "Full Name",
            TextField::NickName => "Nick Name",
            TextField::FatherName => "Father's Name",
            TextField::MotherName => "Mother's Name",
            TextField::Gender => "Gender",
            TextField::MaritalStatus => "Marital Status",
            TextField::Qualification => "Qualification",
            TextField::Email => "Email",
            TextField::Mobile1 => "Mobile Number",
            TextField::Mobile2 => "Alternate Mobile Number",
            TextField::PermanentAddress => "Permanent Address",
            TextField::PermanentPinCode => "Pin Code",
            TextField::PermanentDistrict => "District",
            TextField::CurrentAddress => "Current Address",
            TextField::CurrentPinCode => "Pin Code",
            TextField::CurrentDistrict => "District",
            TextField::AadhaarNumber => "Aadhaar Number",
            TextField::PanNumber => "PAN Number",
            TextField::BranchName => "Branch Name",
            TextField::AccountNo => "Account Number",
            TextField::IfscCode => "IFSC Code",
        }
    }

    /// Input length limit, where the form has one
    pub fn max_len(self) -> Option<usize> {
        match self {
            TextField::Mobile1 | TextField::Mobile2 => Some(10),
            TextField::PermanentPinCode | TextField::CurrentPinCode => Some(6),
            TextField::AadhaarNumber => Some(12),
            TextField::PanNumber => Some(10),
            TextField::IfscCode => Some(11),
            _ => None,
        }
    }

    pub fn is_current_address(self) -> bool {
        matches!(
            self,
            TextField::CurrentAddress | TextField::CurrentPinCode | TextField::CurrentDistrict
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Dob,
    Doj,
}

impl DateField {
    pub fn label(self) -> &'static str {
        match self {
            DateField::Dob => "Date of Birth",
            DateField::Doj => "Date of Joining",
        }
    }
}

/// Dropdowns backed by a master list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasterKind {
    Bank,
    Department,
    Designation,
    Location,
    Role,
}

impl MasterKind {
    pub fn label(self) -> &'static str {
        match self {
            MasterKind::Bank => "Bank Name",
            MasterKind::Department => "Department",
            MasterKind::Designation => "Designation",
            MasterKind::Location => "Working Location",
            MasterKind::Role => "Role",
        }
    }
}

impl EmployeeDraft {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FullName => &self.full_name,
            TextField::NickName => &self.nick_name,
            TextField::FatherName => &self.father_name,
            TextField::MotherName => &self.mother_name,
            TextField::Gender => &self.gender,
            TextField::MaritalStatus => &self.marital_status,
            TextField::Qualification => &self.qualification,
            TextField::Email => &self.email,
            TextField::Mobile1 => &self.mobile1,
            TextField::Mobile2 => &self.mobile2,
            TextField::PermanentAddress => &self.p_address,
            TextField::PermanentPinCode => &self.p_pin_code,
            TextField::PermanentDistrict => &self.p_district,
            TextField::CurrentAddress => &self.c_address,
            TextField::CurrentPinCode => &self.c_pin_code,
            TextField::CurrentDistrict => &self.c_district,
            TextField::AadhaarNumber => &self.aadhaar_number,
            TextField::PanNumber => &self.pan_number,
            TextField::BranchName => &self.branch_name,
            TextField::AccountNo => &self.account_no,
            TextField::IfscCode => &self.ifsc_code,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::NickName => &mut self.nick_name,
            TextField::FatherName => &mut self.father_name,
            TextField::MotherName => &mut self.mother_name,
            TextField::Gender => &mut self.gender,
            TextField::MaritalStatus => &mut self.marital_status,
            TextField::Qualification => &mut self.qualification,
            TextField::Email => &mut self.email,
            TextField::Mobile1 => &mut self.mobile1,
            TextField::Mobile2 => &mut self.mobile2,
            TextField::PermanentAddress => &mut self.p_address,
            TextField::PermanentPinCode => &mut self.p_pin_code,
            TextField::PermanentDistrict => &mut self.p_district,
            TextField::CurrentAddress => &mut self.c_address,
            TextField::CurrentPinCode => &mut self.c_pin_code,
            TextField::CurrentDistrict => &mut self.c_district,
            TextField::AadhaarNumber => &mut self.aadhaar_number,
            TextField::PanNumber => &mut self.pan_number,
            TextField::BranchName => &mut self.branch_name,
            TextField::AccountNo => &mut self.account_no,
            TextField::IfscCode => &mut self.ifsc_code,
        }
    }

    pub fn date(&self, field: DateField) -> &str {
        match field {
            DateField::Dob => &self.dob,
            DateField::Doj => &self.doj,
        }
    }

    pub fn date_mut(&mut self, field: DateField) -> &mut String {
        match field {
            DateField::Dob => &mut self.dob,
            DateField::Doj => &mut self.doj,
        }
    }

    pub fn master_name(&self, kind: MasterKind) -> &str {
        match kind {
            MasterKind::Bank => &self.bank_name,
            MasterKind::Department => &self.department,
            MasterKind::Designation => &self.designation,
            MasterKind::Location => &self.working_location,
            MasterKind::Role => &self.role_name,
        }
    }

    pub fn master_name_mut(&mut self, kind: MasterKind) -> &mut String {
        match kind {
            MasterKind::Bank => &mut self.bank_name,
            MasterKind::Department => &mut self.department,
            MasterKind::Designation => &mut self.designation,
            MasterKind::Location => &mut self.working_location,
            MasterKind::Role => &mut self.role_name,
        }
    }

    pub fn master_id(&self, kind: MasterKind) -> Option<i64> {
        match kind {
            MasterKind::Bank => self.bank_id,
            MasterKind::Department => self.department_id,
            MasterKind::Designation => self.designation_id,
            MasterKind::Location => self.working_location_id,
            MasterKind::Role => self.role_id,
        }
    }

    pub fn set_master_id(&mut self, kind: MasterKind, id: Option<i64>) {
        let slot = match kind {
            MasterKind::Bank => &mut self.bank_id,
            MasterKind::Department => &mut self.department_id,
            MasterKind::Designation => &mut self.designation_id,
            MasterKind::Location => &mut self.working_location_id,
            MasterKind::Role => &mut self.role_id,
        };
        *slot = id;
    }

    pub fn identity_part(&self) -> IdentityDraft {
        IdentityDraft {
            aadhaar_number: self.aadhaar_number.clone(),
            pan_number: self.pan_number.clone(),
        }
    }

    pub fn bank_part(&self) -> BankDraft {
        BankDraft {
            bank_id: self.bank_id,
            bank_name: self.bank_name.clone(),
            branch_name: self.branch_name.clone(),
            account_no: self.account_no.clone(),
            ifsc_code: self.ifsc_code.clone(),
        }
    }

    pub fn merge_identity(&mut self, part: IdentityDraft) {
        self.aadhaar_number = part.aadhaar_number;
        self.pan_number = part.pan_number;
    }

    pub fn merge_bank(&mut self, part: BankDraft) {
        self.bank_id = part.bank_id;
        self.bank_name = part.bank_name;
        self.branch_name = part.branch_name;
        self.account_no = part.account_no;
        self.ifsc_code = part.ifsc_code;
    }

    /// Whether a bank was picked; the bank step's button reads "Skip" otherwise
    pub fn has_bank(&self) -> bool {
        !self.bank_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let draft = EmployeeDraft {
            full_name: "Asha Rao".into(),
            p_address: "12 MG Road".into(),
            is_same_as_permanent: true,
            department_id: Some(4),
            bank_name: "HDFC".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["fullName"], json!("Asha Rao"));
        assert_eq!(value["pAddress"], json!("12 MG Road"));
        assert_eq!(value["isSameAsPermanent"], json!(true));
        assert_eq!(value["departmentId"], json!(4));
        assert_eq!(value["bankName"], json!("HDFC"));
        assert_eq!(value["workingLocationId"], json!(null));
        assert!(value.get("empID").is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let draft: EmployeeDraft =
            serde_json::from_value(json!({"fullName": "Ravi", "cPinCode": "560001"})).unwrap();
        assert_eq!(draft.full_name, "Ravi");
        assert_eq!(draft.c_pin_code, "560001");
        assert_eq!(draft.role_id, None);
        assert!(!draft.is_same_as_permanent);
    }

    #[test]
    fn test_field_accessors() {
        let mut draft = EmployeeDraft::default();
        *draft.text_mut(TextField::PermanentDistrict) = "Pune".into();
        *draft.master_name_mut(MasterKind::Role) = "Admin".into();
        draft.set_master_id(MasterKind::Role, Some(2));
        assert_eq!(draft.p_district, "Pune");
        assert_eq!(draft.text(TextField::PermanentDistrict), "Pune");
        assert_eq!(draft.role_name, "Admin");
        assert_eq!(draft.master_id(MasterKind::Role), Some(2));
    }
}
