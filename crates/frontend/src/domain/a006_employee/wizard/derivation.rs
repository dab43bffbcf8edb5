//! Field derivation: one reducer applies a form change and keeps dependent
//! fields consistent.

use super::draft::{DateField, EmployeeDraft, MasterKind, TextField};
use super::master_lists::MasterLists;
use crate::shared::date_utils::native_to_display;

/// A single user edit in any wizard step
#[derive(Debug, Clone, PartialEq)]
pub enum DraftChange {
    Text(TextField, String),
    /// Native `<input type="date">` value (`yyyy-mm-dd`)
    Date(DateField, String),
    /// Display name picked in a master dropdown
    Select(MasterKind, String),
    SameAsPermanent(bool),
    Active(bool),
}

/// Apply `change` to `draft`: assign the field, resolve the master id, mirror the address
pub fn apply_change(draft: &EmployeeDraft, change: DraftChange, lists: &MasterLists) -> EmployeeDraft {
    let mut next = draft.clone();
    let selected = match &change {
        DraftChange::Select(kind, _) => Some(*kind),
        _ => None,
    };

    assign(&mut next, change);
    if let Some(kind) = selected {
        resolve_master_id(&mut next, kind, lists);
    }
    mirror_address(&mut next);
    next
}

fn assign(draft: &mut EmployeeDraft, change: DraftChange) {
    match change {
        DraftChange::Text(field, _) if field.is_current_address() && draft.is_same_as_permanent => {
            // Read-only mirror while the flag is set
        }
        DraftChange::Text(field, value) => {
            let value = match field.max_len() {
                Some(max) => value.chars().take(max).collect(),
                None => value,
            };
            *draft.text_mut(field) = value;
        }
        DraftChange::Date(field, native) => *draft.date_mut(field) = native_to_display(&native),
        DraftChange::Select(kind, name) => *draft.master_name_mut(kind) = name,
        DraftChange::SameAsPermanent(on) => draft.is_same_as_permanent = on,
        DraftChange::Active(on) => draft.is_active = Some(on),
    }
}

/// Set the id matching the selected name; no match (or lists still loading) clears it
pub fn resolve_master_id(draft: &mut EmployeeDraft, kind: MasterKind, lists: &MasterLists) {
    let id = lists.find_id(kind, draft.master_name(kind));
    draft.set_master_id(kind, id);
}

/// Copy permanent address fields into current ones while the flag is set
pub fn mirror_address(draft: &mut EmployeeDraft) {
    if draft.is_same_as_permanent {
        draft.c_address = draft.p_address.clone();
        draft.c_pin_code = draft.p_pin_code.clone();
        draft.c_district = draft.p_district.clone();
    }
}

/// Fill empty display names from ids (drafts built from an existing employee)
pub fn fill_master_names(draft: &EmployeeDraft, lists: &MasterLists) -> EmployeeDraft {
    let mut next = draft.clone();
    for kind in [
        MasterKind::Bank,
        MasterKind::Department,
        MasterKind::Designation,
        MasterKind::Location,
        MasterKind::Role,
    ] {
        if !next.master_name(kind).is_empty() {
            continue;
        }
        if let Some(name) = next.master_id(kind).and_then(|id| lists.find_name(kind, id)) {
            *next.master_name_mut(kind) = name;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_bank::Bank;
    use contracts::domain::a002_department::Department;

    fn lists() -> MasterLists {
        MasterLists {
            banks: vec![Bank {
                bank_id: 3,
                bank_name: "HDFC".into(),
                is_active: true,
            }],
            departments: vec![Department {
                dept_id: 9,
                dept_name: "Engineering".into(),
            }],
            ..Default::default()
        }
    }

    fn text(field: TextField, value: &str) -> DraftChange {
        DraftChange::Text(field, value.to_string())
    }

    #[test]
    fn test_bank_selection_resolves_id() {
        let draft = apply_change(
            &EmployeeDraft::default(),
            DraftChange::Select(MasterKind::Bank, "HDFC".into()),
            &lists(),
        );
        assert_eq!(draft.bank_name, "HDFC");
        assert_eq!(draft.bank_id, Some(3));

        let draft = apply_change(&draft, DraftChange::Select(MasterKind::Bank, "ICICI".into()), &lists());
        assert_eq!(draft.bank_name, "ICICI");
        assert_eq!(draft.bank_id, None);
    }

    #[test]
    fn test_selection_before_lists_load_clears_id() {
        let mut draft = EmployeeDraft::default();
        draft.department_id = Some(9);
        let draft = apply_change(
            &draft,
            DraftChange::Select(MasterKind::Department, "Engineering".into()),
            &MasterLists::default(),
        );
        assert_eq!(draft.department_id, None);
    }

    #[test]
    fn test_mirror_follows_permanent_address() {
        let l = lists();
        let mut draft = apply_change(&EmployeeDraft::default(), text(TextField::PermanentAddress, "12 MG Road"), &l);
        draft = apply_change(&draft, DraftChange::SameAsPermanent(true), &l);
        assert_eq!(draft.c_address, "12 MG Road");

        draft = apply_change(&draft, text(TextField::PermanentAddress, "7 Park Street"), &l);
        draft = apply_change(&draft, text(TextField::PermanentPinCode, "700016"), &l);
        assert_eq!(draft.c_address, "7 Park Street");
        assert_eq!(draft.c_pin_code, "700016");

        // Direct edits of the mirror are ignored while the flag is set
        draft = apply_change(&draft, text(TextField::CurrentAddress, "elsewhere"), &l);
        assert_eq!(draft.c_address, "7 Park Street");
    }

    #[test]
    fn test_unmirroring_freezes_current_address() {
        let l = lists();
        let mut draft = apply_change(&EmployeeDraft::default(), text(TextField::PermanentDistrict, "Pune"), &l);
        draft = apply_change(&draft, DraftChange::SameAsPermanent(true), &l);
        draft = apply_change(&draft, DraftChange::SameAsPermanent(false), &l);
        draft = apply_change(&draft, text(TextField::PermanentDistrict, "Mumbai"), &l);
        assert_eq!(draft.c_district, "Pune");

        draft = apply_change(&draft, text(TextField::CurrentDistrict, "Nashik"), &l);
        assert_eq!(draft.c_district, "Nashik");
    }

    #[test]
    fn test_date_is_stored_in_display_form() {
        let draft = apply_change(
            &EmployeeDraft::default(),
            DraftChange::Date(DateField::Dob, "1990-07-21".into()),
            &lists(),
        );
        assert_eq!(draft.dob, "21/07/1990");

        let cleared = apply_change(&draft, DraftChange::Date(DateField::Dob, String::new()), &lists());
        assert_eq!(cleared.dob, "");
    }

    #[test]
    fn test_length_limits() {
        let draft = apply_change(
            &EmployeeDraft::default(),
            text(TextField::AadhaarNumber, "1234567890123456"),
            &lists(),
        );
        assert_eq!(draft.aadhaar_number, "123456789012");
    }

    #[test]
    fn test_fill_master_names() {
        let mut draft = EmployeeDraft::default();
        draft.department_id = Some(9);
        draft.role_id = Some(42);
        let filled = fill_master_names(&draft, &lists());
        assert_eq!(filled.department, "Engineering");
        assert_eq!(filled.role_name, "");
    }
}
