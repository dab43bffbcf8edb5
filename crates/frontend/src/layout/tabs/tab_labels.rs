//! Tab titles by tab key

use contracts::domain::a001_bank::Bank;
use contracts::domain::a002_department::Department;
use contracts::domain::a003_designation::Designation;
use contracts::domain::a004_location::Location;
use contracts::domain::a005_role::Role;
use contracts::domain::common::MasterRecord;

pub const EMPLOYEE_LIST_KEY: &str = "a006_employee";
pub const EMPLOYEE_NEW_KEY: &str = "a006_employee_new";
pub const EMPLOYEE_EDIT_PREFIX: &str = "a006_employee_edit_";

pub fn employee_edit_key(id: i64) -> String {
    format!("{}{}", EMPLOYEE_EDIT_PREFIX, id)
}

/// Employee id from an edit tab key
pub fn parse_employee_edit_key(key: &str) -> Option<i64> {
    key.strip_prefix(EMPLOYEE_EDIT_PREFIX)?.parse().ok()
}

fn master_label<R: MasterRecord>(key: &str) -> Option<&'static str> {
    (key == R::full_name()).then(R::list_name)
}

/// Readable title for a tab key; unknown keys fall back to the key itself
pub fn tab_label_for_key(key: &str) -> String {
    let master = master_label::<Bank>(key)
        .or_else(|| master_label::<Department>(key))
        .or_else(|| master_label::<Designation>(key))
        .or_else(|| master_label::<Location>(key))
        .or_else(|| master_label::<Role>(key));
    if let Some(label) = master {
        return label.to_string();
    }

    match key {
        EMPLOYEE_LIST_KEY => "Employees".to_string(),
        EMPLOYEE_NEW_KEY => "Add Employee".to_string(),
        _ => match parse_employee_edit_key(key) {
            Some(id) => detail_tab_label("Edit Employee", &id.to_string()),
            None => key.to_string(),
        },
    }
}

/// Detail tab title: «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_bank"), "Banks");
        assert_eq!(tab_label_for_key("a005_role"), "Roles");
        assert_eq!(tab_label_for_key("a006_employee_new"), "Add Employee");
        assert_eq!(tab_label_for_key("a006_employee_edit_12"), "Edit Employee · 12");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }

    #[test]
    fn test_edit_key_round_trip() {
        assert_eq!(parse_employee_edit_key(&employee_edit_key(7)), Some(7));
        assert_eq!(parse_employee_edit_key("a006_employee_edit_x"), None);
        assert_eq!(parse_employee_edit_key("a006_employee"), None);
    }
}
