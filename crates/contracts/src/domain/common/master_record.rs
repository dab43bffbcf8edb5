use serde::{de::DeserializeOwned, Serialize};

/// Trait for a master-data record (bank, department, designation, ...)
///
/// Every master collection is a flat list of `{id, name}` pairs exposed by the
/// backend under its own resource path. Banks additionally carry an active flag.
pub trait MasterRecord: Clone + PartialEq + Serialize + DeserializeOwned {
    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Numeric identifier assigned by the backend (0 for a record not yet created)
    fn id(&self) -> i64;

    /// Display name shown in lists and dropdowns
    fn name(&self) -> &str;

    /// Active flag, for records that have one
    fn is_active(&self) -> Option<bool> {
        None
    }

    /// New record for a create request: id 0 and the given name
    fn new_named(name: &str) -> Self;

    /// Copy of this record with a different name, keeping the id
    fn renamed(&self, name: &str) -> Self;

    /// Copy of this record with a different active flag.
    /// Records without a flag return themselves unchanged.
    fn with_active(self, _active: bool) -> Self {
        self
    }

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the record type in the system (e.g. "a002")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "department")
    fn collection_name() -> &'static str;

    /// REST resource segment (e.g. "Departments")
    fn resource() -> &'static str;

    /// Singular UI name (e.g. "Department")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Departments")
    fn list_name() -> &'static str;

    /// Whether the record type has an active/inactive toggle
    fn has_status() -> bool {
        false
    }

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Full key of the record type (e.g. "a002_department"), also used as tab key
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Collection path (e.g. "/Departments")
    fn collection_path() -> String {
        format!("/{}", Self::resource())
    }

    /// Item path (e.g. "/Departments/7")
    fn item_path(id: i64) -> String {
        format!("/{}/{}", Self::resource(), id)
    }
}

/// Look up a record by display name and return its id.
///
/// Exact match, as dropdown values are the names themselves.
pub fn find_id_by_name<R: MasterRecord>(items: &[R], name: &str) -> Option<i64> {
    if name.is_empty() {
        return None;
    }
    items.iter().find(|r| r.name() == name).map(|r| r.id())
}

/// Look up a record by id and return its display name
pub fn find_name_by_id<R: MasterRecord>(items: &[R], id: i64) -> Option<String> {
    items
        .iter()
        .find(|r| r.id() == id)
        .map(|r| r.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_bank::Bank;
    use crate::domain::a002_department::Department;

    #[test]
    fn test_paths_and_full_name() {
        assert_eq!(Department::collection_path(), "/Departments");
        assert_eq!(Department::item_path(7), "/Departments/7");
        assert_eq!(Department::full_name(), "a002_department");
        assert_eq!(Bank::full_name(), "a001_bank");
    }

    #[test]
    fn test_lookup_by_name() {
        let banks = vec![
            Bank { bank_id: 3, bank_name: "HDFC".into(), is_active: true },
            Bank { bank_id: 4, bank_name: "SBI".into(), is_active: true },
        ];
        assert_eq!(find_id_by_name(&banks, "HDFC"), Some(3));
        assert_eq!(find_id_by_name(&banks, "ICICI"), None);
        assert_eq!(find_id_by_name(&banks, ""), None);
        assert_eq!(find_name_by_id(&banks, 4).as_deref(), Some("SBI"));
        assert_eq!(find_name_by_id(&banks, 99), None);
    }
}
