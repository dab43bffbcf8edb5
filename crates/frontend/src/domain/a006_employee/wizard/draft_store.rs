use super::draft::{BankDraft, EmployeeDraft, IdentityDraft};
use crate::shared::storage::{browser_store, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

/// Main draft
pub const DRAFT_KEY: &str = "employeeFormData";
/// Identity sub-section (Aadhaar, PAN)
pub const IDENTITY_KEY: &str = "empIdentityDetails";
/// Bank sub-section
pub const BANK_KEY: &str = "empBankDetails";

/// Persists the wizard draft so it survives page reloads.
///
/// Best-effort: write failures are logged by the store, malformed entries
/// load as absent.
pub struct EmployeeDraftStore<S> {
    store: S,
}

impl EmployeeDraftStore<Rc<dyn KeyValueStore>> {
    pub fn browser() -> Self {
        Self::new(browser_store())
    }
}

impl<S: KeyValueStore> EmployeeDraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Main draft with any well-formed sub-section drafts laid over it
    pub fn load(&self) -> EmployeeDraft {
        let mut draft: EmployeeDraft = self.read(DRAFT_KEY).unwrap_or_default();
        if let Some(identity) = self.read::<IdentityDraft>(IDENTITY_KEY) {
            draft.merge_identity(identity);
        }
        if let Some(bank) = self.read::<BankDraft>(BANK_KEY) {
            draft.merge_bank(bank);
        }
        draft
    }

    pub fn save(&self, draft: &EmployeeDraft) {
        self.write(DRAFT_KEY, draft);
        self.write(IDENTITY_KEY, &draft.identity_part());
        self.write(BANK_KEY, &draft.bank_part());
    }

    pub fn clear(&self) {
        for key in [DRAFT_KEY, IDENTITY_KEY, BANK_KEY] {
            self.store.remove(key);
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed draft entry '{}': {}", key, e);
                None
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, &json),
            Err(e) => log::warn!("Failed to serialize draft entry '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn sample() -> EmployeeDraft {
        EmployeeDraft {
            full_name: "Asha Rao".into(),
            dob: "21/07/1990".into(),
            p_address: "12 MG Road".into(),
            p_pin_code: "560001".into(),
            is_same_as_permanent: true,
            c_address: "12 MG Road".into(),
            c_pin_code: "560001".into(),
            aadhaar_number: "123412341234".into(),
            pan_number: "ABCDE1234F".into(),
            department: "Engineering".into(),
            department_id: Some(9),
            is_active: Some(true),
            bank_id: Some(3),
            bank_name: "HDFC".into(),
            account_no: "0001234".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let store = EmployeeDraftStore::new(MemoryStore::default());
        let draft = sample();
        store.save(&draft);
        assert_eq!(store.load(), draft);
    }

    #[test]
    fn test_empty_and_malformed_load_as_empty() {
        let store = EmployeeDraftStore::new(MemoryStore::default());
        assert_eq!(store.load(), EmployeeDraft::default());

        let memory = Rc::new(MemoryStore::default());
        memory.set(DRAFT_KEY, "{not json");
        let store = EmployeeDraftStore::new(memory.clone());
        assert_eq!(store.load(), EmployeeDraft::default());
    }

    #[test]
    fn test_sub_sections_overlay_main_draft() {
        let memory = Rc::new(MemoryStore::default());
        memory.set(DRAFT_KEY, r#"{"fullName":"Ravi","panNumber":"OLD"}"#);
        memory.set(IDENTITY_KEY, r#"{"aadhaarNumber":"999988887777","panNumber":"NEW"}"#);
        memory.set(BANK_KEY, "{broken");
        let draft = EmployeeDraftStore::new(memory).load();
        assert_eq!(draft.full_name, "Ravi");
        assert_eq!(draft.pan_number, "NEW");
        assert_eq!(draft.aadhaar_number, "999988887777");
        assert_eq!(draft.bank_id, None);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let memory = Rc::new(MemoryStore::default());
        let store = EmployeeDraftStore::new(memory.clone());
        store.save(&sample());
        assert!(memory.get(BANK_KEY).is_some());
        store.clear();
        for key in [DRAFT_KEY, IDENTITY_KEY, BANK_KEY] {
            assert!(memory.get(key).is_none());
        }
        assert_eq!(store.load(), EmployeeDraft::default());
    }
}
