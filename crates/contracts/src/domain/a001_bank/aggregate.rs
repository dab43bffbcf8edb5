use crate::domain::common::MasterRecord;
use serde::{Deserialize, Serialize};

/// Bank (master data used by the employee bank-details step)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(rename = "bankId")]
    pub bank_id: i64,

    #[serde(rename = "bankName")]
    pub bank_name: String,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl MasterRecord for Bank {
    fn id(&self) -> i64 {
        self.bank_id
    }

    fn name(&self) -> &str {
        &self.bank_name
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn new_named(name: &str) -> Self {
        Self {
            bank_id: 0,
            bank_name: name.to_string(),
            is_active: true,
        }
    }

    fn renamed(&self, name: &str) -> Self {
        Self {
            bank_name: name.to_string(),
            ..self.clone()
        }
    }

    fn with_active(self, active: bool) -> Self {
        Self {
            is_active: active,
            ..self
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "bank"
    }

    fn resource() -> &'static str {
        "Banks"
    }

    fn element_name() -> &'static str {
        "Bank"
    }

    fn list_name() -> &'static str {
        "Banks"
    }

    fn has_status() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(Bank::new_named("HDFC")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"bankId": 0, "bankName": "HDFC", "isActive": true})
        );
    }

    #[test]
    fn test_missing_status_defaults_to_active() {
        let bank: Bank = serde_json::from_str(r#"{"bankId": 5, "bankName": "SBI"}"#).unwrap();
        assert!(bank.is_active);
        assert!(!bank.with_active(false).is_active);
    }
}
