//! Common types and traits for all master-data records

pub mod master_record;

// Re-exports
pub use master_record::{find_id_by_name, find_name_by_id, MasterRecord};
