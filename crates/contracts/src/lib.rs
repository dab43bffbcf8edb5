//! Wire records shared by every screen of the employee admin.
//!
//! Field names follow the REST backend exactly (`deptID`, `roleId`, ...),
//! so every record carries explicit serde renames.

pub mod domain;
pub mod shared;
