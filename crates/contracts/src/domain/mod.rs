pub mod common;

pub mod a001_bank;
pub mod a002_department;
pub mod a003_designation;
pub mod a004_location;
pub mod a005_role;
pub mod a006_employee;
