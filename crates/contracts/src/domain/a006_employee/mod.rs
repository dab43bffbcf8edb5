pub mod aggregate;

pub use aggregate::{Employee, EMPLOYEES_PATH};
