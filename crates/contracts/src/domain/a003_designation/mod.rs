pub mod aggregate;

pub use aggregate::Designation;
