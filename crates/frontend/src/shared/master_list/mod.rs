//! Generic list + inline-edit + create screen for master data
//! (banks, departments, designations, locations, roles).

pub mod state;
pub mod view;

pub use state::{fetch_all, save_and_reload, MasterListState, SaveRequest};
pub use view::MasterListPage;

use crate::shared::list_utils::{cmp_ci, contains_ci, Searchable, Sortable};
use contracts::domain::a001_bank::Bank;
use contracts::domain::a002_department::Department;
use contracts::domain::a003_designation::Designation;
use contracts::domain::a004_location::Location;
use contracts::domain::a005_role::Role;
use contracts::domain::common::MasterRecord;
use std::cmp::Ordering;

/// Column comparison shared by all master records: "id", "status", otherwise name
pub fn compare_master<R: MasterRecord>(a: &R, b: &R, field: &str) -> Ordering {
    match field {
        "id" => a.id().cmp(&b.id()),
        "status" => a.is_active().cmp(&b.is_active()),
        _ => cmp_ci(a.name(), b.name()),
    }
}

macro_rules! impl_master_list_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Searchable for $ty {
                fn matches_filter(&self, filter: &str) -> bool {
                    contains_ci(self.name(), filter)
                }
            }

            impl Sortable for $ty {
                fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
                    compare_master(self, other, field)
                }
            }
        )*
    };
}

impl_master_list_traits!(Bank, Department, Designation, Location, Role);
