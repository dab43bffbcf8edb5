use super::draft::MasterKind;
use crate::shared::api::ApiTransport;
use crate::shared::master_list::fetch_all;
use contracts::domain::a001_bank::Bank;
use contracts::domain::a002_department::Department;
use contracts::domain::a003_designation::Designation;
use contracts::domain::a004_location::Location;
use contracts::domain::a005_role::Role;
use contracts::domain::common::{find_id_by_name, find_name_by_id, MasterRecord};

/// Master data backing the wizard's dropdowns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasterLists {
    /// Active banks only
    pub banks: Vec<Bank>,
    pub departments: Vec<Department>,
    pub designations: Vec<Designation>,
    pub locations: Vec<Location>,
    pub roles: Vec<Role>,
}

fn names<R: MasterRecord>(items: &[R]) -> Vec<String> {
    items.iter().map(|r| r.name().to_string()).collect()
}

impl MasterLists {
    pub fn find_id(&self, kind: MasterKind, name: &str) -> Option<i64> {
        match kind {
            MasterKind::Bank => find_id_by_name(&self.banks, name),
            MasterKind::Department => find_id_by_name(&self.departments, name),
            MasterKind::Designation => find_id_by_name(&self.designations, name),
            MasterKind::Location => find_id_by_name(&self.locations, name),
            MasterKind::Role => find_id_by_name(&self.roles, name),
        }
    }

    pub fn find_name(&self, kind: MasterKind, id: i64) -> Option<String> {
        match kind {
            MasterKind::Bank => find_name_by_id(&self.banks, id),
            MasterKind::Department => find_name_by_id(&self.departments, id),
            MasterKind::Designation => find_name_by_id(&self.designations, id),
            MasterKind::Location => find_name_by_id(&self.locations, id),
            MasterKind::Role => find_name_by_id(&self.roles, id),
        }
    }

    /// Dropdown options for a kind
    pub fn names(&self, kind: MasterKind) -> Vec<String> {
        match kind {
            MasterKind::Bank => names(&self.banks),
            MasterKind::Department => names(&self.departments),
            MasterKind::Designation => names(&self.designations),
            MasterKind::Location => names(&self.locations),
            MasterKind::Role => names(&self.roles),
        }
    }
}

/// Load a list, logging and returning an empty one on failure
async fn load_or_empty<R: MasterRecord, A: ApiTransport + ?Sized>(api: &A) -> Vec<R> {
    match fetch_all::<R, A>(api).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to load {}: {}", R::list_name(), e);
            Vec::new()
        }
    }
}

/// Departments, designations, locations and roles (no banks), requested together
pub async fn fetch_professional_lists<A: ApiTransport + ?Sized>(api: &A) -> MasterLists {
    let (departments, designations, locations, roles) = futures::join!(
        load_or_empty(api),
        load_or_empty(api),
        load_or_empty(api),
        load_or_empty(api),
    );
    MasterLists {
        banks: Vec::new(),
        departments,
        designations,
        locations,
        roles,
    }
}

/// All five lists, banks limited to active ones.
/// A failing list stays empty; its dropdown then shows no options.
pub async fn fetch_master_lists<A: ApiTransport + ?Sized>(api: &A) -> MasterLists {
    let (banks, professional) = futures::join!(
        load_or_empty::<Bank, A>(api),
        fetch_professional_lists(api)
    );
    MasterLists {
        banks: banks.into_iter().filter(|b| b.is_active).collect(),
        ..professional
    }
}
