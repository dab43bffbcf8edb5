use crate::shared::master_list::MasterListPage;
use contracts::domain::a005_role::Role;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RoleList() -> impl IntoView {
    view! { <MasterListPage<Role> /> }
}
