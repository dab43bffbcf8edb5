use crate::shared::master_list::MasterListPage;
use contracts::domain::a002_department::Department;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DepartmentList() -> impl IntoView {
    view! { <MasterListPage<Department> /> }
}
