use crate::shared::master_list::MasterListPage;
use contracts::domain::a003_designation::Designation;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DesignationList() -> impl IntoView {
    view! { <MasterListPage<Designation> /> }
}
