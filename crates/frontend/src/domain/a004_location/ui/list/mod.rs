use crate::shared::master_list::MasterListPage;
use contracts::domain::a004_location::Location;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn LocationList() -> impl IntoView {
    view! { <MasterListPage<Location> /> }
}
