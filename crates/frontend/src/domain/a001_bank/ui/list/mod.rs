use crate::shared::master_list::MasterListPage;
use contracts::domain::a001_bank::Bank;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BankList() -> impl IntoView {
    view! { <MasterListPage<Bank> /> }
}
