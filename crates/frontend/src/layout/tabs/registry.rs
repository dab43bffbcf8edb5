//! Tab content registry: tab key → view

use super::tab_labels::{parse_employee_edit_key, EMPLOYEE_LIST_KEY, EMPLOYEE_NEW_KEY};
use crate::domain::a001_bank::ui::list::BankList;
use crate::domain::a002_department::ui::list::DepartmentList;
use crate::domain::a003_designation::ui::list::DesignationList;
use crate::domain::a004_location::ui::list::LocationList;
use crate::domain::a005_role::ui::list::RoleList;
use crate::domain::a006_employee::ui::list::EmployeeList;
use crate::domain::a006_employee::ui::wizard::{EmployeeWizard, WizardMode};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notice::Notice;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of the tab with the given key.
///
/// `tabs_store` lets wizard tabs close themselves when done.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "a001_bank" => view! { <BankList /> }.into_any(),
        "a002_department" => view! { <DepartmentList /> }.into_any(),
        "a003_designation" => view! { <DesignationList /> }.into_any(),
        "a004_location" => view! { <LocationList /> }.into_any(),
        "a005_role" => view! { <RoleList /> }.into_any(),

        EMPLOYEE_LIST_KEY => view! { <EmployeeList /> }.into_any(),
        EMPLOYEE_NEW_KEY => wizard_tab(WizardMode::Create, key_for_close, tabs_store),
        k => match parse_employee_edit_key(k) {
            Some(id) => wizard_tab(WizardMode::Update(id), key_for_close, tabs_store),
            None => {
                log!("Unknown tab key: '{}'", k);
                view! {
                    <div class="placeholder">{format!("Unknown tab: {}", k)}</div>
                }
                .into_any()
            }
        },
    }
}

fn wizard_tab(mode: WizardMode, key_for_close: String, tabs_store: AppGlobalContext) -> AnyView {
    view! {
        <EmployeeWizard
            mode=mode
            on_submitted=Callback::new({
                let key_for_close = key_for_close.clone();
                move |notice: Notice| {
                    tabs_store.notify_employees_changed(notice);
                    tabs_store.replace_tab(&key_for_close, EMPLOYEE_LIST_KEY);
                }
            })
            on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
        />
    }
    .into_any()
}
