//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{EMPLOYEE_LIST_KEY, EMPLOYEE_NEW_KEY};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, String, &'static str)>, // (tab key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    let item = |key: &'static str, icon: &'static str| (key, tab_label_for_key(key), icon);
    vec![MenuGroup {
        id: "masters",
        label: "Masters",
        icon: "folder-open",
        items: vec![
            item("a001_bank", "bank"),
            item("a002_department", "department"),
            item("a003_designation", "designation"),
            item("a004_location", "location"),
            item("a005_role", "role"),
            item(EMPLOYEE_LIST_KEY, "users"),
            item(EMPLOYEE_NEW_KEY, "user-plus"),
        ],
    }]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["masters".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_chevron = group_id.clone();
                    let gid_show = group_id;
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |open| {
                                        if let Some(pos) = open.iter().position(|x| x == &gid) {
                                            open.remove(pos);
                                        } else {
                                            open.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|open| open.contains(&gid_chevron))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.with(|open| open.contains(&gid_show))>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(key, label, icon_name)| {
                                            let title = label.clone();
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(key))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, &title)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
