pub mod state;

use self::state::{EmployeeListState, EmployeeRow, FilterColumn, StatusFilter};
use super::details::EmployeeDetails;
use crate::domain::a006_employee::api::fetch_employees;
use crate::domain::a006_employee::wizard::fetch_professional_lists;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{employee_edit_key, tab_label_for_key, EMPLOYEE_NEW_KEY};
use crate::shared::api::HttpTransport;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{NoticeBar, PaginationControls};
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::notice::Notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// (label, sort field, min width)
const COLUMNS: [(&str, &str, f64); 9] = [
    ("ID", "id", 60.0),
    ("Full Name", "name", 180.0),
    ("Email", "email", 180.0),
    ("Mobile", "mobile", 120.0),
    ("Department", "department", 140.0),
    ("Designation", "designation", 140.0),
    ("Location", "location", 120.0),
    ("Role", "role", 100.0),
    ("Status", "status", 90.0),
];

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = RwSignal::new(EmployeeListState::default());

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let api = HttpTransport;
            let (lists, employees) =
                futures::join!(fetch_professional_lists(&api), fetch_employees(&api));
            let result = employees.map(|employees| (employees, lists));
            let _ = state.try_update(|s| s.finish_load(result));
        });
    };

    // Loads on open and again whenever a wizard saves an employee
    Effect::new(move |_| {
        tabs_store.employees_version.track();
        load_data();
    });

    let open_edit = move |id: i64| {
        let key = employee_edit_key(id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let loading = Signal::derive(move || state.with(|s| s.loading));

    // Every loaded employee, regardless of filters and paging
    let export_excel = move |_| {
        let filename = format!("Employees_{}.csv", chrono::Utc::now().format("%Y-%m-%d"));
        let result = state.with_untracked(|s| export_to_excel(&s.rows, &filename));
        if let Err(e) = result {
            log::error!("Employee export failed: {}", e);
            state.update(|s| s.notice = Some(Notice::error(format!("Export failed: {}", e))));
        }
    };

    let column_filter = move |column: FilterColumn, label: &'static str| {
        let current = move || {
            state.with(|s| match column {
                FilterColumn::Department => s.filters.department.clone(),
                FilterColumn::Designation => s.filters.designation.clone(),
                FilterColumn::Location => s.filters.location.clone(),
            })
        };
        view! {
            <label class="filter-panel__field">
                <span class="form__label">{label}</span>
                <select
                    class="form__select"
                    prop:value=current
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_column_filter(column, value));
                    }
                >
                    <option value="">"All"</option>
                    {move || {
                        state
                            .with(|s| s.filter_options(column))
                            .into_iter()
                            .map(|value| {
                                let selected = value == current();
                                view! { <option value=value.clone() selected=selected>{value.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        }
    };

    view! {
        <PageFrame page_id="a006_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Employees"</h1>
                    <Badge>{move || state.with(|s| s.rows.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| tabs_store.open_tab(EMPLOYEE_NEW_KEY, &tab_label_for_key(EMPLOYEE_NEW_KEY))
                    >
                        {icon("plus")}
                        " Add Employee"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export_excel
                        disabled=Signal::derive(move || state.with(|s| s.rows.is_empty()))
                    >
                        {icon("download")}
                        " Export to Excel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NoticeBar
                    notice=tabs_store.employees_notice
                    on_dismiss=Callback::new(move |_| tabs_store.employees_notice.set(None))
                />
                <NoticeBar
                    notice=Signal::derive(move || state.with(|s| s.notice.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.notice = None))
                />

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.query.clone()))
                                on_change=Callback::new(move |q: String| state.update(|s| s.set_query(q)))
                                placeholder="Search employees..."
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                                total_count=Signal::derive(move || state.with(|s| s.total_count()))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(move |p| state.update(|s| s.go_to_page(p)))
                                on_page_size_change=Callback::new(move |n| state.update(|s| s.set_page_size(n)))
                            />
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            {column_filter(FilterColumn::Department, "Department")}
                            {column_filter(FilterColumn::Designation, "Designation")}
                            {column_filter(FilterColumn::Location, "Location")}
                            <label class="filter-panel__field">
                                <span class="form__label">"Status"</span>
                                <select
                                    class="form__select"
                                    prop:value=move || state.with(|s| s.filters.status.value())
                                    on:change=move |ev| {
                                        let status = StatusFilter::from_value(&event_target_value(&ev));
                                        state.update(|s| s.set_status_filter(status));
                                    }
                                >
                                    <option value="">"All"</option>
                                    <option value="Active">"Active"</option>
                                    <option value="Inactive">"Inactive"</option>
                                </select>
                            </label>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update(|s| s.clear_filters())
                                disabled=Signal::derive(move || {
                                    state.with(|s| s.filters.is_empty() && s.query.is_empty())
                                })
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {COLUMNS
                                    .into_iter()
                                    .map(|(label, field, width)| {
                                        view! {
                                            <SortableHeaderCell
                                                label=label
                                                sort_field=field
                                                current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                                sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                                on_sort=Callback::new(move |f: String| state.update(|s| s.toggle_sort(&f)))
                                                min_width=width
                                            />
                                        }
                                    })
                                    .collect_view()}
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.page_rows())
                                key=|row: &EmployeeRow| (row.id, format!("{:?}", row.employee))
                                children=move |row: EmployeeRow| {
                                    let id = row.id;
                                    let e = row.employee.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{e.full_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{e.email.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{e.mobile1.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row.department.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row.designation.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row.location.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row.role.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if e.is_active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| state.update(|s| s.selected = Some(id))
                                                        >
                                                            {icon("eye")}
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_edit(id)
                                                        >
                                                            {icon("edit")}
                                                        </Button>
                                                    </Flex>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.is_loaded && s.total_count() == 0)>
                        <div class="table__empty">"No employees found"</div>
                    </Show>
                </div>
            </div>

            {move || {
                state.with(|s| s.selected_row()).map(|row| {
                    view! {
                        <EmployeeDetails
                            row=row
                            on_close=Callback::new(move |_| state.update(|s| s.selected = None))
                            on_edit=Callback::new(move |id: i64| {
                                state.update(|s| s.selected = None);
                                open_edit(id);
                            })
                        />
                    }
                })
            }}
        </PageFrame>
    }
}
