use super::state::{fetch_all, save_and_reload, MasterListState};
use crate::shared::api::HttpTransport;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{NoticeBar, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Searchable, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::common::MasterRecord;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;
use thaw::*;

/// List, create and inline-edit screen for one master record type
#[component]
pub fn MasterListPage<R>(#[prop(optional)] _record: PhantomData<R>) -> impl IntoView
where
    R: MasterRecord + Searchable + Sortable + Send + Sync + 'static,
{
    let state = RwSignal::new(MasterListState::<R>::default());

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            let result = fetch_all::<R, _>(&HttpTransport).await;
            let _ = state.try_update(|s| s.finish_load(result));
        });
    };

    let save = move || {
        let Some(request) = state.try_update(|s| s.prepare_save()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = save_and_reload(&HttpTransport, &request).await;
            let _ = state.try_update(|s| s.finish_save(&request, result));
        });
    };

    load_data();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        save();
    };

    let element = R::element_name();
    let is_editing = move || state.with(|s| s.editing.is_some());
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let saving = Signal::derive(move || state.with(|s| s.saving));

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::list_name()}</h1>
                    <Badge>{move || state.with(|s| s.all_items.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
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
                    notice=Signal::derive(move || state.with(|s| s.notice.clone()))
                    on_dismiss=Callback::new(move |_| state.update(|s| s.notice = None))
                />

                <form class="master-form" on:submit=on_submit>
                    <label class="form__label" for="master-name">{format!("{} Name", element)}</label>
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <input
                            id="master-name"
                            class="form__input"
                            type="text"
                            placeholder=format!("Enter {} name", element.to_lowercase())
                            prop:value=move || state.with(|s| s.name_input.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.name_input = value);
                            }
                        />
                        <Show when=move || R::has_status()>
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.active_input)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| s.active_input = checked);
                                    }
                                />
                                " Active"
                            </label>
                        </Show>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || saving.get()
                        >
                            {move || if is_editing() { icon("save") } else { icon("plus") }}
                            {move || {
                                if is_editing() {
                                    format!(" Update {}", element)
                                } else {
                                    format!(" Add {}", element)
                                }
                            }}
                        </button>
                        <Show when=is_editing>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update(|s| s.cancel_edit())
                            >
                                {icon("x")}
                                " Cancel"
                            </Button>
                        </Show>
                    </Flex>
                </form>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.filter.clone()))
                                on_change=Callback::new(move |q: String| state.update(|s| s.set_filter(q)))
                                placeholder=format!("Search {}...", R::list_name().to_lowercase())
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
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell
                                    label="ID"
                                    sort_field="id"
                                    current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(move |f: String| state.update(|s| s.toggle_sort(&f)))
                                    min_width=80.0
                                />
                                <SortableHeaderCell
                                    label=format!("{} Name", element)
                                    sort_field="name"
                                    current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(move |f: String| state.update(|s| s.toggle_sort(&f)))
                                    min_width=220.0
                                />
                                {R::has_status().then(|| view! {
                                    <SortableHeaderCell
                                        label="Status"
                                        sort_field="status"
                                        current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                        sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                        on_sort=Callback::new(move |f: String| state.update(|s| s.toggle_sort(&f)))
                                    />
                                })}
                                <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.page_items())
                                key=|r| (r.id(), r.name().to_string(), r.is_active())
                                children=move |record: R| {
                                    let id = record.id();
                                    let name = record.name().to_string();
                                    let active = record.is_active();
                                    let record = StoredValue::new(record);
                                    let editing_row = move || state.with(|s| s.is_editing(id));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || if editing_row() {
                                                        view! {
                                                            <input
                                                                class="form__input form__input--inline"
                                                                type="text"
                                                                prop:value=move || state.with(|s| s.name_input.clone())
                                                                on:input=move |ev| {
                                                                    let value = event_target_value(&ev);
                                                                    state.update(|s| s.name_input = value);
                                                                }
                                                            />
                                                        }.into_any()
                                                    } else {
                                                        view! { <span>{name.clone()}</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            {active.map(|active| view! {
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <label class="form__checkbox">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    if editing_row() {
                                                                        state.with(|s| s.active_input)
                                                                    } else {
                                                                        active
                                                                    }
                                                                }
                                                                disabled=move || !editing_row()
                                                                on:change=move |ev| {
                                                                    let checked = event_target_checked(&ev);
                                                                    state.update(|s| s.active_input = checked);
                                                                }
                                                            />
                                                            {if active {
                                                                view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                            } else {
                                                                view! { <span class="badge badge--error">"Inactive"</span> }.into_any()
                                                            }}
                                                        </label>
                                                    </TableCellLayout>
                                                </TableCell>
                                            })}
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || if editing_row() {
                                                        view! {
                                                            <Flex gap=FlexGap::Small>
                                                                <Show when=move || state.with(|s| s.has_changes())>
                                                                    <Button
                                                                        appearance=ButtonAppearance::Primary
                                                                        size=ButtonSize::Small
                                                                        on_click=move |_| save()
                                                                        disabled=saving
                                                                    >
                                                                        {icon("save")}
                                                                    </Button>
                                                                </Show>
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    size=ButtonSize::Small
                                                                    on_click=move |_| state.update(|s| s.cancel_edit())
                                                                >
                                                                    {icon("x")}
                                                                </Button>
                                                            </Flex>
                                                        }.into_any()
                                                    } else {
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                size=ButtonSize::Small
                                                                on_click=move |_| {
                                                                    state.update(|s| s.start_edit(&record.get_value()))
                                                                }
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                        }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || state.with(|s| s.is_loaded && s.total_count() == 0)>
                        <div class="table__empty">
                            {format!("No {} found", R::list_name().to_lowercase())}
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
