//! Clickable header cell that reports its field to `on_sort` and shows
//! the sort direction when it is the active column.

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Field name passed to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)] current_sort_field: Signal<String>,

    #[prop(into)] sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let field = StoredValue::new(sort_field);

    let marker = Memo::new(move |_| {
        field.with_value(|f| {
            let current = current_sort_field.get();
            (
                get_sort_class(&current, f),
                get_sort_indicator(&current, f, sort_ascending.get()),
            )
        })
    });

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field.get_value())
            >
                {label}
                <span class=move || marker.with(|m| m.0)>{move || marker.with(|m| m.1)}</span>
            </div>
        </TableHeaderCell>
    }
}
