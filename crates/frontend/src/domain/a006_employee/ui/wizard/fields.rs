//! Inputs bound to one draft field each. Every edit goes through `on_change`.

use crate::domain::a006_employee::wizard::{
    DateField, DraftChange, EmployeeDraft, MasterKind, MasterLists, TextField,
};
use crate::shared::date_utils::display_to_native;
use leptos::prelude::*;

fn field_label(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TextInput(
    field: TextField,
    draft: RwSignal<EmployeeDraft>,
    on_change: Callback<DraftChange>,
    #[prop(optional)] required: bool,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let readonly =
        move || field.is_current_address() && draft.with(|d| d.is_same_as_permanent);

    view! {
        <div class="form__group">
            {field_label(field.label(), required)}
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                maxlength=field.max_len().map(|n| n.to_string())
                prop:value=move || draft.with(|d| d.text(field).to_string())
                readonly=readonly
                on:input=move |ev| on_change.run(DraftChange::Text(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DateInput(
    field: DateField,
    draft: RwSignal<EmployeeDraft>,
    on_change: Callback<DraftChange>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {field_label(field.label(), required)}
            <input
                class="form__input"
                type="date"
                prop:value=move || draft.with(|d| display_to_native(d.date(field)))
                on:change=move |ev| on_change.run(DraftChange::Date(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// Select over a fixed option list (gender, marital status, qualification)
#[component]
#[allow(non_snake_case)]
pub fn ChoiceSelect(
    field: TextField,
    options: &'static [&'static str],
    draft: RwSignal<EmployeeDraft>,
    on_change: Callback<DraftChange>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let current = move || draft.with(|d| d.text(field).to_string());

    view! {
        <div class="form__group">
            {field_label(field.label(), required)}
            <select
                class="form__select"
                prop:value=current
                on:change=move |ev| on_change.run(DraftChange::Text(field, event_target_value(&ev)))
            >
                <option value="">{format!("Select {}", field.label())}</option>
                {options
                    .iter()
                    .map(|opt| {
                        view! {
                            <option value=*opt selected=move || current() == *opt>{*opt}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Select over a loaded master list; the option values are display names
#[component]
#[allow(non_snake_case)]
pub fn MasterSelect(
    kind: MasterKind,
    draft: RwSignal<EmployeeDraft>,
    lists: RwSignal<MasterLists>,
    on_change: Callback<DraftChange>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let current = move || draft.with(|d| d.master_name(kind).to_string());

    view! {
        <div class="form__group">
            {field_label(kind.label(), required)}
            <select
                class="form__select"
                prop:value=current
                on:change=move |ev| on_change.run(DraftChange::Select(kind, event_target_value(&ev)))
            >
                <option value="">{format!("Select {}", kind.label())}</option>
                {move || {
                    lists
                        .with(|l| l.names(kind))
                        .into_iter()
                        .map(|name| {
                            let selected = name == current();
                            view! { <option value=name.clone() selected=selected>{name.clone()}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Checkbox row used for the confirmations and flags
#[component]
#[allow(non_snake_case)]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}
