use super::fields::{MasterSelect, TextInput};
use crate::domain::a006_employee::wizard::{DraftChange, EmployeeDraft, MasterKind, MasterLists, TextField};
use leptos::prelude::*;

/// Step 2: optional salary account
#[component]
#[allow(non_snake_case)]
pub fn BankDetailsStep(
    draft: RwSignal<EmployeeDraft>,
    lists: RwSignal<MasterLists>,
    on_change: Callback<DraftChange>,
) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <section class="form-section-group">
                <h3 class="form-section__title">"Bank Account"</h3>
                <p class="form__hint">"Leave the bank empty to skip this step."</p>
                <div class="form-row">
                    <MasterSelect kind=MasterKind::Bank draft=draft lists=lists on_change=on_change />
                    <TextInput field=TextField::BranchName draft=draft on_change=on_change />
                    <TextInput field=TextField::AccountNo draft=draft on_change=on_change />
                    <TextInput field=TextField::IfscCode draft=draft on_change=on_change />
                </div>
            </section>
        </div>
    }
}
