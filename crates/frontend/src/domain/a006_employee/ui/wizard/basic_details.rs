use super::fields::{CheckboxField, ChoiceSelect, DateInput, MasterSelect, TextInput};
use crate::domain::a006_employee::wizard::{
    DateField, DraftChange, EmployeeDraft, MasterKind, MasterLists, StepController, TextField,
};
use leptos::prelude::*;

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const MARITAL_STATUSES: &[&str] = &["Single", "Married", "Divorced", "Widowed"];
const QUALIFICATIONS: &[&str] = &["10th", "12th", "Graduate", "Post-Graduate"];

/// Step 1: personal, contact, address, identity and professional details
#[component]
#[allow(non_snake_case)]
pub fn BasicDetailsStep(
    draft: RwSignal<EmployeeDraft>,
    lists: RwSignal<MasterLists>,
    steps: RwSignal<StepController>,
    on_change: Callback<DraftChange>,
    /// Show the active flag (update only)
    #[prop(optional)]
    show_status: bool,
) -> impl IntoView {
    view! {
        <div class="wizard-step">
            <section class="form-section-group">
                <h3 class="form-section__title">"Personal Information"</h3>
                <div class="form-row">
                    <TextInput field=TextField::FullName draft=draft on_change=on_change required=true />
                    <TextInput field=TextField::NickName draft=draft on_change=on_change />
                    <TextInput field=TextField::FatherName draft=draft on_change=on_change required=true />
                    <TextInput field=TextField::MotherName draft=draft on_change=on_change />
                    <DateInput field=DateField::Dob draft=draft on_change=on_change required=true />
                    <ChoiceSelect field=TextField::Gender options=GENDERS draft=draft on_change=on_change required=true />
                    <ChoiceSelect field=TextField::MaritalStatus options=MARITAL_STATUSES draft=draft on_change=on_change />
                    <ChoiceSelect field=TextField::Qualification options=QUALIFICATIONS draft=draft on_change=on_change required=true />
                </div>
            </section>

            <section class="form-section-group">
                <h3 class="form-section__title">"Contact Details"</h3>
                <div class="form-row">
                    <TextInput field=TextField::Email draft=draft on_change=on_change required=true input_type="email" />
                    <TextInput field=TextField::Mobile1 draft=draft on_change=on_change required=true input_type="tel" />
                    <TextInput field=TextField::Mobile2 draft=draft on_change=on_change input_type="tel" />
                </div>
            </section>

            <section class="form-section-group">
                <h3 class="form-section__title">"Permanent Address"</h3>
                <div class="form-row">
                    <TextInput field=TextField::PermanentAddress draft=draft on_change=on_change required=true />
                    <TextInput field=TextField::PermanentPinCode draft=draft on_change=on_change required=true />
                    <TextInput field=TextField::PermanentDistrict draft=draft on_change=on_change required=true />
                </div>
                <CheckboxField
                    label="Current address same as permanent"
                    checked=Signal::derive(move || draft.with(|d| d.is_same_as_permanent))
                    on_toggle=Callback::new(move |on| on_change.run(DraftChange::SameAsPermanent(on)))
                />
                <h3 class="form-section__title">"Current Address"</h3>
                <div class="form-row">
                    <TextInput field=TextField::CurrentAddress draft=draft on_change=on_change />
                    <TextInput field=TextField::CurrentPinCode draft=draft on_change=on_change />
                    <TextInput field=TextField::CurrentDistrict draft=draft on_change=on_change />
                </div>
            </section>

            <section class="form-section-group">
                <h3 class="form-section__title">"Identity"</h3>
                <div class="form-row">
                    <TextInput field=TextField::AadhaarNumber draft=draft on_change=on_change required=true />
                    <TextInput field=TextField::PanNumber draft=draft on_change=on_change required=true />
                </div>
            </section>

            <section class="form-section-group">
                <h3 class="form-section__title">"Professional Details"</h3>
                <div class="form-row">
                    <MasterSelect kind=MasterKind::Location draft=draft lists=lists on_change=on_change required=true />
                    <MasterSelect kind=MasterKind::Department draft=draft lists=lists on_change=on_change required=true />
                    <MasterSelect kind=MasterKind::Designation draft=draft lists=lists on_change=on_change required=true />
                    <MasterSelect kind=MasterKind::Role draft=draft lists=lists on_change=on_change required=true />
                    <DateInput field=DateField::Doj draft=draft on_change=on_change required=true />
                </div>
                <Show when=move || show_status>
                    <CheckboxField
                        label="Active"
                        checked=Signal::derive(move || draft.with(|d| d.is_active.unwrap_or(true)))
                        on_toggle=Callback::new(move |on| on_change.run(DraftChange::Active(on)))
                    />
                </Show>
            </section>

            <CheckboxField
                label="I confirm that the above details are correct"
                checked=Signal::derive(move || steps.with(|s| s.basic_confirmed))
                on_toggle=Callback::new(move |on| steps.update(|s| s.basic_confirmed = on))
            />
        </div>
    }
}
