use super::fields::CheckboxField;
use super::BrowserFile;
use crate::domain::a006_employee::wizard::{
    printable_summary, review_sections, DocumentSet, EmployeeDraft, StepController, SummarySection,
};
use crate::shared::export::print_document;
use crate::shared::icons::icon;
use crate::shared::notice::Notice;
use leptos::prelude::*;
use thaw::*;

fn summary_section(section: SummarySection, steps: RwSignal<StepController>) -> impl IntoView {
    let SummarySection { title, step, rows } = section;
    view! {
        <section class="details-section">
            <div class="details-section__header">
                <h3 class="details-section__title">{title}</h3>
                <button
                    class="button button--secondary"
                    title="Edit"
                    on:click=move |_| {
                        steps.update(|s| {
                            s.return_to(step);
                        });
                    }
                >
                    {icon("edit")}
                </button>
            </div>
            <dl class="details-grid">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt class="details-grid__label">{label}</dt>
                            <dd class="details-grid__value">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

/// Step 4: read-only summary, PDF download and final confirmation
#[component]
#[allow(non_snake_case)]
pub fn ReviewStep(
    draft: RwSignal<EmployeeDraft>,
    documents: RwSignal<DocumentSet<BrowserFile>, LocalStorage>,
    steps: RwSignal<StepController>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let sections = move || draft.with(|d| documents.with(|docs| review_sections(d, docs)));

    let download_pdf = move |_| {
        let html = printable_summary("Employee Details", &sections());
        if let Err(e) = print_document(&html) {
            log::error!("Failed to print employee details: {}", e);
            notice.set(Some(Notice::error(format!("Could not prepare the PDF: {}", e))));
        }
    };

    view! {
        <div class="wizard-step">
            <div class="wizard-step__toolbar">
                <Button appearance=ButtonAppearance::Secondary on_click=download_pdf>
                    {icon("download")}
                    " Download as PDF"
                </Button>
            </div>
            {move || {
                sections()
                    .into_iter()
                    .map(|section| summary_section(section, steps))
                    .collect_view()
            }}
            <CheckboxField
                label="I confirm that all the information provided is correct"
                checked=Signal::derive(move || steps.with(|s| s.submit_confirmed))
                on_toggle=Callback::new(move |on| steps.update(|s| s.submit_confirmed = on))
            />
        </div>
    }
}
