use super::fields::CheckboxField;
use super::BrowserFile;
use crate::domain::a006_employee::wizard::{DocumentKind, DocumentSet, StepController, UploadedFile};
use crate::shared::icons::icon;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::{File, HtmlInputElement};

type Documents = RwSignal<DocumentSet<BrowserFile>, LocalStorage>;

/// Validate and store a picked or dropped file. Returns the inline error, if any.
fn take_file(documents: Documents, kind: DocumentKind, file: File) -> Option<String> {
    let Some(handle) = BrowserFile::from_file(&file) else {
        log::error!("Could not create a preview URL for {}", file.name());
        return Some("Could not read the selected file".to_string());
    };
    let upload = UploadedFile {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
        handle,
    };

    let mut outcome = Ok(());
    documents.update(|d| outcome = d.accept(kind, upload).map(drop));
    match outcome {
        Ok(()) => {
            log::info!("{} attached: {}", kind.label(), file.name());
            None
        }
        Err(rejection) => Some(rejection.to_string()),
    }
}

#[component]
#[allow(non_snake_case)]
fn DocumentCard(kind: DocumentKind, documents: Documents, errors: RwSignal<BTreeMap<DocumentKind, String>>) -> impl IntoView {
    let handle_file = move |file: File| {
        let error = take_file(documents, kind, file);
        errors.update(|e| match error {
            Some(msg) => {
                e.insert(kind, msg);
            }
            None => {
                e.remove(&kind);
            }
        });
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.item(0)) {
            handle_file(file);
        }
        // Picking the same file again must fire `change`
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.item(0));
        if let Some(file) = file {
            handle_file(file);
        }
    };

    let preview = move || {
        documents.with(|d| {
            d.get(kind).map(|f| {
                let url = f.handle.url().to_string();
                let thumb = if f.is_pdf() {
                    view! {
                        <a class="document-card__open" href=url target="_blank" rel="noopener noreferrer">
                            {icon("file")}
                            " Open PDF"
                        </a>
                    }
                    .into_any()
                } else {
                    view! { <img class="document-card__thumb" src=url alt=kind.label() /> }.into_any()
                };
                view! {
                    <div class="document-card__preview">
                        {thumb}
                        <div class="document-card__meta">
                            <span class="document-card__name">{f.name.clone()}</span>
                            <span class="document-card__size">{f.size_label()}</span>
                        </div>
                        <button
                            class="button button--secondary"
                            title="Remove"
                            on:click=move |_| {
                                documents.update(|d| {
                                    d.remove(kind);
                                });
                            }
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        })
    };

    view! {
        <div
            class="document-card"
            on:dragover=|ev: DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <div class="document-card__header">
                <span class="document-card__title">
                    {kind.label()}
                    {kind.is_required().then(|| view! { <span class="form__required">" *"</span> })}
                </span>
            </div>
            <p class="document-card__hint">{kind.hint()}</p>
            {preview}
            <label class="button button--secondary document-card__pick">
                {icon("upload")}
                " Choose or drop file"
                <input type="file" accept=kind.accept_attr() style="display: none;" on:change=on_pick />
            </label>
            {move || {
                errors
                    .with(|e| e.get(&kind).cloned())
                    .map(|msg| view! { <div class="alert alert--error">{msg}</div> })
            }}
        </div>
    }
}

/// Step 3: identity documents, kept in memory only
#[component]
#[allow(non_snake_case)]
pub fn DocumentUploadStep(documents: Documents, steps: RwSignal<StepController>) -> impl IntoView {
    let errors = RwSignal::new(BTreeMap::<DocumentKind, String>::new());

    let missing = move || {
        let labels: Vec<&str> = documents.with(|d| d.missing_required().into_iter().map(|k| k.label()).collect());
        (!labels.is_empty()).then(|| {
            view! { <p class="form__hint">{format!("Still required: {}", labels.join(", "))}</p> }
        })
    };

    view! {
        <div class="wizard-step">
            <section class="form-section-group">
                <h3 class="form-section__title">"Documents"</h3>
                <p class="form__hint">"Images up to 5MB. Aadhaar, PAN and passbook may also be PDF."</p>
                <div class="document-grid">
                    {DocumentKind::ALL
                        .into_iter()
                        .map(|kind| view! { <DocumentCard kind=kind documents=documents errors=errors /> })
                        .collect_view()}
                </div>
                {missing}
            </section>

            <CheckboxField
                label="I confirm that the uploaded documents are valid and authentic"
                checked=Signal::derive(move || steps.with(|s| s.documents_confirmed))
                on_toggle=Callback::new(move |on| steps.update(|s| s.documents_confirmed = on))
            />
        </div>
    }
}
