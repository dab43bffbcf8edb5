//! Four-step employee wizard shared by the create and update tabs

mod bank_details;
mod basic_details;
mod document_upload;
mod fields;
mod review;
mod step_indicator;

use self::bank_details::BankDetailsStep;
use self::basic_details::BasicDetailsStep;
use self::document_upload::DocumentUploadStep;
use self::review::ReviewStep;
use self::step_indicator::StepIndicator;
use crate::domain::a006_employee::api::fetch_employee;
use crate::domain::a006_employee::wizard::submission::draft_from_employee;
use crate::domain::a006_employee::wizard::{
    fetch_master_lists, fill_master_names, DocumentSet, DraftChange, DraftSession, MasterLists,
    StepController, SubmitMode, WizardStep,
};
use crate::shared::api::HttpTransport;
use crate::shared::components::NoticeBar;
use crate::shared::icons::icon;
use crate::shared::notice::Notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{File, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Update(i64),
}

impl WizardMode {
    fn submit_mode(self) -> SubmitMode {
        match self {
            WizardMode::Create => SubmitMode::Create,
            WizardMode::Update(emp_id) => SubmitMode::Update { emp_id },
        }
    }

    fn title(self) -> String {
        match self {
            WizardMode::Create => "Add Employee".to_string(),
            WizardMode::Update(id) => format!("Edit Employee #{}", id),
        }
    }
}

/// Object URL of a picked file, revoked when dropped
#[derive(Debug)]
pub struct BrowserFile {
    url: String,
}

impl BrowserFile {
    pub fn from_file(file: &File) -> Option<Self> {
        Url::create_object_url_with_blob(file)
            .ok()
            .map(|url| Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for BrowserFile {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeWizard(
    mode: WizardMode,
    /// Runs with the success notice once the employee is saved
    on_submitted: Callback<Notice>,
    /// Leaves the tab; a registration draft is kept for next time
    on_close: Callback<()>,
) -> impl IntoView {
    let is_create = mode == WizardMode::Create;
    let session = move || DraftSession::browser(mode.submit_mode());

    let draft = RwSignal::new(session().initial_draft());
    let lists = RwSignal::new(MasterLists::default());
    let steps = RwSignal::new(StepController::default());
    let documents = RwSignal::new_local(DocumentSet::<BrowserFile>::default());
    let notice = RwSignal::new(None::<Notice>);
    let submitting = RwSignal::new(false);
    let loading = RwSignal::new(!is_create);

    spawn_local(async move {
        let api = HttpTransport;
        let loaded = fetch_master_lists(&api).await;

        if let WizardMode::Update(id) = mode {
            match fetch_employee(&api, id).await {
                Ok(employee) => {
                    let filled = fill_master_names(&draft_from_employee(&employee), &loaded);
                    let _ = draft.try_set(filled);
                }
                Err(e) => {
                    log::error!("Failed to load employee {}: {}", id, e);
                    let _ = notice.try_set(Some(Notice::error(
                        e.user_message("Failed to load employee details"),
                    )));
                }
            }
            let _ = loading.try_set(false);
        }
        let _ = lists.try_set(loaded);
    });

    Effect::new(move |_| {
        let complete = documents.with(|d| d.required_complete());
        steps.update(|s| s.documents_complete = complete);
    });

    let on_change = Callback::new(move |change: DraftChange| {
        let next =
            lists.with_untracked(|l| draft.with_untracked(|d| session().record(d, change, l)));
        draft.set(next);
    });

    let go_next = move |_| {
        let mut blocked = None;
        steps.update(|s| {
            if !s.next() {
                blocked = s.blocked_reason();
            }
        });
        notice.set(blocked.map(Notice::warning));
    };

    let go_back = move |_| {
        steps.update(|s| {
            s.previous();
        });
    };

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }

        submitting.set(true);
        notice.set(Some(Notice::processing(if is_create {
            "Registering employee..."
        } else {
            "Updating employee..."
        })));
        let current = draft.get_untracked();
        let gate = steps.get_untracked();

        spawn_local(async move {
            let result = session().finish_submit(&HttpTransport, &gate, &current).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(success) => on_submitted.run(success),
                Err(failure) => {
                    let _ = notice.try_set(Some(failure));
                }
            }
        });
    };

    let cancel = move |_| {
        session().cancel();
        on_close.run(());
    };

    let step = move || steps.with(|s| s.step);
    let next_label = move || {
        if step() == WizardStep::BankDetails && !draft.with(|d| d.has_bank()) {
            "Skip"
        } else {
            "Next"
        }
    };

    view! {
        <PageFrame page_id="a006_employee--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(if is_create { "user-plus" } else { "users" })}
                    <h1 class="page__title">{mode.title()}</h1>
                </div>
                <div class="page__header-right">
                    <Show when=move || is_create>
                        <Button appearance=ButtonAppearance::Subtle on_click=cancel>
                            "Cancel"
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <StepIndicator steps=steps />

                <NoticeBar
                    notice=notice
                    on_dismiss=Callback::new(move |_| notice.set(None))
                />

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="wizard__loading">"Loading employee..."</div> }
                >
                    {move || match step() {
                        WizardStep::BasicDetails => view! {
                            <BasicDetailsStep
                                draft=draft
                                lists=lists
                                steps=steps
                                on_change=on_change
                                show_status=!is_create
                            />
                        }
                        .into_any(),
                        WizardStep::BankDetails => view! {
                            <BankDetailsStep draft=draft lists=lists on_change=on_change />
                        }
                        .into_any(),
                        WizardStep::Documents => view! {
                            <DocumentUploadStep documents=documents steps=steps />
                        }
                        .into_any(),
                        WizardStep::Review => view! {
                            <ReviewStep draft=draft documents=documents steps=steps notice=notice />
                        }
                        .into_any(),
                    }}
                </Show>

                <div class="form-actions wizard__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=go_back
                        disabled=Signal::derive(move || step() == WizardStep::BasicDetails)
                    >
                        {icon("chevron-left")}
                        " Back"
                    </Button>
                    <Show
                        when=move || step() == WizardStep::Review
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=go_next>
                                {next_label}
                                " "
                                {icon("chevron-right")}
                            </Button>
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=submitting
                        >
                            {icon("save")}
                            {move || if submitting.get() { " Submitting..." } else { " Submit" }}
                        </Button>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
