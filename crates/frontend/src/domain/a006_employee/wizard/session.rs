use super::derivation::{apply_change, DraftChange};
use super::draft::EmployeeDraft;
use super::draft_store::EmployeeDraftStore;
use super::master_lists::MasterLists;
use super::steps::StepController;
use super::submission::{submit_employee, SubmitMode};
use crate::shared::api::ApiTransport;
use crate::shared::notice::Notice;
use crate::shared::storage::KeyValueStore;
use std::rc::Rc;

/// Ties one wizard run to the stored draft.
///
/// Only registration keeps a draft: it is saved after every change and
/// removed once the employee is registered or the user cancels. Updates
/// never touch storage.
pub struct DraftSession<S> {
    store: EmployeeDraftStore<S>,
    mode: SubmitMode,
}

impl DraftSession<Rc<dyn KeyValueStore>> {
    pub fn browser(mode: SubmitMode) -> Self {
        Self::new(EmployeeDraftStore::browser(), mode)
    }
}

impl<S: KeyValueStore> DraftSession<S> {
    pub fn new(store: EmployeeDraftStore<S>, mode: SubmitMode) -> Self {
        Self { store, mode }
    }

    fn keeps_draft(&self) -> bool {
        self.mode == SubmitMode::Create
    }

    /// Stored draft when registering, an empty one when updating
    pub fn initial_draft(&self) -> EmployeeDraft {
        if self.keeps_draft() {
            self.store.load()
        } else {
            EmployeeDraft::default()
        }
    }

    pub fn record(
        &self,
        draft: &EmployeeDraft,
        change: DraftChange,
        lists: &MasterLists,
    ) -> EmployeeDraft {
        let next = apply_change(draft, change, lists);
        if self.keeps_draft() {
            self.store.save(&next);
        }
        next
    }

    /// Submit and drop the stored draft on success; a rejected draft stays for another try.
    /// An unconfirmed or unfinished wizard gets a warning and nothing is sent.
    pub async fn finish_submit<A: ApiTransport + ?Sized>(
        &self,
        api: &A,
        steps: &StepController,
        draft: &EmployeeDraft,
    ) -> Result<Notice, Notice> {
        steps.check_submit()?;
        let result = submit_employee(api, self.mode, draft).await;
        if result.is_ok() && self.keeps_draft() {
            self.store.clear();
        }
        result
    }

    pub fn cancel(&self) {
        if self.keeps_draft() {
            log::debug!("Employee registration cancelled, discarding draft");
            self.store.clear();
        }
    }
}
