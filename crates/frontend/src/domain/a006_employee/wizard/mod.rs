//! Employee registration / update wizard: the non-visual parts.
//!
//! Every module here is free of DOM access, so the whole flow is tested natively.

pub mod derivation;
pub mod documents;
pub mod draft;
pub mod draft_store;
pub mod master_lists;
pub mod session;
pub mod steps;
pub mod summary;
pub mod submission;

pub use derivation::{apply_change, fill_master_names, DraftChange};
pub use documents::{DocumentKind, DocumentSet, UploadRejection, UploadedFile};
pub use draft::{DateField, EmployeeDraft, MasterKind, TextField};
pub use draft_store::EmployeeDraftStore;
pub use master_lists::{fetch_master_lists, fetch_professional_lists, MasterLists};
pub use session::DraftSession;
pub use steps::{StepController, WizardStep};
pub use summary::{printable_summary, review_sections, SummarySection};
pub use submission::{submit_employee, SubmitMode};
