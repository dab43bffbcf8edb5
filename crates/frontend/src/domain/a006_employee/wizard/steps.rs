use crate::shared::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    BasicDetails,
    BankDetails,
    Documents,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicDetails,
        WizardStep::BankDetails,
        WizardStep::Documents,
        WizardStep::Review,
    ];

    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicDetails => 1,
            WizardStep::BankDetails => 2,
            WizardStep::Documents => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicDetails => "Basic Details",
            WizardStep::BankDetails => "Bank Details",
            WizardStep::Documents => "Documents",
            WizardStep::Review => "Review",
        }
    }

    fn following(self) -> WizardStep {
        match self {
            WizardStep::BasicDetails => WizardStep::BankDetails,
            WizardStep::BankDetails => WizardStep::Documents,
            WizardStep::Documents | WizardStep::Review => WizardStep::Review,
        }
    }

    fn preceding(self) -> WizardStep {
        match self {
            WizardStep::BasicDetails | WizardStep::BankDetails => WizardStep::BasicDetails,
            WizardStep::Documents => WizardStep::BankDetails,
            WizardStep::Review => WizardStep::Documents,
        }
    }
}

/// Current step plus the confirmations that gate moving on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    pub step: WizardStep,
    /// "I confirm the details" on Basic Details
    pub basic_confirmed: bool,
    /// "Documents are valid and authentic" on Documents
    pub documents_confirmed: bool,
    /// All required documents uploaded
    pub documents_complete: bool,
    /// Final confirmation on Review
    pub submit_confirmed: bool,
}

impl Default for StepController {
    fn default() -> Self {
        Self {
            step: WizardStep::BasicDetails,
            basic_confirmed: false,
            documents_confirmed: false,
            documents_complete: false,
            submit_confirmed: false,
        }
    }
}

impl StepController {
    /// Why the current step cannot be left forward, if it cannot
    pub fn blocked_reason(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::BasicDetails if !self.basic_confirmed => {
                Some("Please confirm that the details are correct to proceed")
            }
            WizardStep::Documents if !self.documents_complete => {
                Some("Please upload the profile photo, Aadhaar card and PAN card")
            }
            WizardStep::Documents if !self.documents_confirmed => {
                Some("Please confirm that the uploaded documents are valid and authentic")
            }
            _ => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::Review && self.blocked_reason().is_none()
    }

    /// Move forward one step. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = self.step.following();
        log::debug!("Wizard moved to step {}", self.step.number());
        true
    }

    /// Move back one step; no-op on the first
    pub fn previous(&mut self) -> bool {
        let before = self.step;
        self.step = self.step.preceding();
        before != self.step
    }

    /// Jump back to an earlier step, e.g. from a review section's edit button.
    /// Targets at or after the current step are ignored.
    pub fn return_to(&mut self, step: WizardStep) -> bool {
        if step >= self.step {
            return false;
        }
        self.step = step;
        true
    }

    /// Gate for the submit action, which stays clickable; the warning is shown
    /// instead of sending anything
    pub fn check_submit(&self) -> Result<(), Notice> {
        if !self.submit_confirmed {
            return Err(Notice::warning("Please confirm the details before submitting"));
        }
        if self.step != WizardStep::Review {
            return Err(Notice::warning("Please complete all steps before submitting"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(step: WizardStep) -> StepController {
        StepController {
            step,
            ..Default::default()
        }
    }

    #[test]
    fn test_boundaries_clamp() {
        let mut last = at(WizardStep::Review);
        assert!(!last.next());
        assert_eq!(last.step, WizardStep::Review);

        let mut first = at(WizardStep::BasicDetails);
        assert!(!first.previous());
        assert_eq!(first.step, WizardStep::BasicDetails);
    }

    #[test]
    fn test_basic_details_needs_confirmation() {
        let mut steps = StepController::default();
        assert!(!steps.next());
        assert_eq!(steps.step, WizardStep::BasicDetails);
        steps.basic_confirmed = true;
        assert!(steps.next());
        assert_eq!(steps.step, WizardStep::BankDetails);
        // Bank details never block
        assert!(steps.next());
        assert_eq!(steps.step, WizardStep::Documents);
    }

    #[test]
    fn test_documents_need_files_and_confirmation() {
        let mut steps = at(WizardStep::Documents);
        steps.documents_confirmed = true;
        assert!(!steps.next());
        steps.documents_complete = true;
        steps.documents_confirmed = false;
        assert!(!steps.next());
        steps.documents_confirmed = true;
        assert!(steps.next());
        assert_eq!(steps.step, WizardStep::Review);
    }

    #[test]
    fn test_previous_walks_back() {
        let mut steps = at(WizardStep::Review);
        assert!(steps.previous());
        assert_eq!(steps.step, WizardStep::Documents);
    }

    #[test]
    fn test_return_to_only_goes_back() {
        let mut steps = at(WizardStep::Review);
        assert!(steps.return_to(WizardStep::BasicDetails));
        assert_eq!(steps.step, WizardStep::BasicDetails);
        assert!(!steps.return_to(WizardStep::Review));
        assert_eq!(steps.step, WizardStep::BasicDetails);
    }

    #[test]
    fn test_submit_gate() {
        let mut steps = at(WizardStep::Review);
        assert_eq!(
            steps.check_submit(),
            Err(Notice::warning("Please confirm the details before submitting"))
        );

        steps.submit_confirmed = true;
        assert!(steps.check_submit().is_ok());

        steps.step = WizardStep::Documents;
        assert_eq!(
            steps.check_submit(),
            Err(Notice::warning("Please complete all steps before submitting"))
        );
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<usize> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Documents.title(), "Documents");
    }
}
