use log::{debug, info};

use crate::state::draft::{ApplicationDraft, DraftEdit};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WizardStage {
    #[default]
    Personal,
    ProgramEducation,
    Review,
    Submitted,
}

impl WizardStage {
    pub const STEPS: u8 = 3;

    /// Submitted keeps showing the last step in the header.
    pub fn step_number(self) -> u8 {
        match self {
            WizardStage::Personal => 1,
            WizardStage::ProgramEducation => 2,
            WizardStage::Review | WizardStage::Submitted => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStage::Personal => "Personal Information",
            WizardStage::ProgramEducation => "Program & Education Details",
            WizardStage::Review | WizardStage::Submitted => "Review & Confirmation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    Continue,
    Previous,
    Submit,
    Close,
}

/// The three-step application form and the draft it collects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wizard {
    stage: WizardStage,
    draft: ApplicationDraft,
}

impl Wizard {
    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.stage == WizardStage::Submitted
    }

    pub fn can_continue(&self) -> bool {
        match self.stage {
            WizardStage::Personal => self.draft.personal_details_complete(),
            WizardStage::ProgramEducation => self.draft.program_chosen(),
            WizardStage::Review | WizardStage::Submitted => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.stage, WizardStage::ProgramEducation | WizardStage::Review)
    }

    pub fn can_submit(&self) -> bool {
        self.stage == WizardStage::Review && self.draft.ready_to_submit()
    }

    /// Field edits after submission are dropped; the form is no longer shown.
    pub fn edit(&mut self, edit: DraftEdit) {
        if !self.is_submitted() {
            self.draft.apply_edit(edit);
        }
    }

    pub fn apply(self, event: WizardEvent) -> Self {
        match event {
            WizardEvent::Close => Wizard::default(),
            WizardEvent::Continue if self.can_continue() => {
                let stage = match self.stage {
                    WizardStage::Personal => WizardStage::ProgramEducation,
                    _ => WizardStage::Review,
                };
                Wizard { stage, ..self }
            }
            WizardEvent::Previous if self.can_go_back() => {
                let stage = match self.stage {
                    WizardStage::Review => WizardStage::ProgramEducation,
                    _ => WizardStage::Personal,
                };
                Wizard { stage, ..self }
            }
            WizardEvent::Submit if self.can_submit() => {
                info!(
                    "Application submitted for {}",
                    self.draft.program.map(|p| p.label()).unwrap_or("no program")
                );
                Wizard { stage: WizardStage::Submitted, ..self }
            }
            event => {
                debug!("Ignoring {:?} at {:?}", event, self.stage);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{Consent, Program};

    fn run(wizard: Wizard, events: &[WizardEvent]) -> Wizard {
        events.iter().fold(wizard, |w, e| w.apply(*e))
    }

    fn with_edits(edits: Vec<DraftEdit>) -> Wizard {
        let mut wizard = Wizard::default();
        for edit in edits {
            wizard.edit(edit);
        }
        wizard
    }

    fn personal() -> Vec<DraftEdit> {
        vec![
            DraftEdit::FirstName("Jane".into()),
            DraftEdit::LastName("Doe".into()),
            DraftEdit::Email("jane@x.com".into()),
            DraftEdit::Phone("0531234567".into()),
        ]
    }

    #[test]
    fn full_application_reaches_submitted() {
        let mut wizard = with_edits(personal()).apply(WizardEvent::Continue);
        assert_eq!(wizard.stage(), WizardStage::ProgramEducation);

        wizard.edit(DraftEdit::Program(Some(Program::Midwifery)));
        let mut wizard = wizard.apply(WizardEvent::Continue);
        assert_eq!(wizard.stage(), WizardStage::Review);
        assert_eq!(wizard.draft().program.map(|p| p.label()), Some("Midwifery"));

        wizard.edit(DraftEdit::Consent(Consent::Terms, true));
        wizard.edit(DraftEdit::Consent(Consent::Accuracy, true));
        wizard.edit(DraftEdit::Consent(Consent::Screening, true));
        wizard.edit(DraftEdit::Motivation("I want to help people".into()));
        assert!(wizard.can_submit());

        let wizard = wizard.apply(WizardEvent::Submit);
        assert!(wizard.is_submitted());
        assert_eq!(wizard.stage().step_number(), 3);
    }

    #[test]
    fn continue_blocked_without_email() {
        let mut edits = personal();
        edits.retain(|e| !matches!(e, DraftEdit::Email(_)));
        let wizard = with_edits(edits);
        assert!(!wizard.can_continue());
        assert_eq!(wizard.apply(WizardEvent::Continue).stage(), WizardStage::Personal);
    }

    #[test]
    fn submit_blocked_with_two_consents() {
        let mut edits = personal();
        edits.push(DraftEdit::Program(Some(Program::RegisteredNurse)));
        let mut wizard = run(with_edits(edits), &[WizardEvent::Continue, WizardEvent::Continue]);
        assert_eq!(wizard.stage(), WizardStage::Review);

        wizard.edit(DraftEdit::Motivation("I want to help people".into()));
        wizard.edit(DraftEdit::Consent(Consent::Terms, true));
        wizard.edit(DraftEdit::Consent(Consent::Screening, true));
        assert!(!wizard.can_submit());

        let wizard = wizard.apply(WizardEvent::Submit);
        assert!(!wizard.is_submitted());
        assert_eq!(wizard.stage(), WizardStage::Review);
    }

    #[test]
    fn step_two_needs_a_program() {
        let wizard = with_edits(personal()).apply(WizardEvent::Continue);
        assert!(!wizard.can_continue());
        assert_eq!(wizard.apply(WizardEvent::Continue).stage(), WizardStage::ProgramEducation);
    }

    #[test]
    fn step_number_stays_in_bounds() {
        let mut edits = personal();
        edits.push(DraftEdit::Program(Some(Program::CriticalCare)));
        let mut wizard = with_edits(edits);
        for _ in 0..5 {
            wizard = wizard.apply(WizardEvent::Continue);
            assert!((1..=3).contains(&wizard.stage().step_number()));
        }
        assert_eq!(wizard.stage().step_number(), 3);
        for _ in 0..5 {
            wizard = wizard.apply(WizardEvent::Previous);
            assert!((1..=3).contains(&wizard.stage().step_number()));
        }
        assert_eq!(wizard.stage().step_number(), 1);
    }

    #[test]
    fn previous_keeps_entered_data() {
        let mut edits = personal();
        edits.push(DraftEdit::Program(Some(Program::EnrolledNurse)));
        let wizard = run(
            with_edits(edits),
            &[WizardEvent::Continue, WizardEvent::Continue, WizardEvent::Previous, WizardEvent::Previous],
        );
        assert_eq!(wizard.stage(), WizardStage::Personal);
        assert_eq!(wizard.draft().first_name, "Jane");
        assert_eq!(wizard.draft().program, Some(Program::EnrolledNurse));
    }

    #[test]
    fn close_resets_from_every_stage() {
        let mut edits = personal();
        edits.push(DraftEdit::Program(Some(Program::Midwifery)));
        let base = with_edits(edits);
        for steps in 0..3 {
            let events = vec![WizardEvent::Continue; steps];
            let closed = run(base.clone(), &events).apply(WizardEvent::Close);
            assert_eq!(closed.stage().step_number(), 1);
            assert_eq!(closed.draft(), &ApplicationDraft::default());
        }
    }

    #[test]
    fn submitted_ignores_everything_but_close() {
        let mut edits = personal();
        edits.extend([
            DraftEdit::Program(Some(Program::Midwifery)),
            DraftEdit::Motivation("I want to help people".into()),
            DraftEdit::Consent(Consent::Terms, true),
            DraftEdit::Consent(Consent::Accuracy, true),
            DraftEdit::Consent(Consent::Screening, true),
        ]);
        let mut wizard = run(
            with_edits(edits),
            &[WizardEvent::Continue, WizardEvent::Continue, WizardEvent::Submit],
        );
        assert!(wizard.is_submitted());

        wizard.edit(DraftEdit::FirstName("Changed".into()));
        assert_eq!(wizard.draft().first_name, "Jane");

        let wizard = run(wizard, &[WizardEvent::Previous, WizardEvent::Continue, WizardEvent::Submit]);
        assert!(wizard.is_submitted());
        assert!(!wizard.apply(WizardEvent::Close).is_submitted());
    }
}
