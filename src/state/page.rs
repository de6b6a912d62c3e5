use std::rc::Rc;

use yew::prelude::*;

use crate::state::draft::DraftEdit;
use crate::state::faq::FaqDisclosure;
use crate::state::wizard::{Wizard, WizardEvent};

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    ToggleMenu,
    CloseMenu,
    OpenApplication,
    Edit(DraftEdit),
    Wizard(WizardEvent),
    ToggleFaq(usize),
}

/// Everything the landing page mutates in response to clicks and input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub modal_open: bool,
    pub wizard: Wizard,
    pub faq: FaqDisclosure,
}

impl PageState {
    pub fn apply(self, action: PageAction) -> Self {
        match action {
            PageAction::ToggleMenu => PageState { menu_open: !self.menu_open, ..self },
            PageAction::CloseMenu => PageState { menu_open: false, ..self },
            PageAction::OpenApplication => PageState {
                menu_open: false,
                modal_open: true,
                ..self
            },
            PageAction::Edit(edit) if self.modal_open => {
                let mut wizard = self.wizard;
                wizard.edit(edit);
                PageState { wizard, ..self }
            }
            PageAction::Wizard(WizardEvent::Close) => PageState {
                modal_open: false,
                wizard: self.wizard.apply(WizardEvent::Close),
                ..self
            },
            PageAction::Wizard(event) if self.modal_open => PageState {
                wizard: self.wizard.apply(event),
                ..self
            },
            PageAction::ToggleFaq(index) => PageState { faq: self.faq.toggle(index), ..self },
            PageAction::Edit(_) | PageAction::Wizard(_) => self,
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{Consent, Program};
    use crate::state::wizard::WizardStage;

    fn run(actions: Vec<PageAction>) -> PageState {
        actions.into_iter().fold(PageState::default(), PageState::apply)
    }

    #[test]
    fn scenario_submits_from_open_modal() {
        let state = run(vec![
            PageAction::OpenApplication,
            PageAction::Edit(DraftEdit::FirstName("Jane".into())),
            PageAction::Edit(DraftEdit::LastName("Doe".into())),
            PageAction::Edit(DraftEdit::Email("jane@x.com".into())),
            PageAction::Edit(DraftEdit::Phone("0531234567".into())),
            PageAction::Wizard(WizardEvent::Continue),
            PageAction::Edit(DraftEdit::Program(Some(Program::Midwifery))),
            PageAction::Wizard(WizardEvent::Continue),
            PageAction::Edit(DraftEdit::Consent(Consent::Terms, true)),
            PageAction::Edit(DraftEdit::Consent(Consent::Accuracy, true)),
            PageAction::Edit(DraftEdit::Consent(Consent::Screening, true)),
            PageAction::Edit(DraftEdit::Motivation("I want to help people".into())),
            PageAction::Wizard(WizardEvent::Submit),
        ]);
        assert!(state.modal_open);
        assert!(state.wizard.is_submitted());
    }

    #[test]
    fn edits_ignored_while_modal_closed() {
        let state = run(vec![
            PageAction::Edit(DraftEdit::FirstName("Jane".into())),
            PageAction::Wizard(WizardEvent::Continue),
        ]);
        assert_eq!(state, PageState::default());
    }

    #[test]
    fn closing_hides_modal_and_resets_step() {
        let state = run(vec![
            PageAction::OpenApplication,
            PageAction::Edit(DraftEdit::FirstName("Jane".into())),
            PageAction::Edit(DraftEdit::LastName("Doe".into())),
            PageAction::Edit(DraftEdit::Email("jane@x.com".into())),
            PageAction::Edit(DraftEdit::Phone("0531234567".into())),
            PageAction::Wizard(WizardEvent::Continue),
            PageAction::Wizard(WizardEvent::Close),
        ]);
        assert!(!state.modal_open);
        assert_eq!(state.wizard.stage(), WizardStage::Personal);
        assert!(state.wizard.draft().first_name.is_empty());
    }

    #[test]
    fn opening_application_closes_menu() {
        let state = run(vec![PageAction::ToggleMenu]);
        assert!(state.menu_open);
        let state = state.apply(PageAction::OpenApplication);
        assert!(!state.menu_open);
        assert!(state.modal_open);
    }

    #[test]
    fn faq_toggle_goes_through_page_state() {
        let state = run(vec![PageAction::ToggleFaq(0), PageAction::ToggleFaq(4)]);
        assert_eq!(state.faq.expanded(), Some(4));
    }
}
