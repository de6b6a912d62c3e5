use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

use crate::config;
use crate::content::NEXT_STEPS;
use crate::state::draft::{ApplicationDraft, Consent, DraftEdit, EducationLevel, Program};
use crate::state::page::PageAction;
use crate::state::wizard::{Wizard, WizardEvent, WizardStage};

#[derive(Properties, PartialEq)]
pub struct ApplicationModalProps {
    pub wizard: Wizard,
    pub on_action: Callback<PageAction>,
}

fn text_input(on_action: &Callback<PageAction>, edit: fn(String) -> DraftEdit) -> Callback<InputEvent> {
    on_action.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        PageAction::Edit(edit(input.value()))
    })
}

fn text_area(on_action: &Callback<PageAction>, edit: fn(String) -> DraftEdit) -> Callback<InputEvent> {
    on_action.reform(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        PageAction::Edit(edit(area.value()))
    })
}

fn consent_toggle(on_action: &Callback<PageAction>, consent: Consent) -> Callback<Event> {
    on_action.reform(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        PageAction::Edit(DraftEdit::Consent(consent, input.checked()))
    })
}

/// Tracks a press on the modal backdrop. A click only dismisses the modal when
/// the press also started on the backdrop, so a drag that begins inside the
/// dialog and ends outside it keeps the draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackdropPress {
    armed: bool,
}

impl BackdropPress {
    pub fn press(self, on_backdrop: bool) -> Self {
        Self { armed: on_backdrop }
    }

    /// Returns the reset press and whether the click should close the modal.
    pub fn release(self, on_backdrop: bool) -> (Self, bool) {
        (Self::default(), self.armed && on_backdrop)
    }
}

fn wizard_event(on_action: &Callback<PageAction>, event: WizardEvent) -> Callback<MouseEvent> {
    on_action.reform(move |e: MouseEvent| {
        e.prevent_default();
        PageAction::Wizard(event)
    })
}

fn required() -> Html {
    html! { <span class="required">{"*"}</span> }
}

fn personal_step(draft: &ApplicationDraft, on_action: &Callback<PageAction>) -> Html {
    html! {
        <div class="form-step">
            <div class="form-field">
                <label for="first-name">{"First Name "}{required()}</label>
                <input id="first-name" type="text" placeholder="Enter your first name" required={true}
                    value={draft.first_name.clone()}
                    oninput={text_input(on_action, DraftEdit::FirstName)} />
            </div>
            <div class="form-field">
                <label for="last-name">{"Last Name "}{required()}</label>
                <input id="last-name" type="text" placeholder="Enter your last name" required={true}
                    value={draft.last_name.clone()}
                    oninput={text_input(on_action, DraftEdit::LastName)} />
            </div>
            <div class="form-field">
                <label for="email">{"Email Address "}{required()}</label>
                <input id="email" type="email" placeholder="your.email@example.com" required={true}
                    value={draft.email.clone()}
                    oninput={text_input(on_action, DraftEdit::Email)} />
                <p class="field-hint">{"We'll use this to contact you about your application"}</p>
            </div>
            <div class="form-field">
                <label for="phone">{"Phone Number "}{required()}</label>
                <input id="phone" type="tel" placeholder={config::ADMISSIONS_PHONE} required={true}
                    value={draft.phone.clone()}
                    oninput={text_input(on_action, DraftEdit::Phone)} />
            </div>
        </div>
    }
}

fn program_step(draft: &ApplicationDraft, on_action: &Callback<PageAction>) -> Html {
    let select_program = on_action.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        PageAction::Edit(DraftEdit::Program(input.value().parse::<Program>().ok()))
    });
    let select_education = on_action.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        PageAction::Edit(DraftEdit::EducationLevel(select.value().parse::<EducationLevel>().ok()))
    });

    html! {
        <div class="form-step">
            <div class="form-field">
                <label>{"Select Program "}{required()}</label>
                <div class="program-options">
                    {
                        Program::ALL.iter().map(|program| html! {
                            <label class="program-option" key={program.value()}>
                                <input type="radio" name="program" required={true}
                                    value={program.value()}
                                    checked={draft.program == Some(*program)}
                                    onchange={select_program.clone()} />
                                <div>
                                    <p class="option-title">{program.title()}</p>
                                    <p class="option-hint">{program.form_hint()}</p>
                                </div>
                            </label>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="form-field">
                <label for="education-level">{"Education Level "}{required()}</label>
                <select id="education-level" required={true} onchange={select_education}>
                    <option value="" selected={draft.education_level.is_none()}>
                        {"Select your education level"}
                    </option>
                    {
                        EducationLevel::ALL.iter().map(|level| html! {
                            <option key={level.value()} value={level.value()}
                                selected={draft.education_level == Some(*level)}>
                                {level.label()}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <div class="form-field">
                <label for="work-experience">
                    {"Healthcare Experience "}<span class="optional">{"(Optional)"}</span>
                </label>
                <textarea id="work-experience" rows="3"
                    placeholder="Tell us about any relevant healthcare volunteer work, internships, or experience"
                    value={draft.work_experience.clone()}
                    oninput={text_area(on_action, DraftEdit::WorkExperience)} />
                <p class="field-hint">{"This helps us understand your background and motivation"}</p>
            </div>
        </div>
    }
}

fn summary_row(label: &'static str, value: String) -> Html {
    html! {
        <div class="summary-row">
            <span class="summary-label">{label}</span>
            <span class="summary-value">{value}</span>
        </div>
    }
}

fn review_step(draft: &ApplicationDraft, on_action: &Callback<PageAction>) -> Html {
    let consents = [
        (Consent::Terms, html! {
            <>
                {"I have read and agree to the "}
                <a href="/terms" target="_blank" rel="noopener noreferrer">{"terms and conditions"}</a>
            </>
        }),
        (Consent::Accuracy, html! { {"I certify that the information provided is true and accurate"} }),
        (Consent::Screening, html! { {"I consent to background check and medical screening as required"} }),
    ];

    html! {
        <div class="form-step">
            <div class="summary-box">
                <h3>{"Application Summary"}</h3>
                { summary_row("Name:", draft.full_name()) }
                { summary_row("Email:", draft.email.clone()) }
                { summary_row("Phone:", draft.phone.clone()) }
                <div class="summary-divider"></div>
                { summary_row("Program:", draft.program.map(|p| p.label()).unwrap_or_default().to_string()) }
                { summary_row(
                    "Education:",
                    draft.education_level.map(|l| l.label()).unwrap_or("Not specified").to_string(),
                ) }
            </div>
            <div class="form-field">
                <label for="motivation">{"Why do you want to study nursing? "}{required()}</label>
                <textarea id="motivation" rows="3" required={true}
                    placeholder="Share your motivation and goals..."
                    value={draft.motivation.clone()}
                    oninput={text_area(on_action, DraftEdit::Motivation)} />
            </div>
            <div class="consent-box">
                <p class="consent-title">{"Confirmations"}</p>
                {
                    consents.into_iter().map(|(consent, text)| html! {
                        <label class="consent-option">
                            <input type="checkbox" required={true}
                                checked={draft.consent(consent)}
                                onchange={consent_toggle(on_action, consent)} />
                            <span>{text}</span>
                        </label>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn submitted_view(on_action: &Callback<PageAction>) -> Html {
    html! {
        <div class="submitted-view">
            <div class="success-icon">{"✓"}</div>
            <h3>{"Application Submitted!"}</h3>
            <p>{format!("Thank you for applying to {}.", config::ACADEMY_NAME)}</p>
            <p class="submitted-note">
                {"We'll review your application and contact you within 2-4 weeks at the email and phone number you provided."}
            </p>
            <div class="next-steps">
                <p class="next-title">{"What's Next?"}</p>
                <ul>
                    { for NEXT_STEPS.iter().map(|step| html! { <li>{format!("✓ {}", step)}</li> }) }
                </ul>
            </div>
            <button class="modal-button primary" onclick={wizard_event(on_action, WizardEvent::Close)}>
                {"Close"}
            </button>
        </div>
    }
}

#[function_component(ApplicationModal)]
pub fn application_modal(props: &ApplicationModalProps) -> Html {
    let ApplicationModalProps { wizard, on_action } = props;
    let stage = wizard.stage();
    let draft = wizard.draft();

    let body = match stage {
        WizardStage::Personal => personal_step(draft, on_action),
        WizardStage::ProgramEducation => program_step(draft, on_action),
        WizardStage::Review => review_step(draft, on_action),
        WizardStage::Submitted => submitted_view(on_action),
    };

    let backdrop_press = use_mut_ref(BackdropPress::default);
    let on_backdrop_down = {
        let backdrop_press = backdrop_press.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e.target() == e.current_target();
            let press = *backdrop_press.borrow();
            *backdrop_press.borrow_mut() = press.press(on_backdrop);
        })
    };
    let on_backdrop_click = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e.target() == e.current_target();
            let press = *backdrop_press.borrow();
            let (press, dismiss) = press.release(on_backdrop);
            *backdrop_press.borrow_mut() = press;
            if dismiss {
                on_action.emit(PageAction::Wizard(WizardEvent::Close));
            }
        })
    };

    html! {
        <div class="modal-backdrop" onmousedown={on_backdrop_down} onclick={on_backdrop_click}>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="application-title">
                <div class="modal-header">
                    <div>
                        <h2 id="application-title">{"Application Form"}</h2>
                        <p>{format!("Step {} of {}", stage.step_number(), WizardStage::STEPS)}</p>
                    </div>
                    <button class="modal-close" aria-label="Close" onclick={wizard_event(on_action, WizardEvent::Close)}>
                        {"✕"}
                    </button>
                </div>

                <div class="modal-progress">
                    <div class="progress-track">
                        {
                            (1..=WizardStage::STEPS).map(|step| html! {
                                <div class="progress-segment" key={step as usize}>
                                    <div class={classes!("progress-fill", (step <= stage.step_number()).then(|| "filled"))}></div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="progress-title">{stage.title()}</div>
                </div>

                <div class="modal-body">
                    <form class="application-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        { body }
                    </form>
                </div>

                if !wizard.is_submitted() {
                    <div class="modal-footer">
                        <button type="button" class="modal-button"
                            disabled={!wizard.can_go_back()}
                            onclick={wizard_event(on_action, WizardEvent::Previous)}>
                            {"Previous"}
                        </button>
                        <div class="footer-actions">
                            <button type="button" class="modal-button" onclick={wizard_event(on_action, WizardEvent::Close)}>
                                {"Cancel"}
                            </button>
                            if stage == WizardStage::Review {
                                <button type="button" class="modal-button submit"
                                    disabled={!wizard.can_submit()}
                                    onclick={wizard_event(on_action, WizardEvent::Submit)}>
                                    {"Submit Application"}
                                </button>
                            } else {
                                <button type="button" class="modal-button primary"
                                    disabled={!wizard.can_continue()}
                                    onclick={wizard_event(on_action, WizardEvent::Continue)}>
                                    {"Continue"}
                                </button>
                            }
                        </div>
                    </div>
                }
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    z-index: 60;
                }
                .modal {
                    background: #fff;
                    border-radius: 12px;
                    max-width: 42rem;
                    width: 100%;
                    max-height: 95vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .modal-header {
                    background: linear-gradient(to right, #2563eb, #1d4ed8);
                    padding: 1.5rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: #fff;
                }
                .modal-header h2 {
                    margin: 0;
                    font-size: 1.5rem;
                }
                .modal-header p {
                    margin: 0.25rem 0 0;
                    color: #dbeafe;
                    font-size: 0.875rem;
                }
                .modal-close {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.25rem;
                    padding: 0.5rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .modal-close:hover {
                    background: #3b82f6;
                }
                .modal-progress {
                    background: #eff6ff;
                    padding: 1rem 2rem;
                }
                .progress-track {
                    display: flex;
                    gap: 0.5rem;
                }
                .progress-segment {
                    flex: 1;
                    height: 4px;
                    background: #cbd5e1;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .progress-fill {
                    height: 100%;
                    width: 0;
                    transition: width 0.3s ease;
                }
                .progress-fill.filled {
                    width: 100%;
                    background: #2563eb;
                }
                .progress-title {
                    margin-top: 0.75rem;
                    font-size: 0.75rem;
                    color: #475569;
                }
                .modal-body {
                    flex: 1;
                    overflow-y: auto;
                    padding: 2rem;
                }
                .form-step {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    animation: fadeIn 0.3s ease-out;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #0f172a;
                    margin-bottom: 0.5rem;
                }
                .form-field input[type="text"],
                .form-field input[type="email"],
                .form-field input[type="tel"],
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font-size: 0.875rem;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #3b82f6;
                }
                .required {
                    color: #ef4444;
                }
                .optional, .field-hint {
                    color: #64748b;
                    font-weight: 400;
                }
                .field-hint {
                    font-size: 0.75rem;
                    margin-top: 0.25rem;
                }
                .program-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .program-option {
                    display: flex !important;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .program-option:hover {
                    background: #eff6ff;
                }
                .option-title {
                    margin: 0;
                    font-weight: 600;
                }
                .option-hint {
                    margin: 0;
                    font-size: 0.75rem;
                    font-weight: 400;
                    color: #475569;
                }
                .summary-box {
                    background: #eff6ff;
                    border: 1px solid #bfdbfe;
                    border-radius: 8px;
                    padding: 1.25rem;
                    font-size: 0.875rem;
                }
                .summary-box h3 {
                    margin: 0 0 1rem;
                    font-size: 1rem;
                }
                .summary-row {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.75rem;
                }
                .summary-label {
                    color: #475569;
                }
                .summary-value {
                    font-weight: 600;
                    color: #0f172a;
                }
                .summary-divider {
                    border-top: 1px solid #bfdbfe;
                    margin: 0.75rem 0;
                }
                .consent-box {
                    background: #f8fafc;
                    padding: 1rem;
                    border-radius: 8px;
                }
                .consent-title {
                    font-weight: 600;
                    font-size: 0.875rem;
                    margin: 0 0 1rem;
                }
                .consent-option {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #334155;
                    margin-bottom: 0.75rem;
                    cursor: pointer;
                }
                .consent-option input {
                    margin-top: 0.25rem;
                    accent-color: #2563eb;
                }
                .submitted-view {
                    text-align: center;
                    padding: 3rem 0;
                    animation: fadeIn 0.3s ease-out;
                }
                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .submitted-note {
                    font-size: 0.875rem;
                    color: #64748b;
                    margin-bottom: 2rem;
                }
                .next-steps {
                    background: #eff6ff;
                    border: 1px solid #bfdbfe;
                    border-radius: 8px;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    text-align: left;
                }
                .next-title {
                    font-size: 0.75rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .next-steps ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .modal-footer {
                    background: #f8fafc;
                    border-top: 1px solid #e2e8f0;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    gap: 0.75rem;
                }
                .footer-actions {
                    display: flex;
                    gap: 0.5rem;
                }
                .modal-button {
                    padding: 0.6rem 1.5rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    background: #fff;
                    font-weight: 600;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .modal-button.primary {
                    background: #2563eb;
                    border-color: #2563eb;
                    color: #fff;
                }
                .modal-button.submit {
                    background: #16a34a;
                    border-color: #16a34a;
                    color: #fff;
                }
                .modal-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_backdrop_after_press_on_backdrop_closes() {
        let press = BackdropPress::default().press(true);
        let (press, dismiss) = press.release(true);
        assert!(dismiss);
        assert_eq!(press, BackdropPress::default());
    }

    #[test]
    fn drag_from_dialog_to_backdrop_keeps_modal_open() {
        let press = BackdropPress::default().press(false);
        let (_, dismiss) = press.release(true);
        assert!(!dismiss);
    }

    #[test]
    fn click_inside_dialog_never_closes() {
        let (_, dismiss) = BackdropPress::default().press(true).release(false);
        assert!(!dismiss);
        let (_, dismiss) = BackdropPress::default().press(false).release(false);
        assert!(!dismiss);
    }

    #[test]
    fn release_without_press_does_not_close() {
        let (_, dismiss) = BackdropPress::default().release(true);
        assert!(!dismiss);

        let (press, _) = BackdropPress::default().press(true).release(true);
        let (_, dismiss) = press.release(true);
        assert!(!dismiss);
    }
}
