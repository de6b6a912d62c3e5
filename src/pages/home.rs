use log::{info, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::application_modal::ApplicationModal;
use crate::components::faq::FaqSection;
use crate::components::hero::Hero;
use crate::components::nav::Nav;
use crate::components::sections::{ContactSection, Footer, ProcessSection, ProgramsSection, RequirementsSection};
use crate::config;
use crate::content::FAQ_ENTRIES;
use crate::effects::entry::use_entry_animations;
use crate::seo::{apply_document_metadata, StructuredData};
use crate::state::page::{PageAction, PageState};
use crate::state::wizard::WizardEvent;

#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer(PageState::default);

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            if let Err(e) = apply_document_metadata(config::PAGE_TITLE, config::PAGE_DESCRIPTION) {
                warn!("Could not set page metadata: {}", e);
            }
            || ()
        },
        (),
    );

    use_entry_animations();

    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: PageAction| dispatcher.dispatch(action))
    };

    {
        let on_action = on_action.clone();
        let modal_open = state.modal_open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if modal_open && e.key() == "Escape" {
                on_action.emit(PageAction::Wizard(WizardEvent::Close));
            }
        });
    }

    let open_application = on_action.reform(|_: ()| {
        info!("Opening application form");
        PageAction::OpenApplication
    });

    html! {
        <div class="landing-page">
            <StructuredData faq={&FAQ_ENTRIES[..]} />
            <Nav
                menu_open={state.menu_open}
                on_toggle_menu={on_action.reform(|_| PageAction::ToggleMenu)}
                on_close_menu={on_action.reform(|_| PageAction::CloseMenu)}
                on_apply={open_application.clone()}
            />

            <main class="page-main">
                <Hero on_apply={open_application.clone()} />
                <ProgramsSection />
                <div class="divider"></div>
                <RequirementsSection />
                <div class="divider"></div>
                <ProcessSection />
                <div class="divider"></div>
                <FaqSection
                    entries={&FAQ_ENTRIES[..]}
                    expanded={state.faq.expanded()}
                    on_toggle={on_action.reform(PageAction::ToggleFaq)}
                />
                <div class="divider"></div>
                <ContactSection />
                <Footer on_apply={open_application} />
            </main>

            if state.modal_open {
                <ApplicationModal wizard={state.wizard.clone()} on_action={on_action.clone()} />
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #0f172a;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                }
                .page-main {
                    padding-top: 4rem;
                }
                .page-section {
                    background: #ffffff;
                    padding: 6rem 0;
                }
                .page-section.muted {
                    background: #f8fafc;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-inner.narrow {
                    max-width: 48rem;
                }
                .section-title {
                    font-size: clamp(1.5rem, 4vw, 2.25rem);
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .divider {
                    border-top: 1px solid #e2e8f0;
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: 1fr;
                }
                @media (min-width: 768px) {
                    .card-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .card-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .card-grid.four {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 8px;
                    padding: 2rem;
                    transition: box-shadow 0.2s ease;
                }
                .card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .card.centered {
                    text-align: center;
                }
                .card h3, .process-step h3 {
                    font-weight: 700;
                    margin: 0 0 0.75rem;
                }
                .card-heading {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .card-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    background: #dbeafe;
                    border-radius: 4px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .program-duration {
                    color: #2563eb;
                    font-weight: 600;
                    font-size: 0.875rem;
                    margin: 0;
                }
                .card-text {
                    color: #475569;
                    font-size: 0.9rem;
                }
                .check-icon {
                    color: #16a34a;
                    font-weight: 700;
                }
                .process-step {
                    position: relative;
                    text-align: center;
                }
                .step-number {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #2563eb;
                    margin-bottom: 1rem;
                }
                .step-arrow {
                    position: absolute;
                    top: 0.75rem;
                    right: -1.5rem;
                    color: #93c5fd;
                    font-size: 1.5rem;
                }
                @media (max-width: 767px) {
                    .step-arrow {
                        display: none;
                    }
                }
                .contact-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .contact-link {
                    color: #2563eb;
                    font-weight: 600;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .contact-place {
                    color: #475569;
                    font-weight: 600;
                    margin: 0;
                }
                .contact-note {
                    color: #475569;
                    font-size: 0.75rem;
                    margin-top: 0.75rem;
                }
                .entry-animations [data-animate] {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .entry-animations [data-animate].entered {
                    opacity: 1;
                    transform: translateY(0);
                }
                @keyframes fadeIn {
                    from {
                        opacity: 0;
                        transform: translateY(10px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </div>
    }
}
