use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{PROCESS_STEPS, REQUIREMENTS};
use crate::state::draft::Program;
use crate::Route;

#[function_component(ProgramsSection)]
pub fn programs_section() -> Html {
    html! {
        <section id="programs" class="page-section" data-animate="true">
            <div class="section-inner">
                <h2 class="section-title">{"Our Nursing Programs"}</h2>
                <div class="card-grid two">
                    {
                        Program::ALL.iter().map(|program| html! {
                            <div class="card program-card" key={program.value()}>
                                <div class="card-heading">
                                    <div class="card-icon">{"📄"}</div>
                                    <div>
                                        <h3>{program.title()}</h3>
                                        <p class="program-duration">{program.duration()}</p>
                                    </div>
                                </div>
                                <p class="card-text">{program.summary()}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(RequirementsSection)]
pub fn requirements_section() -> Html {
    html! {
        <section id="requirements" class="page-section muted" data-animate="true">
            <div class="section-inner">
                <h2 class="section-title">{"Admission Requirements"}</h2>
                <div class="card-grid two">
                    {
                        REQUIREMENTS.iter().map(|req| html! {
                            <div class="card" key={req.title}>
                                <div class="card-heading">
                                    <span class="check-icon">{"✓"}</span>
                                    <h3>{req.title}</h3>
                                </div>
                                <p class="card-text">{req.detail}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    let last = PROCESS_STEPS.len() - 1;
    html! {
        <section id="how-it-works" class="page-section" data-animate="true">
            <div class="section-inner">
                <h2 class="section-title">{"How the Application Process Works"}</h2>
                <div class="card-grid four">
                    {
                        PROCESS_STEPS.iter().enumerate().map(|(idx, step)| html! {
                            <div class="process-step" key={step.number}>
                                <div class="step-number">{step.number}</div>
                                <h3>{step.title}</h3>
                                <p class="card-text">{step.detail}</p>
                                if idx < last {
                                    <span class="step-arrow">{"→"}</span>
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="page-section muted" data-animate="true">
            <div class="section-inner">
                <h2 class="section-title">{format!("Contact {}", config::ACADEMY_NAME)}</h2>
                <div class="card-grid three">
                    <div class="card centered">
                        <div class="contact-icon">{"📞"}</div>
                        <h3>{"Call Us"}</h3>
                        <a href={config::ADMISSIONS_PHONE_HREF} class="contact-link">{config::ADMISSIONS_PHONE}</a>
                        <p class="contact-note">{config::OFFICE_HOURS}</p>
                    </div>
                    <div class="card centered">
                        <div class="contact-icon">{"✉️"}</div>
                        <h3>{"Email"}</h3>
                        <a href={format!("mailto:{}", config::ADMISSIONS_EMAIL)} class="contact-link">
                            {config::ADMISSIONS_EMAIL}
                        </a>
                        <p class="contact-note">{"Response within 24 hours"}</p>
                    </div>
                    <div class="card centered">
                        <div class="contact-icon">{"📍"}</div>
                        <h3>{"Visit Us"}</h3>
                        <p class="contact-place">{config::LOCALITY}</p>
                        <p class="contact-note">{format!("{}, South Africa", config::REGION)}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_apply: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    let start_application = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_apply.emit(());
        })
    };

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="nav-monogram">{config::MONOGRAM}</span>
                            <span>{config::SHORT_NAME}</span>
                        </div>
                        <p>{format!("Professional SANC-accredited nursing education in {}, {}.", config::LOCALITY, config::REGION)}</p>
                    </div>
                    <div>
                        <h4>{"Programs"}</h4>
                        <ul>
                            <li><a href="#programs">{"All Programs"}</a></li>
                            <li><a href="#requirements">{"Requirements"}</a></li>
                            <li><a href="#how-it-works">{"Process"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Apply"}</h4>
                        <ul>
                            <li><a href="#" onclick={start_application}>{"Start Application"}</a></li>
                            <li><a href="#faq">{"FAQ"}</a></li>
                            <li><a href="#contact">{"Contact"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>></li>
                            <li><a href="#contact">{"Contact"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved. SANC Accredited.", year, config::ACADEMY_NAME)}</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #0f172a;
                    color: #94a3b8;
                    padding: 3rem 0;
                    font-size: 0.875rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .site-footer h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer li {
                    margin-bottom: 0.5rem;
                }
                .site-footer a {
                    color: #94a3b8;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #fff;
                }
                .footer-bottom {
                    border-top: 1px solid #1e293b;
                    padding-top: 2rem;
                }
                "#}
            </style>
        </footer>
    }
}
