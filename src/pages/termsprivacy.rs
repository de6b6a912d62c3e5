use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

fn legal_style() -> Html {
    html! {
        <style>
            {r#"
            .legal-content {
                max-width: 48rem;
                margin: 0 auto;
                padding: 6rem 1.5rem 4rem;
                color: #0f172a;
                line-height: 1.6;
                font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
            }
            .legal-content h1 {
                font-size: 2rem;
                margin-bottom: 0.5rem;
            }
            .legal-content .company-name {
                color: #64748b;
                margin-bottom: 2rem;
            }
            .legal-content h2 {
                font-size: 1.25rem;
                margin-top: 2rem;
            }
            .legal-content li {
                margin-bottom: 0.4rem;
                color: #334155;
            }
            .legal-links {
                margin-top: 3rem;
                padding-top: 1.5rem;
                border-top: 1px solid #e2e8f0;
            }
            .legal-links a {
                color: #2563eb;
            }
            "#}
        </style>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>
            <p class="company-name">{config::ACADEMY_NAME}</p>

            <section>
                <h2>{"1. Information We Collect"}</h2>
                <p>{"When you apply through this website we ask for:"}</p>
                <ul>
                    <li>{"Your name, email address and phone number"}</li>
                    <li>{"The program you are interested in and your education level"}</li>
                    <li>{"Optional details about healthcare experience and your motivation to study nursing"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use Your Information"}</h2>
                <ul>
                    <li>{"To assess your application and contact you about admission"}</li>
                    <li>{"To schedule your entrance assessment and interview"}</li>
                    <li>{"To arrange background checks and medical screening you have consented to"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Data Sharing"}</h2>
                <p>{"We do not sell your information. Details are shared only with screening providers and regulators where admission to a SANC-accredited program requires it."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You may ask to see, correct or delete the information we hold about you at any time."}</p>
            </section>

            <section>
                <h2>{"5. Contact Information"}</h2>
                <p>{format!("Email: {}", config::ADMISSIONS_EMAIL)}</p>
                <p>{format!("Location: {}, {}, South Africa", config::LOCALITY, config::REGION)}</p>
            </section>
            { legal_links() }
            { legal_style() }
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <h1>{"Terms and Conditions"}</h1>
            <p class="company-name">{config::ACADEMY_NAME}</p>

            <section>
                <h2>{"1. Applications"}</h2>
                <p>{"Submitting an application does not guarantee admission. Every application is reviewed against the admission requirements published on this website."}</p>
            </section>

            <section>
                <h2>{"2. Accuracy of Information"}</h2>
                <p>{"You must provide true and complete information. Applications containing false information may be rejected or admission withdrawn."}</p>
            </section>

            <section>
                <h2>{"3. Screening"}</h2>
                <ul>
                    <li>{"Admission is subject to a clean criminal record check"}</li>
                    <li>{"A medical examination and required vaccinations must be completed before clinical placement"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Assessment"}</h2>
                <p>{"Applicants complete an entrance assessment covering literacy, numeracy and comprehension, followed by an interview. Decisions are usually communicated within 2-4 weeks."}</p>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{format!("Questions about these terms can be sent to {}.", config::ADMISSIONS_EMAIL)}</p>
            </section>
            { legal_links() }
            { legal_style() }
        </div>
    }
}
