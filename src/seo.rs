use serde_json::{json, Value};
use yew::prelude::*;

use crate::config;
use crate::content::FaqEntry;
use crate::error::PageError;
use crate::state::draft::Program;

pub fn organization_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "EducationalOrganization",
        "name": config::ACADEMY_NAME,
        "description": config::PAGE_DESCRIPTION,
        "url": config::get_site_url(),
        "logo": format!("{}/logo.png", config::get_site_url()),
        "sameAs": config::SOCIAL_PROFILES,
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "Admissions",
            "telephone": config::ADMISSIONS_PHONE_SCHEMA,
            "email": config::ADMISSIONS_EMAIL
        },
        "address": {
            "@type": "PostalAddress",
            "streetAddress": config::LOCALITY,
            "addressLocality": config::LOCALITY,
            "addressRegion": config::REGION,
            "postalCode": config::POSTAL_CODE,
            "addressCountry": config::COUNTRY_CODE
        },
        "areaServed": [config::COUNTRY_CODE],
        "foundingDate": config::FOUNDING_YEAR,
        "knowsAbout": [
            "Nursing Education",
            "Healthcare Training",
            "SANC Accreditation",
            "Nursing Programs"
        ]
    })
}

pub fn faq_schema(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| json!({
            "@type": "Question",
            "name": entry.question,
            "acceptedAnswer": {
                "@type": "Answer",
                "text": entry.answer
            }
        }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    })
}

pub fn program_schema(programs: &[Program]) -> Value {
    let offers: Vec<Value> = programs
        .iter()
        .map(|program| json!({
            "@type": "Offer",
            "name": format!("{} Program", program.label()),
            "description": format!("{}: {}", program.duration(), program.summary())
        }))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "EducationEvent",
        "name": format!("Nursing Programs - {}", config::ACADEMY_NAME),
        "description": "Comprehensive nursing education programs",
        "url": config::get_site_url(),
        "offers": offers
    })
}

/// Sets the document title and upserts `<meta name="description">`.
pub fn apply_document_metadata(title: &str, description: &str) -> Result<(), PageError> {
    let document = web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)?;
    document.set_title(title);

    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            let head = document
                .head()
                .ok_or_else(|| PageError::MissingElement("head".to_string()))?;
            head.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", description)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct StructuredDataProps {
    pub faq: &'static [FaqEntry],
}

#[function_component(StructuredData)]
pub fn structured_data(props: &StructuredDataProps) -> Html {
    let blocks = [
        organization_schema(),
        faq_schema(props.faq),
        program_schema(&Program::ALL),
    ];

    html! {
        <>
            {
                blocks.iter().map(|schema| html! {
                    <script type="application/ld+json">{schema.to_string()}</script>
                }).collect::<Html>()
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQ_ENTRIES;

    #[test]
    fn faq_schema_lists_every_question() {
        let schema = faq_schema(&FAQ_ENTRIES);
        let questions = schema["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), FAQ_ENTRIES.len());
        for (question, entry) in questions.iter().zip(FAQ_ENTRIES.iter()) {
            assert_eq!(question["name"], entry.question);
            assert_eq!(question["acceptedAnswer"]["text"], entry.answer);
        }
    }

    #[test]
    fn program_schema_offers_every_program() {
        let schema = program_schema(&Program::ALL);
        let names: Vec<&str> = schema["offers"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|offer| offer["name"].as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Registered Nurse Program",
                "Enrolled Nurse Program",
                "Midwifery Program",
                "Critical Care Program",
            ]
        );
    }

    #[test]
    fn organization_schema_carries_contact_point() {
        let schema = organization_schema();
        assert_eq!(schema["@type"], "EducationalOrganization");
        assert_eq!(schema["contactPoint"]["email"], config::ADMISSIONS_EMAIL);
        assert_eq!(schema["address"]["addressCountry"], "ZA");
        assert_eq!(schema["sameAs"].as_array().map(Vec::len), Some(3));
    }
}
