use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseChoiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    RegisteredNurse,
    EnrolledNurse,
    Midwifery,
    CriticalCare,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::RegisteredNurse,
        Program::EnrolledNurse,
        Program::Midwifery,
        Program::CriticalCare,
    ];

    /// Form value, also used as the serialized name.
    pub fn value(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "registered-nurse",
            Program::EnrolledNurse => "enrolled-nurse",
            Program::Midwifery => "midwifery",
            Program::CriticalCare => "critical-care",
        }
    }

    /// Short name shown in the application summary.
    pub fn label(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "Registered Nurse",
            Program::EnrolledNurse => "Enrolled Nurse",
            Program::Midwifery => "Midwifery",
            Program::CriticalCare => "Critical Care",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "Registered Nurse (RN)",
            Program::EnrolledNurse => "Enrolled Nurse (EN)",
            Program::Midwifery => "Midwifery",
            Program::CriticalCare => "Critical Care",
        }
    }

    pub fn duration(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "4 Years",
            Program::EnrolledNurse => "2 Years",
            Program::Midwifery => "1 Year",
            Program::CriticalCare => "6 Months",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "Complete professional nursing qualification",
            Program::EnrolledNurse => "Advanced healthcare support qualification",
            Program::Midwifery => "Specialization in maternity care",
            Program::CriticalCare => "Intensive care specialization",
        }
    }

    /// One-liner under each option in the application form.
    pub fn form_hint(self) -> &'static str {
        match self {
            Program::RegisteredNurse => "4-year professional qualification",
            Program::EnrolledNurse => "2-year advanced support qualification",
            Program::Midwifery => "1-year maternity specialization",
            Program::CriticalCare => "6-month intensive care specialization",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Program {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::ALL
            .into_iter()
            .find(|p| p.value() == s)
            .ok_or_else(|| ParseChoiceError { kind: "program", value: s.to_string() })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Grade12,
    Diploma,
    Degree,
    Other,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Grade12,
        EducationLevel::Diploma,
        EducationLevel::Degree,
        EducationLevel::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EducationLevel::Grade12 => "grade12",
            EducationLevel::Diploma => "diploma",
            EducationLevel::Degree => "degree",
            EducationLevel::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Grade12 => "Grade 12 / Matric",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Degree => "Bachelor's Degree",
            EducationLevel::Other => "Other",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationLevel::ALL
            .into_iter()
            .find(|l| l.value() == s)
            .ok_or_else(|| ParseChoiceError { kind: "education level", value: s.to_string() })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Terms,
    Accuracy,
    Screening,
}

/// A single field change coming from the form inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftEdit {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Program(Option<Program>),
    EducationLevel(Option<EducationLevel>),
    WorkExperience(String),
    Motivation(String),
    Consent(Consent, bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub program: Option<Program>,
    pub education_level: Option<EducationLevel>,
    pub work_experience: String,
    pub motivation: String,
    pub agree_terms: bool,
    pub agree_accuracy: bool,
    pub agree_screening: bool,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl ApplicationDraft {
    pub fn apply_edit(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::FirstName(v) => self.first_name = v,
            DraftEdit::LastName(v) => self.last_name = v,
            DraftEdit::Email(v) => self.email = v,
            DraftEdit::Phone(v) => self.phone = v,
            DraftEdit::Program(p) => self.program = p,
            DraftEdit::EducationLevel(l) => self.education_level = l,
            DraftEdit::WorkExperience(v) => self.work_experience = v,
            DraftEdit::Motivation(v) => self.motivation = v,
            DraftEdit::Consent(Consent::Terms, v) => self.agree_terms = v,
            DraftEdit::Consent(Consent::Accuracy, v) => self.agree_accuracy = v,
            DraftEdit::Consent(Consent::Screening, v) => self.agree_screening = v,
        }
    }

    /// Email is only checked for presence; the browser's `type="email"` hint is advisory.
    pub fn personal_details_complete(&self) -> bool {
        filled(&self.first_name) && filled(&self.last_name) && filled(&self.email) && filled(&self.phone)
    }

    pub fn program_chosen(&self) -> bool {
        self.program.is_some()
    }

    pub fn consents_given(&self) -> bool {
        self.agree_terms && self.agree_accuracy && self.agree_screening
    }

    pub fn ready_to_submit(&self) -> bool {
        filled(&self.motivation) && self.consents_given()
    }

    pub fn consent(&self, consent: Consent) -> bool {
        match consent {
            Consent::Terms => self.agree_terms,
            Consent::Accuracy => self.agree_accuracy,
            Consent::Screening => self.agree_screening,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ApplicationDraft {
        let mut draft = ApplicationDraft::default();
        draft.apply_edit(DraftEdit::FirstName("Jane".into()));
        draft.apply_edit(DraftEdit::LastName("Doe".into()));
        draft.apply_edit(DraftEdit::Email("jane@x.com".into()));
        draft.apply_edit(DraftEdit::Phone("0531234567".into()));
        draft
    }

    #[test]
    fn personal_details_need_all_four_fields() {
        assert!(jane().personal_details_complete());

        let mut missing_email = jane();
        missing_email.apply_edit(DraftEdit::Email(String::new()));
        assert!(!missing_email.personal_details_complete());

        let mut blank_phone = jane();
        blank_phone.apply_edit(DraftEdit::Phone("   ".into()));
        assert!(!blank_phone.personal_details_complete());
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut draft = jane();
        draft.apply_edit(DraftEdit::Email("not-an-email".into()));
        assert!(draft.personal_details_complete());
    }

    #[test]
    fn submit_needs_motivation_and_every_consent() {
        let mut draft = jane();
        draft.apply_edit(DraftEdit::Motivation("I want to help people".into()));
        draft.apply_edit(DraftEdit::Consent(Consent::Terms, true));
        draft.apply_edit(DraftEdit::Consent(Consent::Accuracy, true));
        assert!(!draft.ready_to_submit());

        draft.apply_edit(DraftEdit::Consent(Consent::Screening, true));
        assert!(draft.ready_to_submit());

        draft.apply_edit(DraftEdit::Motivation(String::new()));
        assert!(!draft.ready_to_submit());
    }

    #[test]
    fn program_values_parse_back() {
        for program in Program::ALL {
            assert_eq!(program.value().parse::<Program>(), Ok(program));
        }
        assert_eq!("midwifery".parse::<Program>().map(Program::label), Ok("Midwifery"));
        assert!("rn".parse::<Program>().is_err());
    }

    #[test]
    fn education_values_parse_back() {
        for level in EducationLevel::ALL {
            assert_eq!(level.value().parse::<EducationLevel>(), Ok(level));
        }
        let err = "".parse::<EducationLevel>().unwrap_err();
        assert_eq!(err.kind, "education level");
    }

    #[test]
    fn serde_names_match_form_values() {
        let json = serde_json::to_string(&Program::CriticalCare).unwrap();
        assert_eq!(json, "\"critical-care\"");
        let json = serde_json::to_string(&EducationLevel::Grade12).unwrap();
        assert_eq!(json, "\"grade12\"");
    }

    #[test]
    fn full_name_skips_missing_parts() {
        assert_eq!(jane().full_name(), "Jane Doe");
        let mut only_first = ApplicationDraft::default();
        only_first.apply_edit(DraftEdit::FirstName("Jane".into()));
        assert_eq!(only_first.full_name(), "Jane");
    }
}
