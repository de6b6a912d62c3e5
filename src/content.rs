pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "500+", label: "Students Graduated" },
    HeroStat { value: "95%", label: "Employment Rate" },
    HeroStat { value: "8+", label: "Years Established" },
];

pub struct Requirement {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const REQUIREMENTS: [Requirement; 4] = [
    Requirement { title: "Grade 12 Certificate", detail: "Minimum GPA of 2.5 required" },
    Requirement { title: "Age Requirement", detail: "Must be at least 18 years old" },
    Requirement { title: "Health Screening", detail: "Complete medical examination and vaccinations" },
    Requirement { title: "Criminal Record Check", detail: "Clean criminal background required" },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep { number: "01", title: "Application", detail: "Submit your application form online" },
    ProcessStep { number: "02", title: "Documents", detail: "Upload required documents and certificates" },
    ProcessStep { number: "03", title: "Assessment", detail: "Complete entrance exam and interview" },
    ProcessStep { number: "04", title: "Admission", detail: "Receive admission decision within 2-4 weeks" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Rendered in the FAQ section and published as FAQPage structured data.
pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "Do I need work experience to apply?",
        answer: "No, work experience is not required. However, healthcare volunteer work or internships can strengthen your application and help you understand if nursing is right for you.",
    },
    FaqEntry {
        question: "What if I don't have Grade 12 yet?",
        answer: "Grade 12 or equivalent is required for admission. If you're still completing it, apply once you have your certificate.",
    },
    FaqEntry {
        question: "How long does the application process take?",
        answer: "Typically 2-4 weeks from application to admission decision, depending on how quickly you submit documents and schedule your interview.",
    },
    FaqEntry {
        question: "Can I apply if my Grade 12 scores were low?",
        answer: "Yes, you can still apply. We consider your overall profile including motivation, experience, and potential. Your GPA must be at least 2.5.",
    },
    FaqEntry {
        question: "What is the entrance assessment?",
        answer: "Our entrance exam tests your readiness for nursing studies. It covers basic literacy, numeracy, and comprehension. You can take it online or in-person.",
    },
];

pub const NEXT_STEPS: [&str; 3] = [
    "Check your email for confirmation",
    "Prepare required documents",
    "Schedule your entrance assessment",
];
