pub const ACADEMY_NAME: &str = "Sasinelwa Training Academy";
pub const SHORT_NAME: &str = "Sasinelwa Academy";
pub const MONOGRAM: &str = "STA";

pub const PAGE_TITLE: &str = "Sasinelwa Training Academy | SANC-Accredited Nursing Programs in Kimberley";
pub const PAGE_DESCRIPTION: &str = "SANC-accredited nursing training academy in Kimberley, Northern Cape. Professional nursing programs including Registered Nurse, Enrolled Nurse, Midwifery, and Critical Care.";

pub const ADMISSIONS_EMAIL: &str = "admissions@sasinelwaacademy.co.za";
pub const ADMISSIONS_PHONE: &str = "+27 (0) 53 XXX XXXX";
pub const ADMISSIONS_PHONE_HREF: &str = "tel:+27xxxxxxxxxx";
pub const ADMISSIONS_PHONE_SCHEMA: &str = "+27-53-XXXX-XXXX";
pub const OFFICE_HOURS: &str = "Mon-Fri, 08:00 - 17:00";

pub const LOCALITY: &str = "Kimberley";
pub const REGION: &str = "Northern Cape";
pub const POSTAL_CODE: &str = "8300";
pub const COUNTRY_CODE: &str = "ZA";
pub const FOUNDING_YEAR: &str = "2015";

pub const SOCIAL_PROFILES: [&str; 3] = [
    "https://www.facebook.com/sasinelwaacademy",
    "https://www.linkedin.com/company/sasinelwa-academy",
    "https://www.instagram.com/sasinelwaacademy",
];

pub const HERO_IMAGE_URL: &str =
    "https://images.pexels.com/photos/5721671/pexels-photo-5721671.jpeg?auto=compress&cs=tinysrgb&w=1600";

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://hpo.sasinelwa.co.za"
}
