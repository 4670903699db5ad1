use serde::{Deserialize, Serialize};

/// One job-application record, keyed by title.
///
/// Field renames preserve the legacy column/JSON names the form and the CSV
/// file have always used. Every field is a free-form string; `status` is one
/// of Applied/Interview/Rejected/Accepted by convention but the store does
/// not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(rename = "Job Title", default)]
    pub title: String,
    #[serde(rename = "Company", default)]
    pub company: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Package", default)]
    pub package: String,
    #[serde(rename = "Experience(Years)", default)]
    pub experience_years: String,
    #[serde(rename = "Qualification", default)]
    pub qualification: String,
}
