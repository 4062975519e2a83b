use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const OVERVIEW_PLACEHOLDER: &str = "No description provided in source data.";
pub const NOT_PROVIDED: &str = "Not provided in source data.";
pub const DIFFICULTY_PLACEHOLDER: &str = "Unknown (not provided)";
pub const TAKEAWAYS_PLACEHOLDER: &str = "Insufficient information to extract takeaways.";
pub const HOURS_PLACEHOLDER: &str = "Unknown";
pub const RELEVANCE_JUSTIFICATION: &str =
    "Cannot rate relevance because the room dataset only provides titles without descriptions.";

/// Column headers of the scalar fields, in output order.
pub const SCALAR_FIELDS: [&str; 7] = [
    "Room Title",
    "Overview",
    "Skills Covered",
    "Tools & Technologies",
    "Difficulty",
    "Key Takeaways",
    "Hours",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceEntry {
    pub score: Option<f64>,
    pub justification: String,
}

impl RelevanceEntry {
    pub fn unrated() -> Self {
        Self {
            score: None,
            justification: RELEVANCE_JUSTIFICATION.to_string(),
        }
    }
}

/// Keyed by team display name, in first-insertion order.
pub type RelevanceMap = IndexMap<String, RelevanceEntry>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(rename = "Room Title")]
    pub room_title: String,
    #[serde(rename = "Overview")]
    pub overview: String,
    #[serde(rename = "Skills Covered")]
    pub skills_covered: String,
    #[serde(rename = "Tools & Technologies")]
    pub tools_and_technologies: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    #[serde(rename = "Key Takeaways")]
    pub key_takeaways: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Relevance by IT Role")]
    pub relevance: RelevanceMap,
}

impl SummaryRecord {
    /// Look up a scalar field by its column header.
    pub fn csv_field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "Room Title" => &self.room_title,
            "Overview" => &self.overview,
            "Skills Covered" => &self.skills_covered,
            "Tools & Technologies" => &self.tools_and_technologies,
            "Difficulty" => &self.difficulty,
            "Key Takeaways" => &self.key_takeaways,
            "Hours" => &self.hours,
            _ => return None,
        };
        Some(value.as_str())
    }
}
