//! Resume record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and contact block. Exactly one per resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Full display name, also the basis for the export filename
    pub full_name: String,

    /// Professional title shown under the name
    pub title: String,

    pub email: String,
    pub phone: String,
    pub location: String,

    /// Personal website, omitted from output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Free-form professional summary
    pub summary: String,
}

/// One work history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    /// Unique within the work experience list
    pub id: String,

    pub company: String,
    pub position: String,
    pub location: String,

    /// Start date, normally `YYYY-MM`
    pub start_date: String,

    /// End date; empty when `current` is set
    pub end_date: String,

    /// Current position. Renderers show "Present" instead of the end date.
    pub current: bool,

    pub description: String,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Unique within the education list
    pub id: String,

    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// A named skill with a 1-5 self-assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Unique within the skills list
    pub id: String,

    pub name: String,

    /// 1 (Beginner) to 5 (Expert). Values outside the range are clamped
    /// wherever they are consumed.
    pub level: u8,
}

/// Spoken language proficiency, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proficiency {
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Fluent,
    Native,
}

impl Proficiency {
    /// Display proportion used for progress bars, identical across templates.
    pub fn percent(self) -> u8 {
        match self {
            Proficiency::Native => 100,
            Proficiency::Fluent => 90,
            Proficiency::Advanced => 75,
            Proficiency::Intermediate => 50,
            Proficiency::Basic => 25,
        }
    }

    /// All variants, weakest first.
    pub fn all() -> [Proficiency; 5] {
        [
            Proficiency::Basic,
            Proficiency::Intermediate,
            Proficiency::Advanced,
            Proficiency::Fluent,
            Proficiency::Native,
        ]
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Basic => "Basic",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Fluent => "Fluent",
            Proficiency::Native => "Native",
        };
        f.write_str(label)
    }
}

/// One spoken language entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// Unique within the languages list
    pub id: String,

    pub name: String,
    pub proficiency: Proficiency,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    /// Unique within the certifications list
    pub id: String,

    pub name: String,
    pub organization: String,
    pub date: String,

    /// Issuer credential id, omitted from output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

/// The aggregate resume record.
///
/// Always fully populated: an empty resume is empty lists and empty strings,
/// never absent sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
}

impl ResumeData {
    /// Create a resume with every section empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the summary section has anything to show.
    pub fn has_summary(&self) -> bool {
        !self.personal.summary.trim().is_empty()
    }

    /// Whether any section at all has content.
    pub fn is_empty(&self) -> bool {
        !self.has_summary()
            && self.personal.full_name.trim().is_empty()
            && self.work_experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.languages.is_empty()
            && self.certifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume() {
        let resume = ResumeData::empty();
        assert!(resume.is_empty());
        assert!(!resume.has_summary());
        assert!(resume.work_experience.is_empty());
    }

    #[test]
    fn test_proficiency_percent_table() {
        assert_eq!(Proficiency::Native.percent(), 100);
        assert_eq!(Proficiency::Fluent.percent(), 90);
        assert_eq!(Proficiency::Advanced.percent(), 75);
        assert_eq!(Proficiency::Intermediate.percent(), 50);
        assert_eq!(Proficiency::Basic.percent(), 25);
    }

    #[test]
    fn test_camel_case_layout() {
        let mut resume = ResumeData::empty();
        resume.personal.full_name = "Jane Doe".to_string();
        resume.work_experience.push(WorkExperience {
            id: "work1".to_string(),
            start_date: "2020-03".to_string(),
            current: true,
            ..Default::default()
        });

        let json = serde_json::to_string(&resume).unwrap();
        assert!(json.contains("\"fullName\":\"Jane Doe\""));
        assert!(json.contains("\"workExperience\""));
        assert!(json.contains("\"startDate\":\"2020-03\""));
    }

    #[test]
    fn test_optional_fields_accept_missing() {
        // Profiles written by older builds may omit website and credentialId.
        let json = r#"{
            "personal": {"fullName":"A","title":"","email":"","phone":"","location":"","summary":""},
            "workExperience": [],
            "education": [],
            "skills": [],
            "languages": [],
            "certifications": [{"id":"c1","name":"Cert","organization":"Org","date":"2021-03"}]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal.website, None);
        assert_eq!(resume.certifications[0].credential_id, None);
    }
}
