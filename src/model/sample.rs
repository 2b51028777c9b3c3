//! Built-in sample resume.
//!
//! Doubles as placeholder content and first-run state; `reset` returns the
//! profile to this value.

use super::{
    Certification, Education, Language, PersonalInfo, Proficiency, ResumeData, Skill,
    WorkExperience,
};

impl ResumeData {
    /// The built-in sample resume.
    pub fn sample() -> Self {
        ResumeData {
            personal: PersonalInfo {
                full_name: "John Appleseed".to_string(),
                title: "Senior Product Designer".to_string(),
                email: "john.appleseed@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                location: "Cupertino, CA".to_string(),
                website: Some("johnappleseed.com".to_string()),
                summary: "Product designer with over 8 years of experience creating \
                          user-centered digital experiences for technology companies. \
                          Specialized in design systems, accessibility, and collaborative \
                          workflows."
                    .to_string(),
            },
            work_experience: vec![
                WorkExperience {
                    id: "work1".to_string(),
                    company: "Apple Inc.".to_string(),
                    position: "Senior Product Designer".to_string(),
                    location: "Cupertino, CA".to_string(),
                    start_date: "2020-03".to_string(),
                    end_date: String::new(),
                    current: true,
                    description: "Lead product designer for consumer applications. \
                                  Collaborate with engineering and product teams to develop \
                                  new features. Established design system components and \
                                  guidelines for multiple platforms."
                        .to_string(),
                },
                WorkExperience {
                    id: "work2".to_string(),
                    company: "Adobe".to_string(),
                    position: "Product Designer".to_string(),
                    location: "San Francisco, CA".to_string(),
                    start_date: "2017-06".to_string(),
                    end_date: "2020-02".to_string(),
                    current: false,
                    description: "Designed user interfaces for creative professional tools. \
                                  Conducted user research and usability testing. Created \
                                  prototypes and specifications for new features."
                        .to_string(),
                },
            ],
            education: vec![
                Education {
                    id: "edu1".to_string(),
                    institution: "California Institute of Technology".to_string(),
                    degree: "Master of Design".to_string(),
                    field: "Interaction Design".to_string(),
                    location: "Pasadena, CA".to_string(),
                    start_date: "2015-09".to_string(),
                    end_date: "2017-05".to_string(),
                    description: "Focus on interaction design, user research, and visual \
                                  communication."
                        .to_string(),
                },
                Education {
                    id: "edu2".to_string(),
                    institution: "Stanford University".to_string(),
                    degree: "Bachelor of Arts".to_string(),
                    field: "Graphic Design".to_string(),
                    location: "Stanford, CA".to_string(),
                    start_date: "2011-09".to_string(),
                    end_date: "2015-05".to_string(),
                    description: "Minor in Computer Science. Dean's List all semesters."
                        .to_string(),
                },
            ],
            skills: vec![
                Skill { id: "skill1".to_string(), name: "UI/UX Design".to_string(), level: 5 },
                Skill { id: "skill2".to_string(), name: "Figma".to_string(), level: 5 },
                Skill { id: "skill3".to_string(), name: "Sketch".to_string(), level: 4 },
                Skill { id: "skill4".to_string(), name: "Design Systems".to_string(), level: 5 },
                Skill { id: "skill5".to_string(), name: "User Research".to_string(), level: 4 },
                Skill { id: "skill6".to_string(), name: "Prototyping".to_string(), level: 4 },
                Skill { id: "skill7".to_string(), name: "HTML/CSS".to_string(), level: 3 },
                Skill { id: "skill8".to_string(), name: "JavaScript".to_string(), level: 3 },
            ],
            languages: vec![
                Language {
                    id: "lang1".to_string(),
                    name: "English".to_string(),
                    proficiency: Proficiency::Native,
                },
                Language {
                    id: "lang2".to_string(),
                    name: "Spanish".to_string(),
                    proficiency: Proficiency::Intermediate,
                },
                Language {
                    id: "lang3".to_string(),
                    name: "French".to_string(),
                    proficiency: Proficiency::Basic,
                },
            ],
            certifications: vec![
                Certification {
                    id: "cert1".to_string(),
                    name: "Certified Professional UX Designer".to_string(),
                    organization: "Nielsen Norman Group".to_string(),
                    date: "2019-06".to_string(),
                    credential_id: Some("UX-2019-06542".to_string()),
                },
                Certification {
                    id: "cert2".to_string(),
                    name: "Accessibility in Design".to_string(),
                    organization: "International Association of Accessibility Professionals"
                        .to_string(),
                    date: "2021-03".to_string(),
                    credential_id: Some("IAAP-AC-2021453".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_fully_populated() {
        let sample = ResumeData::sample();
        assert!(!sample.is_empty());
        assert_eq!(sample.work_experience.len(), 2);
        assert_eq!(sample.education.len(), 2);
        assert_eq!(sample.skills.len(), 8);
        assert_eq!(sample.languages.len(), 3);
        assert_eq!(sample.certifications.len(), 2);
    }

    #[test]
    fn test_sample_current_position_has_no_end_date() {
        let sample = ResumeData::sample();
        let current = &sample.work_experience[0];
        assert!(current.current);
        assert!(current.end_date.is_empty());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let sample = ResumeData::sample();
        let mut ids: Vec<&str> = sample.skills.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), sample.skills.len());
    }
}
