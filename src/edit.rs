//! Section editing operations.
//!
//! The original builder edited one section at a time through form components;
//! here the same contract is an operations layer on [`ResumeData`]: add
//! appends a blank item with a fresh unique id and returns that id so the
//! caller can focus it, remove filters by id, and field edits go through
//! `*_mut` accessors that touch only the requested entry.
//!
//! Marking a position as current clears its end date in the same operation —
//! there is no intermediate state where `current` is set but the end date
//! still holds a value.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::model::{
    Certification, Education, Language, Proficiency, ResumeData, Skill, WorkExperience,
};

/// Lowest and highest allowed skill levels.
pub const SKILL_LEVEL_RANGE: (u8, u8) = (1, 5);

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a list-item id.
///
/// Timestamp plus a process-local counter; uniqueness is the contract, the
/// format is not.
pub fn next_id(prefix: &str) -> String {
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}{}-{}", prefix, Utc::now().timestamp_millis(), seq)
}

/// Clamp a skill level into the allowed 1-5 range.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(SKILL_LEVEL_RANGE.0, SKILL_LEVEL_RANGE.1)
}

impl ResumeData {
    /// Append a blank work experience entry and return its id.
    pub fn add_experience(&mut self) -> String {
        let id = next_id("work");
        self.work_experience.push(WorkExperience {
            id: id.clone(),
            ..Default::default()
        });
        id
    }

    /// Remove a work experience entry by id. Returns whether one was removed.
    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.work_experience.len();
        self.work_experience.retain(|w| w.id != id);
        self.work_experience.len() < before
    }

    /// Look up a work experience entry for field editing.
    pub fn experience_mut(&mut self, id: &str) -> Option<&mut WorkExperience> {
        self.work_experience.iter_mut().find(|w| w.id == id)
    }

    /// Set or clear the current-position flag on a work experience entry.
    ///
    /// Switching to current clears the end date as part of the same update.
    /// Returns whether the entry was found.
    pub fn set_current_position(&mut self, id: &str, current: bool) -> bool {
        match self.experience_mut(id) {
            Some(work) => {
                work.current = current;
                if current {
                    work.end_date.clear();
                }
                true
            }
            None => false,
        }
    }

    /// Append a blank education entry and return its id.
    pub fn add_education(&mut self) -> String {
        let id = next_id("edu");
        self.education.push(Education {
            id: id.clone(),
            ..Default::default()
        });
        id
    }

    /// Remove an education entry by id. Returns whether one was removed.
    pub fn remove_education(&mut self, id: &str) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() < before
    }

    /// Look up an education entry for field editing.
    pub fn education_mut(&mut self, id: &str) -> Option<&mut Education> {
        self.education.iter_mut().find(|e| e.id == id)
    }

    /// Append a skill and return its id. The level is clamped into 1-5.
    pub fn add_skill(&mut self, name: impl Into<String>, level: u8) -> String {
        let id = next_id("skill");
        self.skills.push(Skill {
            id: id.clone(),
            name: name.into(),
            level: clamp_level(level),
        });
        id
    }

    /// Remove a skill by id. Returns whether one was removed.
    pub fn remove_skill(&mut self, id: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s.id != id);
        self.skills.len() < before
    }

    /// Look up a skill for field editing.
    pub fn skill_mut(&mut self, id: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }

    /// Change a skill's level, clamped into 1-5. Returns whether it was found.
    pub fn set_skill_level(&mut self, id: &str, level: u8) -> bool {
        match self.skill_mut(id) {
            Some(skill) => {
                skill.level = clamp_level(level);
                true
            }
            None => false,
        }
    }

    /// Append a language and return its id.
    pub fn add_language(&mut self, name: impl Into<String>, proficiency: Proficiency) -> String {
        let id = next_id("lang");
        self.languages.push(Language {
            id: id.clone(),
            name: name.into(),
            proficiency,
        });
        id
    }

    /// Remove a language by id. Returns whether one was removed.
    pub fn remove_language(&mut self, id: &str) -> bool {
        let before = self.languages.len();
        self.languages.retain(|l| l.id != id);
        self.languages.len() < before
    }

    /// Look up a language for field editing.
    pub fn language_mut(&mut self, id: &str) -> Option<&mut Language> {
        self.languages.iter_mut().find(|l| l.id == id)
    }

    /// Append a blank certification entry and return its id.
    pub fn add_certification(&mut self) -> String {
        let id = next_id("cert");
        self.certifications.push(Certification {
            id: id.clone(),
            ..Default::default()
        });
        id
    }

    /// Remove a certification by id. Returns whether one was removed.
    pub fn remove_certification(&mut self, id: &str) -> bool {
        let before = self.certifications.len();
        self.certifications.retain(|c| c.id != id);
        self.certifications.len() < before
    }

    /// Look up a certification for field editing.
    pub fn certification_mut(&mut self, id: &str) -> Option<&mut Certification> {
        self.certifications.iter_mut().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_unique() {
        let a = next_id("work");
        let b = next_id("work");
        assert_ne!(a, b);
        assert!(a.starts_with("work"));
    }

    #[test]
    fn test_add_experience_appends_with_fresh_id() {
        let mut resume = ResumeData::sample();
        let before = resume.work_experience.len();

        let id = resume.add_experience();

        assert_eq!(resume.work_experience.len(), before + 1);
        let added = resume.work_experience.last().unwrap();
        assert_eq!(added.id, id);
        assert!(added.company.is_empty());
        assert!(!added.current);
        // The id must not collide with any pre-existing entry.
        let count = resume.work_experience.iter().filter(|w| w.id == id).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut resume = ResumeData::sample();
        let before = resume.work_experience.len();

        assert!(resume.remove_experience("work2"));
        assert_eq!(resume.work_experience.len(), before - 1);
        assert!(resume.work_experience.iter().all(|w| w.id != "work2"));

        // Removing an unknown id is a no-op.
        assert!(!resume.remove_experience("work2"));
        assert_eq!(resume.work_experience.len(), before - 1);
    }

    #[test]
    fn test_field_edit_touches_only_target() {
        let mut resume = ResumeData::sample();
        let other_company = resume.work_experience[0].company.clone();

        resume.experience_mut("work2").unwrap().position = "Staff Designer".to_string();

        assert_eq!(resume.work_experience[1].position, "Staff Designer");
        assert_eq!(resume.work_experience[0].company, other_company);
    }

    #[test]
    fn test_set_current_clears_end_date() {
        let mut resume = ResumeData::sample();
        assert_eq!(resume.work_experience[1].end_date, "2020-02");

        assert!(resume.set_current_position("work2", true));

        let work = &resume.work_experience[1];
        assert!(work.current);
        assert!(work.end_date.is_empty());
    }

    #[test]
    fn test_set_current_off_keeps_end_date_editable() {
        let mut resume = ResumeData::sample();
        resume.set_current_position("work1", false);
        assert!(!resume.work_experience[0].current);
        // End date stays empty until the user fills it back in.
        assert!(resume.work_experience[0].end_date.is_empty());
    }

    #[test]
    fn test_skill_level_clamped() {
        let mut resume = ResumeData::empty();
        let id = resume.add_skill("Rust", 9);
        assert_eq!(resume.skills[0].level, 5);

        resume.set_skill_level(&id, 0);
        assert_eq!(resume.skills[0].level, 1);
    }

    #[test]
    fn test_add_and_remove_language() {
        let mut resume = ResumeData::empty();
        let id = resume.add_language("German", Proficiency::Advanced);
        assert_eq!(resume.languages.len(), 1);
        assert!(resume.remove_language(&id));
        assert!(resume.languages.is_empty());
    }

    #[test]
    fn test_certification_field_edit() {
        let mut resume = ResumeData::empty();
        let id = resume.add_certification();
        let cert = resume.certification_mut(&id).unwrap();
        cert.name = "CKA".to_string();
        cert.credential_id = Some("CKA-123".to_string());

        assert_eq!(resume.certifications[0].name, "CKA");
    }
}
