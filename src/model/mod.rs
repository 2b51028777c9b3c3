//! The resume data model.
//!
//! All types here are plain serde records; behavior lives in the
//! [`edit`](crate::edit) and [`render`](crate::render) modules. Field names
//! serialize in camelCase so persisted profiles use the same JSON layout the
//! original web builder wrote to browser storage.

mod resume;
mod sample;

pub use resume::{
    Certification, Education, Language, PersonalInfo, Proficiency, ResumeData, Skill,
    WorkExperience,
};
