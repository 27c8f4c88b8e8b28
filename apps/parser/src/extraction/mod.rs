//! LaTeX résumé extraction.
//!
//! Each stage finds its own section and degrades to an empty field when the
//! section or any sub-field is missing. Stages never depend on one another.

pub mod cleanup;
pub mod contact;
pub mod education;
pub mod experience;
pub mod latex;
pub mod sections;
pub mod skills;
pub mod summary;

#[cfg(test)]
mod fixtures;

use tracing::info;

use crate::models::ResumeRecord;

/// One format-variant matcher. `None` means "this variant does not apply".
pub type Strategy<T> = fn(&str) -> Option<T>;

/// Runs `strategies` in order and returns the first result.
pub fn first_match<T>(strategies: &[Strategy<T>], text: &str) -> Option<T> {
    strategies.iter().find_map(|strategy| strategy(text))
}

/// Builds a record from the full text of a LaTeX résumé. Never fails.
pub fn extract_resume(tex: &str) -> ResumeRecord {
    let doc = latex::strip_comments(tex);

    let contact = contact::extract_contact(&doc);
    let summary = summary::extract_summary(&doc);
    let skills = skills::extract_skills(&doc);
    let experience = experience::extract_experience(&doc);
    let (education, certifications) = education::extract_education(&doc);

    let record = ResumeRecord {
        contact,
        summary,
        skills,
        experience,
        education,
        certifications,
    };

    info!(
        "Extracted {} skill categories ({} skills), {} roles, {} certifications",
        record.skills.len(),
        record.skill_count(),
        record.experience.len(),
        record.certifications.len()
    );
    record
}
