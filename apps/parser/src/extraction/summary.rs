use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::cached;
use crate::extraction::sections::find_section_except;

const SUMMARY_ALIASES: &[&str] = &[
    "professional summary",
    "summary",
    "profile",
    "objective",
    "about",
];

/// Headings such as "Skills Summary" or "Experience Summary" belong to
/// other stages.
const FOREIGN_WORDS: &[&str] = &["skills", "competencies", "experience"];

/// The summary paragraph as plain text, or `""` when there is no summary
/// section.
pub fn extract_summary(doc: &str) -> String {
    static LEADING_SPACE: OnceLock<Regex> = OnceLock::new();
    let Some(section) = find_section_except(doc, SUMMARY_ALIASES, FOREIGN_WORDS) else {
        debug!("No summary section found");
        return String::new();
    };
    let skip = cached(&LEADING_SPACE, r"^(?:\s|\\vspace\*?\{[^{}]*\})*")
        .find(section.body)
        .map_or(0, |m| m.end());
    let body = &section.body[skip..];
    let body = body.find(r"\vspace").map_or(body, |i| &body[..i]);
    clean_latex(body)
}
