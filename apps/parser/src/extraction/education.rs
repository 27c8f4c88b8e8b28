//! Education and certifications: the block from the education heading to the
//! end of the document.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::{
    cached, command_calls, has_top_level, normalize_pipes, split_top_level,
};
use crate::extraction::sections::{find_section, find_section_to_end};
use crate::extraction::{first_match, Strategy};
use crate::models::Education;

const DEGREE_STRATEGIES: &[Strategy<String>] =
    &[bold_degree_line, degree_subheading, first_plain_line];
const CERTIFICATION_STRATEGIES: &[Strategy<Vec<String>>] =
    &[bold_certifications_label, certifications_heading, plain_certifications_label];

pub fn extract_education(doc: &str) -> (Education, Vec<String>) {
    let Some(section) = find_section_to_end(doc, "education") else {
        debug!("No education section found");
        return (Education::default(), Vec::new());
    };
    let degree = first_match(DEGREE_STRATEGIES, section.body).unwrap_or_else(|| {
        debug!("No degree line found");
        String::new()
    });
    let certifications = first_match(CERTIFICATION_STRATEGIES, section.body).unwrap_or_else(|| {
        debug!("No certifications found");
        Vec::new()
    });
    (Education { degree }, certifications)
}

/// Splits on pipes when the list has a top-level pipe, otherwise on commas.
pub fn split_certifications(list: &str) -> Vec<String> {
    let list = normalize_pipes(list);
    let delim = if has_top_level(&list, '|') { '|' } else { ',' };
    split_top_level(&list, &[delim])
        .into_iter()
        .map(clean_latex)
        .filter(|c| !c.is_empty())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn non_empty_list(items: Vec<String>) -> Option<Vec<String>> {
    (!items.is_empty()).then_some(items)
}

fn is_certifications_line(cleaned: &str) -> bool {
    cleaned.to_lowercase().starts_with("certification")
}

// ────────────────────────────────────────────────────────────────────────────
// Degree
// ────────────────────────────────────────────────────────────────────────────

/// `\textbf{Degree} -- Institution`
fn bold_degree_line(body: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"\\textbf\{([^{}]+)\}[ \t]*\\?--[ \t]*([^\\\n]+)").captures(body)?;
    let degree = clean_latex(&caps[1]);
    let institution = clean_latex(&caps[2]);
    if degree.is_empty() || institution.is_empty() {
        return None;
    }
    Some(format!("{degree} -- {institution}"))
}

/// `\resumeSubheading{Institution}{Dates}{Degree}{Location}`
fn degree_subheading(body: &str) -> Option<String> {
    let call = command_calls(body, "resumeSubheading", 4).into_iter().next()?;
    let institution = clean_latex(call.args[0]);
    let degree = clean_latex(call.args[2]);
    match (degree.is_empty(), institution.is_empty()) {
        (false, false) => Some(format!("{degree} -- {institution}")),
        (false, true) => Some(degree),
        (true, _) => non_empty(institution),
    }
}

fn first_plain_line(body: &str) -> Option<String> {
    body.lines()
        .map(clean_latex)
        .find(|line| !line.is_empty() && !is_certifications_line(line))
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

/// `\textbf{Certifications:} list` or `\textbf{Certifications}: list`. A label
/// with nothing after it on its line takes the `\item` list that follows.
fn bold_certifications_label(body: &str) -> Option<Vec<String>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"(?i)\\textbf\{\s*certifications?\s*:?\s*\}[ \t]*:?[ \t]*([^\n]*)");
    let caps = re.captures(body)?;
    let list = caps[1].split(r"\\").next().unwrap_or_default();
    let same_line = split_certifications(list);
    if !same_line.is_empty() {
        return Some(same_line);
    }
    let rest = &body[caps.get(0)?.end()..];
    non_empty_list(item_list(rest))
}

/// A `Certifications` heading followed by `\item` bullets.
fn certifications_heading(body: &str) -> Option<Vec<String>> {
    let section = find_section(body, &["certifications", "certificates"])?;
    non_empty_list(item_list(section.body))
}

/// The `\item` entries of the first list in `text`.
fn item_list(text: &str) -> Vec<String> {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    let text = text.find(r"\end{itemize}").map_or(text, |end| &text[..end]);
    cached(&ITEM, r"\\item\b(?:\[[^\]]*\])?")
        .split(text)
        .skip(1)
        .map(clean_latex)
        .filter(|c| !c.is_empty())
        .collect()
}

/// `Certifications: list` without bold markup.
fn plain_certifications_label(body: &str) -> Option<Vec<String>> {
    body.lines().map(clean_latex).find_map(|line| {
        if !is_certifications_line(&line) {
            return None;
        }
        let (_, list) = line.split_once(':')?;
        non_empty_list(split_certifications(list))
    })
}
