//! Skills block: `Label: a, b, c` lines in one of three spellings.
//!
//! A list is split on commas outside parentheses, so `Kubernetes (EKS, GKE)`
//! stays one skill. A top-level pipe starts a new `Label: list` category on
//! the same line; a pipe segment without a label continues the current one.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::{cached, normalize_pipes, split_top_level};
use crate::extraction::sections::find_section;
use crate::extraction::{first_match, Strategy};
use crate::models::SkillMap;

const SKILLS_ALIASES: &[&str] = &["technical skills", "skills", "core competencies"];

/// Tried in order; the first strategy that finds any category wins.
const SKILL_STRATEGIES: &[Strategy<SkillMap>] = &[bold_labels, tabular_rows, plain_label_lines];

pub fn extract_skills(doc: &str) -> SkillMap {
    let Some(section) = find_section(doc, SKILLS_ALIASES) else {
        debug!("No skills section found");
        return SkillMap::new();
    };
    first_match(SKILL_STRATEGIES, section.body).unwrap_or_else(|| {
        debug!("Skills section '{}' has no recognizable categories", section.heading);
        SkillMap::new()
    })
}

/// Where a list that started at the beginning of `text` ends: a line break,
/// the next `\item`, an environment end, vertical space or a blank line.
fn list_end(text: &str) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\\\\|\\item\b|\\end\{|\\vspace|\n[ \t]*\n")
        .find(text)
        .map_or(text.len(), |m| m.start())
}

fn non_empty(map: SkillMap) -> Option<SkillMap> {
    (!map.is_empty()).then_some(map)
}

/// `\textbf{Label:} list` or `\textbf{Label}: list`, also as a table row
/// `\textbf{Label:} & list`. Bold text without a colon is treated as part of
/// a list, not as a label.
fn bold_labels(body: &str) -> Option<SkillMap> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"\\textbf\{([^{}]+?)(:)?\s*\}[ \t]*(:)?[ \t]*&?");
    let labels: Vec<_> = re
        .captures_iter(body)
        .filter(|caps| caps.get(2).is_some() || caps.get(3).is_some())
        .collect();

    let mut map = SkillMap::new();
    for (i, caps) in labels.iter().enumerate() {
        let whole = caps.get(0)?;
        let next = labels
            .get(i + 1)
            .and_then(|c| c.get(0))
            .map_or(body.len(), |m| m.start());
        let rest = &body[whole.end()..next];
        let list = &rest[..list_end(rest)];
        ingest_list(&mut map, &caps[1], list);
    }
    non_empty(map)
}

/// Table rows: `\textbf{Label} & list \\`.
fn tabular_rows(body: &str) -> Option<SkillMap> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"\\textbf\{([^{}]+)\}\s*&");
    let mut map = SkillMap::new();
    for caps in re.captures_iter(body) {
        let Some(whole) = caps.get(0) else { continue };
        let rest = &body[whole.end()..];
        let list = &rest[..list_end(rest)];
        ingest_list(&mut map, &caps[1], list);
    }
    non_empty(map)
}

/// Unformatted `Label: list` lines.
fn plain_label_lines(body: &str) -> Option<SkillMap> {
    let mut map = SkillMap::new();
    for line in body.lines() {
        let cleaned = clean_latex(line);
        if let Some((label, list)) = split_label(&cleaned) {
            ingest_list(&mut map, label, list);
        }
    }
    non_empty(map)
}

/// Splits `Label: rest`. A label is short and contains no list punctuation.
fn split_label(segment: &str) -> Option<(&str, &str)> {
    let (label, rest) = segment.split_once(':')?;
    let label = label.trim();
    let plausible = !label.is_empty()
        && label.len() <= 40
        && !label.contains([',', '(', ')', '|']);
    plausible.then_some((label, rest))
}

fn ingest_list(map: &mut SkillMap, label: &str, list: &str) {
    let list = normalize_pipes(list);
    let mut category = clean_label(label);
    for (i, segment) in split_top_level(&list, &['|']).into_iter().enumerate() {
        let mut items = segment;
        if i > 0 {
            if let Some((next_label, rest)) = split_label(segment) {
                category = clean_label(next_label);
                items = rest;
            }
        }
        let skills: Vec<String> = split_top_level(items, &[','])
            .into_iter()
            .map(clean_latex)
            .filter(|s| !s.is_empty())
            .collect();
        if category.is_empty() || skills.is_empty() {
            continue;
        }
        map.entry(category.clone()).or_default().extend(skills);
    }
}

fn clean_label(label: &str) -> String {
    clean_latex(label).trim_end_matches(':').trim().to_string()
}
