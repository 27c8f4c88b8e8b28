//! Section location: finds headings and slices the text that belongs to them.

use std::sync::OnceLock;

use regex::Regex;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::{braced_group, cached};

/// A heading found in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Normalised name: cleaned, lower-cased, `&` spelled `and`.
    pub name: String,
    /// Byte offset of the heading command.
    pub start: usize,
    /// Byte offset just past the heading's closing brace.
    pub body_start: usize,
}

/// The body of one section, heading excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub heading: String,
    pub body: &'a str,
}

fn heading_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\\(?:section|cvsection|resumeSection)\b\*?\s*")
}

/// All headings in document order.
pub fn headings(doc: &str) -> Vec<Heading> {
    heading_command()
        .find_iter(doc)
        .filter_map(|m| {
            let (raw, len) = braced_group(&doc[m.end()..])?;
            Some(Heading {
                name: normalize_heading(raw),
                start: m.start(),
                body_start: m.end() + len,
            })
        })
        .collect()
}

pub fn normalize_heading(raw: &str) -> String {
    clean_latex(raw)
        .to_lowercase()
        .replace('&', " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-word containment: "work experience" matches alias "experience",
/// "experiences" does not.
fn matches_alias(heading: &str, alias: &str) -> bool {
    format!(" {heading} ").contains(&format!(" {alias} "))
}

/// Byte offset where the document body ends.
fn document_end(doc: &str) -> usize {
    doc.find(r"\end{document}").unwrap_or(doc.len())
}

/// Finds the section for the earliest alias that matches any heading.
/// The body runs to the next heading or the end of the document.
pub fn find_section<'a>(doc: &'a str, aliases: &[&str]) -> Option<Section<'a>> {
    find_section_except(doc, aliases, &[])
}

/// Like [`find_section`], but skips headings that also contain any of the
/// `excluded` words, so "skills summary" is not taken for "summary".
pub fn find_section_except<'a>(
    doc: &'a str,
    aliases: &[&str],
    excluded: &[&str],
) -> Option<Section<'a>> {
    let all = headings(doc);
    let doc_end = document_end(doc);
    for alias in aliases {
        for (i, heading) in all.iter().enumerate() {
            if !matches_alias(&heading.name, alias)
                || excluded.iter().any(|word| matches_alias(&heading.name, word))
            {
                continue;
            }
            let next = all.get(i + 1).map_or(doc_end, |h| h.start.min(doc_end));
            let end = next.max(heading.body_start);
            return Some(Section {
                heading: heading.name.clone(),
                body: &doc[heading.body_start..end],
            });
        }
    }
    None
}

/// Finds the first heading whose name starts with `prefix`; its body runs to
/// the end of the document regardless of later headings.
pub fn find_section_to_end<'a>(doc: &'a str, prefix: &str) -> Option<Section<'a>> {
    let doc_end = document_end(doc);
    headings(doc)
        .into_iter()
        .find(|h| h.name.starts_with(prefix))
        .map(|h| Section {
            body: &doc[h.body_start..doc_end.max(h.body_start)],
            heading: h.name,
        })
}

/// Text before the first heading, after `\begin{document}` when present.
pub fn header(doc: &str) -> &str {
    let begin = doc
        .find(r"\begin{document}")
        .map_or(0, |i| i + r"\begin{document}".len());
    let end = headings(doc)
        .first()
        .map_or(document_end(doc), |h| h.start);
    if end <= begin {
        return "";
    }
    &doc[begin..end]
}
