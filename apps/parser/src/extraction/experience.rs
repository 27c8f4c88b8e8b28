//! Experience block: role headers, descriptors, bullets and accelerator badges.
//!
//! Header syntax changed with every template generation, so headers are found
//! by an ordered list of strategies and the first one that finds anything is
//! used for the whole block. Everything between one header and the next
//! belongs to the first.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::{cached, command_calls, normalize_pipes};
use crate::extraction::sections::find_section;
use crate::extraction::{first_match, Strategy};
use crate::models::Role;

const EXPERIENCE_ALIASES: &[&str] = &[
    "professional experience",
    "work experience",
    "experience",
    "employment",
];

const HEADER_STRATEGIES: &[Strategy<Vec<RoleHeader>>] =
    &[role_command, resume_subheading, pipe_header];

const BULLET_STRATEGIES: &[Strategy<Vec<String>>] = &[itemize_bullets, resume_item_bullets];

/// Header fields as written in the source, before cleanup.
#[derive(Debug, Clone, PartialEq)]
struct RoleHeader {
    title: String,
    company: String,
    location: String,
    date_range: String,
    /// Byte range of the header within the block.
    start: usize,
    end: usize,
}

pub fn extract_experience(doc: &str) -> Vec<Role> {
    let Some(section) = find_section(doc, EXPERIENCE_ALIASES) else {
        debug!("No experience section found");
        return Vec::new();
    };
    let block = normalize_pipes(section.body);
    let Some(headers) = first_match(HEADER_STRATEGIES, &block) else {
        debug!("Experience section '{}' has no recognizable roles", section.heading);
        return Vec::new();
    };

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let slice_end = headers.get(i + 1).map_or(block.len(), |h| h.start);
            build_role(header, &block[header.end..slice_end.max(header.end)])
        })
        .collect()
}

fn build_role(header: &RoleHeader, slice: &str) -> Role {
    let badge = split_accelerator_badge(&clean_latex(&header.company));
    let (product, domain) = descriptor(slice);
    let responsibilities = first_match(BULLET_STRATEGIES, slice).unwrap_or_default();

    Role {
        title: clean_latex(&header.title),
        company: badge.company,
        location: clean_latex(&header.location),
        date_range: clean_latex(&header.date_range),
        is_yc: badge.batch.is_some(),
        yc_batch: badge.batch,
        product,
        domain,
        responsibilities,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header strategies
// ────────────────────────────────────────────────────────────────────────────

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// `\role{title}{company}{location}{dates}`
fn role_command(block: &str) -> Option<Vec<RoleHeader>> {
    let headers = command_calls(block, "role", 4)
        .into_iter()
        .map(|call| RoleHeader {
            title: call.args[0].to_string(),
            company: call.args[1].to_string(),
            location: call.args[2].to_string(),
            date_range: call.args[3].to_string(),
            start: call.start,
            end: call.end,
        })
        .collect();
    non_empty(headers)
}

/// `\resumeSubheading{title}{dates}{company}{location}`
fn resume_subheading(block: &str) -> Option<Vec<RoleHeader>> {
    let headers = command_calls(block, "resumeSubheading", 4)
        .into_iter()
        .map(|call| RoleHeader {
            title: call.args[0].to_string(),
            date_range: call.args[1].to_string(),
            company: call.args[2].to_string(),
            location: call.args[3].to_string(),
            start: call.start,
            end: call.end,
        })
        .collect();
    non_empty(headers)
}

/// `\textbf{title} | company | location | dates`, the last separator may be
/// `\hfill`. Pipes are already normalised by the caller.
fn pipe_header(block: &str) -> Option<Vec<RoleHeader>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(
        &RE,
        r"(?m)^[ \t]*\\textbf\{([^{}]+)\}[ \t]*\|[ \t]*([^|\n]+?)[ \t]*\|[ \t]*([^|\n]+?)[ \t]*(?:\||\\hfill\b)[ \t]*([^|\n]+?)[ \t]*(?:\\\\.*)?$",
    );
    let headers = re
        .captures_iter(block)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RoleHeader {
                title: caps[1].to_string(),
                company: caps[2].to_string(),
                location: caps[3].to_string(),
                date_range: caps[4].to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();
    non_empty(headers)
}

// ────────────────────────────────────────────────────────────────────────────
// Descriptor and bullets
// ────────────────────────────────────────────────────────────────────────────

/// Byte offset where the bullet list of a role slice begins.
fn bullets_start(slice: &str) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    cached(&RE, r"\\begin\{itemize\}|\\resumeItemListStart|\\item\b|\\resumeItem\b")
        .find(slice)
        .map_or(slice.len(), |m| m.start())
}

/// The italic line under a header: `(product, domain)`.
///
/// `Product: X | Domain: Y` fills both; unlabeled text is the product.
fn descriptor(slice: &str) -> (String, String) {
    let limit = bullets_start(slice);
    let Some(call) = command_calls(&slice[..limit], "textit", 1).into_iter().next() else {
        return (String::new(), String::new());
    };
    let text = clean_latex(call.args[0]);

    let lower = text.to_lowercase();
    if !lower.contains("product:") && !lower.contains("domain:") {
        return (text, String::new());
    }

    let mut product = String::new();
    let mut domain = String::new();
    for segment in text.split('|') {
        let Some((label, value)) = segment.split_once(':') else {
            continue;
        };
        match label.trim().to_lowercase().as_str() {
            "product" => product = value.trim().to_string(),
            "domain" => domain = value.trim().to_string(),
            _ => {}
        }
    }
    (product, domain)
}

/// Items of the first `itemize` environment.
fn itemize_bullets(slice: &str) -> Option<Vec<String>> {
    static ITEM: OnceLock<Regex> = OnceLock::new();
    let begin = slice.find(r"\begin{itemize}")?;
    let inner = &slice[begin + r"\begin{itemize}".len()..];
    let inner = inner
        .find(r"\end{itemize}")
        .map_or(inner, |end| &inner[..end]);

    let items = cached(&ITEM, r"\\item\b(?:\[[^\]]*\])?")
        .split(inner)
        .skip(1)
        .map(clean_latex)
        .filter(|item| !item.is_empty())
        .collect();
    non_empty(items)
}

/// `\resumeItem{...}` commands.
fn resume_item_bullets(slice: &str) -> Option<Vec<String>> {
    let items = command_calls(slice, "resumeItem", 1)
        .into_iter()
        .map(|call| clean_latex(call.args[0]))
        .filter(|item| !item.is_empty())
        .collect();
    non_empty(items)
}

// ────────────────────────────────────────────────────────────────────────────
// Accelerator badge
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct BadgeSplit {
    company: String,
    batch: Option<String>,
}

/// `Acme (YC W18)` → company `Acme`, batch `W18`.
fn split_accelerator_badge(company: &str) -> BadgeSplit {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"(?i)\(\s*(?:YC|Y\s*Combinator)\s+([^()]+?)\s*\)");
    let Some(caps) = re.captures(company) else {
        return BadgeSplit {
            company: company.to_string(),
            batch: None,
        };
    };
    let stripped = re.replace(company, " ");
    BadgeSplit {
        company: stripped.split_whitespace().collect::<Vec<_>>().join(" "),
        batch: Some(caps[1].to_string()),
    }
}
