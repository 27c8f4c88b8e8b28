//! Contact block: name, email, phone, profile handles and location, all read
//! from the header above the first section heading.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::cleanup::clean_latex;
use crate::extraction::latex::{cached, command_calls, normalize_pipes};
use crate::extraction::sections::header;
use crate::extraction::{first_match, Strategy};
use crate::models::Contact;

const NAME_STRATEGIES: &[Strategy<String>] = &[name_after_size_command, name_command];
const EMAIL_STRATEGIES: &[Strategy<String>] = &[email_mailto_link, email_label, email_bare];
const PHONE_STRATEGIES: &[Strategy<String>] = &[phone_label, phone_tel_link, phone_bare];
const LINKEDIN_STRATEGIES: &[Strategy<String>] = &[linkedin_url, linkedin_label];
const GITHUB_STRATEGIES: &[Strategy<String>] = &[github_url, github_label];
const LOCATION_STRATEGIES: &[Strategy<String>] = &[location_label, location_segment];

pub fn extract_contact(doc: &str) -> Contact {
    let head = header(doc);
    let field = |name: &str, strategies: &[Strategy<String>]| {
        first_match(strategies, head).unwrap_or_else(|| {
            debug!("Contact field '{name}' not found");
            String::new()
        })
    };

    Contact {
        name: field("name", NAME_STRATEGIES),
        email: field("email", EMAIL_STRATEGIES),
        phone: field("phone", PHONE_STRATEGIES),
        linkedin: field("linkedin", LINKEDIN_STRATEGIES),
        github: field("github", GITHUB_STRATEGIES),
        location: field("location", LOCATION_STRATEGIES),
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

// ────────────────────────────────────────────────────────────────────────────
// Name
// ────────────────────────────────────────────────────────────────────────────

/// `\LARGE\bfseries Name`, `{\Huge \scshape Name}`, `\textbf{\Huge Name}`.
fn name_after_size_command(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(
        &RE,
        r"\\(?:Huge|huge|LARGE|Large)\b\s*(?:\\(?:bfseries|scshape|textbf)\b\s*)*\{?\s*([^{}\\\n$|]+)",
    );
    let caps = re.captures(head)?;
    non_empty(clean_latex(&caps[1]))
}

/// moderncv `\name{First}{Last}`.
fn name_command(head: &str) -> Option<String> {
    let call = command_calls(head, "name", 2).into_iter().next()?;
    non_empty(clean_latex(&format!("{} {}", call.args[0], call.args[1])))
}

// ────────────────────────────────────────────────────────────────────────────
// Email
// ────────────────────────────────────────────────────────────────────────────

fn email_mailto_link(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"\\href\{mailto:([^{}]+)\}\{([^{}]*)\}").captures(head)?;
    let display = clean_latex(&caps[2]);
    if display.contains('@') {
        Some(display)
    } else {
        non_empty(clean_latex(&caps[1]))
    }
}

fn email_label(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"(?i)e-?mail\s*:\s*(?:\\href\{[^{}]*\}\{)?([^\s{}|$]+@[^\s{}|$]+)");
    let caps = re.captures(head)?;
    non_empty(clean_latex(&caps[1]))
}

fn email_bare(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = cached(&RE, r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}");
    re.find(&clean_latex(head)).map(|m| m.as_str().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Phone
// ────────────────────────────────────────────────────────────────────────────

fn phone_label(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)(?:phone|mobile|tel)\s*:\s*(\+?\d[\d\s().-]{5,}\d)")
        .captures(head)?;
    non_empty(caps[1].trim().to_string())
}

fn phone_tel_link(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"\\href\{tel:([^{}]+)\}\{([^{}]*)\}").captures(head)?;
    non_empty(clean_latex(&caps[2])).or_else(|| non_empty(caps[1].trim().to_string()))
}

/// International number: a `+` and at least eight digits.
fn phone_bare(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let cleaned = clean_latex(head);
    cached(&RE, r"\+\d[\d\s().-]{6,}\d")
        .find_iter(&cleaned)
        .map(|m| m.as_str().trim().to_string())
        .find(|s| s.chars().filter(char::is_ascii_digit).count() >= 8)
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

fn linkedin_url(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)linkedin\.com/in/([A-Za-z0-9_\\-]+)").captures(head)?;
    let handle = caps[1].replace('\\', "");
    non_empty(handle).map(|h| format!("linkedin.com/in/{h}"))
}

fn linkedin_label(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)linkedin\s*:\s*([A-Za-z0-9_\\-]+)").captures(head)?;
    let handle = caps[1].replace('\\', "");
    non_empty(handle).map(|h| format!("linkedin.com/in/{h}"))
}

fn github_url(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)github\.com/([A-Za-z0-9_\\-]+)").captures(head)?;
    let handle = caps[1].replace('\\', "");
    non_empty(handle).map(|h| format!("github.com/{h}"))
}

fn github_label(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)github\s*:\s*([A-Za-z0-9_\\-]+)").captures(head)?;
    let handle = caps[1].replace('\\', "");
    non_empty(handle).map(|h| format!("github.com/{h}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

fn location_label(head: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = cached(&RE, r"(?i)location\s*:\s*([^|\\\n{}$]+)").captures(head)?;
    non_empty(clean_latex(&caps[1]))
}

/// First header segment shaped like `City, Country`.
fn location_segment(head: &str) -> Option<String> {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    static PLACE: OnceLock<Regex> = OnceLock::new();
    let separators = cached(
        &SEPARATORS,
        r"\\\\|\\hfill\b|\\q?quad\b|\$\s*\\(?:cdot|bullet|diamond|ast)\s*\$|\\textbullet\b|·|•",
    );
    let place = cached(&PLACE, r"^\p{Lu}[\p{L} .'-]*, \p{Lu}[\p{L} .'-]*$");

    let split = normalize_pipes(&separators.replace_all(head, "|"));
    split
        .split(['|', '\n'])
        .map(clean_latex)
        .find(|segment| {
            place.is_match(segment)
                && !segment.contains('@')
                && !segment.to_lowercase().contains("http")
        })
}
