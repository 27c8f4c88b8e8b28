//! Low-level LaTeX text helpers shared by every extraction stage.
//!
//! None of this is a LaTeX parser: it knows about comments, balanced brace
//! groups and parenthesis depth, and nothing else.

use std::sync::OnceLock;

use regex::Regex;

/// Compiles `pattern` into `cell` on first use.
pub fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex pattern is valid"))
}

/// Removes LaTeX comments (an unescaped `%` to end of line). `\%` survives.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .map(strip_line_comment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line_comment(line: &str) -> &str {
    let mut backslashes = 0usize;
    for (i, b) in line.bytes().enumerate() {
        if b == b'%' && backslashes % 2 == 0 {
            return &line[..i];
        }
        backslashes = if b == b'\\' { backslashes + 1 } else { 0 };
    }
    line
}

/// Reads one `{...}` group at the very start of `text`.
/// Returns the inner text and the number of bytes consumed, braces included.
pub fn braced_group(text: &str) -> Option<(&str, usize)> {
    if !text.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Reads `count` consecutive brace groups, allowing whitespace between them.
pub fn braced_args(text: &str, count: usize) -> Option<(Vec<&str>, usize)> {
    let mut args = Vec::with_capacity(count);
    let mut pos = 0;
    for _ in 0..count {
        let rest = &text[pos..];
        pos += rest.len() - rest.trim_start().len();
        let (arg, len) = braced_group(&text[pos..])?;
        args.push(arg);
        pos += len;
    }
    Some((args, pos))
}

/// One occurrence of `\name{..}{..}...` in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandCall<'a> {
    /// Byte offset of the backslash.
    pub start: usize,
    /// Byte offset just past the last argument.
    pub end: usize,
    pub args: Vec<&'a str>,
}

/// Finds every `\name` (optionally starred) followed by exactly `argc`
/// brace groups. Occurrences with fewer groups are skipped.
pub fn command_calls<'a>(text: &'a str, name: &str, argc: usize) -> Vec<CommandCall<'a>> {
    let needle = format!("\\{name}");
    let mut calls = Vec::new();
    for (start, _) in text.match_indices(&needle) {
        let mut after = start + needle.len();
        match text[after..].chars().next() {
            Some(c) if c.is_ascii_alphabetic() => continue,
            Some('*') => after += 1,
            _ => {}
        }
        if let Some((args, len)) = braced_args(&text[after..], argc) {
            calls.push(CommandCall {
                start,
                end: after + len,
                args,
            });
        }
    }
    calls
}

/// Splits on any of `delims` that sit outside parentheses and braces.
/// Pieces are trimmed; empty pieces are kept so callers decide what to drop.
pub fn split_top_level<'a>(text: &'a str, delims: &[char]) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '{' => depth += 1,
            ')' | '}' => depth = depth.saturating_sub(1),
            c if depth == 0 && delims.contains(&c) => {
                pieces.push(text[last..i].trim());
                last = i + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(text[last..].trim());
    pieces
}

/// True if `delim` occurs outside parentheses and braces.
pub fn has_top_level(text: &str, delim: char) -> bool {
    split_top_level(text, &[delim]).len() > 1
}

/// Rewrites the pipe spellings a template may use into a bare `|`.
pub fn normalize_pipes(text: &str) -> String {
    static PIPE: OnceLock<Regex> = OnceLock::new();
    cached(&PIPE, r"\\textbar(\{\})?|\$\s*(\||\\vert|\\mid)\s*\$")
        .replace_all(text, "|")
        .into_owned()
}
