//! Markup cleanup: strips LaTeX formatting from extracted text and keeps the
//! words. Used by every stage on every string that reaches the record.

use std::sync::OnceLock;

use regex::Regex;

/// One rewrite pass. `repeat` passes run until the text stops changing so
/// nested wrappers unwrap from the inside out.
struct Rule {
    pattern: &'static str,
    replacement: &'static str,
    repeat: bool,
}

const FONT_SWITCHES: &str = "tiny|scriptsize|footnotesize|small|normalsize|large|Large|LARGE|huge|Huge|bfseries|itshape|scshape|mdseries|upshape|normalfont|bf|it|em|sc";

/// Order matters: later rules assume earlier ones already ran.
const RULES: &[Rule] = &[
    // line breaks
    Rule {
        pattern: r"\\\\\*?(\[[^\]]*\])?",
        replacement: " ",
        repeat: false,
    },
    // spacing and structure, argument included
    Rule {
        pattern: r"\\(?:vspace|hspace|vskip|hskip|label|faIcon|color|begin|end)\b\*?(?:\{[^{}]*\}|\[[^\]]*\])*",
        replacement: "",
        repeat: false,
    },
    // `{\small text}` groups, but not the argument of a preceding command
    Rule {
        pattern: r"(^|[^a-zA-Z*\]}])\{\\(?:FONT)\b\s*([^{}]*)\}",
        replacement: "${1}${2}",
        repeat: true,
    },
    Rule {
        pattern: r"\\(?:FONT)\b\s*",
        replacement: "",
        repeat: false,
    },
    Rule {
        pattern: r"\\href\{[^{}]*\}\{([^{}]*)\}",
        replacement: "${1}",
        repeat: true,
    },
    Rule {
        pattern: r"\\(?:textcolor|colorbox)\{[^{}]*\}\{([^{}]*)\}",
        replacement: "${1}",
        repeat: true,
    },
    Rule {
        pattern: r"\\url\{([^{}]*)\}",
        replacement: "${1}",
        repeat: false,
    },
    // emphasis wrappers
    Rule {
        pattern: r"\\(?:textbf|textit|emph|text|underline|textsc|textnormal|textrm|texttt|mbox)\{([^{}]*)\}",
        replacement: "${1}",
        repeat: true,
    },
    Rule {
        pattern: r"\$\s*(?:\||\\vert|\\mid)\s*\$|\\textbar(?:\{\})?",
        replacement: "|",
        repeat: false,
    },
    Rule {
        pattern: r"\$\s*\\cdot\s*\$",
        replacement: "·",
        repeat: false,
    },
    Rule {
        pattern: r"\$\s*\\sim\s*\$",
        replacement: "~",
        repeat: false,
    },
    Rule {
        pattern: r"\$\s*\\bullet\s*\$",
        replacement: "•",
        repeat: false,
    },
    Rule {
        pattern: r"\\--",
        replacement: "--",
        repeat: false,
    },
    // discretionary hyphen
    Rule {
        pattern: r"\\-",
        replacement: "",
        repeat: false,
    },
    // control spaces
    Rule {
        pattern: r"\\[ ,;:!]",
        replacement: " ",
        repeat: false,
    },
    // anything else with one argument keeps the argument
    Rule {
        pattern: r"\\[a-zA-Z]+\*?(?:\[[^\]]*\])?\{([^{}]*)\}",
        replacement: "${1}",
        repeat: true,
    },
    Rule {
        pattern: r"\\[a-zA-Z]+\*?",
        replacement: "",
        repeat: false,
    },
    Rule {
        pattern: r"\s+",
        replacement: " ",
        repeat: false,
    },
];

fn compiled_rules() -> &'static [(Regex, &'static Rule)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static Rule)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| {
                let pattern = rule.pattern.replace("FONT", FONT_SWITCHES);
                let re = Regex::new(&pattern).expect("cleanup rule pattern is valid");
                (re, rule)
            })
            .collect()
    })
}

/// Strips LaTeX markup from `text`, leaving plain words.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_latex(text: &str) -> String {
    let mut out = protect_escapes(text);
    for (re, rule) in compiled_rules() {
        loop {
            let next = re.replace_all(&out, rule.replacement).into_owned();
            let changed = next != out;
            out = next;
            if !rule.repeat || !changed {
                break;
            }
        }
    }
    restore_escapes(&out).trim().to_string()
}

/// Escaped symbols and the placeholders that stand in for them while the
/// rules run.
const ESCAPED: &[(char, char)] = &[
    ('{', '\u{E000}'),
    ('}', '\u{E001}'),
    ('%', '\u{E002}'),
    ('&', '\u{E003}'),
    ('#', '\u{E004}'),
    ('_', '\u{E005}'),
];

/// Hides `\{`, `\}`, `\%`, `\&`, `\#` and `\_` from the rules. `\$` becomes a
/// plain `$` up front so dollar glyphs read the same on every pass.
fn protect_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('\\') => {
                chars.next();
                out.push_str("\\\\");
            }
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some(next) => match ESCAPED.iter().find(|(symbol, _)| *symbol == next) {
                Some(&(_, placeholder)) => {
                    chars.next();
                    out.push(placeholder);
                }
                None => out.push('\\'),
            },
            None => out.push('\\'),
        }
    }
    out
}

fn restore_escapes(text: &str) -> String {
    text.chars()
        .map(|c| {
            ESCAPED
                .iter()
                .find(|(_, placeholder)| *placeholder == c)
                .map_or(c, |&(symbol, _)| symbol)
        })
        .collect()
}
