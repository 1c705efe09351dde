//! Grammar Pattern Definitions
//!
//! This module defines the fixed line-level patterns of the jrn format.
//! Patterns are compiled once at first use and shared by the classifier and
//! the parameter splitter; the classifier tries them in a fixed order
//! (full-line prefix, then comment check, then call pattern).

use once_cell::sync::Lazy;
use regex::Regex;

/// Full-line pattern: a `/*[timestamp]*/ ` prefix followed by the rest of the
/// line up to a trailing `;`.
///
/// The timestamp is fixed-width `[YYYY-MM-DD HH:MM:SS(mmm)]` where each digit
/// position may be space-padded. Capture 1 is the timestamp text without the
/// comment wrapper; capture 2 is the remainder including the trailing `;`, so
/// the call pattern's suffix capture keeps the semicolon.
pub(super) static FULL_LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^/\*(\[\d{4}-[\s\d]\d-[\s\d]\d\s[\s\d]\d:[\s\d]\d:[\s\d]\d\([\s\d]{3}\)\])\*/\s(.*;)$",
    )
    .expect("full-line pattern must compile")
});

/// Call pattern: `module.action(parameters)suffix`.
///
/// `module` is `Jrn` plus exactly three letters; `action` is one or more
/// letters. The parameter-list capture is regex-greedy, so a literal `)`
/// inside a parameter makes the rightmost `)` win and everything after it
/// lands in the suffix capture.
pub(super) static CALL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Jrn[a-zA-Z]{3})\.([a-zA-Z]+)\((.*)\)(.*)$")
        .expect("call pattern must compile")
});

/// Naive parameter separator: a comma optionally followed by one whitespace
/// character. This split may cut inside quoted values; the splitter re-merges
/// those pieces afterwards.
pub(super) static PARAMETER_SPLITTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s?").expect("parameter splitter must compile"));

/// Trailing `/*comment*/` on a parameter value. Capture 1 is greedy, so the
/// comment is always the last comment block of the value.
pub(super) static PARAMETER_COMMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)/\*(.*)\*/$").expect("comment pattern must compile"));
