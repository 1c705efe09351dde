//! Parameter splitting
//!
//! The hardest part of the line grammar. The parameter list is split on
//! commas, but a double-quoted value may itself contain commas, so the naive
//! split is re-merged into logical groups before each group is parsed into a
//! [`Parameter`]. A byte cursor into the original text recovers the optional
//! single-space separator after each comma, so that joining parameter
//! literals with `,` reproduces the source exactly.
//!
//! Splitting never fails: malformed input degrades to best-effort groups
//! (an unterminated quote consumes the remaining segments).

use super::grammar::{PARAMETER_COMMENT_PATTERN, PARAMETER_SPLITTER};
use crate::jrn::ast::Parameter;

/// A segment that opens a quoted literal without closing it
fn is_string_begin(segment: &str) -> bool {
    segment.starts_with('"') && !segment.ends_with('"')
}

/// A segment that closes a quoted literal opened in an earlier segment
fn is_string_end(segment: &str) -> bool {
    !segment.starts_with('"') && segment.ends_with('"')
}

/// Parse one logical parameter substring into a [`Parameter`].
///
/// A substring ending in `*/` carries a trailing comment; the greedy capture
/// in the comment pattern makes the last comment block win. A substring that
/// ends in `*/` but has no opening `/*` is taken whole as the value.
fn parse_parameter(literal: &str, prefix: &str) -> Parameter {
    let mut value = literal;
    let mut comment = "";
    if literal.ends_with("*/") {
        if let Some(captures) = PARAMETER_COMMENT_PATTERN.captures(literal) {
            value = captures.get(1).map_or(literal, |m| m.as_str());
            comment = captures.get(2).map_or("", |m| m.as_str());
        }
    }
    Parameter::new(value).with_prefix(prefix).with_comment(comment)
}

/// Split the raw text between a call's outer parentheses into parameters.
///
/// 1. Naive split on `,` plus optional one whitespace.
/// 2. Re-merge segments cut inside quoted values: a segment starting with `"`
///    but not ending with `"` consumes following segments (rejoined with `,`)
///    until one closes the literal or input runs out. A segment that both
///    starts and ends with `"` is already complete.
/// 3. Walk a byte cursor over the original text to recover the single-space
///    separator after each comma. The probe is an ASCII space, so byte
///    arithmetic is exact for multi-byte values as well.
///
/// Empty input yields zero parameters.
pub fn split_parameters(parameter_literal: &str) -> Vec<Parameter> {
    if parameter_literal.is_empty() {
        return Vec::new();
    }

    let segments: Vec<&str> = PARAMETER_SPLITTER.split(parameter_literal).collect();
    let mut groups: Vec<String> = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        if is_string_begin(segments[i]) {
            let mut group: Vec<&str> = Vec::new();
            loop {
                group.push(segments[i]);
                if is_string_end(segments[i]) || i + 1 == segments.len() {
                    break;
                }
                i += 1;
            }
            groups.push(group.join(","));
        } else {
            groups.push(segments[i].to_string());
        }
        i += 1;
    }

    let mut parameters = Vec::with_capacity(groups.len());
    parameters.push(parse_parameter(&groups[0], ""));
    // Cursor into the original text, in bytes; sits on the comma after the
    // group just consumed.
    let mut cursor = groups[0].len();
    for group in &groups[1..] {
        cursor += 1;
        let mut prefix = "";
        if parameter_literal.as_bytes().get(cursor) == Some(&b' ') {
            cursor += 1;
            prefix = " ";
        }
        parameters.push(parse_parameter(group, prefix));
        cursor += group.len();
    }

    parameters
}
