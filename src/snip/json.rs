//! JSON-value scanner
//!
//! Sibling of the tag scanner, same philosophy: find the first structural
//! opener (`{` or `[`), track nesting with a depth counter, and stop at the
//! first point depth returns to zero. Delimiter counting is suspended inside
//! quoted string literals (backslash escapes honored) so braces in string
//! values are not mistaken for structure.
//!
//! Balance alone does not make a value valid — trailing commas and unquoted
//! keys balance fine — so the captured span is handed to `serde_json` as a
//! final validation gate before success is claimed.

use crate::snip::outcome::{SnipOutcome, INVALID_INPUT};

pub const VALID_JSON_STRUCTURE: &str = "Valid JSON structure found.";
pub const NO_JSON_FOUND: &str = "No JSON structure found.";
pub const MALFORMED_JSON: &str = "Malformed JSON structure";
pub const UNCLOSED_JSON: &str = "Unclosed JSON structure";

/// Extracts the first balanced, parseable JSON object or array from `content`.
///
/// ```
/// use snipsmart::snip::snip_json;
///
/// let outcome = snip_json(r#"Sure, here you go: {"answer": 42} — anything else?"#);
/// assert_eq!(outcome.data(), Some(r#"{"answer": 42}"#));
/// ```
pub fn snip_json(content: &str) -> SnipOutcome {
    if content.is_empty() {
        return SnipOutcome::fail(INVALID_INPUT);
    }

    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut snippet_start: Option<usize> = None;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut i = 0;

    while i < len {
        let b = bytes[i];

        let start = match snippet_start {
            Some(start) => start,
            None => {
                // Everything before the first opener is prose.
                if b == b'{' || b == b'[' {
                    snippet_start = Some(i);
                    depth = 1;
                }
                i += 1;
                continue;
            }
        };

        if in_string {
            match b {
                // An escaped character never terminates the literal.
                b'\\' => {
                    i += 2;
                    continue;
                }
                b'"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => depth -= 1,
            _ => {}
        }
        i += 1;

        if depth == 0 {
            let candidate = &content[start..i];
            return match serde_json::from_str::<serde_json::Value>(candidate) {
                Ok(_) => SnipOutcome::success(candidate, VALID_JSON_STRUCTURE),
                Err(_) => SnipOutcome::fail_with_raw(MALFORMED_JSON, candidate),
            };
        }
    }

    match snippet_start {
        Some(start) => SnipOutcome::fail_with_raw(UNCLOSED_JSON, &content[start..]),
        None => SnipOutcome::fail(NO_JSON_FOUND),
    }
}
