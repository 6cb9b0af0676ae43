//! Tag-tree scanner
//!
//! Isolates the first balanced run of markup (`<a><b/></a>` and the like)
//! from surrounding prose in a single left-to-right pass. Open tag names are
//! kept on a stack; every closing tag must match the innermost open one, and
//! the scan returns success the moment the stack drains back to empty.
//!
//! Only structural balance is checked. Attribute content is skipped over
//! verbatim, entities are not resolved, and nothing is validated against any
//! markup schema.

use crate::snip::outcome::{SnipOutcome, INVALID_INPUT};

pub const VALID_TAG_STRUCTURE: &str = "Valid tag structure found.";
pub const NO_TAGS_FOUND: &str = "No tags found.";
pub const INVALID_TAG_NAME: &str = "Invalid tag name.";
pub const INCOMPLETE_TAG_STRUCTURE: &str = "Incomplete tag structure.";

/// Per-call configuration for [`snip_by_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions {
    /// When false (the default), tag names are lowercased before they are
    /// compared and stored, so `<DIV></div>` balances.
    pub case_sensitive: bool,
}

/// Ephemeral scanner state. Created fresh per call, dropped on return.
struct ScanState {
    /// Pending open tag names, innermost last.
    stack: Vec<String>,
    /// Byte position of the next unread character.
    cursor: usize,
    /// Byte index of the first `<` seen; fixed once set.
    snippet_start: Option<usize>,
}

/// Characters a tag identifier may consist of: ASCII word characters plus
/// `:` (namespaces) and `-` (custom elements).
fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b':' || b == b'-'
}

/// Extracts the first balanced tag tree from `content`.
///
/// Returns success with the fragment as soon as every opened tag has been
/// closed (greedy first-balanced-closure: well-formed siblings after that
/// point are not included). All failure modes come back as
/// [`SnipOutcome::Fail`] with a diagnostic, carrying the partial fragment in
/// `raw` whenever part of a structure had already been recognized.
///
/// ```
/// use snipsmart::snip::{snip_by_tag, TagOptions};
///
/// let outcome = snip_by_tag("before <p>hi</p> after", &TagOptions::default());
/// assert_eq!(outcome.data(), Some("<p>hi</p>"));
/// ```
pub fn snip_by_tag(content: &str, options: &TagOptions) -> SnipOutcome {
    if content.is_empty() {
        return SnipOutcome::fail(INVALID_INPUT);
    }

    let bytes = content.as_bytes();
    let len = bytes.len();
    let mut state = ScanState {
        stack: Vec::new(),
        cursor: 0,
        snippet_start: None,
    };

    while state.cursor < len {
        if bytes[state.cursor] != b'<' {
            state.cursor += 1;
            continue;
        }

        // First structural delimiter fixes where the snippet begins.
        let snippet_start = *state.snippet_start.get_or_insert(state.cursor);

        let mut is_closing = false;
        let mut is_self_closing = false;
        state.cursor += 1;

        if state.cursor < len && bytes[state.cursor] == b'/' {
            is_closing = true;
            state.cursor += 1;
        }

        let name_start = state.cursor;
        while state.cursor < len && is_tag_name_byte(bytes[state.cursor]) {
            state.cursor += 1;
        }
        let name_raw = &content[name_start..state.cursor];

        if name_raw.is_empty() {
            return SnipOutcome::fail_with_raw(
                INVALID_TAG_NAME,
                &content[snippet_start..state.cursor],
            );
        }
        let name = if options.case_sensitive {
            name_raw.to_string()
        } else {
            name_raw.to_lowercase()
        };

        // Skip attribute content up to the closing `>`, watching for `/>`.
        while state.cursor < len && bytes[state.cursor] != b'>' {
            if bytes[state.cursor] == b'/'
                && state.cursor + 1 < len
                && bytes[state.cursor + 1] == b'>'
            {
                is_self_closing = true;
                state.cursor += 2;
                break;
            }
            state.cursor += 1;
        }
        if state.cursor < len && bytes[state.cursor] == b'>' {
            state.cursor += 1;
        }

        if is_closing {
            match state.stack.pop() {
                Some(expected) if expected == name => {}
                Some(expected) => {
                    return SnipOutcome::fail_with_raw(
                        format!(
                            "Mismatched closing tag: expected </{expected}> but found </{name}>"
                        ),
                        &content[snippet_start..state.cursor],
                    );
                }
                None => {
                    return SnipOutcome::fail_with_raw(
                        format!("Mismatched closing tag: found </{name}> with no open tag"),
                        &content[snippet_start..state.cursor],
                    );
                }
            }
        } else if !is_self_closing {
            state.stack.push(name);
        }

        // Stack drained back to empty: the fragment is complete.
        if state.stack.is_empty() {
            return SnipOutcome::success(
                &content[snippet_start..state.cursor],
                VALID_TAG_STRUCTURE,
            );
        }
    }

    match (state.stack.last(), state.snippet_start) {
        (Some(innermost), Some(start)) => {
            SnipOutcome::fail_with_raw(format!("Unclosed tag <{innermost}>"), &content[start..])
        }
        (Some(innermost), None) => {
            // A tag on the stack implies a recorded start; kept for exhaustiveness.
            SnipOutcome::fail(format!("Unclosed tag <{innermost}>"))
        }
        (None, Some(start)) => {
            SnipOutcome::fail_with_raw(INCOMPLETE_TAG_STRUCTURE, &content[start..])
        }
        (None, None) => SnipOutcome::fail(NO_TAGS_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snip(content: &str) -> SnipOutcome {
        snip_by_tag(content, &TagOptions::default())
    }

    #[test]
    fn test_simple_fragment_in_prose() {
        let outcome = snip("Here is the code <html><p>Lorem ipsum</p></html>. Enjoy.");
        assert_eq!(outcome.data(), Some("<html><p>Lorem ipsum</p></html>"));
        assert_eq!(outcome.comments(), VALID_TAG_STRUCTURE);
    }

    #[test]
    fn test_empty_input() {
        let outcome = snip("");
        assert_eq!(outcome.comments(), INVALID_INPUT);
        assert_eq!(outcome.raw(), None);
    }

    #[test]
    fn test_no_tags() {
        let outcome = snip("just plain prose, nothing else");
        assert_eq!(outcome.comments(), NO_TAGS_FOUND);
        assert_eq!(outcome.raw(), None);
    }

    #[test]
    fn test_self_closing_only() {
        let outcome = snip("noise <br/> more noise");
        assert_eq!(outcome.data(), Some("<br/>"));
    }

    #[test]
    fn test_attributes_are_skipped() {
        let outcome = snip(r#"x <div class="a b" data-x='<'>y</div> z"#);
        assert_eq!(outcome.data(), Some(r#"<div class="a b" data-x='<'>y</div>"#));
    }

    #[test]
    fn test_mismatched_closer() {
        let outcome = snip("text <a><b></a></b> more");
        assert_eq!(
            outcome.comments(),
            "Mismatched closing tag: expected </b> but found </a>"
        );
        assert_eq!(outcome.raw(), Some("<a><b></a>"));
    }

    #[test]
    fn test_closer_with_nothing_open() {
        let outcome = snip("oops </div> text");
        assert_eq!(
            outcome.comments(),
            "Mismatched closing tag: found </div> with no open tag"
        );
        assert_eq!(outcome.raw(), Some("</div>"));
    }

    #[test]
    fn test_unclosed_names_innermost() {
        let outcome = snip("<a><b>hello");
        assert_eq!(outcome.comments(), "Unclosed tag <b>");
        assert_eq!(outcome.raw(), Some("<a><b>hello"));
    }

    #[test]
    fn test_greedy_first_closure() {
        let outcome = snip("<a></a><b></b>");
        assert_eq!(outcome.data(), Some("<a></a>"));
    }

    #[test]
    fn test_case_insensitive_default() {
        let outcome = snip("<DIV></div>");
        assert_eq!(outcome.data(), Some("<DIV></div>"));
    }

    #[test]
    fn test_case_sensitive_mismatch() {
        let outcome = snip_by_tag("<DIV></div>", &TagOptions { case_sensitive: true });
        assert_eq!(
            outcome.comments(),
            "Mismatched closing tag: expected </DIV> but found </div>"
        );
    }

    #[test]
    fn test_empty_tag_name_rejected() {
        let outcome = snip("3 < 5 and that is fine");
        assert_eq!(outcome.comments(), INVALID_TAG_NAME);
        assert_eq!(outcome.raw(), Some("<"));
    }

    #[test]
    fn test_namespaced_and_hyphenated_names() {
        let outcome = snip("<ns:my-element><ns:inner/></ns:my-element>");
        assert_eq!(
            outcome.data(),
            Some("<ns:my-element><ns:inner/></ns:my-element>")
        );
    }

    #[test]
    fn test_multibyte_prose_around_fragment() {
        let outcome = snip("préambule — <p>déjà vu</p> — épilogue");
        assert_eq!(outcome.data(), Some("<p>déjà vu</p>"));
    }

    #[test]
    fn test_truncated_open_tag_at_end() {
        let outcome = snip("text <div class=");
        assert_eq!(outcome.comments(), "Unclosed tag <div>");
        assert_eq!(outcome.raw(), Some("<div class="));
    }
}
