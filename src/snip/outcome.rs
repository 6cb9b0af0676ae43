//! The single result shape shared by both extractors and the dispatcher.
//!
//! `SnipOutcome` is a sum type rather than a bag of nullable fields so that
//! the invariant "exactly one of `data`/`raw` is populated, and `data` only
//! on success" holds by construction. The flat [`SnipRecord`] mirrors the
//! wire shape (`status` / `comments` / `data` / `raw`) expected by HTTP
//! clients of the service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic for degenerate caller input, shared by both extractors.
pub const INVALID_INPUT: &str = "Invalid input: content must be a string.";

/// Outcome of one extraction attempt.
///
/// Failure is a normal, expected return value meaning "could not fully
/// isolate a fragment" — it is never raised as an error through the call
/// stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnipOutcome {
    /// A structurally valid fragment was isolated.
    Success {
        /// The extracted fragment, verbatim from the input.
        data: String,
        /// Fixed human-readable confirmation message.
        comments: String,
    },
    /// Extraction did not complete.
    Fail {
        /// Diagnostic explaining why extraction failed; never empty.
        comments: String,
        /// Best-effort partial fragment recovered before the failure was
        /// detected, when any content was identified as belonging to the
        /// attempted structure.
        raw: Option<String>,
    },
}

impl SnipOutcome {
    pub fn success(data: impl Into<String>, comments: impl Into<String>) -> Self {
        SnipOutcome::Success {
            data: data.into(),
            comments: comments.into(),
        }
    }

    pub fn fail(comments: impl Into<String>) -> Self {
        SnipOutcome::Fail {
            comments: comments.into(),
            raw: None,
        }
    }

    pub fn fail_with_raw(comments: impl Into<String>, raw: impl Into<String>) -> Self {
        SnipOutcome::Fail {
            comments: comments.into(),
            raw: Some(raw.into()),
        }
    }

    pub fn status(&self) -> SnipStatus {
        match self {
            SnipOutcome::Success { .. } => SnipStatus::Success,
            SnipOutcome::Fail { .. } => SnipStatus::Fail,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SnipOutcome::Success { .. })
    }

    /// The extracted fragment, present only on success.
    pub fn data(&self) -> Option<&str> {
        match self {
            SnipOutcome::Success { data, .. } => Some(data),
            SnipOutcome::Fail { .. } => None,
        }
    }

    /// The partial fragment recovered on failure, if any.
    pub fn raw(&self) -> Option<&str> {
        match self {
            SnipOutcome::Success { .. } => None,
            SnipOutcome::Fail { raw, .. } => raw.as_deref(),
        }
    }

    pub fn comments(&self) -> &str {
        match self {
            SnipOutcome::Success { comments, .. } => comments,
            SnipOutcome::Fail { comments, .. } => comments,
        }
    }

    /// Flatten into the four-field wire record.
    pub fn into_record(self) -> SnipRecord {
        match self {
            SnipOutcome::Success { data, comments } => SnipRecord {
                status: SnipStatus::Success,
                comments,
                data: Some(data),
                raw: None,
            },
            SnipOutcome::Fail { comments, raw } => SnipRecord {
                status: SnipStatus::Fail,
                comments,
                data: None,
                raw,
            },
        }
    }
}

/// Success/fail discriminant, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnipStatus {
    Success,
    Fail,
}

impl fmt::Display for SnipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnipStatus::Success => write!(f, "success"),
            SnipStatus::Fail => write!(f, "fail"),
        }
    }
}

/// Flat, serializable view of a [`SnipOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnipRecord {
    pub status: SnipStatus,
    pub comments: String,
    pub data: Option<String>,
    pub raw: Option<String>,
}
