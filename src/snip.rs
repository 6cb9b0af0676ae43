//! Fragment extraction engine
//!
//! Two sibling scanners share one result shape and one philosophy: walk the
//! input left to right exactly once, track open structure on a stack (or a
//! depth counter), and return as soon as the structure balances — the greedy
//! first-balanced-closure rule. Trailing well-formed siblings after the first
//! closure point are deliberately left behind.
//!
//! Nothing in here panics on caller input and nothing is kept between calls;
//! every function is a pure mapping from a string to a [`SnipOutcome`], so
//! concurrent callers need no coordination.

pub mod dispatch;
pub mod json;
pub mod outcome;
pub mod tag;

pub use dispatch::{snip_smart, Format};
pub use json::snip_json;
pub use outcome::{SnipOutcome, SnipRecord, SnipStatus};
pub use tag::{snip_by_tag, TagOptions};
