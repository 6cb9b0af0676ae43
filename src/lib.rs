//! # snipsmart
//!
//! Extracts a syntactically valid, self-contained fragment — a balanced tag
//! tree or a JSON value — from unstructured free-form text, typically the
//! output of a language model that wraps the useful payload in prose.
//!
//! The extraction engine lives in the [`snip`] module: two single-pass
//! scanners behind one dispatch function, all reporting through the same
//! [`snip::SnipOutcome`] shape. The [`server`] module wraps the engine in a
//! small HTTP service.
//!
//! ```
//! use snipsmart::snip::snip_smart;
//!
//! let noisy = "Sure! Here is the markup: <p>hello</p> Let me know if it helps.";
//! let outcome = snip_smart(noisy, "tag");
//! assert_eq!(outcome.data(), Some("<p>hello</p>"));
//! ```

pub mod server;
pub mod snip;
