//! Rendering of drift findings for the terminal.
//!
//! Pure: renderers return strings and never print.

#![forbid(unsafe_code)]

mod text;

pub use text::render_report;
