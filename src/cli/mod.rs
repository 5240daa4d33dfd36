//! Support code for the `recfmt` command-line tool.
//!
//! Enabled by the `cli` feature.

pub mod args;
pub mod cases;
