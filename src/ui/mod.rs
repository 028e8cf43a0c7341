//! # User Interface
//!
//! Colored terminal output. Log lines go to stderr so `--json` output on
//! stdout stays machine readable.

pub mod log;

pub use log::{debug, error, header, info, path_link, score_color, success, warn, Log};
