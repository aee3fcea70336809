//! Common utilities for the Sprig parser.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal output for lenient
//!   parsing decisions worth surfacing

pub mod warning;
