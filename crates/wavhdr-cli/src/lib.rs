//! wavhdr CLI library.
//!
//! This crate provides the command implementations behind the `wavhdr`
//! binary: header loading, human and JSON reporting, and file writing.

pub mod commands;
pub mod input;
pub mod logging;
