//! CLI command implementations

pub mod check;
pub mod inspect;
pub mod json_output;
pub mod write;
