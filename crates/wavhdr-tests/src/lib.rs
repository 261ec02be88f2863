//! wavhdr End-to-End Test Infrastructure
//!
//! Integration tests live under `tests/`:
//!
//! - `proptest_header`: round-trip and never-panic properties of the codec
//! - `hound_interop`: headers written by `hound` decode and pass the checks,
//!   and files written by `wavhdr` are readable by `hound`
//! - `cli_commands`: the `inspect`, `check` and `write` commands against
//!   files on disk
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavhdr-tests
//! ```

pub mod fixtures;
