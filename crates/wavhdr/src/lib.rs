//! wavhdr - Canonical RIFF/WAVE Header Layout
//!
//! This crate describes the fixed 44-byte header at the start of a canonical
//! PCM WAVE file and the small set of checks consumers run on it before
//! trusting the sample payload that follows.
//!
//! # Features
//!
//! - **Exact layout**: fields are encoded one by one in declared order and
//!   width, little-endian, with no padding
//! - **Compatibility predicate**: 16 kHz, 16-bit, mono/stereo linear PCM by
//!   default, configurable through [`CompatProfile`]
//! - **Derived fields**: payload length, sample frame count, duration
//! - **Consistency report**: block align, byte rate, and chunk size
//!   cross-checks that never affect the predicate
//!
//! # Example
//!
//! ```
//! use wavhdr::WavHeader;
//!
//! let header = WavHeader::pcm(2, 16_000, 16, 4000);
//! let bytes = header.to_bytes();
//!
//! let decoded = WavHeader::parse(&bytes)?;
//! assert!(decoded.is_compatible());
//! assert_eq!(decoded.wav_length(), 4000);
//! assert_eq!(decoded.wav_sample_count()?, 1000);
//! # Ok::<(), wavhdr::HeaderError>(())
//! ```
//!
//! # Scope
//!
//! Only the canonical shape is understood: the `data` sub-chunk is assumed
//! to start at offset 36. Extensible format chunks, chunk scanning and RIFX
//! are out of scope.

pub mod error;
pub mod format;
pub mod header;
pub mod profile;
pub mod tag;

pub use error::{HeaderError, HeaderWarning};
pub use format::AudioFormat;
pub use header::{WavHeader, HEADER_SIZE, PCM_FMT_CHUNK_SIZE, RIFF_OVERHEAD};
pub use profile::{CompatProfile, Incompatibility};
pub use tag::FourCC;
