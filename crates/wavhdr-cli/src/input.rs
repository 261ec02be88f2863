//! Header loading from files on disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use wavhdr::{HeaderError, WavHeader, HEADER_SIZE};

/// A header read from disk together with the facts needed to reconcile it
/// against the real file.
#[derive(Debug, Clone)]
pub struct LoadedHeader {
    pub header: WavHeader,
    /// Size of the file in bytes.
    pub file_len: u64,
}

impl LoadedHeader {
    /// Bytes actually present after the 44-byte header.
    pub fn available_payload(&self) -> u64 {
        self.file_len.saturating_sub(HEADER_SIZE as u64)
    }

    /// True when the file holds fewer payload bytes than the header declares.
    pub fn payload_truncated(&self) -> bool {
        self.available_payload() < self.header.wav_length() as u64
    }
}

/// Opens `path` and parses its first 44 bytes strictly.
///
/// Only the header is read; the payload is never loaded.
pub fn load_header(path: &Path) -> Result<LoadedHeader, HeaderError> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let header = WavHeader::read_from(BufReader::new(file))?;
    tracing::info!(path = %path.display(), file_len, "loaded header");
    Ok(LoadedHeader { header, file_len })
}
