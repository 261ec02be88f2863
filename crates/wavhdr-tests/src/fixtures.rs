//! Test fixture utilities for WAV files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wavhdr::WavHeader;

/// A temporary directory that test WAV files are written into.
pub struct WavFixture {
    pub root: TempDir,
}

impl Default for WavFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl WavFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write raw bytes to `name`.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    /// Write `header` followed by exactly `payload_len` zero bytes.
    ///
    /// `payload_len` may differ from the declared data length so that
    /// truncated files can be produced.
    pub fn write_header(&self, name: &str, header: &WavHeader, payload_len: usize) -> PathBuf {
        let mut bytes = header.to_bytes().to_vec();
        bytes.resize(bytes.len() + payload_len, 0);
        self.write_bytes(name, &bytes)
    }

    /// Write a file with `hound`, filled with a deterministic ramp of i16
    /// samples, and return its path.
    pub fn write_hound_i16(
        &self,
        name: &str,
        channels: u16,
        sample_rate: u32,
        frames: u32,
    ) -> PathBuf {
        let path = self.root.path().join(name);
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("Failed to create WAV");
        for i in 0..frames * channels as u32 {
            writer
                .write_sample((i % 2000) as i16 - 1000)
                .expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
        path
    }
}

/// 16 kHz mono 16-bit PCM, the shape the default profile accepts.
pub fn compatible_header(data_len: u32) -> WavHeader {
    WavHeader::pcm(1, 16_000, 16, data_len)
}
