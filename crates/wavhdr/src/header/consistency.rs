//! Cross-field consistency checks.

use super::{WavHeader, PCM_FMT_CHUNK_SIZE, RIFF_OVERHEAD};
use crate::error::HeaderWarning;

impl WavHeader {
    /// Reports fields that disagree with the values derivable from the rest
    /// of the header. Arithmetic is done in `u64` so oversized fields are
    /// reported rather than wrapped.
    pub fn consistency_warnings(&self) -> Vec<HeaderWarning> {
        let mut warnings = Vec::new();

        if self.subchunk1_size != PCM_FMT_CHUNK_SIZE {
            warnings.push(HeaderWarning::NonPcmFmtSize {
                found: self.subchunk1_size,
            });
        }

        if !self.bits_per_sample.is_multiple_of(8) {
            warnings.push(HeaderWarning::UnalignedBitDepth {
                bits_per_sample: self.bits_per_sample,
            });
        }

        let expected_block_align = self.frame_size();
        if self.block_align as u32 != expected_block_align {
            warnings.push(HeaderWarning::BlockAlignMismatch {
                found: self.block_align,
                expected: expected_block_align,
            });
        }

        // Measured against the declared block align, which is what players use.
        let expected_byte_rate = self.sample_rate as u64 * self.block_align as u64;
        if self.byte_rate as u64 != expected_byte_rate {
            warnings.push(HeaderWarning::ByteRateMismatch {
                found: self.byte_rate,
                expected: expected_byte_rate,
            });
        }

        let expected_chunk_size = RIFF_OVERHEAD as u64 + self.subchunk2_size as u64;
        if self.chunk_size as u64 != expected_chunk_size {
            warnings.push(HeaderWarning::ChunkSizeMismatch {
                found: self.chunk_size,
                expected: expected_chunk_size,
            });
        }

        let frame_size = self.frame_size();
        if frame_size != 0 && !self.subchunk2_size.is_multiple_of(frame_size) {
            warnings.push(HeaderWarning::PartialFrame {
                data_len: self.subchunk2_size,
                frame_size,
            });
        }

        warnings
    }
}
