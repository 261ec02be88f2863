//! Property-based tests for the header codec and derived fields.
//!
//! These tests verify that decoding never panics, that encoding is lossless
//! for every field value, and that the derived helpers follow their
//! arithmetic definitions for arbitrary inputs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavhdr-tests --test proptest_header
//! ```

use proptest::prelude::*;

use wavhdr::{CompatProfile, FourCC, HeaderError, WavHeader, HEADER_SIZE};

// ============================================================================
// Strategies
// ============================================================================

fn any_tag() -> impl Strategy<Value = FourCC> {
    any::<[u8; 4]>().prop_map(FourCC::new)
}

/// Any header at all, including values the helpers consider invalid.
fn any_header() -> impl Strategy<Value = WavHeader> {
    (
        (any_tag(), any::<u32>(), any_tag(), any_tag(), any::<u32>()),
        (any::<u16>(), any::<u16>(), any::<u32>(), any::<u32>()),
        (any::<u16>(), any::<u16>(), any_tag(), any::<u32>()),
    )
        .prop_map(
            |(
                (riff, chunk_size, wave, fmt, subchunk1_size),
                (audio_format, num_channels, sample_rate, byte_rate),
                (block_align, bits_per_sample, subchunk2_id, subchunk2_size),
            )| WavHeader {
                riff,
                chunk_size,
                wave,
                fmt,
                subchunk1_size,
                audio_format,
                num_channels,
                sample_rate,
                byte_rate,
                block_align,
                bits_per_sample,
                subchunk2_id,
                subchunk2_size,
            },
        )
}

// ============================================================================
// 1. Codec
// ============================================================================

proptest! {
    /// Encoding then decoding yields the same header, field for field.
    #[test]
    fn round_trip_is_lossless(header in any_header()) {
        let bytes = header.to_bytes();
        prop_assert_eq!(bytes.len(), HEADER_SIZE);
        let decoded = WavHeader::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded, header);
    }

    /// Decoding then encoding reproduces the first 44 input bytes.
    #[test]
    fn decode_then_encode_reproduces_bytes(bytes in prop::collection::vec(any::<u8>(), 44..128)) {
        let header = WavHeader::from_bytes(&bytes).unwrap();
        let encoded = header.to_bytes();
        prop_assert_eq!(&encoded[..], &bytes[..HEADER_SIZE]);
    }

    /// Arbitrary short inputs are reported as truncated, never a panic.
    #[test]
    fn short_input_is_truncated(bytes in prop::collection::vec(any::<u8>(), 0..44)) {
        let is_truncated = matches!(
            WavHeader::parse(&bytes),
            Err(HeaderError::TruncatedInput { expected: 44, .. })
        );
        prop_assert!(is_truncated);
    }

    /// Strict parsing succeeds exactly when the three container tags match.
    #[test]
    fn parse_accepts_iff_container_tags_match(header in any_header()) {
        let tags_ok = header.riff == FourCC::RIFF
            && header.wave == FourCC::WAVE
            && header.fmt == FourCC::FMT;
        prop_assert_eq!(WavHeader::parse(&header.to_bytes()).is_ok(), tags_ok);
    }
}

// ============================================================================
// 2. Derived fields
// ============================================================================

proptest! {
    /// Sample count follows `len / ((bits / 8) * channels)` or errors on zero.
    #[test]
    fn sample_count_matches_definition(header in any_header()) {
        let divisor = (header.bits_per_sample / 8) as u64 * header.num_channels as u64;
        match header.wav_sample_count() {
            Ok(count) => {
                prop_assert!(divisor > 0);
                prop_assert_eq!(count as u64, header.subchunk2_size as u64 / divisor);
            }
            Err(HeaderError::DivisionByZero { .. }) => prop_assert_eq!(divisor, 0),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Payload length is the raw field.
    #[test]
    fn wav_length_is_raw_field(header in any_header()) {
        prop_assert_eq!(header.wav_length(), header.subchunk2_size);
    }

    /// Consistency checks never panic on arbitrary fields.
    #[test]
    fn consistency_warnings_never_panic(header in any_header()) {
        let _ = header.consistency_warnings();
        let _ = header.duration_seconds();
    }
}

// ============================================================================
// 3. Compatibility
// ============================================================================

proptest! {
    /// The predicate agrees with its written-out definition.
    #[test]
    fn compatibility_matches_definition(header in any_header()) {
        let id = header.subchunk2_id.as_bytes();
        let expected = header.audio_format == 1
            && (header.num_channels == 1 || header.num_channels == 2)
            && header.sample_rate == 16_000
            && header.bits_per_sample == 16
            && id[0] == b'd'
            && id[3] == b'a';
        prop_assert_eq!(header.is_compatible(), expected);
    }

    /// Any tag of the form `d??a` passes; bytes 1 and 2 are never examined.
    #[test]
    fn weak_tag_ignores_middle_bytes(b1 in any::<u8>(), b2 in any::<u8>()) {
        let mut header = WavHeader::pcm(2, 16_000, 16, 400);
        header.subchunk2_id = FourCC::new([b'd', b1, b2, b'a']);
        prop_assert!(header.is_compatible());
    }

    /// The failure list is empty exactly when the predicate holds.
    #[test]
    fn incompatibilities_agree_with_predicate(header in any_header()) {
        let profile = CompatProfile::default();
        prop_assert_eq!(
            header.incompatibilities(&profile).is_empty(),
            header.is_compatible_with(&profile)
        );
    }
}
