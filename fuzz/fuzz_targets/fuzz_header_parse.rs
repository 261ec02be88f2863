#![no_main]

use libfuzzer_sys::fuzz_target;
use wavhdr::{CompatProfile, WavHeader, HEADER_SIZE};

fuzz_target!(|data: &[u8]| {
    let _ = WavHeader::parse(data);

    let Ok(header) = WavHeader::from_bytes(data) else {
        assert!(data.len() < HEADER_SIZE);
        return;
    };

    assert_eq!(&header.to_bytes()[..], &data[..HEADER_SIZE]);

    let _ = header.wav_sample_count();
    let _ = header.duration_seconds();
    let _ = header.consistency_warnings();
    let _ = header.payload(data);
    let _ = header.to_string();

    let profile = CompatProfile::default();
    assert_eq!(
        header.is_compatible_with(&profile),
        header.incompatibilities(&profile).is_empty()
    );
});
