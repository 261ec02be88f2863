//! Audio format codes carried in the `AudioFormat` field.

use std::fmt;

/// Known WAVE format codes.
///
/// The header keeps the raw `u16`; this enum is a view over it, so an
/// unrecognized code survives a decode/encode cycle untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    /// Linear PCM (1).
    Pcm,
    /// ITU G.711 mu-law (6).
    MuLaw,
    /// ITU G.711 a-law (7).
    ALaw,
    /// IBM mu-law (257).
    IbmMuLaw,
    /// IBM a-law (258).
    IbmALaw,
    /// IBM ADPCM (259).
    Adpcm,
    /// Any other code.
    Unknown(u16),
}

impl AudioFormat {
    pub const fn code(&self) -> u16 {
        match self {
            AudioFormat::Pcm => 1,
            AudioFormat::MuLaw => 6,
            AudioFormat::ALaw => 7,
            AudioFormat::IbmMuLaw => 257,
            AudioFormat::IbmALaw => 258,
            AudioFormat::Adpcm => 259,
            AudioFormat::Unknown(code) => *code,
        }
    }

    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => AudioFormat::Pcm,
            6 => AudioFormat::MuLaw,
            7 => AudioFormat::ALaw,
            257 => AudioFormat::IbmMuLaw,
            258 => AudioFormat::IbmALaw,
            259 => AudioFormat::Adpcm,
            other => AudioFormat::Unknown(other),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            AudioFormat::Pcm => "PCM",
            AudioFormat::MuLaw => "mu-law",
            AudioFormat::ALaw => "a-law",
            AudioFormat::IbmMuLaw => "IBM mu-law",
            AudioFormat::IbmALaw => "IBM a-law",
            AudioFormat::Adpcm => "ADPCM",
            AudioFormat::Unknown(_) => "unknown",
        }
    }
}

impl From<u16> for AudioFormat {
    fn from(code: u16) -> Self {
        AudioFormat::from_code(code)
    }
}

impl From<AudioFormat> for u16 {
    fn from(format: AudioFormat) -> Self {
        format.code()
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for (code, format) in [
            (1, AudioFormat::Pcm),
            (6, AudioFormat::MuLaw),
            (7, AudioFormat::ALaw),
            (257, AudioFormat::IbmMuLaw),
            (258, AudioFormat::IbmALaw),
            (259, AudioFormat::Adpcm),
        ] {
            assert_eq!(AudioFormat::from(code), format);
            assert_eq!(u16::from(format), code);
        }
    }

    #[test]
    fn test_unknown_code_preserved() {
        let format = AudioFormat::from(0xFFFE);
        assert_eq!(format, AudioFormat::Unknown(0xFFFE));
        assert_eq!(format.code(), 0xFFFE);
        assert_eq!(format.to_string(), "unknown (65534)");
    }
}
