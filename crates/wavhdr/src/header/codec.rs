//! Field-by-field encoding of the 44-byte header.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{WavHeader, HEADER_SIZE};
use crate::error::HeaderError;
use crate::tag::FourCC;

fn read_tag<R: Read>(reader: &mut R) -> io::Result<FourCC> {
    let mut id = [0u8; 4];
    reader.read_exact(&mut id)?;
    Ok(FourCC(id))
}

fn decode<R: Read>(reader: &mut R) -> io::Result<WavHeader> {
    Ok(WavHeader {
        riff: read_tag(reader)?,
        chunk_size: reader.read_u32::<LittleEndian>()?,
        wave: read_tag(reader)?,
        fmt: read_tag(reader)?,
        subchunk1_size: reader.read_u32::<LittleEndian>()?,
        audio_format: reader.read_u16::<LittleEndian>()?,
        num_channels: reader.read_u16::<LittleEndian>()?,
        sample_rate: reader.read_u32::<LittleEndian>()?,
        byte_rate: reader.read_u32::<LittleEndian>()?,
        block_align: reader.read_u16::<LittleEndian>()?,
        bits_per_sample: reader.read_u16::<LittleEndian>()?,
        subchunk2_id: read_tag(reader)?,
        subchunk2_size: reader.read_u32::<LittleEndian>()?,
    })
}

fn expect_tag(field: &'static str, found: FourCC, expected: FourCC) -> Result<(), HeaderError> {
    if found != expected {
        tracing::debug!(field, %found, %expected, "rejecting header tag");
        return Err(HeaderError::InvalidMagic {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

impl WavHeader {
    /// Decodes the first 44 bytes of `bytes` without checking any tag.
    ///
    /// Trailing bytes are ignored. Fails only when fewer than 44 bytes are
    /// available.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() < HEADER_SIZE {
            tracing::debug!(len = bytes.len(), "header input too short");
            return Err(HeaderError::TruncatedInput {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        let mut reader = &bytes[..HEADER_SIZE];
        let header = decode(&mut reader)?;
        tracing::trace!(%header, "decoded header");
        Ok(header)
    }

    /// Decodes and checks the `RIFF`, `WAVE` and `fmt ` tags.
    ///
    /// The data tag is left to [`WavHeader::is_compatible`] so that its
    /// looser rule applies.
    pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
        let header = Self::from_bytes(bytes)?;
        header.validate_magic()?;
        Ok(header)
    }

    /// Reads exactly 44 bytes from `reader` and parses them strictly.
    pub fn read_from<R: Read>(reader: R) -> Result<Self, HeaderError> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        reader.take(HEADER_SIZE as u64).read_to_end(&mut buf)?;
        Self::parse(&buf)
    }

    /// Checks the three container tags in file order.
    pub fn validate_magic(&self) -> Result<(), HeaderError> {
        expect_tag("RIFF", self.riff, FourCC::RIFF)?;
        expect_tag("WAVE", self.wave, FourCC::WAVE)?;
        expect_tag("fmt", self.fmt, FourCC::FMT)?;
        Ok(())
    }

    /// Writes the header to a writer in declared field order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // RIFF descriptor
        writer.write_all(self.riff.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(self.wave.as_bytes())?;

        // fmt sub-chunk
        writer.write_all(self.fmt.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.subchunk1_size)?;
        writer.write_u16::<LittleEndian>(self.audio_format)?;
        writer.write_u16::<LittleEndian>(self.num_channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;

        // data sub-chunk
        writer.write_all(self.subchunk2_id.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.subchunk2_size)?;

        Ok(())
    }

    /// Encodes the header into its 44-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        let mut cursor = &mut buf[..];
        self.write_to(&mut cursor)
            .expect("44 bytes always fit the 44-byte buffer");
        buf
    }
}
