//! Write command implementation
//!
//! Writes a canonical header followed by a silent (zeroed) payload.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use wavhdr::{WavHeader, HEADER_SIZE};

use super::json_output::{error_codes, HeaderReport, JsonError, WriteOutput};

/// Stream parameters for a new file.
#[derive(Debug, Clone, Copy)]
pub struct WriteParams {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Sample frames of silence to emit.
    pub frames: u32,
}

impl WriteParams {
    /// Builds the header, rejecting shapes whose payload size is undefined or
    /// does not fit the 32-bit length fields.
    pub fn header(&self) -> Result<WavHeader> {
        if self.channels == 0 {
            anyhow::bail!("channels must be at least 1");
        }
        if self.bits_per_sample < 8 || !self.bits_per_sample.is_multiple_of(8) {
            anyhow::bail!(
                "bits per sample must be a positive multiple of 8, got {}",
                self.bits_per_sample
            );
        }
        let block_align = self.channels as u64 * (self.bits_per_sample / 8) as u64;
        if block_align > u16::MAX as u64 {
            anyhow::bail!("block align {} exceeds 65535", block_align);
        }
        let data_len = block_align * self.frames as u64;
        let max_data = (u32::MAX - wavhdr::RIFF_OVERHEAD) as u64;
        if data_len > max_data {
            anyhow::bail!(
                "{} frames of {}-byte audio ({} bytes) exceed the 4 GiB RIFF limit",
                self.frames,
                block_align,
                data_len
            );
        }
        Ok(WavHeader::pcm(
            self.channels,
            self.sample_rate,
            self.bits_per_sample,
            data_len as u32,
        ))
    }
}

/// Writes header plus zeroed payload to `writer`. Returns bytes written.
pub fn write_silence<W: Write>(writer: &mut W, header: &WavHeader) -> io::Result<u64> {
    header.write_to(writer)?;
    let payload = header.wav_length() as u64;
    io::copy(&mut io::repeat(0).take(payload), writer)?;
    Ok(HEADER_SIZE as u64 + payload)
}

/// Run the write command
///
/// # Arguments
/// * `out` - Output file path
/// * `params` - Stream parameters
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(out: &str, params: WriteParams, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(out, params);
    }

    let header = params.header()?;
    let bytes_written = write_file(out, &header)?;
    println!("{} {} ({} bytes)", "Wrote".green().bold(), out, bytes_written);
    println!("  {}", header);
    Ok(ExitCode::SUCCESS)
}

fn run_json(out: &str, params: WriteParams) -> Result<ExitCode> {
    let output = write_output(out, params);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Builds the `--json` record for a write, failures included.
pub fn write_output(out: &str, params: WriteParams) -> WriteOutput {
    let header = match params.header() {
        Ok(header) => header,
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_PARAMS, format!("{:#}", e));
            return WriteOutput::failure(out, error);
        }
    };
    match write_file(out, &header) {
        Ok(bytes_written) => WriteOutput {
            success: true,
            errors: Vec::new(),
            path: out.to_string(),
            bytes_written,
            result: Some(HeaderReport::new(header)),
        },
        Err(e) => {
            let error =
                JsonError::new(error_codes::WRITE_FAILED, format!("{:#}", e)).with_file(out);
            WriteOutput::failure(out, error)
        }
    }
}

fn write_file(out: &str, header: &WavHeader) -> Result<u64> {
    let file = File::create(Path::new(out))
        .with_context(|| format!("Failed to create output file: {}", out))?;
    let mut writer = BufWriter::new(file);
    let bytes_written = write_silence(&mut writer, header)
        .and_then(|n| writer.flush().map(|_| n))
        .with_context(|| format!("Failed to write: {}", out))?;
    tracing::info!(path = out, bytes_written, "wrote file");
    Ok(bytes_written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(channels: u16, bits: u16, frames: u32) -> WriteParams {
        WriteParams {
            channels,
            sample_rate: 16_000,
            bits_per_sample: bits,
            frames,
        }
    }

    #[test]
    fn test_write_silence_layout() {
        let header = params(2, 16, 10).header().unwrap();
        let mut buf = Vec::new();
        let n = write_silence(&mut buf, &header).unwrap();

        assert_eq!(n, 84);
        assert_eq!(buf.len(), 84);
        assert!(buf[HEADER_SIZE..].iter().all(|&b| b == 0));

        let decoded = WavHeader::parse(&buf).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.wav_sample_count().unwrap(), 10);
        assert!(decoded.consistency_warnings().is_empty());
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        assert!(params(0, 16, 1).header().is_err());
        assert!(params(1, 0, 1).header().is_err());
        assert!(params(1, 12, 1).header().is_err());
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let err = params(2, 16, u32::MAX).header().unwrap_err();
        assert!(err.to_string().contains("4 GiB"));
    }

    #[test]
    fn test_rejects_oversized_block_align() {
        assert!(params(u16::MAX, 32, 1).header().is_err());
    }

    #[test]
    fn test_json_rejects_zero_channels() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("bad.wav");
        let out = out.to_str().unwrap();

        let output = write_output(out, params(0, 16, 1));
        assert!(!output.success);
        assert_eq!(output.path, out);
        assert_eq!(output.bytes_written, 0);
        assert!(output.result.is_none());
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code, error_codes::INVALID_PARAMS);
        assert!(output.errors[0].message.contains("channels must be at least 1"));
        assert!(!dir.path().join("bad.wav").exists());

        let code = run(out, params(0, 16, 1), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_json_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("out.wav");
        let out = out.to_str().unwrap();

        let output = write_output(out, params(1, 16, 1));
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::WRITE_FAILED);
        assert_eq!(output.errors[0].file.as_deref(), Some(out));
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("silence.wav");
        run(out.to_str().unwrap(), params(1, 16, 16_000), false).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(bytes.len(), 44 + 32_000);
        assert!(WavHeader::parse(&bytes).unwrap().is_compatible());
    }
}
