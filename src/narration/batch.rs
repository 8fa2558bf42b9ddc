use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::engine::{SpeechService, SynthesisRequest};
use crate::settings::TtsSettings;
use super::Segment;

const AUDIO_EXTENSION: &str = "wav";
const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentOutcome {
    Saved { path: PathBuf, duration: f64 },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentReport {
    pub id: String,
    pub outcome: SegmentOutcome,
}

impl SegmentReport {
    /// Failed segments count as zero seconds
    pub fn duration(&self) -> f64 {
        match &self.outcome {
            SegmentOutcome::Saved { duration, .. } => *duration,
            SegmentOutcome::Failed { .. } => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub segments: Vec<SegmentReport>,
}

impl BatchReport {
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(SegmentReport::duration).sum()
    }

    pub fn saved_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s.outcome, SegmentOutcome::Saved { .. }))
            .count()
    }
}

/// Drop everything outside the base64 alphabet, so line-wrapped payloads
/// decode. Padding is still checked by the decoder.
fn base64_alphabet_only(encoded: &str) -> Vec<u8> {
    encoded
        .bytes()
        .filter(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
        .collect()
}

/// Synthesize one segment and write its audio into `output_dir`.
///
/// Only an explicit `success: false` from the service becomes
/// `SegmentOutcome::Failed`; transport, decode and write errors are returned.
pub async fn generate_segment<S, W>(
    service: &S,
    settings: &TtsSettings,
    segment: &Segment,
    output_dir: &Path,
    out: &mut W,
) -> Result<SegmentOutcome>
where
    S: SpeechService + ?Sized,
    W: Write,
{
    writeln!(out, "Generating: {} - {}", segment.id, segment.text)?;

    let request = SynthesisRequest::new(segment.text, settings);
    let result = service.synthesize(&request).await
        .with_context(|| format!("Synthesis request failed for segment {}", segment.id))?;

    if !result.success {
        let message = result.message.unwrap_or_else(|| "Unknown error".to_string());
        tracing::warn!("Service rejected segment {}: {}", segment.id, message);
        writeln!(out, "  \u{2717} Failed: {}", message)?;
        return Ok(SegmentOutcome::Failed { message });
    }

    let encoded = result.audio_base64
        .with_context(|| format!("Response for segment {} has no audio_base64", segment.id))?;
    let audio = STANDARD.decode(base64_alphabet_only(&encoded))
        .with_context(|| format!("Invalid base64 audio for segment {}", segment.id))?;

    let path = output_dir.join(segment.file_name(AUDIO_EXTENSION));
    std::fs::write(&path, &audio)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let duration = result.duration.unwrap_or(0.0);
    tracing::info!("Wrote {} ({} bytes)", path.display(), audio.len());
    writeln!(out, "  \u{2713} Saved: {} (duration: {:.2}s)", path.display(), duration)?;

    Ok(SegmentOutcome::Saved { path, duration })
}

/// Run every segment in order, one request at a time, and print the total.
pub async fn generate_all<S, W>(
    service: &S,
    settings: &TtsSettings,
    segments: &[Segment],
    out: &mut W,
) -> Result<BatchReport>
where
    S: SpeechService + ?Sized,
    W: Write,
{
    let output_dir = settings.output_dir.clone();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "Starting TTS generation")?;
    writeln!(out, "{}", rule)?;

    let mut report = BatchReport {
        output_dir,
        segments: Vec::with_capacity(segments.len()),
    };

    for segment in segments {
        let outcome = generate_segment(service, settings, segment, &report.output_dir, out).await?;
        report.segments.push(SegmentReport {
            id: segment.id.to_string(),
            outcome,
        });
    }

    writeln!(out, "{}", rule)?;
    writeln!(out, "Done! Total duration: {:.2}s", report.total_duration())?;
    writeln!(out, "Audio files saved in: {}", report.output_dir.display())?;
    writeln!(out, "{}", rule)?;

    tracing::info!(
        "Batch finished: {}/{} segments saved",
        report.saved_count(),
        report.segments.len()
    );
    Ok(report)
}
