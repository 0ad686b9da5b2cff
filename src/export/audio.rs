//! Audio export strategies.

use std::path::Path;

/// An audio export strategy.
///
/// Same contract as [`VideoExporter`](crate::export::video::VideoExporter):
/// stateless, order-independent calls, descriptions instead of real I/O.
pub trait AudioExporter {
    /// Codec name identifying this variant.
    fn codec(&self) -> &'static str;

    /// Describe preparing the given audio data for export.
    fn prepare_export(&self, audio_data: &str) -> String;

    /// Describe exporting the audio data to the destination.
    fn do_export(&self, destination: &Path) -> String;
}

/// AAC lossy audio export. Shared by the low and high tiers.
#[derive(Debug, Default)]
pub struct AacAudio;

impl AudioExporter for AacAudio {
    fn codec(&self) -> &'static str {
        "AAC"
    }

    fn prepare_export(&self, audio_data: &str) -> String {
        tracing::debug!(data = audio_data, "preparing AAC export");
        "Preparing audio data for AAC export".to_string()
    }

    fn do_export(&self, destination: &Path) -> String {
        format!(
            "Exporting audio data in AAC format to {}.",
            destination.display()
        )
    }
}

/// WAV lossless audio export.
#[derive(Debug, Default)]
pub struct WavAudio;

impl AudioExporter for WavAudio {
    fn codec(&self) -> &'static str {
        "WAV"
    }

    fn prepare_export(&self, audio_data: &str) -> String {
        tracing::debug!(data = audio_data, "preparing WAV export");
        "Preparing audio data for WAV export".to_string()
    }

    fn do_export(&self, destination: &Path) -> String {
        format!(
            "Exporting audio data in WAV format to {}.",
            destination.display()
        )
    }
}
