//! Video export strategies.

use std::path::Path;

/// A video export strategy.
///
/// Implementations are stateless: `prepare_export` and `do_export` are
/// independent of each other's output and may be called in any order,
/// though the intended sequence is prepare first. Neither call performs
/// real encoding or I/O; each returns a description of what it would do.
pub trait VideoExporter {
    /// Codec name identifying this variant.
    fn codec(&self) -> &'static str;

    /// Describe preparing the given video data for export.
    fn prepare_export(&self, video_data: &str) -> String;

    /// Describe exporting the video data to the destination.
    fn do_export(&self, destination: &Path) -> String;
}

/// Lossless video export.
#[derive(Debug, Default)]
pub struct LosslessVideo;

impl VideoExporter for LosslessVideo {
    fn codec(&self) -> &'static str {
        "Lossless"
    }

    fn prepare_export(&self, video_data: &str) -> String {
        tracing::debug!(data = video_data, "preparing lossless video export");
        "Preparing video data for lossless export".to_string()
    }

    fn do_export(&self, destination: &Path) -> String {
        format!(
            "Exporting video data in lossless format to {}.",
            destination.display()
        )
    }
}

/// H.264 Baseline Profile export.
#[derive(Debug, Default)]
pub struct H264Baseline;

impl VideoExporter for H264Baseline {
    fn codec(&self) -> &'static str {
        "H.264 (Baseline)"
    }

    fn prepare_export(&self, video_data: &str) -> String {
        tracing::debug!(data = video_data, "preparing H.264 Baseline export");
        "Preparing video data for H.264 (Baseline) export".to_string()
    }

    fn do_export(&self, destination: &Path) -> String {
        format!(
            "Exporting video data in H.264 (Baseline) format to {}.",
            destination.display()
        )
    }
}

/// H.264 Hi422P (10-bit 4:2:2) export.
#[derive(Debug, Default)]
pub struct H264Hi422p;

impl VideoExporter for H264Hi422p {
    fn codec(&self) -> &'static str {
        "H.264 (Hi422P)"
    }

    fn prepare_export(&self, video_data: &str) -> String {
        tracing::debug!(data = video_data, "preparing H.264 Hi422P export");
        "Preparing video data for H.264 (Hi422P) export".to_string()
    }

    fn do_export(&self, destination: &Path) -> String {
        format!(
            "Exporting video data in H.264 (Hi422P) format to {}.",
            destination.display()
        )
    }
}
