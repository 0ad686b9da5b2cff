//! Exporter factories: one quality-consistent codec pair per tier.

use crate::error::Result;
use crate::export::audio::{AacAudio, AudioExporter, WavAudio};
use crate::export::quality::Quality;
use crate::export::video::{H264Baseline, H264Hi422p, LosslessVideo, VideoExporter};

/// A factory representing one combination of video and audio codecs.
///
/// Factories are stateless selectors: they do not retain the exporters they
/// create, and both getters on the same factory always return variants from
/// the same quality tier. Exporters are constructed fresh on every call.
pub trait ExporterFactory: std::fmt::Debug {
    /// The tier this factory serves.
    fn quality(&self) -> Quality;

    /// Construct a new video exporter for this tier.
    fn video_exporter(&self) -> Box<dyn VideoExporter>;

    /// Construct a new audio exporter for this tier.
    fn audio_exporter(&self) -> Box<dyn AudioExporter>;
}

/// High speed, lower quality export (tier `low`).
#[derive(Debug, Default)]
pub struct FastExporter;

impl ExporterFactory for FastExporter {
    fn quality(&self) -> Quality {
        Quality::Low
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264Baseline)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudio)
    }
}

/// Lower speed, higher quality export (tier `high`).
#[derive(Debug, Default)]
pub struct HighQualityExporter;

impl ExporterFactory for HighQualityExporter {
    fn quality(&self) -> Quality {
        Quality::High
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(H264Hi422p)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(AacAudio)
    }
}

/// Low speed, master quality export (tier `master`).
#[derive(Debug, Default)]
pub struct MasterQualityExporter;

impl ExporterFactory for MasterQualityExporter {
    fn quality(&self) -> Quality {
        Quality::Master
    }

    fn video_exporter(&self) -> Box<dyn VideoExporter> {
        Box::new(LosslessVideo)
    }

    fn audio_exporter(&self) -> Box<dyn AudioExporter> {
        Box::new(WavAudio)
    }
}

/// Return the factory for a tier. The mapping is fixed and total.
pub fn factory_for(quality: Quality) -> Box<dyn ExporterFactory> {
    match quality {
        Quality::Low => Box::new(FastExporter),
        Quality::High => Box::new(HighQualityExporter),
        Quality::Master => Box::new(MasterQualityExporter),
    }
}

/// Look up a factory by tier keyword.
///
/// Fails with [`ForgeError::UnknownQuality`](crate::error::ForgeError) for
/// anything outside `low`/`high`/`master`; callers are expected to re-prompt
/// and retry.
pub fn factory_for_tier(tier: &str) -> Result<Box<dyn ExporterFactory>> {
    let quality: Quality = tier.parse()?;
    Ok(factory_for(quality))
}
