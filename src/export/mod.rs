//! Export pipelines: quality tiers, audio/video exporters, and factories.

pub mod audio;
pub mod factory;
pub mod quality;
pub mod video;
