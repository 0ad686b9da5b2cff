//! Integration tests for quality tiers, exporters, and factories.

use std::path::Path;

use mailforge::error::ForgeError;
use mailforge::export::factory::{factory_for, factory_for_tier};
use mailforge::export::quality::Quality;

// ─── Test 1: Each tier returns exactly its table pair ───────────────

#[test]
fn test_tier_table() {
    let cases = [
        (Quality::Low, "H.264 (Baseline)", "AAC"),
        (Quality::High, "H.264 (Hi422P)", "AAC"),
        (Quality::Master, "Lossless", "WAV"),
    ];

    for (quality, video, audio) in cases {
        let fac = factory_for(quality);
        assert_eq!(fac.quality(), quality);
        assert_eq!(fac.video_exporter().codec(), video, "video for {quality}");
        assert_eq!(fac.audio_exporter().codec(), audio, "audio for {quality}");
    }
}

// ─── Test 2: String lookup resolves known tiers ─────────────────────

#[test]
fn test_tier_string_lookup() {
    let fac = factory_for_tier("low").unwrap();
    assert_eq!(fac.quality(), Quality::Low);
    assert_eq!(fac.video_exporter().codec(), "H.264 (Baseline)");
    assert_eq!(fac.audio_exporter().codec(), "AAC");
}

// ─── Test 3: Unknown tiers fail, never a silently-wrong factory ─────

#[test]
fn test_unknown_tier_is_an_error() {
    for bad in ["ultra", "", "Low", "MASTER", " high"] {
        let err = factory_for_tier(bad).unwrap_err();
        assert!(
            matches!(err, ForgeError::UnknownQuality(ref s) if s == bad),
            "expected UnknownQuality for {bad:?}"
        );
    }
}

// ─── Test 4: Exporter calls always complete, any input ──────────────

#[test]
fn test_exporter_calls_never_fail() {
    for quality in Quality::ALL {
        let fac = factory_for(quality);
        let video = fac.video_exporter();
        let audio = fac.audio_exporter();

        for data in ["placeholder_for_type", ""] {
            assert!(!video.prepare_export(data).is_empty());
            assert!(!audio.prepare_export(data).is_empty());
        }
        for dest in [Path::new("/usr/tmp/video"), Path::new("")] {
            assert!(!video.do_export(dest).is_empty());
            assert!(!audio.do_export(dest).is_empty());
        }
    }
}

// ─── Test 5: Export descriptions name format and destination ────────

#[test]
fn test_export_descriptions() {
    let fac = factory_for(Quality::Master);
    let dest = Path::new("/usr/tmp/video");

    assert_eq!(
        fac.video_exporter().prepare_export("placeholder_for_type"),
        "Preparing video data for lossless export"
    );
    assert_eq!(
        fac.video_exporter().do_export(dest),
        "Exporting video data in lossless format to /usr/tmp/video."
    );
    assert_eq!(
        fac.audio_exporter().do_export(dest),
        "Exporting audio data in WAV format to /usr/tmp/video."
    );
}

// ─── Test 6: do_export is callable without prepare_export ───────────

#[test]
fn test_do_export_independent_of_prepare() {
    let fac = factory_for(Quality::Low);
    let video = fac.video_exporter();
    let line = video.do_export(Path::new("out"));
    assert!(line.contains("H.264 (Baseline)"));
    assert!(line.contains("out"));
}

// ─── Test 7: Error message names the offending tier ─────────────────

#[test]
fn test_error_display() {
    let err = factory_for_tier("ultra").unwrap_err();
    assert_eq!(err.to_string(), "Unknown output quality option: ultra");
}
