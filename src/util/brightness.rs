//! Frame brightness estimation for the webcam capture flow.
//!
//! The camera preview is sampled on a timer: each tick draws the current
//! video frame onto a small offscreen canvas and averages the RGB channels
//! of the RGBA pixel buffer. Low readings drive the "poor lighting" hint
//! shown over the preview so users retake instead of analysing a dark
//! photo.

#[cfg(test)]
#[path = "brightness_test.rs"]
mod brightness_test;

/// Width of the sampling canvas in pixels.
pub const SAMPLE_WIDTH: u32 = 200;
/// Height of the sampling canvas in pixels.
pub const SAMPLE_HEIGHT: u32 = 150;
/// Sampling period for the preview brightness check.
pub const SAMPLE_INTERVAL_MS: u32 = 500;
/// Mean channel value below which lighting counts as poor.
pub const LOW_LIGHT_THRESHOLD: f64 = 60.0;

/// Mean of the R, G and B channels across an RGBA pixel buffer, in
/// `0.0..=255.0`. Alpha bytes are skipped; an empty buffer reads as fully
/// dark.
#[allow(clippy::cast_precision_loss)]
pub fn average_brightness(rgba: &[u8]) -> f64 {
    if rgba.is_empty() {
        return 0.0;
    }
    let sum: u64 = rgba
        .iter()
        .enumerate()
        .filter(|(index, _)| index % 4 != 3)
        .map(|(_, byte)| u64::from(*byte))
        .sum();
    let samples = rgba.len() as f64 * 0.75;
    sum as f64 / samples
}

/// Whether a brightness reading counts as poor lighting.
pub fn is_low_light(brightness: f64) -> bool {
    brightness < LOW_LIGHT_THRESHOLD
}
