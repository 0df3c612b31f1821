//! Whole-buffer loop extension to a target duration.

use tracing::debug;

use crate::audio::SAMPLE_RATE;
use crate::error::{Error, Result};

/// Extend `samples` by whole-buffer repetition until it covers
/// `target_minutes` of audio.
///
/// Input that already meets or exceeds the target is returned unchanged.
/// Loops are whole copies only: the result may overshoot the exact target
/// length rather than cut mid-word at the boundary, and no cross-fade is
/// applied. The input is never mutated.
pub fn extend_to_duration(samples: &[i16], target_minutes: f64) -> Result<Vec<i16>> {
    if !target_minutes.is_finite() || target_minutes <= 0.0 {
        return Err(Error::InvalidDuration(format!(
            "target must be a positive number of minutes, got {}",
            target_minutes
        )));
    }
    if samples.is_empty() {
        return Err(Error::EmptyBuffer(
            "cannot extend a buffer with no samples".to_string(),
        ));
    }

    let target_samples = (target_minutes * 60.0 * SAMPLE_RATE as f64).ceil() as usize;
    if samples.len() >= target_samples {
        return Ok(samples.to_vec());
    }

    let loop_count = target_samples.div_ceil(samples.len());
    let mut looped = Vec::with_capacity(samples.len() * loop_count);
    for _ in 0..loop_count {
        looped.extend_from_slice(samples);
    }

    debug!(
        "Extended {} samples x{} to {} for a {:.1}s target",
        samples.len(),
        loop_count,
        looped.len(),
        target_minutes * 60.0
    );

    Ok(looped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> Vec<i16> {
        (0..len).map(|i| (i % 997) as i16).collect()
    }

    #[test]
    fn input_meeting_target_is_returned_unchanged() {
        // 48_000 samples at 24 kHz is 2.0s; ask for 1.5s.
        let samples = ramp(48_000);
        let out = extend_to_duration(&samples, 0.025).expect("extend should succeed");
        assert_eq!(out, samples);
    }

    #[test]
    fn input_exactly_at_target_is_identity() {
        // 0.01 min = 0.6s = 14_400 samples exactly.
        let samples = ramp(14_400);
        let out = extend_to_duration(&samples, 0.01).expect("extend should succeed");
        assert_eq!(out, samples);
    }

    #[test]
    fn two_second_clip_loops_three_times_for_six_second_target() {
        // 48_000 samples (2.0s), 0.1 min target (6s): ceil(144000/48000) = 3 copies.
        let samples = ramp(48_000);
        let out = extend_to_duration(&samples, 0.1).expect("extend should succeed");
        assert_eq!(out.len(), 144_000);
        assert_eq!(&out[..48_000], samples.as_slice());
        assert_eq!(&out[48_000..96_000], samples.as_slice());
        assert_eq!(&out[96_000..], samples.as_slice());
    }

    #[test]
    fn output_is_always_a_whole_multiple_of_the_input() {
        let samples = ramp(1_000);
        for minutes in [0.001, 0.01, 0.05, 0.5] {
            let out = extend_to_duration(&samples, minutes).expect("extend should succeed");
            assert_eq!(out.len() % samples.len(), 0, "target {minutes}");
            assert!(out.len() >= samples.len(), "target {minutes}");
        }
    }

    #[test]
    fn longer_targets_never_shrink_the_output() {
        let samples = ramp(7_777);
        let mut previous = 0usize;
        for minutes in [0.01, 0.02, 0.1, 0.3, 1.0] {
            let out = extend_to_duration(&samples, minutes).expect("extend should succeed");
            assert!(out.len() >= previous, "target {minutes}");
            previous = out.len();
        }
    }

    #[test]
    fn non_positive_and_non_finite_targets_are_rejected() {
        let samples = ramp(10);
        for minutes in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = extend_to_duration(&samples, minutes).expect_err("should fail");
            assert!(matches!(err, Error::InvalidDuration(_)), "target {minutes}");
        }
    }

    #[test]
    fn empty_buffer_is_rejected() {
        let err = extend_to_duration(&[], 1.0).expect_err("empty input should fail");
        assert!(matches!(err, Error::EmptyBuffer(_)));
    }
}
