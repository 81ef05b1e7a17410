//! Easing helpers for timed interpolation sequences.

/// Normalized progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A zero duration counts as already complete.
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Smooth ease-in-out from 0 to 1 with zero slope at both ends.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Scale multiplier for a shrinking object: 1 at the start, 0 at the end.
pub fn shrink(t: f32) -> f32 {
    1.0 - ease_in_out(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_endpoints_and_monotonic() {
        assert_eq!(shrink(0.0), 1.0);
        assert_eq!(shrink(1.0), 0.0);

        let mut prev = shrink(0.0);
        for i in 1..=100 {
            let y = shrink(i as f32 / 100.0);
            assert!(y <= prev + 1e-6);
            prev = y;
        }
    }

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        assert_eq!(progress(0.5, 1.0), 0.5);
        assert_eq!(progress(3.0, 1.0), 1.0);
        assert_eq!(progress(-1.0, 1.0), 0.0);
        assert_eq!(progress(0.0, 0.0), 1.0);
    }
}
