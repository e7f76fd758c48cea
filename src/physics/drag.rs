use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// Drag build-up: lift-induced and transonic wave components
// ---------------------------------------------------------------------------

/// Lift-induced drag coefficient for a finite wing.
///
/// Classic lifting-line result: CL² / (π · A · e) with aspect ratio `A`
/// and span efficiency `e`.
pub fn induced_drag(cl: f64, aspect_ratio: f64, efficiency: f64) -> f64 {
    cl * cl / (PI * aspect_ratio * efficiency)
}

/// Transonic/supersonic wave (compressibility) drag coefficient.
///
/// Piecewise profile: zero below `m_onset`, linear ramp to `peak` at
/// `m_peak`, plateau to `m_tail`, then decays as `m_tail / mach` beyond.
pub fn wave_drag(mach: f64, m_onset: f64, m_peak: f64, m_tail: f64, peak: f64) -> f64 {
    if mach < m_onset {
        0.0
    } else if mach < m_peak {
        peak * (mach - m_onset) / (m_peak - m_onset)
    } else if mach < m_tail {
        peak
    } else {
        peak * m_tail / mach
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn induced_drag_matches_lifting_line() {
        let cd = induced_drag(0.5, 1.751, 0.7);
        let expected = 0.25 / (PI * 1.751 * 0.7);
        assert!((cd - expected).abs() < 1e-12);
    }

    #[test]
    fn induced_drag_zero_at_zero_lift() {
        assert_eq!(induced_drag(0.0, 1.751, 0.7), 0.0);
    }

    #[test]
    fn wave_drag_zero_subsonic() {
        assert_eq!(wave_drag(0.5, 0.75, 1.0, 1.1, 0.04), 0.0);
        assert_eq!(wave_drag(0.7499, 0.75, 1.0, 1.1, 0.04), 0.0);
    }

    #[test]
    fn wave_drag_ramps_to_peak() {
        let mid = wave_drag(0.875, 0.75, 1.0, 1.1, 0.04);
        assert!((mid - 0.02).abs() < 1e-12, "half-way up the ramp, got {}", mid);
        assert_eq!(wave_drag(1.05, 0.75, 1.0, 1.1, 0.04), 0.04);
    }

    #[test]
    fn wave_drag_decays_supersonic() {
        let m2 = wave_drag(2.0, 0.75, 1.0, 1.1, 0.04);
        let m3 = wave_drag(3.0, 0.75, 1.0, 1.1, 0.04);
        assert!(m2 < 0.04);
        assert!(m3 < m2, "wave drag must keep falling with Mach");
        assert!((m2 - 0.04 * 1.1 / 2.0).abs() < 1e-12);
    }
}
