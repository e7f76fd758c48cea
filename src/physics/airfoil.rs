use nalgebra::Vector3;

use super::drag::{induced_drag, wave_drag};

// ---------------------------------------------------------------------------
// Wave drag profile shared by all lifting surfaces
// ---------------------------------------------------------------------------

const WAVE_ONSET_MACH: f64 = 0.75;
const WAVE_PEAK_MACH: f64 = 1.0;
const WAVE_TAIL_MACH: f64 = 1.1;
const WAVE_PEAK_CD: f64 = 0.04;

// ---------------------------------------------------------------------------
// Piecewise-linear coefficient lookup
// ---------------------------------------------------------------------------

/// Saturating piecewise-linear lookup over sorted breakpoints: linear
/// between neighbours, end values held outside the table.
pub fn lerp_lookup(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if x <= xs[0] {
        return ys[0];
    }
    for i in 0..xs.len() - 1 {
        if x < xs[i + 1] {
            let f = (x - xs[i]) / (xs[i + 1] - xs[i]);
            return ys[i] + (ys[i + 1] - ys[i]) * f;
        }
    }
    ys[ys.len() - 1]
}

// ---------------------------------------------------------------------------
// Airfoil: coefficient tables plus the geometry that scales them
// ---------------------------------------------------------------------------

/// Which force axis the surface contributes to, as the host defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiftOrientation {
    /// Lift normal to the wing plane, driven by angle of attack.
    Vertical,
    /// Side force, driven by sideslip.
    Horizontal,
}

/// Coefficients returned to the host's airfoil callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilCoefficients {
    pub cl: f64,
    pub cm: f64,
    pub cd: f64,
}

/// One lifting surface: lift/moment tables over incidence angle, plus
/// the reference geometry the host needs to turn coefficients into
/// forces.
#[derive(Debug, Clone)]
pub struct Airfoil {
    pub orientation: LiftOrientation,
    pub ref_point: Vector3<f64>, // m, vessel frame
    pub chord: f64,              // m
    pub area: f64,               // m²
    pub aspect_ratio: f64,
    pub span_efficiency: f64,
    /// Incidence breakpoints, degrees, strictly increasing.
    pub breakpoints_deg: Vec<f64>,
    pub cl_table: Vec<f64>,
    pub cm_table: Vec<f64>,
}

impl Airfoil {
    /// Evaluate the coefficient set at an incidence angle (rad; angle of
    /// attack for vertical surfaces, sideslip for horizontal ones) and
    /// Mach number.
    pub fn coefficients(&self, angle: f64, mach: f64) -> AirfoilCoefficients {
        let deg = angle.to_degrees();
        let cl = lerp_lookup(&self.breakpoints_deg, &self.cl_table, deg);
        let cm = lerp_lookup(&self.breakpoints_deg, &self.cm_table, deg);

        // Profile drag: vertical surfaces pick up separation drag at
        // high incidence, side surfaces keep the parasitic floor.
        let profile = match self.orientation {
            LiftOrientation::Vertical => {
                let s = angle.sin();
                0.015 + 0.4 * s * s
            }
            LiftOrientation::Horizontal => 0.015,
        };

        let cd = profile
            + induced_drag(cl, self.aspect_ratio, self.span_efficiency)
            + wave_drag(mach, WAVE_ONSET_MACH, WAVE_PEAK_MACH, WAVE_TAIL_MACH, WAVE_PEAK_CD);

        AirfoilCoefficients { cl, cm, cd }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_airfoil() -> Airfoil {
        Airfoil {
            orientation: LiftOrientation::Vertical,
            ref_point: Vector3::zeros(),
            chord: 2.0,
            area: 10.0,
            aspect_ratio: 1.751,
            span_efficiency: 0.7,
            breakpoints_deg: vec![-180.0, -60.0, -30.0, -15.0, 0.0, 15.0, 30.0, 60.0, 180.0],
            cl_table: vec![0.0, -0.56, -0.56, -0.16, 0.15, 0.46, 0.56, 0.56, 0.0],
            cm_table: vec![0.0; 9],
        }
    }

    #[test]
    fn lookup_hits_breakpoints_exactly() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [10.0, 20.0, 40.0];
        assert_eq!(lerp_lookup(&xs, &ys, 0.0), 10.0);
        assert_eq!(lerp_lookup(&xs, &ys, 1.0), 20.0);
        assert_eq!(lerp_lookup(&xs, &ys, 2.0), 40.0);
    }

    #[test]
    fn lookup_interpolates_between_breakpoints() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [10.0, 20.0, 40.0];
        assert_eq!(lerp_lookup(&xs, &ys, 0.5), 15.0);
        assert_eq!(lerp_lookup(&xs, &ys, 1.5), 30.0);
    }

    #[test]
    fn lookup_saturates_outside_table() {
        let xs = [0.0, 1.0];
        let ys = [10.0, 20.0];
        assert_eq!(lerp_lookup(&xs, &ys, -5.0), 10.0);
        assert_eq!(lerp_lookup(&xs, &ys, 5.0), 20.0);
    }

    #[test]
    fn level_flight_lift_matches_table() {
        let foil = test_airfoil();
        let c = foil.coefficients(0.0, 0.3);
        assert!((c.cl - 0.15).abs() < 1e-12);
        assert_eq!(c.cm, 0.0);
    }

    #[test]
    fn lift_interpolates_mid_segment() {
        let foil = test_airfoil();
        let c = foil.coefficients(7.5_f64.to_radians(), 0.3);
        // Half-way between 0.15 and 0.46
        assert!((c.cl - 0.305).abs() < 1e-9);
    }

    #[test]
    fn drag_grows_with_incidence() {
        let foil = test_airfoil();
        let level = foil.coefficients(0.0, 0.3).cd;
        let pitched = foil.coefficients(20.0_f64.to_radians(), 0.3).cd;
        assert!(pitched > level);
    }

    #[test]
    fn transonic_drag_rise() {
        let foil = test_airfoil();
        let subsonic = foil.coefficients(0.0, 0.5).cd;
        let transonic = foil.coefficients(0.0, 1.05).cd;
        assert!((transonic - subsonic - WAVE_PEAK_CD).abs() < 1e-12);
    }

    #[test]
    fn side_surface_keeps_flat_profile_drag() {
        let mut foil = test_airfoil();
        foil.orientation = LiftOrientation::Horizontal;
        foil.cl_table = vec![0.0; 9];
        let c = foil.coefficients(30.0_f64.to_radians(), 0.3);
        assert!((c.cd - 0.015).abs() < 1e-12);
    }
}
