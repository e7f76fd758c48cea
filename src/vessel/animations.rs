use nalgebra::Vector3;

use super::geometry::groups;

// ---------------------------------------------------------------------------
// Animation component data consumed by the host's playback layer
// ---------------------------------------------------------------------------

/// Rotation of a set of mesh groups about a pivot axis, active over a
/// sub-range of the master animation progress.
#[derive(Debug, Clone)]
pub struct RotationComponent {
    pub groups: Vec<u32>,
    /// Master-progress window `(begin, end)` this component plays over;
    /// begin < end.
    pub range: (f64, f64),
    pub pivot: Vector3<f64>,
    pub axis: Vector3<f64>,
    pub angle: f64, // rad, total travel
}

impl RotationComponent {
    /// Local progress for a master progress value: 0 before the window
    /// opens, 1 after it closes, linear inside.
    pub fn local_progress(&self, master: f64) -> f64 {
        let (begin, end) = self.range;
        ((master - begin) / (end - begin)).clamp(0.0, 1.0)
    }
}

/// Complete description of one host-side animation.
#[derive(Debug, Clone)]
pub struct AnimationSpec {
    pub initial: f64,
    pub components: Vec<RotationComponent>,
}

impl AnimationSpec {
    /// Animation made of a single full-range component.
    pub fn single(initial: f64, component: RotationComponent) -> Self {
        Self {
            initial,
            components: vec![component],
        }
    }
}

fn rotate(groups: Vec<u32>, range: (f64, f64), pivot: Vector3<f64>, axis: Vector3<f64>, angle_deg: f64) -> RotationComponent {
    RotationComponent {
        groups,
        range,
        pivot,
        axis,
        angle: angle_deg.to_radians(),
    }
}

const X_AXIS: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);
const Y_AXIS: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
const Z_AXIS: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

// ---------------------------------------------------------------------------
// Actuator animations
// ---------------------------------------------------------------------------

/// Landing gear: nose truck swings out first, the rear trucks fold
/// through their two-stage wheel rotation, and the doors close over the
/// wells at the end of the travel.
pub fn landing_gear() -> AnimationSpec {
    let front_pivot = Vector3::new(-0.0869, -1.5528, 2.6271);
    let left_wheel_pivot = Vector3::new(-3.3236, -2.9489, -12.5063);
    let left_leg_pivot = Vector3::new(-3.3236, -0.3723, -12.4163);
    let right_wheel_pivot = Vector3::new(3.2364, -2.9489, -12.5063);
    let right_leg_pivot = Vector3::new(3.2364, -0.3723, -12.4163);

    AnimationSpec {
        initial: 0.0,
        components: vec![
            // Nose truck and inner door
            rotate(
                vec![groups::FRONT_GEAR, groups::FRONT_GEAR_DOOR1, groups::FRONT_WHEELS],
                (0.0, 0.5),
                front_pivot,
                X_AXIS,
                95.0,
            ),
            rotate(
                vec![groups::FRONT_GEAR_DOOR2],
                (0.4, 1.0),
                Vector3::new(-0.9694, -1.6586, 0.5414),
                Z_AXIS,
                100.0,
            ),
            // Left truck: wheel bogey twists, then the leg folds inboard
            rotate(vec![groups::REAR_LEFT_WHEELS], (0.0, 0.3), left_wheel_pivot, Y_AXIS, -90.0),
            rotate(vec![groups::REAR_LEFT_WHEELS], (0.3, 0.6), left_wheel_pivot, Z_AXIS, 90.0),
            rotate(
                vec![groups::REAR_LEFT_GEAR, groups::REAR_LEFT_WHEELS],
                (0.6, 0.9),
                left_leg_pivot,
                X_AXIS,
                90.0,
            ),
            // Right truck mirrors the left
            rotate(vec![groups::REAR_RIGHT_WHEELS], (0.0, 0.3), right_wheel_pivot, Y_AXIS, 90.0),
            rotate(vec![groups::REAR_RIGHT_WHEELS], (0.3, 0.6), right_wheel_pivot, Z_AXIS, -90.0),
            rotate(
                vec![groups::REAR_RIGHT_GEAR, groups::REAR_RIGHT_WHEELS],
                (0.6, 0.9),
                right_leg_pivot,
                X_AXIS,
                90.0,
            ),
            // Well doors close last
            rotate(
                vec![groups::REAR_GEAR_DOORS],
                (0.9, 1.0),
                Vector3::new(-0.0869, -1.1491, -11.6312),
                X_AXIS,
                90.0,
            ),
            rotate(
                vec![groups::REAR_GEAR_LEFT_DOOR],
                (0.9, 1.0),
                Vector3::new(-1.9745, -1.0791, -15.1665),
                Z_AXIS,
                -110.0,
            ),
            rotate(
                vec![groups::REAR_GEAR_RIGHT_DOOR],
                (0.9, 1.0),
                Vector3::new(1.8955, -1.0791, -15.1665),
                Z_AXIS,
                110.0,
            ),
        ],
    }
}

/// Crew bay door, hinged on the port side.
pub fn bay_door() -> AnimationSpec {
    AnimationSpec::single(
        0.0,
        RotationComponent {
            groups: vec![groups::BAY_DOOR],
            range: (0.0, 1.0),
            pivot: Vector3::new(-1.3062, 0.8235, 19.5891),
            axis: Y_AXIS,
            angle: 2.9670,
        },
    )
}

/// Nose cone (windshield ramp) droop.
pub fn nose_cone() -> AnimationSpec {
    AnimationSpec::single(
        0.0,
        rotate(
            vec![groups::NOSE_CONE],
            (0.0, 1.0),
            Vector3::new(-0.0197, 2.0982, 22.3571),
            X_AXIS,
            10.0,
        ),
    )
}

// ---------------------------------------------------------------------------
// Control-surface animations (driven by the host from control input)
// ---------------------------------------------------------------------------

pub fn elevator() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::LEFT_AILERON, groups::RIGHT_AILERON],
            (0.0, 1.0),
            Vector3::new(-0.0793, 0.3068, -25.0097),
            X_AXIS,
            24.0,
        ),
    )
}

pub fn elevator_trim() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::LEFT_AILERON, groups::RIGHT_AILERON],
            (0.0, 1.0),
            Vector3::new(-0.0793, 0.3068, -25.0097),
            X_AXIS,
            12.0,
        ),
    )
}

pub fn left_aileron() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::LEFT_AILERON],
            (0.0, 1.0),
            Vector3::new(-8.6631, 0.3068, -25.1881),
            X_AXIS,
            -24.0,
        ),
    )
}

pub fn right_aileron() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::RIGHT_AILERON],
            (0.0, 1.0),
            Vector3::new(8.5085, 0.3068, -25.2312),
            X_AXIS,
            24.0,
        ),
    )
}

pub fn canards() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::CANARDS],
            (0.0, 1.0),
            Vector3::new(0.0977, 1.4979, 15.5177),
            X_AXIS,
            15.0,
        ),
    )
}

pub fn left_rudder() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::LEFT_RUDDER],
            (0.0, 1.0),
            Vector3::new(-4.5602, 3.5541, -26.8799),
            Y_AXIS,
            12.0,
        ),
    )
}

pub fn right_rudder() -> AnimationSpec {
    AnimationSpec::single(
        0.5,
        rotate(
            vec![groups::RIGHT_RUDDER],
            (0.0, 1.0),
            Vector3::new(4.4208, 3.5541, -26.8799),
            Y_AXIS,
            12.0,
        ),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_progress_clamps_to_window() {
        let c = rotate(vec![0], (0.4, 1.0), Vector3::zeros(), X_AXIS, 100.0);
        assert_eq!(c.local_progress(0.0), 0.0);
        assert_eq!(c.local_progress(0.4), 0.0);
        assert_eq!(c.local_progress(0.7), 0.5);
        assert_eq!(c.local_progress(1.0), 1.0);
        assert_eq!(c.local_progress(1.5), 1.0);
    }

    #[test]
    fn gear_sequence_covers_full_travel() {
        let spec = landing_gear();
        assert_eq!(spec.initial, 0.0);
        let starts_at_zero = spec.components.iter().any(|c| c.range.0 == 0.0);
        let ends_at_one = spec.components.iter().any(|c| c.range.1 == 1.0);
        assert!(starts_at_zero && ends_at_one);
        for c in &spec.components {
            assert!(c.range.0 < c.range.1, "component window must be non-empty");
            assert!(!c.groups.is_empty());
        }
    }

    #[test]
    fn control_surfaces_rest_centred() {
        for spec in [
            elevator(),
            elevator_trim(),
            left_aileron(),
            right_aileron(),
            canards(),
            left_rudder(),
            right_rudder(),
        ] {
            assert_eq!(spec.initial, 0.5, "control surfaces idle at mid-travel");
            assert_eq!(spec.components.len(), 1);
        }
    }

    #[test]
    fn ailerons_deflect_antisymmetrically() {
        let left = left_aileron();
        let right = right_aileron();
        assert_eq!(left.components[0].angle, -right.components[0].angle);
    }
}
