use nalgebra::Vector3;

use crate::host::{AnimHandle, TouchdownPoint};
use crate::physics::airfoil::{Airfoil, LiftOrientation};

use super::animations::{self, AnimationSpec};
use super::config::VesselConfig;
use super::geometry;
use super::{ANIM_BAY_DOOR, ANIM_GEAR, ANIM_NOSE_CONE};

// ---------------------------------------------------------------------------
// Vessel capabilities: everything the host consumes at creation
// ---------------------------------------------------------------------------

/// One thruster with its exhaust rendering data.
#[derive(Debug, Clone)]
pub struct Thruster {
    pub pos: Vector3<f64>,
    pub dir: Vector3<f64>,
    pub max_thrust: f64, // N
    pub isp: f64,        // m/s
    pub exhaust_pos: Vector3<f64>,
    pub exhaust_length: f64, // m
    pub exhaust_width: f64,  // m
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSurfaceKind {
    Aileron,
    Elevator,
    ElevatorTrim,
    Rudder,
}

/// An aerodynamic control surface and the animation it drives.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    pub kind: ControlSurfaceKind,
    pub area: f64,       // m²
    pub response: f64,   // dCl at full deflection
    pub delay: f64,      // s, actuation lag
    pub ref_point: Vector3<f64>,
    pub animation: AnimationSpec,
}

/// Which module-computed intensity feeds a particle stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSource {
    SonicBoom,
    Contrail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Diffuse,
    Emissive,
}

/// Particle stream the host renders at the level the module reports.
#[derive(Debug, Clone)]
pub struct ParticleStream {
    pub kind: ParticleKind,
    pub source: EffectSource,
    pub src_size: f64,     // m
    pub src_rate: f64,     // particles/s
    pub velocity: f64,     // m/s emission speed
    pub spread: f64,
    pub lifetime: f64,     // s
    pub growth_rate: f64,  // m/s
    pub atm_slowdown: f64,
    pub emitters: Vec<Vector3<f64>>,
    pub dir: Vector3<f64>,
}

/// Complete capability description handed to the host once.
#[derive(Debug, Clone)]
pub struct VesselCaps {
    pub mesh: &'static str,
    pub size: f64,
    pub empty_mass: f64,
    pub fuel_mass: f64,
    pub cross_sections: Vector3<f64>,
    pub rot_drag: Vector3<f64>,
    pub cg_shift: Vector3<f64>,
    pub wing_effectiveness: f64,
    pub max_wheelbrake_force: f64,
    pub nosewheel_steering: bool,
    pub thrusters: Vec<Thruster>,
    pub airfoils: Vec<Airfoil>,
    pub control_surfaces: Vec<ControlSurface>,
    pub particle_streams: Vec<ParticleStream>,
    /// Actuator animations registered under the module's handles.
    pub animations: Vec<(AnimHandle, AnimationSpec)>,
    /// Initial ground-contact set (vessel is created with gear stowed).
    pub touchdown_points: Vec<TouchdownPoint>,
}

// ---------------------------------------------------------------------------
// Coefficient tables
// ---------------------------------------------------------------------------

// Main wing: lift over angle of attack. Stall plateau past ±30°,
// tapering off toward reversed flow.
const WING_ALPHA_DEG: [f64; 9] = [-180.0, -60.0, -30.0, -15.0, 0.0, 15.0, 30.0, 60.0, 180.0];
const WING_CL: [f64; 9] = [0.0, -0.56, -0.56, -0.16, 0.15, 0.46, 0.56, 0.56, 0.0];
const WING_CM: [f64; 9] = [0.0; 9];

// Tail fins and body: side force over sideslip.
const FIN_BETA_DEG: [f64; 8] = [-180.0, -135.0, -90.0, -45.0, 45.0, 90.0, 135.0, 180.0];
const FIN_CL: [f64; 8] = [0.0, 0.3, 0.0, -0.3, 0.3, 0.0, -0.3, 0.0];
const FIN_CM: [f64; 8] = [0.0; 8];

fn wing_airfoil(config: &VesselConfig) -> Airfoil {
    Airfoil {
        orientation: LiftOrientation::Vertical,
        ref_point: config.cg_shift,
        chord: config.wing.chord,
        area: config.wing.area * 2.0, // both halves of the delta
        aspect_ratio: config.wing.aspect_ratio,
        span_efficiency: 0.7,
        breakpoints_deg: WING_ALPHA_DEG.to_vec(),
        cl_table: WING_CL.to_vec(),
        cm_table: WING_CM.to_vec(),
    }
}

fn fin_airfoil(config: &VesselConfig) -> Airfoil {
    Airfoil {
        orientation: LiftOrientation::Horizontal,
        ref_point: geometry::tail_fin_ref(),
        chord: config.fin.chord,
        area: config.fin.area * 2.0, // both fins
        aspect_ratio: config.fin.aspect_ratio,
        span_efficiency: 0.6,
        breakpoints_deg: FIN_BETA_DEG.to_vec(),
        cl_table: FIN_CL.to_vec(),
        cm_table: FIN_CM.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn control_surfaces() -> Vec<ControlSurface> {
    vec![
        ControlSurface {
            kind: ControlSurfaceKind::Aileron,
            area: 18.37 / 2.0,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(-7.6463, 0.3196, -26.8960),
            animation: animations::left_aileron(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::Aileron,
            area: 18.37 / 2.0,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(7.4547, 0.3174, -26.8053),
            animation: animations::right_aileron(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::Elevator,
            area: 38.61,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(-0.0440, 1.4532, 14.7854),
            animation: animations::canards(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::Elevator,
            area: 36.74,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(-0.0833, 0.3068, -26.6097),
            animation: animations::elevator(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::ElevatorTrim,
            area: 36.74,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(-0.0833, 0.3068, -26.6097),
            animation: animations::elevator_trim(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::Rudder,
            area: 17.76,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(-4.5645, 3.5266, -27.4967),
            animation: animations::left_rudder(),
        },
        ControlSurface {
            kind: ControlSurfaceKind::Rudder,
            area: 17.76,
            response: 1.7,
            delay: 1.0,
            ref_point: Vector3::new(4.4193, 3.5266, -27.5193),
            animation: animations::right_rudder(),
        },
    ]
}

fn particle_streams() -> Vec<ParticleStream> {
    let backwash = Vector3::new(0.0, 0.0, -1.0);
    vec![
        // Condensation collar around the fuselage at Mach 1
        ParticleStream {
            kind: ParticleKind::Diffuse,
            source: EffectSource::SonicBoom,
            src_size: 30.0,
            src_rate: 15.0,
            velocity: 350.0,
            spread: 0.15,
            lifetime: 1.0,
            growth_rate: 2.0,
            atm_slowdown: 1.0,
            emitters: vec![Vector3::zeros()],
            dir: backwash,
        },
        // Canard-tip contrails in the high supersonic regime
        ParticleStream {
            kind: ParticleKind::Emissive,
            source: EffectSource::Contrail,
            src_size: 0.5,
            src_rate: 0.95,
            velocity: 120.0,
            spread: 0.03,
            lifetime: 10.0,
            growth_rate: 5.0,
            atm_slowdown: 3.0,
            emitters: geometry::contrail_emitters().to_vec(),
            dir: backwash,
        },
    ]
}

/// Build the full capability set for a configured vessel.
pub fn build(config: &VesselConfig) -> VesselCaps {
    let forward = Vector3::new(0.0, 0.0, 1.0);
    let thrusters = geometry::main_engine_mounts()
        .iter()
        .zip(geometry::main_engine_exhausts().iter())
        .map(|(mount, exhaust)| Thruster {
            pos: *mount,
            dir: forward,
            max_thrust: config.afterburner_thrust,
            isp: config.isp,
            exhaust_pos: *exhaust,
            exhaust_length: 15.0,
            exhaust_width: 1.0,
        })
        .collect();

    VesselCaps {
        mesh: geometry::MESH_NAME,
        size: config.size,
        empty_mass: config.empty_mass,
        fuel_mass: config.fuel_mass,
        cross_sections: config.cross_sections,
        rot_drag: config.rot_drag,
        cg_shift: config.cg_shift,
        wing_effectiveness: config.wing_effectiveness,
        max_wheelbrake_force: config.max_wheelbrake_force,
        nosewheel_steering: config.nosewheel_steering,
        thrusters,
        airfoils: vec![wing_airfoil(config), fin_airfoil(config)],
        control_surfaces: control_surfaces(),
        particle_streams: particle_streams(),
        animations: vec![
            (ANIM_GEAR, animations::landing_gear()),
            (ANIM_BAY_DOOR, animations::bay_door()),
            (ANIM_NOSE_CONE, animations::nose_cone()),
        ],
        touchdown_points: geometry::gear_up_points(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
