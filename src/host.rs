use std::io::Write;

use nalgebra::Vector3;

use crate::scenario::ScenarioError;
use crate::vessel::caps::{EffectSource, VesselCaps};

// ---------------------------------------------------------------------------
// Host-side interface: the queries and setters this module consumes
// ---------------------------------------------------------------------------

/// Opaque handle identifying a host-side animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimHandle(pub u32);

/// One ground-contact vertex. The host uses the active set for collision
/// and ground handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchdownPoint {
    pub pos: Vector3<f64>, // m, vessel frame
    pub stiffness: f64,    // N/m
    pub damping: f64,      // N·s/m
    pub mu: f64,           // lateral friction coefficient
    pub mu_lng: f64,       // longitudinal friction coefficient (wheels)
}

/// The host simulator as seen from a vessel module.
///
/// Implement this to bind the module to a concrete simulator, or to a
/// test stand-in that records what the module pushes.
pub trait Host {
    /// Current Mach number.
    fn mach_number(&self) -> f64;

    /// Current altitude, m.
    fn altitude(&self) -> f64;

    /// Drive a registered animation to `value` in [0, 1].
    fn set_animation(&mut self, anim: AnimHandle, value: f64);

    /// Replace the active ground-contact set.
    fn set_touchdown_points(&mut self, points: &[TouchdownPoint]);
}

// ---------------------------------------------------------------------------
// Module-side callback set: fixed signatures the host invokes
// ---------------------------------------------------------------------------

/// Keyboard scan code as delivered by the host input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key(pub u8);

impl Key {
    pub const C: Key = Key(0x2e);
    pub const G: Key = Key(0x22);
    pub const K: Key = Key(0x25);
}

/// The callback set a vessel module exposes to the host.
///
/// The host owns the simulation loop, physics integration, rendering and
/// input dispatch; it invokes these entry points and the module never
/// calls back into itself.
pub trait VesselModule {
    /// Vessel capabilities, consumed once at vessel creation.
    fn class_caps(&self) -> VesselCaps;

    /// Per-tick advance. `simdt` is elapsed simulation time in seconds.
    fn post_step(&mut self, host: &mut dyn Host, simt: f64, simdt: f64);

    /// Offer one scenario line during state restore. Returns true if the
    /// module consumed the line; false hands it back to the host's
    /// default parser.
    fn parse_scenario_line(&mut self, host: &mut dyn Host, line: &str) -> bool;

    /// Append module state to the scenario being written.
    fn save_state(&self, scn: &mut dyn Write) -> Result<(), ScenarioError>;

    /// Buffered key event. Returns true if the key was consumed.
    fn consume_buffered_key(&mut self, key: Key, down: bool) -> bool;

    /// Current intensity in [0, 1] for a particle stream source declared
    /// in the capabilities.
    fn particle_level(&self, source: EffectSource) -> f64;
}
