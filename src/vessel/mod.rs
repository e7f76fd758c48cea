pub mod animations;
pub mod caps;
pub mod config;
pub mod geometry;

use std::io::Write;

use crate::actuator::{Actuator, ActuatorStatus, Settle};
use crate::effects;
use crate::host::{AnimHandle, Host, Key, VesselModule};
use crate::scenario::{self, ScenarioError};

use caps::{EffectSource, VesselCaps};
use config::VesselConfig;

// Animation handles the module registers its actuator animations under.
pub const ANIM_GEAR: AnimHandle = AnimHandle(0);
pub const ANIM_BAY_DOOR: AnimHandle = AnimHandle(1);
pub const ANIM_NOSE_CONE: AnimHandle = AnimHandle(2);

// ---------------------------------------------------------------------------
// The Valkyrie vessel
// ---------------------------------------------------------------------------

/// Flight-dynamics module for the Valkyrie. Owns the three deployment
/// actuators and the particle effect levels; everything else lives on
/// the host side of the ABI.
pub struct Valkyrie {
    config: VesselConfig,
    gear: Actuator,
    bay_door: Actuator,
    nose_cone: Actuator,
    boom_level: f64,
    contrail_level: f64,
}

impl Valkyrie {
    pub fn new(config: VesselConfig) -> Self {
        Self {
            config,
            gear: Actuator::new(),
            bay_door: Actuator::new(),
            nose_cone: Actuator::new(),
            boom_level: 0.0,
            contrail_level: 0.0,
        }
    }

    pub fn config(&self) -> &VesselConfig {
        &self.config
    }

    pub fn gear(&self) -> &Actuator {
        &self.gear
    }

    pub fn bay_door(&self) -> &Actuator {
        &self.bay_door
    }

    pub fn nose_cone(&self) -> &Actuator {
        &self.nose_cone
    }

    pub fn toggle_gear(&mut self) {
        self.gear.toggle();
    }

    pub fn toggle_bay_door(&mut self) {
        self.bay_door.toggle();
    }

    pub fn toggle_nose_cone(&mut self) {
        self.nose_cone.toggle();
    }

    // -----------------------------------------------------------------------
    // Per-actuator tick updates
    // -----------------------------------------------------------------------

    fn update_gear(&mut self, host: &mut dyn Host, dt: f64) {
        if !self.gear.status().is_transient() {
            return;
        }
        if let Some(settle) = self.gear.advance(dt, self.config.gear_speed) {
            // Swap the ground-contact set once, on the settling tick
            match settle {
                Settle::Deployed => host.set_touchdown_points(&geometry::gear_down_points()),
                Settle::Retracted => host.set_touchdown_points(&geometry::gear_up_points()),
            }
        }
        host.set_animation(ANIM_GEAR, self.gear.progress());
    }

    fn update_bay_door(&mut self, host: &mut dyn Host, dt: f64) {
        if !self.bay_door.status().is_transient() {
            return;
        }
        self.bay_door.advance(dt, self.config.door_speed);
        host.set_animation(ANIM_BAY_DOOR, self.bay_door.progress());
    }

    fn update_nose_cone(&mut self, host: &mut dyn Host, dt: f64) {
        if !self.nose_cone.status().is_transient() {
            return;
        }
        self.nose_cone.advance(dt, self.config.nosecone_speed);
        host.set_animation(ANIM_NOSE_CONE, self.nose_cone.progress());
    }
}

// ---------------------------------------------------------------------------
// Host callback set
// ---------------------------------------------------------------------------

impl VesselModule for Valkyrie {
    fn class_caps(&self) -> VesselCaps {
        caps::build(&self.config)
    }

    fn post_step(&mut self, host: &mut dyn Host, _simt: f64, simdt: f64) {
        self.update_gear(host, simdt);
        self.update_bay_door(host, simdt);
        self.update_nose_cone(host, simdt);

        let mach = host.mach_number();
        self.boom_level = effects::sonic_boom_level(mach);
        self.contrail_level = effects::contrail_level(mach, host.altitude());
    }

    fn parse_scenario_line(&mut self, host: &mut dyn Host, line: &str) -> bool {
        if let Some(payload) = scenario::match_tag(line, scenario::GEAR_TAG) {
            if let Ok((status, progress)) = scenario::parse_actuator(payload) {
                self.gear.restore(status, progress);
                host.set_animation(ANIM_GEAR, progress);
                // A settled gear must be backed by the matching contact
                // set; mid-travel restores swap when they settle.
                match self.gear.status() {
                    ActuatorStatus::Deployed => {
                        host.set_touchdown_points(&geometry::gear_down_points())
                    }
                    ActuatorStatus::Retracted => {
                        host.set_touchdown_points(&geometry::gear_up_points())
                    }
                    ActuatorStatus::Deploying | ActuatorStatus::Stowing => {}
                }
                return true;
            }
            return false;
        }
        if let Some(payload) = scenario::match_tag(line, scenario::DOOR_TAG) {
            if let Ok((status, progress)) = scenario::parse_actuator(payload) {
                self.bay_door.restore(status, progress);
                host.set_animation(ANIM_BAY_DOOR, progress);
                return true;
            }
            return false;
        }
        if let Some(payload) = scenario::match_tag(line, scenario::NOSECONE_TAG) {
            if let Ok((status, progress)) = scenario::parse_actuator(payload) {
                self.nose_cone.restore(status, progress);
                host.set_animation(ANIM_NOSE_CONE, progress);
                return true;
            }
            return false;
        }
        false
    }

    fn save_state(&self, scn: &mut dyn Write) -> Result<(), ScenarioError> {
        scenario::write_actuator(scn, scenario::GEAR_TAG, &self.gear)?;
        scenario::write_actuator(scn, scenario::DOOR_TAG, &self.bay_door)?;
        scenario::write_actuator(scn, scenario::NOSECONE_TAG, &self.nose_cone)?;
        Ok(())
    }

    fn consume_buffered_key(&mut self, key: Key, down: bool) -> bool {
        if !down {
            return false;
        }
        match key {
            Key::G => {
                self.toggle_gear();
                true
            }
            Key::K => {
                self.toggle_bay_door();
                true
            }
            Key::C => {
                self.toggle_nose_cone();
                true
            }
            _ => false,
        }
    }

    fn particle_level(&self, source: EffectSource) -> f64 {
        match source {
            EffectSource::SonicBoom => self.boom_level,
            EffectSource::Contrail => self.contrail_level,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::config::presets;

    /// Host stand-in that records what the module pushes.
    struct TestHost {
        mach: f64,
        altitude: f64,
        animations: Vec<(AnimHandle, f64)>,
        contact_points: usize,
        contact_swaps: usize,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                mach: 0.0,
                altitude: 0.0,
                animations: Vec::new(),
                contact_points: 0,
                contact_swaps: 0,
            }
        }

        fn last_animation(&self, anim: AnimHandle) -> Option<f64> {
            self.animations
                .iter()
                .rev()
                .find(|(h, _)| *h == anim)
                .map(|(_, v)| *v)
        }
    }

    impl Host for TestHost {
        fn mach_number(&self) -> f64 {
            self.mach
        }

        fn altitude(&self) -> f64 {
            self.altitude
        }

        fn set_animation(&mut self, anim: AnimHandle, value: f64) {
            self.animations.push((anim, value));
        }

        fn set_touchdown_points(&mut self, points: &[crate::host::TouchdownPoint]) {
            self.contact_points = points.len();
            self.contact_swaps += 1;
        }
    }

    #[test]
    fn gear_key_deploys_and_swaps_contact_set() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        assert!(vessel.consume_buffered_key(Key::G, true));
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deploying);

        // dt * speed = 1.0: settles in a single tick
        vessel.post_step(&mut host, 0.0, 4.0);
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deployed);
        assert_eq!(vessel.gear().progress(), 1.0);
        assert_eq!(host.contact_points, geometry::gear_down_points().len());
        assert_eq!(host.contact_swaps, 1);
    }

    #[test]
    fn contact_swap_fires_once_per_settle() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        vessel.toggle_gear();
        for _ in 0..40 {
            vessel.post_step(&mut host, 0.0, 0.5);
        }
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deployed);
        assert_eq!(host.contact_swaps, 1, "idle ticks must not re-fire the swap");
    }

    #[test]
    fn retract_swaps_back_to_gear_up_set() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        vessel.toggle_gear();
        vessel.post_step(&mut host, 0.0, 4.0);
        vessel.toggle_gear();
        vessel.post_step(&mut host, 0.0, 4.0);

        assert_eq!(vessel.gear().status(), ActuatorStatus::Retracted);
        assert_eq!(host.contact_points, geometry::gear_up_points().len());
        assert_eq!(host.contact_swaps, 2);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        assert!(!vessel.consume_buffered_key(Key::G, false));
        assert_eq!(vessel.gear().status(), ActuatorStatus::Retracted);
    }

    #[test]
    fn unmapped_key_falls_through() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        assert!(!vessel.consume_buffered_key(Key(0x1c), true));
    }

    #[test]
    fn all_three_actuators_advance_in_one_tick() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        vessel.consume_buffered_key(Key::G, true);
        vessel.consume_buffered_key(Key::K, true);
        vessel.consume_buffered_key(Key::C, true);
        vessel.post_step(&mut host, 0.0, 1.0);

        assert_eq!(vessel.gear().progress(), 0.25);
        assert_eq!(vessel.bay_door().progress(), 0.25);
        assert_eq!(vessel.nose_cone().progress(), 0.25);
        assert_eq!(host.last_animation(ANIM_GEAR), Some(0.25));
        assert_eq!(host.last_animation(ANIM_BAY_DOOR), Some(0.25));
        assert_eq!(host.last_animation(ANIM_NOSE_CONE), Some(0.25));
    }

    #[test]
    fn idle_actuators_push_no_animation() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        vessel.post_step(&mut host, 0.0, 1.0);
        assert!(host.animations.is_empty());
    }

    #[test]
    fn effect_levels_follow_host_flight_state() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        host.mach = 1.0;
        host.altitude = 500.0;
        vessel.post_step(&mut host, 0.0, 0.1);
        assert_eq!(vessel.particle_level(EffectSource::SonicBoom), 1.0);
        assert_eq!(vessel.particle_level(EffectSource::Contrail), 0.0);

        host.mach = 2.4;
        host.altitude = 18_000.0;
        vessel.post_step(&mut host, 0.0, 0.1);
        assert_eq!(vessel.particle_level(EffectSource::SonicBoom), 0.0);
        assert_eq!(vessel.particle_level(EffectSource::Contrail), 1.0);
    }

    #[test]
    fn scenario_roundtrip_restores_identical_state() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        // Door fully open, gear caught mid-deploy, nose cone untouched
        vessel.toggle_bay_door();
        vessel.post_step(&mut host, 0.0, 4.0); // door settles at 1.0
        vessel.toggle_gear();
        vessel.post_step(&mut host, 0.0, 2.0); // gear at 0.5, still moving

        let mut scn = Vec::new();
        vessel.save_state(&mut scn).unwrap();
        let saved = String::from_utf8(scn).unwrap();

        let mut restored = Valkyrie::new(presets::valkyrie());
        let mut host2 = TestHost::new();
        for line in saved.lines() {
            assert!(restored.parse_scenario_line(&mut host2, line));
        }

        assert_eq!(restored.gear(), vessel.gear());
        assert_eq!(restored.bay_door(), vessel.bay_door());
        assert_eq!(restored.nose_cone(), vessel.nose_cone());
    }

    #[test]
    fn restored_deployed_gear_gets_gear_down_contacts() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        assert!(vessel.parse_scenario_line(&mut host, "GEAR 1 1.0000"));
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deployed);
        assert_eq!(host.contact_points, geometry::gear_down_points().len());
        assert_eq!(host.last_animation(ANIM_GEAR), Some(1.0));
    }

    #[test]
    fn foreign_scenario_lines_fall_through() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        assert!(!vessel.parse_scenario_line(&mut host, "PRPLEVEL 0:0.658"));
        assert!(!vessel.parse_scenario_line(&mut host, "NAVFREQ 0 0"));
        // Recognized tag, garbled payload: hand it back to the host
        assert!(!vessel.parse_scenario_line(&mut host, "GEAR two half"));
    }

    #[test]
    fn restore_mid_travel_resumes_on_next_tick() {
        let mut vessel = Valkyrie::new(presets::valkyrie());
        let mut host = TestHost::new();

        assert!(vessel.parse_scenario_line(&mut host, "GEAR 2 0.7500"));
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deploying);

        vessel.post_step(&mut host, 0.0, 1.0);
        assert_eq!(vessel.gear().status(), ActuatorStatus::Deployed);
        assert_eq!(host.contact_swaps, 1);
    }
}
