use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Vessel configuration (physical parameters and actuator speeds)
// ---------------------------------------------------------------------------

/// Reference geometry of one lifting surface (per-side values).
#[derive(Debug, Clone, Copy)]
pub struct LiftSurface {
    pub chord: f64,        // m
    pub area: f64,         // m², one side
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone)]
pub struct VesselConfig {
    pub size: f64,                 // mean radius, m
    pub empty_mass: f64,           // kg
    pub fuel_mass: f64,            // kg
    pub isp: f64,                  // exhaust velocity, m/s
    pub main_thrust: f64,          // N per engine, military power
    pub afterburner_thrust: f64,   // N per engine, full afterburner
    pub cross_sections: Vector3<f64>, // m², airflow cross sections per axis
    pub rot_drag: Vector3<f64>,    // rotational drag coefficients
    pub cg_shift: Vector3<f64>,    // m, centre-of-gravity offset from mesh origin
    pub wing_effectiveness: f64,
    pub max_wheelbrake_force: f64, // N
    pub nosewheel_steering: bool,
    pub wing: LiftSurface,
    pub fin: LiftSurface,
    pub gear_speed: f64,           // actuator progress per second
    pub door_speed: f64,
    pub nosecone_speed: f64,
}

// ---------------------------------------------------------------------------
// Config builder
// ---------------------------------------------------------------------------

/// Builder starting from the Valkyrie preset; override what differs.
pub struct VesselConfigBuilder {
    config: VesselConfig,
}

impl VesselConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: presets::valkyrie(),
        }
    }

    pub fn size(mut self, v: f64) -> Self { self.config.size = v; self }
    pub fn empty_mass(mut self, v: f64) -> Self { self.config.empty_mass = v; self }
    pub fn fuel_mass(mut self, v: f64) -> Self { self.config.fuel_mass = v; self }
    pub fn isp(mut self, v: f64) -> Self { self.config.isp = v; self }
    pub fn main_thrust(mut self, v: f64) -> Self { self.config.main_thrust = v; self }
    pub fn afterburner_thrust(mut self, v: f64) -> Self { self.config.afterburner_thrust = v; self }
    pub fn wing_effectiveness(mut self, v: f64) -> Self { self.config.wing_effectiveness = v; self }
    pub fn max_wheelbrake_force(mut self, v: f64) -> Self { self.config.max_wheelbrake_force = v; self }
    pub fn gear_speed(mut self, v: f64) -> Self { self.config.gear_speed = v; self }
    pub fn door_speed(mut self, v: f64) -> Self { self.config.door_speed = v; self }
    pub fn nosecone_speed(mut self, v: f64) -> Self { self.config.nosecone_speed = v; self }

    pub fn build(self) -> VesselConfig {
        self.config
    }
}

impl Default for VesselConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// The Valkyrie: a six-engine supersonic delta-wing research vessel.
    pub fn valkyrie() -> VesselConfig {
        VesselConfig {
            size: 22.8,
            empty_mass: 115_031.0,
            fuel_mass: 140_000.0,
            isp: 2e4,
            main_thrust: 89e3,
            afterburner_thrust: 120e3,
            cross_sections: Vector3::new(199.5443, 585.7, 33.2172),
            rot_drag: Vector3::new(5.0, 5.0, 2.5),
            cg_shift: Vector3::new(0.0, -0.8294, 0.0),
            wing_effectiveness: 2.5,
            max_wheelbrake_force: 25e5,
            nosewheel_steering: true,
            wing: LiftSurface {
                chord: 23.94,
                area: 585.07,
                aspect_ratio: 1.751,
            },
            fin: LiftSurface {
                chord: 5.01,
                area: 21.74,
                aspect_ratio: 1.0,
            },
            gear_speed: 0.25,
            door_speed: 0.25,
            nosecone_speed: 0.25,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_preset() {
        let preset = presets::valkyrie();
        let built = VesselConfigBuilder::new().build();
        assert_eq!(built.empty_mass, preset.empty_mass);
        assert_eq!(built.gear_speed, preset.gear_speed);
    }

    #[test]
    fn builder_overrides_stick() {
        let config = VesselConfigBuilder::new()
            .gear_speed(0.5)
            .fuel_mass(90_000.0)
            .build();
        assert_eq!(config.gear_speed, 0.5);
        assert_eq!(config.fuel_mass, 90_000.0);
        // Untouched fields keep preset values
        assert_eq!(config.size, 22.8);
    }
}
