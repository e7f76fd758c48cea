use nalgebra::Vector3;

use crate::host::TouchdownPoint;

// ---------------------------------------------------------------------------
// Mesh binding
// ---------------------------------------------------------------------------

pub const MESH_NAME: &str = "XB-70_Valkyrie";

// Mesh group indices used by animations (exported with the mesh).
pub mod groups {
    pub const REAR_LEFT_WHEELS: u32 = 2;
    pub const REAR_LEFT_GEAR: u32 = 3;
    pub const FRONT_WHEELS: u32 = 6;
    pub const FRONT_GEAR: u32 = 7;
    pub const BAY_DOOR: u32 = 13;
    pub const CANARDS: u32 = 17;
    pub const RIGHT_AILERON: u32 = 21;
    pub const LEFT_AILERON: u32 = 22;
    pub const RIGHT_RUDDER: u32 = 23;
    pub const LEFT_RUDDER: u32 = 24;
    pub const NOSE_CONE: u32 = 25;
    pub const FRONT_GEAR_DOOR2: u32 = 26;
    pub const FRONT_GEAR_DOOR1: u32 = 27;
    pub const REAR_GEAR_DOORS: u32 = 28;
    pub const REAR_GEAR_LEFT_DOOR: u32 = 29;
    pub const REAR_GEAR_RIGHT_DOOR: u32 = 30;
    pub const REAR_RIGHT_WHEELS: u32 = 31;
    pub const REAR_RIGHT_GEAR: u32 = 32;
}

// ---------------------------------------------------------------------------
// Engine layout (vessel frame, m)
// ---------------------------------------------------------------------------

/// Thruster mount points for the six main engines, port to starboard.
pub fn main_engine_mounts() -> [Vector3<f64>; 6] {
    [
        Vector3::new(-3.6722, -0.8294, -25.5365),
        Vector3::new(-2.2222, -0.8294, -25.5401),
        Vector3::new(-0.8022, -0.8294, -25.5437),
        Vector3::new(0.6378, -0.8294, -25.5473),
        Vector3::new(2.0678, -0.8294, -25.5509),
        Vector3::new(3.5278, -0.8294, -25.5545),
    ]
}

/// Exhaust emitter positions at the nozzle exits.
pub fn main_engine_exhausts() -> [Vector3<f64>; 6] {
    [
        Vector3::new(-3.6722, 0.0006, -25.5365),
        Vector3::new(-2.2222, 0.0006, -25.5401),
        Vector3::new(-0.8022, 0.0006, -25.5437),
        Vector3::new(0.6378, 0.0006, -25.5473),
        Vector3::new(2.0678, 0.0006, -25.5509),
        Vector3::new(3.5278, 0.0006, -25.5545),
    ]
}

/// Contrail emitters on the canard tips, port and starboard.
pub fn contrail_emitters() -> [Vector3<f64>; 2] {
    [
        Vector3::new(-4.4369, 2.3173, 15.0224),
        Vector3::new(4.3183, 2.3173, 15.0224),
    ]
}

/// Reference point of the tail fin pair (side-force airfoil).
pub fn tail_fin_ref() -> Vector3<f64> {
    Vector3::new(0.0789, 2.6559, -24.2352)
}

// ---------------------------------------------------------------------------
// Ground-contact sets
// ---------------------------------------------------------------------------

// Wheel contacts: stiff, damped, high-grip laterally, free-rolling
// longitudinally.
fn wheel_point(pos: Vector3<f64>) -> TouchdownPoint {
    TouchdownPoint {
        pos,
        stiffness: 3e6,
        damping: 3e5,
        mu: 1.6,
        mu_lng: 0.1,
    }
}

// Airframe contacts protect the hull when it meets the ground.
fn hull_point(pos: Vector3<f64>) -> TouchdownPoint {
    TouchdownPoint {
        pos,
        stiffness: 1e7,
        damping: 1e5,
        mu: 3.0,
        mu_lng: 0.0,
    }
}

fn hull_points() -> [TouchdownPoint; 9] {
    [
        hull_point(Vector3::new(-0.0412, -1.8023, -2.1116)), // belly, forward
        hull_point(Vector3::new(-4.0892, -0.9053, -24.3643)), // belly, rear left
        hull_point(Vector3::new(4.0243, -0.9053, -24.3847)), // belly, rear right
        hull_point(Vector3::new(-15.8078, 1.1201, -27.8032)), // left wing tip
        hull_point(Vector3::new(15.6921, 1.1201, -27.8822)), // right wing tip
        hull_point(Vector3::new(4.4373, 5.9027, -26.0741)),  // right fin
        hull_point(Vector3::new(-4.5627, 5.9027, -26.0515)), // left fin
        hull_point(Vector3::new(0.0033, 3.2037, 15.4707)),   // forward fuselage
        hull_point(Vector3::new(0.0001, 0.8608, 29.9769)),   // pitot probe
    ]
}

/// Contact set with the gear deployed: three wheel trucks plus the
/// airframe protection points.
pub fn gear_down_points() -> Vec<TouchdownPoint> {
    let mut points = vec![
        wheel_point(Vector3::new(-0.0676, -4.9817, 27.4759)), // nose truck
        wheel_point(Vector3::new(-15.9354, -4.1517, -28.2170)), // rear left truck
        wheel_point(Vector3::new(15.9229, -4.1517, -28.2972)), // rear right truck
    ];
    points.extend(hull_points());
    points
}

/// Contact set with the gear stowed: airframe points only.
pub fn gear_up_points() -> Vec<TouchdownPoint> {
    hull_points().to_vec()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
