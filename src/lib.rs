pub mod actuator;
pub mod effects;
pub mod host;
pub mod physics;
pub mod scenario;
pub mod vessel;

pub use actuator::{Actuator, ActuatorStatus, Settle};
pub use host::{AnimHandle, Host, Key, TouchdownPoint, VesselModule};
pub use scenario::ScenarioError;
pub use vessel::config::{VesselConfig, VesselConfigBuilder};
pub use vessel::Valkyrie;
