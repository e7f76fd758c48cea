pub mod airfoil;
pub mod drag;

pub use airfoil::{Airfoil, AirfoilCoefficients, LiftOrientation};
pub use drag::{induced_drag, wave_drag};
