use std::f64::consts::TAU;

use ring_core::{SHEAR_FACTOR, ScenarioConfig};

/// Background flow of the shearing sheet.
///
/// `omega_z` sets the vertical restoring force; it is carried here for the
/// integrator and not used by anything in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShearParams {
    pub omega: f64,
    pub omega_z: f64,
}

impl ShearParams {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            omega: config.omega,
            omega_z: config.omega_z,
        }
    }

    /// Linearised Keplerian shear: v_y(x) = -3/2 * OMEGA * x
    pub fn shear_velocity(&self, x: f64) -> f64 {
        -SHEAR_FACTOR * self.omega * x
    }

    pub fn orbital_period(&self) -> f64 {
        TAU / self.omega
    }
}
