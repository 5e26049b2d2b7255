pub mod domain;
pub mod procgen;
pub mod shear;

pub use domain::Domain;
pub use procgen::{ParticleSink, RingPatch};
pub use shear::ShearParams;
