use std::f64::consts::PI;

use rand::Rng;
use ring_core::{
    INITIAL_THICKNESS_RADII, MAX_PARTICLES, PARTICLE_MASS, Particle, Result, ScenarioConfig, ScenarioError,
};
use tracing::{debug, info};

use crate::domain::Domain;
use crate::shear::ShearParams;

/// Anything that accepts particles one at a time and reports its live count
pub trait ParticleSink {
    fn live_count(&self) -> usize;
    fn add(&mut self, particle: Particle) -> Result<()>;
}

impl ParticleSink for Vec<Particle> {
    fn live_count(&self) -> usize {
        self.len()
    }

    fn add(&mut self, particle: Particle) -> Result<()> {
        self.push(particle);
        Ok(())
    }
}

/// Monodisperse ring patch at a target optical depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPatch {
    pub tau: f64,
    pub radius: f64,
}

impl RingPatch {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            tau: config.tau,
            radius: config.particle_radius,
        }
    }

    /// Number of disks of this radius covering `area` at optical depth tau:
    /// ceil(tau * area / (pi r^2))
    pub fn target_count(&self, area: f64) -> Result<usize> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ScenarioError::InvalidParameter {
                name: "particle_radius",
                value: self.radius,
            });
        }
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(ScenarioError::InvalidParameter {
                name: "tau",
                value: self.tau,
            });
        }
        if !area.is_finite() || area <= 0.0 {
            return Err(ScenarioError::DegenerateArea {
                area,
                radius: self.radius,
            });
        }
        let n = (self.tau * area / (PI * self.radius * self.radius)).ceil();
        if !n.is_finite() || n > MAX_PARTICLES as f64 {
            return Err(ScenarioError::TooManyParticles {
                requested: n,
                limit: MAX_PARTICLES,
            });
        }
        Ok(n as usize)
    }

    /// Draw one particle: uniform in the box plane, uniform in a slab of
    /// ten radii vertically, moving with the background shear.
    pub fn sample(&self, domain: &Domain, shear: &ShearParams, rng: &mut impl Rng) -> Particle {
        let x = (rng.gen_range(0.0..1.0f64) - 0.5) * domain.box_x();
        let y = (rng.gen_range(0.0..1.0f64) - 0.5) * domain.box_y();
        let z = INITIAL_THICKNESS_RADII * (rng.gen_range(0.0..1.0f64) - 0.5) * self.radius;

        Particle {
            vy: shear.shear_velocity(x),
            ..Particle::at_rest([x, y, z], PARTICLE_MASS, self.radius)
        }
    }

    /// Add particles until the sink holds at least the target count.
    /// Overlaps are not rejected; the collision backend separates them.
    /// Returns the number of particles added.
    pub fn populate(
        &self,
        domain: &Domain,
        shear: &ShearParams,
        rng: &mut impl Rng,
        sink: &mut impl ParticleSink,
    ) -> Result<usize> {
        let target = self.target_count(domain.area())?;
        let before = sink.live_count();
        debug!(target, before, "populating ring patch");

        while sink.live_count() < target {
            sink.add(self.sample(domain, shear, rng))?;
        }

        let added = sink.live_count() - before;
        info!(tau = self.tau, radius = self.radius, target, added, "initial conditions generated");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn reference() -> (Domain, ShearParams, RingPatch) {
        let config = ScenarioConfig::default();
        (
            Domain::from_config(&config).unwrap(),
            ShearParams::from_config(&config),
            RingPatch::from_config(&config),
        )
    }

    #[test]
    fn test_reference_target_count() {
        let (domain, _, patch) = reference();
        // 1.64 * 200 * 5 / pi = 522.03...
        assert_eq!(patch.target_count(domain.area()).unwrap(), 523);
    }

    #[test]
    fn test_target_count_is_ceiling() {
        let patch = RingPatch { tau: 1.0, radius: 1.0 };
        assert_eq!(patch.target_count(PI * 3.5).unwrap(), 4);
        assert_eq!(patch.target_count(0.001).unwrap(), 1);
    }

    #[test]
    fn test_target_count_guards() {
        let patch = RingPatch { tau: 1.64, radius: 0.0 };
        assert!(matches!(
            patch.target_count(1000.0),
            Err(ScenarioError::InvalidParameter { name: "particle_radius", .. })
        ));
        let patch = RingPatch { tau: -1.0, radius: 1.0 };
        assert!(patch.target_count(1000.0).is_err());
        let patch = RingPatch { tau: 1.64, radius: 1.0 };
        assert!(matches!(
            patch.target_count(0.0),
            Err(ScenarioError::DegenerateArea { .. })
        ));
    }

    #[test]
    fn test_target_count_capped() {
        let (domain, _, _) = reference();
        let dust = RingPatch { tau: 1.64, radius: 1e-6 };
        assert!(matches!(
            dust.target_count(domain.area()),
            Err(ScenarioError::TooManyParticles { limit: MAX_PARTICLES, .. })
        ));

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut particles = Vec::new();
        let shear = ShearParams { omega: 1.0, omega_z: 3.6 };
        assert!(dust.populate(&domain, &shear, &mut rng, &mut particles).is_err());
        assert!(particles.is_empty());

        let huge = RingPatch { tau: f64::MAX, radius: 1.0 };
        assert!(huge.target_count(f64::MAX).is_err());
    }

    #[test]
    fn test_populate_reference_patch() {
        let (domain, shear, patch) = reference();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut particles = Vec::new();

        let added = patch.populate(&domain, &shear, &mut rng, &mut particles).unwrap();
        assert_eq!(added, 523);
        assert_eq!(particles.len(), 523);

        for p in &particles {
            let [x, y, z] = p.pos();
            assert!(domain.contains(x, y, z), "{p:?}");
            assert_eq!(p.m, 1.0);
            assert_eq!(p.r, 1.0);
            assert!(domain.contains_planar(p.x, p.y), "{p:?}");
            assert!((-5.0..5.0).contains(&p.z), "{p:?}");
            assert_eq!(p.vx, 0.0);
            assert_eq!(p.vz, 0.0);
            assert_eq!(p.vy, -1.5 * shear.omega * p.x);
            assert_eq!([p.ax, p.ay, p.az], [0.0; 3]);
        }
    }

    #[test]
    fn test_populate_tops_up_existing() {
        let (domain, shear, patch) = reference();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut particles = vec![Particle::at_rest([0.0; 3], 1.0, 1.0); 500];

        let added = patch.populate(&domain, &shear, &mut rng, &mut particles).unwrap();
        assert_eq!(added, 23);
        assert_eq!(particles.len(), 523);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let (domain, shear, patch) = reference();
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut particles = Vec::new();
            patch.populate(&domain, &shear, &mut rng, &mut particles).unwrap();
            particles
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }

    #[test]
    fn test_shear_with_fast_rotation() {
        let domain = Domain::configure(1.0, [8, 8, 1], [1, 1, 0]).unwrap();
        let shear = ShearParams { omega: 3.0, omega_z: 1.0 };
        let patch = RingPatch { tau: 0.5, radius: 0.2 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut particles = Vec::new();
        patch.populate(&domain, &shear, &mut rng, &mut particles).unwrap();

        assert!(particles.iter().all(|p| p.vy == -4.5 * p.x));
        assert!(particles.iter().all(|p| p.z.abs() <= 1.0));
    }
}
