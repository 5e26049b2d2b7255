use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ring_core::{CollisionBackend, Particle, Result, ScenarioConfig, ScenarioError};
use ring_physics::{Domain, ParticleSink, RingPatch, ShearParams};
use tracing::info;

use crate::output::{OutputSchedule, TimingSnapshot};

/// Append-only particle store shared with the integrator and collision backend
#[derive(Debug, Clone, Default)]
pub struct ParticleRegistry {
    particles: Vec<Particle>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Backends mutate particles in place; the count never changes here
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Flat view for backends that consume a raw particle buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.particles.as_slice())
    }
}

impl ParticleSink for ParticleRegistry {
    fn live_count(&self) -> usize {
        self.particles.len()
    }

    fn add(&mut self, particle: Particle) -> Result<()> {
        self.particles.push(particle);
        Ok(())
    }
}

/// Parameters read by the collision backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionParams {
    pub backend: CollisionBackend,
    pub coefficient_of_restitution: f64,
    pub minimum_collision_velocity: f64,
}

impl CollisionParams {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            backend: config.backend,
            coefficient_of_restitution: config.coefficient_of_restitution,
            minimum_collision_velocity: config.minimum_collision_velocity,
        }
    }
}

/// State of one run, handed to every hook and backend
pub struct SimulationContext {
    domain: Option<Domain>,
    pub particles: ParticleRegistry,
    pub shear: ShearParams,
    pub collisions: CollisionParams,
    /// Simulation time
    pub t: f64,
    pub dt: f64,
    /// Time budget
    pub tmax: f64,
    /// Completed steps
    pub step: u64,
    outputs: OutputSchedule,
    rng: ChaCha8Rng,
    seed: u64,
    started: Instant,
}

impl SimulationContext {
    /// Seeds from the config, or draws a fresh seed when none is given
    pub fn new(config: &ScenarioConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, backend = %config.backend, "simulation context created");

        Ok(Self {
            domain: None,
            particles: ParticleRegistry::new(),
            shear: ShearParams::from_config(config),
            collisions: CollisionParams::from_config(config),
            t: 0.0,
            dt: config.dt(),
            tmax: config.tmax(),
            step: 0,
            outputs: OutputSchedule::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            started: Instant::now(),
        })
    }

    /// Measure wall time from an earlier instant, e.g. process start
    pub fn with_start(mut self, started: Instant) -> Self {
        self.started = started;
        self
    }

    /// One-shot: a second call is rejected
    pub fn configure_domain(&mut self, domain: Domain) -> Result<&Domain> {
        if self.domain.is_some() {
            return Err(ScenarioError::DomainAlreadyConfigured);
        }
        Ok(self.domain.insert(domain))
    }

    pub fn domain(&self) -> Result<&Domain> {
        self.domain.as_ref().ok_or(ScenarioError::DomainNotConfigured)
    }

    pub fn add_particle(&mut self, particle: Particle) -> Result<()> {
        self.domain()?;
        self.particles.add(particle)
    }

    /// Fill the configured domain up to the patch's target count
    pub fn populate(&mut self, patch: &RingPatch) -> Result<usize> {
        let domain = self
            .domain
            .as_ref()
            .ok_or(ScenarioError::DomainNotConfigured)?;
        patch.populate(domain, &self.shear, &mut self.rng, &mut self.particles)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn wall_elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Steps that fit the budget, rounded to the nearest whole step so
    /// accumulated rounding in `t` cannot add an extra one
    pub fn total_steps(&self) -> u64 {
        ((self.tmax / self.dt).round() as u64).max(1)
    }

    pub fn budget_exhausted(&self) -> bool {
        self.step >= self.total_steps()
    }

    /// Complete one step; time is derived from the step index
    pub fn advance(&mut self) {
        self.step += 1;
        self.t = self.step as f64 * self.dt;
    }

    /// True when at least `interval` simulation time has passed since the
    /// last time this returned true (and on the first call)
    pub fn output_check(&mut self, interval: f64) -> bool {
        self.outputs.check(self.t, interval)
    }

    pub fn timing_snapshot(&self) -> TimingSnapshot {
        TimingSnapshot {
            particle_count: self.particles.len(),
            t: self.t,
            tmax: self.tmax,
            wall_seconds: self.wall_elapsed().as_secs_f64(),
        }
    }
}
