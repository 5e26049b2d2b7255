use ring_core::Result;
use tracing::{debug, info};

use crate::context::SimulationContext;
use crate::output::OutputSink;
use crate::scenario::ScenarioHooks;

/// Seam for the gravity integrator and collision backend.
/// Implementations advance particle state in place by `ctx.dt`; the
/// driver owns the simulation clock.
pub trait StepBackend {
    fn name(&self) -> &str;

    fn step(&mut self, ctx: &mut SimulationContext) -> Result<()>;
}

/// Leaves particles untouched. Useful for timing the harness itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stationary;

impl StepBackend for Stationary {
    fn name(&self) -> &str {
        "stationary"
    }

    fn step(&mut self, _ctx: &mut SimulationContext) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub steps: u64,
    pub t: f64,
    pub particle_count: usize,
}

/// Run one scenario to the end of its time budget
pub fn run(
    ctx: &mut SimulationContext,
    hooks: &mut impl ScenarioHooks,
    backend: &mut impl StepBackend,
    sink: &mut dyn OutputSink,
    args: &[String],
) -> Result<RunReport> {
    hooks.init(ctx, args)?;
    info!(
        backend = backend.name(),
        particles = ctx.particles.len(),
        dt = ctx.dt,
        tmax = ctx.tmax,
        "starting run"
    );

    hooks.after_step(ctx, sink);

    while !ctx.budget_exhausted() {
        hooks.before_step(ctx);
        backend.step(ctx)?;
        ctx.advance();
        hooks.after_step(ctx, sink);
    }
    debug!(steps = ctx.step, t = ctx.t, "time budget exhausted");

    hooks.finish(ctx)?;

    Ok(RunReport {
        steps: ctx.step,
        t: ctx.t,
        particle_count: ctx.particles.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{TimingSnapshot, TracingSink};
    use crate::scenario::ShearingBoxScenario;
    use ring_core::{CollisionBackend, Particle, ScenarioConfig, ScenarioError};
    use ring_storage::read_records;
    use std::f64::consts::TAU;

    /// omega = 2*pi makes one orbit exactly one time unit
    fn unit_orbit_config(dir: &std::path::Path) -> ScenarioConfig {
        ScenarioConfig {
            omega: TAU,
            dt_orbits: 0.25,
            tmax_orbits: 1.0,
            output_interval_orbits: 0.5,
            seed: Some(21),
            results_dir: dir.to_path_buf(),
            ..ScenarioConfig::default()
        }
    }

    struct Counting {
        calls: usize,
    }

    impl StepBackend for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn step(&mut self, ctx: &mut SimulationContext) -> Result<()> {
            self.calls += 1;
            for p in ctx.particles.as_mut_slice() {
                p.ax = 1.0;
            }
            Ok(())
        }
    }

    struct Failing;

    impl StepBackend for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn step(&mut self, _ctx: &mut SimulationContext) -> Result<()> {
            Err(ScenarioError::InvalidParameter { name: "dt", value: 0.0 })
        }
    }

    #[test]
    fn test_run_to_budget() {
        let dir = tempfile::tempdir().unwrap();
        let config = unit_orbit_config(dir.path());
        let mut ctx = SimulationContext::new(&config).unwrap();
        let mut scenario = ShearingBoxScenario::new(config);
        let mut backend = Counting { calls: 0 };
        let mut sink: Vec<TimingSnapshot> = Vec::new();

        let report = run(&mut ctx, &mut scenario, &mut backend, &mut sink, &[]).unwrap();

        assert_eq!(report.steps, 4);
        assert_eq!(backend.calls, 4);
        assert_eq!(report.t, 1.0);
        assert_eq!(report.particle_count, 523);
        assert!(ctx.particles.as_slice().iter().all(|p| p.ax == 1.0));

        // Checkpoints at t = 0, 0.5, 1.0
        let times: Vec<f64> = sink.iter().map(|s| s.t).collect();
        assert_eq!(times, [0.0, 0.5, 1.0]);

        let records = read_records(&dir.path().join("scaling_tree.txt")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].particle_count, 523);
    }

    #[test]
    fn test_stationary_keeps_initial_conditions() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScenarioConfig {
            backend: CollisionBackend::Direct,
            ..unit_orbit_config(dir.path())
        };
        let mut ctx = SimulationContext::new(&config).unwrap();
        let mut scenario = ShearingBoxScenario::new(config);
        let mut sink = TracingSink;

        let report = run(
            &mut ctx,
            &mut scenario,
            &mut Stationary,
            &mut sink,
            &["2.5".to_owned()],
        )
        .unwrap();

        assert_eq!(ctx.domain().unwrap().boxsize(), 2.5);
        assert_eq!(report.steps, 4);
        let particles: &[Particle] = ctx.particles.as_slice();
        assert!(particles.iter().all(|p| p.vy == -1.5 * TAU * p.x));
        assert!(particles.iter().all(|p| [p.ax, p.ay, p.az] == [0.0; 3]));
        assert!(dir.path().join("scaling_direct.txt").exists());
    }

    #[test]
    fn test_reference_run_takes_ten_steps() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScenarioConfig {
            seed: Some(8),
            results_dir: dir.path().to_path_buf(),
            ..ScenarioConfig::default()
        };
        let mut ctx = SimulationContext::new(&config).unwrap();
        let mut scenario = ShearingBoxScenario::new(config);
        let mut backend = Counting { calls: 0 };
        let mut sink: Vec<TimingSnapshot> = Vec::new();

        let report = run(&mut ctx, &mut scenario, &mut backend, &mut sink, &[]).unwrap();

        assert_eq!(report.steps, 10);
        assert_eq!(backend.calls, 10);
        assert!((report.t - ctx.tmax).abs() < 1e-12, "t = {}", report.t);
        // Budget is shorter than one orbit: only the t = 0 checkpoint
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_backend_error_skips_finish() {
        let dir = tempfile::tempdir().unwrap();
        let config = unit_orbit_config(dir.path());
        let mut ctx = SimulationContext::new(&config).unwrap();
        let mut scenario = ShearingBoxScenario::new(config);
        let mut sink: Vec<TimingSnapshot> = Vec::new();

        assert!(run(&mut ctx, &mut scenario, &mut Failing, &mut sink, &[]).is_err());
        assert!(!dir.path().join("scaling_tree.txt").exists());
    }
}
