//! Scenario hooks called by the driver.
//!
//! `init` runs once before the step loop, `before_step`/`after_step` around
//! every step, and `finish` once the time budget is spent.

use ring_core::{Result, ScenarioConfig};
use ring_physics::{Domain, RingPatch};
use ring_storage::{BenchmarkRecorder, ScalingRecord};
use tracing::debug;

use crate::context::SimulationContext;
use crate::output::OutputSink;

pub trait ScenarioHooks {
    /// `args` holds the positional command-line arguments
    fn init(&mut self, ctx: &mut SimulationContext, args: &[String]) -> Result<()>;

    fn before_step(&mut self, _ctx: &mut SimulationContext) {}

    fn after_step(&mut self, ctx: &mut SimulationContext, sink: &mut dyn OutputSink);

    fn finish(&mut self, ctx: &mut SimulationContext) -> Result<()>;
}

/// Shearing-box scaling benchmark: a ring patch at fixed optical depth,
/// timed once per orbit, with one scaling record appended at the end
pub struct ShearingBoxScenario {
    config: ScenarioConfig,
    recorder: BenchmarkRecorder,
}

impl ShearingBoxScenario {
    pub fn new(config: ScenarioConfig) -> Self {
        let recorder = BenchmarkRecorder::new(config.results_path());
        Self { config, recorder }
    }

    /// Configuration in effect, including any box-size override from `init`
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn recorder(&self) -> &BenchmarkRecorder {
        &self.recorder
    }
}

impl ScenarioHooks for ShearingBoxScenario {
    fn init(&mut self, ctx: &mut SimulationContext, args: &[String]) -> Result<()> {
        if let Some(raw) = args.first() {
            self.config = self.config.clone().with_box_size_arg(raw)?;
            debug!(boxsize = self.config.boxsize, "box size from command line");
        }

        ctx.configure_domain(Domain::from_config(&self.config)?)?;
        ctx.populate(&RingPatch::from_config(&self.config))?;
        Ok(())
    }

    fn after_step(&mut self, ctx: &mut SimulationContext, sink: &mut dyn OutputSink) {
        if ctx.output_check(self.config.output_interval()) {
            sink.timing(&ctx.timing_snapshot());
        }
    }

    fn finish(&mut self, ctx: &mut SimulationContext) -> Result<()> {
        self.recorder.append(&ScalingRecord {
            particle_count: ctx.particles.len(),
            elapsed_seconds: ctx.wall_elapsed().as_secs_f64(),
        })
    }
}
