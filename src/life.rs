use std::time::Duration;

use bevy::{
    diagnostic::{Diagnostic, DiagnosticPath, Diagnostics, RegisterDiagnostic},
    prelude::*,
};

use crate::{
    config::LifeConfig,
    grid::Grid,
    state::GameState,
    step::next_generation_into,
    tick::{FrameClock, TickScheduler},
};

pub const GENERATION: DiagnosticPath = DiagnosticPath::const_new("life/generation");
pub const POPULATION: DiagnosticPath = DiagnosticPath::const_new("life/population");

/// Everything that mutates the board runs in this set; drawing is ordered after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LifeSet;

#[derive(Default)]
pub struct LifePlugin {
    pub config: LifeConfig,
}

impl Plugin for LifePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Simulation::new(&self.config))
            .register_diagnostic(Diagnostic::new(GENERATION))
            .register_diagnostic(Diagnostic::new(POPULATION))
            .add_systems(OnEnter(GameState::Running), log_start)
            .add_systems(
                Update,
                advance_simulation
                    .in_set(LifeSet)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

// ——> SYSTEMS

fn log_start(sim: Res<Simulation>) {
    info!(
        grid_size = sim.grid().size(),
        tick_interval = ?sim.tick_interval(),
        population = sim.grid().population(),
        "starting simulation"
    );
}

/// feed this frame's timestamp to the scheduler and step when due
fn advance_simulation(time: Res<Time>, mut sim: ResMut<Simulation>, mut diagnostics: Diagnostics) {
    if !sim.on_frame(time.elapsed()) {
        return;
    }
    let generation = sim.generation();
    let population = sim.grid().population();
    trace!(generation, population, "stepped");
    diagnostics.add_measurement(&GENERATION, || generation as f64);
    diagnostics.add_measurement(&POPULATION, || population as f64);
}

// ——> RESOURCES

/// The board plus the throttle that decides when it advances.
///
/// Generations are computed into a second, preallocated board which is then
/// swapped in, so every cell of a step reads the same frozen snapshot.
#[derive(Resource, Debug)]
pub struct Simulation {
    current: Grid,
    /// back buffer the next generation is written into
    next: Grid,
    scheduler: TickScheduler,
    clock: FrameClock,
    generation: u64,
}

impl Simulation {
    /// a randomly filled board, seeded from `config` when it carries a seed
    pub fn new(config: &LifeConfig) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::from_grid(
            Grid::random(config.grid_size(), &mut rng),
            config.tick_interval(),
        )
    }

    pub fn from_grid(grid: Grid, tick_interval: Duration) -> Self {
        Self {
            next: Grid::empty(grid.size()),
            current: grid,
            scheduler: TickScheduler::new(tick_interval),
            clock: FrameClock::default(),
            generation: 0,
        }
    }

    /// read-only view of the current generation
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.scheduler.interval()
    }

    /// advance one generation unconditionally
    pub fn step(&mut self) {
        next_generation_into(&self.current, &mut self.next);
        self.current.swap_with(&mut self.next);
        self.generation += 1;
    }

    /// accumulate `delta`, stepping at most once; returns whether it stepped
    pub fn advance(&mut self, delta: Duration) -> bool {
        let due = self.scheduler.tick(delta);
        if due {
            self.step();
        }
        due
    }

    /// like [`Simulation::advance`], but from a frame timestamp
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let delta = self.clock.delta(now);
        self.advance(delta)
    }
}
