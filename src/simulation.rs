//! Simulation state, the per-tick driver, and its Bevy plugin.
//!
//! [`SimulationState`] owns every live collection plus score, level, lives,
//! both cooldown clocks and the random source.  [`SimulationState::tick`] runs
//! one atomic step:
//!
//! | Step | Work                                                         |
//! |------|--------------------------------------------------------------|
//! | 1    | pause toggle (a paused game stops here)                      |
//! | 2    | ship integration and fire (shot cooldown)                    |
//! | 3    | motion: asteroids, bullets, sparks, snippets                 |
//! | 4    | bullet–asteroid collisions, score, debris                    |
//! | 5    | gravity pulse (pulse cooldown)                               |
//! | 6    | ship–asteroid contact, lives                                 |
//! | 7    | next level when the field is clear                           |
//!
//! Only steps 2 and 5 read the wall clock (`now`, seconds); everything else
//! counts ticks.  The plugin runs the tick on `FixedUpdate` with exclusive
//! access to the state, so ticks never overlap.

use crate::asteroid::{spawn_asteroid, update_asteroids, Asteroid};
use crate::bullet::{update_bullets, Bullet, FireControl};
use crate::collision::{resolve_bullet_hits, HitReport};
use crate::config::{load_game_config, GameConfig};
use crate::gravity_pulse::{GravityPulse, PulseOutcome};
use crate::particles::{update_sparks, Spark};
use crate::ship::{Ship, ShipIntents};
use crate::snippet::{update_snippets, Snippet};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Tick report ───────────────────────────────────────────────────────────────

/// Everything notable that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub hits: Vec<HitReport>,
    /// Points added this tick.
    pub points: u64,
    pub shot_fired: bool,
    /// `Some` when a pulse actually fired.
    pub pulse: Option<PulseOutcome>,
    pub ship_lost: bool,
    pub level_cleared: bool,
    pub pause_toggled: bool,
}

/// The most recent [`TickReport`], for HUD and audio layers.
#[derive(Resource, Debug, Default)]
pub struct LastTick(pub TickReport);

// ── State ─────────────────────────────────────────────────────────────────────

#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    config: GameConfig,
    rng: StdRng,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub sparks: Vec<Spark>,
    pub snippets: Vec<Snippet>,
    pub score: u64,
    /// 1-based; only advanced when the field is cleared.
    pub level: u32,
    pub lives: u32,
    pub paused: bool,
    pub game_over: bool,
    pub fire_control: FireControl,
    pub pulse: GravityPulse,
    pub tick_count: u64,
}

impl SimulationState {
    /// Start a new game at level 1 using `rng` for every random draw.
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            ship: Ship::new(&config),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            sparks: Vec::new(),
            snippets: Vec::new(),
            score: 0,
            level: 1,
            lives: config.ship_lives,
            paused: false,
            game_over: false,
            fire_control: FireControl::default(),
            pulse: GravityPulse::default(),
            tick_count: 0,
            config,
            rng,
        };
        state.spawn_wave();
        state
    }

    /// Deterministic game for tests and replays.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh game (score 0, level 1, full lives) under the current config.
    /// The random stream carries on.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        let rng = self.rng.clone();
        *self = Self::new(config, rng);
    }

    /// Swap in `config`, then [`reset`](Self::reset).
    pub fn restart(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    fn spawn_wave(&mut self) {
        let count = self.config.asteroid_count_for_level(self.level);
        for _ in 0..count {
            let asteroid = spawn_asteroid(&self.config, &mut self.rng);
            self.asteroids.push(asteroid);
        }
    }

    /// Advance the game by one tick.  `now` is wall-clock seconds.
    pub fn tick(&mut self, intents: &ShipIntents, now: f64) -> TickReport {
        let mut report = TickReport::default();

        if intents.pause_toggle {
            self.paused = !self.paused;
            report.pause_toggled = true;
        }
        if self.paused {
            return report;
        }

        if !self.game_over {
            self.ship.integrate(intents, &self.config);
            if intents.fire {
                if let Some(bullet) = self.fire_control.try_fire(&self.ship, &self.config, now) {
                    self.bullets.push(bullet);
                    report.shot_fired = true;
                }
            }
        }

        update_asteroids(&mut self.asteroids, &self.config);
        update_bullets(&mut self.bullets, &self.config);
        update_sparks(&mut self.sparks, &self.config);
        update_snippets(&mut self.snippets);

        report.hits = resolve_bullet_hits(
            &mut self.bullets,
            &mut self.asteroids,
            &mut self.sparks,
            &mut self.snippets,
            &self.config,
            &mut self.rng,
        );
        report.points = report.hits.iter().map(|h| h.score.total as u64).sum();
        self.score += report.points;

        if intents.gravity_pulse && !self.game_over {
            report.pulse = self.pulse.trigger(
                now,
                &self.ship,
                &mut self.asteroids,
                &mut self.sparks,
                &self.config,
                &mut self.rng,
            );
        }

        if !self.game_over
            && self.ship.invulnerable_ticks == 0
            && self.ship.touches_any(&self.asteroids)
        {
            report.ship_lost = true;
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.game_over = true;
            } else {
                self.ship.respawn(&self.config);
            }
        }

        if self.asteroids.is_empty() {
            self.level += 1;
            self.spawn_wave();
            report.level_cleared = true;
        }

        self.tick_count += 1;
        report
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::default());
        }
        app.insert_resource(SimulationState::from_entropy(GameConfig::default()))
            .init_resource::<ShipIntents>()
            .init_resource::<LastTick>()
            .add_systems(Startup, (load_game_config, start_game_system).chain())
            .add_systems(FixedUpdate, simulation_tick_system);
    }
}

/// Startup system: rebuild the game from the (possibly reloaded) config.
pub fn start_game_system(config: Res<GameConfig>, mut sim: ResMut<SimulationState>) {
    sim.restart(config.clone());
    info!(
        "Level {} started with {} asteroids",
        sim.level,
        sim.asteroids.len()
    );
}

/// Fixed-rate system: run one tick from the current intents.
pub fn simulation_tick_system(
    mut sim: ResMut<SimulationState>,
    mut intents: ResMut<ShipIntents>,
    mut last: ResMut<LastTick>,
    time: Res<Time<Real>>,
) {
    let report = sim.tick(&intents, time.elapsed_secs_f64());
    // The toggle is an edge; consume it so a held key does not flicker.
    intents.pause_toggle = false;

    for hit in report.hits.iter().filter(|h| h.score.multiplier > 1) {
        debug!(
            "snipe at ({:.0}, {:.0}): {} points",
            hit.position.x, hit.position.y, hit.score.total
        );
    }
    if report.pause_toggled {
        info!("{}", if sim.paused { "Paused" } else { "Resumed" });
    }
    if report.ship_lost {
        if sim.game_over {
            info!("Game over with {} points on level {}", sim.score, sim.level);
        } else {
            info!("Ship lost, {} lives left", sim.lives);
        }
    }
    if report.level_cleared {
        info!(
            "Level {} started with {} asteroids",
            sim.level,
            sim.asteroids.len()
        );
    }

    last.0 = report;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> ShipIntents {
        ShipIntents::default()
    }

    fn quiet_state(seed: u64) -> SimulationState {
        let mut sim = SimulationState::with_seed(GameConfig::default(), seed);
        sim.asteroids.clear();
        sim
    }

    fn parked_rock(sim: &mut SimulationState, position: Vec2, radius: f32) {
        let config = sim.config().clone();
        let rock = Asteroid::new(position, 0.0, 0.0, radius, &config, &mut sim.rng);
        sim.asteroids.push(rock);
    }

    #[test]
    fn new_game_spawns_first_wave() {
        let sim = SimulationState::with_seed(GameConfig::default(), 1);
        assert_eq!(sim.level, 1);
        assert_eq!(sim.asteroids.len(), sim.config().asteroids_at_level_start);
        assert_eq!(sim.lives, sim.config().ship_lives);
    }

    #[test]
    fn same_seed_same_game() {
        let a = SimulationState::with_seed(GameConfig::default(), 77);
        let b = SimulationState::with_seed(GameConfig::default(), 77);
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn clearing_the_field_advances_the_level() {
        let mut sim = quiet_state(2);
        let report = sim.tick(&idle(), 0.0);
        assert!(report.level_cleared);
        assert_eq!(sim.level, 2);
        assert_eq!(sim.asteroids.len(), sim.config().asteroid_count_for_level(2));
    }

    #[test]
    fn pause_freezes_everything() {
        let mut sim = SimulationState::with_seed(GameConfig::default(), 3);
        let before = sim.asteroids.clone();
        let toggle = ShipIntents {
            pause_toggle: true,
            ..Default::default()
        };
        let report = sim.tick(&toggle, 0.0);
        assert!(report.pause_toggled && sim.paused);
        sim.tick(&idle(), 0.1);
        assert_eq!(sim.asteroids, before);
        assert_eq!(sim.tick_count, 0);
        sim.tick(&toggle, 0.2);
        assert!(!sim.paused);
    }

    #[test]
    fn holding_fire_respects_cooldown() {
        let mut sim = quiet_state(4);
        parked_rock(&mut sim, Vec2::new(40.0, 40.0), 12.0);
        let fire = ShipIntents {
            fire: true,
            ..Default::default()
        };
        let mut shots = 0;
        for i in 0..60 {
            // 60 ticks at 60 Hz = one second; 0.2 s cooldown → 5 shots.
            if sim.tick(&fire, i as f64 / 60.0).shot_fired {
                shots += 1;
            }
        }
        assert_eq!(shots, 5);
    }

    #[test]
    fn contact_costs_a_life_then_grants_immunity() {
        let mut sim = quiet_state(5);
        let center = sim.ship.position;
        parked_rock(&mut sim, center, 30.0);
        let report = sim.tick(&idle(), 0.0);
        assert!(report.ship_lost);
        assert_eq!(sim.lives, sim.config().ship_lives - 1);
        assert!(sim.ship.invulnerable_ticks > 0);
        let report = sim.tick(&idle(), 0.1);
        assert!(!report.ship_lost, "respawn immunity");
    }

    #[test]
    fn last_life_ends_the_game() {
        let mut sim = quiet_state(6);
        sim.lives = 1;
        let center = sim.ship.position;
        parked_rock(&mut sim, center, 30.0);
        sim.tick(&idle(), 0.0);
        assert!(sim.game_over);
        let frozen = sim.ship.position;
        let thrust = ShipIntents {
            thrust: true,
            fire: true,
            ..Default::default()
        };
        let report = sim.tick(&thrust, 1.0);
        assert_eq!(sim.ship.position, frozen);
        assert!(!report.shot_fired);
    }

    #[test]
    fn pulse_is_gated_by_cooldown_across_ticks() {
        let mut sim = quiet_state(7);
        parked_rock(&mut sim, Vec2::new(60.0, 60.0), 30.0);
        let pulse = ShipIntents {
            gravity_pulse: true,
            ..Default::default()
        };
        assert!(sim.tick(&pulse, 5.0).pulse.is_some());
        assert!(sim.tick(&pulse, 6.0).pulse.is_none());
        assert!(sim.tick(&pulse, 8.0).pulse.is_some());
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let mut sim = quiet_state(9);
        sim.score = 320;
        sim.level = 3;
        sim.lives = 1;
        sim.game_over = true;
        sim.reset();
        assert_eq!(sim.score, 0);
        assert_eq!(sim.level, 1);
        assert_eq!(sim.lives, sim.config().ship_lives);
        assert!(!sim.game_over);
        assert_eq!(sim.asteroids.len(), sim.config().asteroids_at_level_start);
        assert_eq!(sim.fire_control.last_shot_time, None);
        assert_eq!(sim.pulse.last_pulse_time, None);
    }

    #[test]
    fn restart_applies_the_new_config() {
        let mut sim = quiet_state(10);
        let config = GameConfig {
            asteroids_at_level_start: 6,
            ..GameConfig::default()
        };
        sim.restart(config);
        assert_eq!(sim.asteroids.len(), 6);
        assert_eq!(sim.config().asteroids_at_level_start, 6);
    }

    #[test]
    fn restart_resets_progress() {
        let mut sim = quiet_state(8);
        sim.score = 500;
        sim.level = 4;
        sim.restart(GameConfig::default());
        assert_eq!(sim.score, 0);
        assert_eq!(sim.level, 1);
        assert_eq!(sim.asteroids.len(), sim.config().asteroids_at_level_start);
    }
}
