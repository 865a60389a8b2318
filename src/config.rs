//! Game tuning loaded from `assets/game.toml`.
//!
//! [`GameConfig`] carries one field per value in [`crate::constants`] and is
//! inserted as a Bevy [`Resource`].  The [`load_game_config`] startup system
//! replaces it with the file contents when `assets/game.toml` exists; keys the
//! file leaves out keep their compiled values, so an override file only needs
//! the lines it changes.
//!
//! A file that fails to parse or breaks an invariant checked by
//! [`GameConfig::validate`] is reported with `warn!` and ignored.
//!
//! `src/constants.rs` stays the source of `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_ordered, validate_positive, validate_range, SimError, SimResult};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;

/// Default location of the override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable simulation and gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Field ────────────────────────────────────────────────────────────────
    pub field_width: f32,
    pub field_height: f32,
    pub outer_margin: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub min_asteroid_radius: f32,
    pub max_asteroid_radius: f32,
    pub spawn_edge_offset: f32,
    pub spawn_aim_jitter: f32,
    pub asteroid_min_speed: f32,
    pub asteroid_max_speed: f32,
    pub min_vertex_count: usize,
    pub max_vertex_count: usize,
    pub min_vertex_offset: f32,
    pub max_vertex_offset: f32,
    pub asteroids_at_level_start: usize,
    pub asteroids_per_level: usize,

    // ── Fragmentation ────────────────────────────────────────────────────────
    pub fragment_placement_weight: f32,
    pub fragment_parent_weight: f32,
    pub fragment_bullet_weight: f32,
    pub explosion_force_scale: f32,
    pub fragment_speed_boost: f32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_range_fraction: f32,
    pub shoot_cooldown_secs: f64,

    // ── Sparks ───────────────────────────────────────────────────────────────
    pub spark_count: usize,
    pub spark_lifetime: u32,
    pub spark_spread: f32,
    pub spark_min_speed: f32,
    pub spark_max_speed: f32,
    pub mass_weight_exponent: f32,

    // ── Snippets ─────────────────────────────────────────────────────────────
    pub snippet_lifetime: u32,
    pub snippet_start_font_size: f32,
    pub snippet_end_font_size: f32,

    // ── Scoring ──────────────────────────────────────────────────────────────
    pub max_hit_score: f32,
    pub min_hit_score: f32,
    pub snipe_distance_fraction: f32,
    pub snipe_min_pause_secs: f64,
    pub snipe_multiplier_base: f32,

    // ── Gravity pulse ────────────────────────────────────────────────────────
    pub pulse_strength: f32,
    pub pulse_cooldown_secs: f64,
    pub pulse_ship_velocity_share: f32,
    pub pulse_destroy_speed: f32,
    pub pulse_antiparallel_threshold: f32,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_turn_speed: f32,
    pub ship_thrust: f32,
    pub ship_brake_factor: f32,
    pub ship_drag: f32,
    pub ship_radius: f32,
    pub ship_lives: u32,
    pub respawn_invulnerability_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Field
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            outer_margin: OUTER_MARGIN,
            // Asteroids
            min_asteroid_radius: MIN_ASTEROID_RADIUS,
            max_asteroid_radius: MAX_ASTEROID_RADIUS,
            spawn_edge_offset: SPAWN_EDGE_OFFSET,
            spawn_aim_jitter: SPAWN_AIM_JITTER,
            asteroid_min_speed: ASTEROID_MIN_SPEED,
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            min_vertex_count: MIN_VERTEX_COUNT,
            max_vertex_count: MAX_VERTEX_COUNT,
            min_vertex_offset: MIN_VERTEX_OFFSET,
            max_vertex_offset: MAX_VERTEX_OFFSET,
            asteroids_at_level_start: ASTEROIDS_AT_LEVEL_START,
            asteroids_per_level: ASTEROIDS_PER_LEVEL,
            // Fragmentation
            fragment_placement_weight: FRAGMENT_PLACEMENT_WEIGHT,
            fragment_parent_weight: FRAGMENT_PARENT_WEIGHT,
            fragment_bullet_weight: FRAGMENT_BULLET_WEIGHT,
            explosion_force_scale: EXPLOSION_FORCE_SCALE,
            fragment_speed_boost: FRAGMENT_SPEED_BOOST,
            // Bullets
            bullet_speed: BULLET_SPEED,
            bullet_range_fraction: BULLET_RANGE_FRACTION,
            shoot_cooldown_secs: SHOOT_COOLDOWN_SECS,
            // Sparks
            spark_count: SPARK_COUNT,
            spark_lifetime: SPARK_LIFETIME,
            spark_spread: SPARK_SPREAD,
            spark_min_speed: SPARK_MIN_SPEED,
            spark_max_speed: SPARK_MAX_SPEED,
            mass_weight_exponent: MASS_WEIGHT_EXPONENT,
            // Snippets
            snippet_lifetime: SNIPPET_LIFETIME,
            snippet_start_font_size: SNIPPET_START_FONT_SIZE,
            snippet_end_font_size: SNIPPET_END_FONT_SIZE,
            // Scoring
            max_hit_score: MAX_HIT_SCORE,
            min_hit_score: MIN_HIT_SCORE,
            snipe_distance_fraction: SNIPE_DISTANCE_FRACTION,
            snipe_min_pause_secs: SNIPE_MIN_PAUSE_SECS,
            snipe_multiplier_base: SNIPE_MULTIPLIER_BASE,
            // Gravity pulse
            pulse_strength: PULSE_STRENGTH,
            pulse_cooldown_secs: PULSE_COOLDOWN_SECS,
            pulse_ship_velocity_share: PULSE_SHIP_VELOCITY_SHARE,
            pulse_destroy_speed: PULSE_DESTROY_SPEED,
            pulse_antiparallel_threshold: PULSE_ANTIPARALLEL_THRESHOLD,
            // Ship
            ship_turn_speed: SHIP_TURN_SPEED,
            ship_thrust: SHIP_THRUST,
            ship_brake_factor: SHIP_BRAKE_FACTOR,
            ship_drag: SHIP_DRAG,
            ship_radius: SHIP_RADIUS,
            ship_lives: SHIP_LIVES,
            respawn_invulnerability_ticks: RESPAWN_INVULNERABILITY_TICKS,
        }
    }
}

impl GameConfig {
    /// Area of the smallest fragment: `π · min_asteroid_radius²`.
    pub fn smallest_fragment_area(&self) -> f32 {
        PI * self.min_asteroid_radius * self.min_asteroid_radius
    }

    /// Range cap given to every freshly fired bullet.
    pub fn bullet_max_distance(&self) -> f32 {
        self.bullet_range_fraction * self.field_width
    }

    /// Centre of the visible field; the ship spawns here.
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width * 0.5, self.field_height * 0.5)
    }

    /// Number of asteroids spawned at the start of `level` (1-based).
    pub fn asteroid_count_for_level(&self, level: u32) -> usize {
        let extra_levels = level.saturating_sub(1) as usize;
        self.asteroids_at_level_start + extra_levels * self.asteroids_per_level
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> SimResult<()> {
        validate_positive("field_width", self.field_width)?;
        validate_positive("field_height", self.field_height)?;
        validate_range(
            "outer_margin",
            self.outer_margin as f64,
            0.0,
            f64::MAX,
            "[0.0, ∞)",
        )?;
        validate_positive("min_asteroid_radius", self.min_asteroid_radius)?;
        validate_ordered(
            "min_asteroid_radius",
            self.min_asteroid_radius,
            self.max_asteroid_radius,
        )?;
        // The score and mass formulas divide by the radius span.
        if self.max_asteroid_radius <= self.min_asteroid_radius {
            return Err(SimError::UnsafeConstant {
                name: "max_asteroid_radius",
                value: self.max_asteroid_radius as f64,
                safe_range: "> min_asteroid_radius",
            });
        }
        validate_ordered(
            "asteroid_min_speed",
            self.asteroid_min_speed,
            self.asteroid_max_speed,
        )?;
        validate_ordered(
            "min_vertex_count",
            self.min_vertex_count as f32,
            self.max_vertex_count as f32,
        )?;
        validate_range(
            "min_vertex_count",
            self.min_vertex_count as f64,
            3.0,
            f64::MAX,
            "[3, ∞)",
        )?;
        validate_ordered(
            "min_vertex_offset",
            self.min_vertex_offset,
            self.max_vertex_offset,
        )?;
        validate_positive("bullet_speed", self.bullet_speed)?;
        validate_positive("bullet_range_fraction", self.bullet_range_fraction)?;
        validate_range(
            "shoot_cooldown_secs",
            self.shoot_cooldown_secs,
            0.1,
            0.3,
            "[0.1, 0.3]",
        )?;
        validate_range(
            "spark_lifetime",
            self.spark_lifetime as f64,
            1.0,
            f64::MAX,
            "[1, ∞)",
        )?;
        validate_ordered("spark_min_speed", self.spark_min_speed, self.spark_max_speed)?;
        validate_range(
            "snippet_lifetime",
            self.snippet_lifetime as f64,
            1.0,
            f64::MAX,
            "[1, ∞)",
        )?;
        validate_positive("snipe_distance_fraction", self.snipe_distance_fraction)?;
        validate_positive("pulse_strength", self.pulse_strength)?;
        validate_range(
            "ship_brake_factor",
            self.ship_brake_factor as f64,
            0.0,
            1.0,
            "[0.0, 1.0]",
        )?;
        validate_range("ship_drag", self.ship_drag as f64, 0.0, 1.0, "[0.0, 1.0]")?;
        Ok(())
    }

    /// Parse and validate a TOML document.  `origin` only labels errors.
    pub fn from_toml_str(origin: &str, contents: &str) -> SimResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| SimError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`.  `Ok(None)` when the file does not exist.
    pub fn load_from_path(path: impl AsRef<Path>) -> SimResult<Option<Self>> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SimError::ConfigRead { path: label, source }),
        };
        Self::from_toml_str(&label, &contents).map(Some)
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Parse and validation errors are logged but do not abort the game.  A
/// missing file is not an error (defaults are already in place).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match GameConfig::load_from_path(CONFIG_PATH) {
        Ok(Some(loaded)) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Ok(None) => info!("No {CONFIG_PATH} found; using compiled defaults"),
        Err(e) => warn!("{e}; using defaults"),
    }
}
