//! Centralised simulation and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::GameConfig::default`] mirrors every
//! constant; `assets/game.toml` can override any subset at startup.
//!
//! Units: distances are world units, velocities are world units per tick,
//! lifetimes are ticks, cooldowns are wall-clock seconds.

use std::f32::consts::PI;

// ── Field ─────────────────────────────────────────────────────────────────────

/// Width of the visible play field.
pub const FIELD_WIDTH: f32 = 1024.0;

/// Height of the visible play field.
pub const FIELD_HEIGHT: f32 = 768.0;

/// Extra band beyond every field edge an asteroid must cross before it wraps.
///
/// Lets a rock fully leave view before it reappears on the opposite side.
/// Bullets and the ship ignore this and wrap exactly at the edge.
pub const OUTER_MARGIN: f32 = 50.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Smallest spawn radius.  Also the radius of the smallest legal fragment.
pub const MIN_ASTEROID_RADIUS: f32 = 12.0;

/// Largest spawn radius.
pub const MAX_ASTEROID_RADIUS: f32 = 70.0;

/// Fraction of the field dimension beyond an edge where new asteroids appear.
pub const SPAWN_EDGE_OFFSET: f32 = 0.25;

/// Maximum perturbation (radians) applied to a fresh asteroid's aim.  ±15°.
pub const SPAWN_AIM_JITTER: f32 = 15.0 * PI / 180.0;

pub const ASTEROID_MIN_SPEED: f32 = 1.0;
pub const ASTEROID_MAX_SPEED: f32 = 3.0;

/// Inclusive silhouette vertex-count range.
pub const MIN_VERTEX_COUNT: usize = 8;
pub const MAX_VERTEX_COUNT: usize = 12;

/// Per-vertex radial jitter range for the silhouette.  Cosmetic only.
pub const MIN_VERTEX_OFFSET: f32 = 0.8;
pub const MAX_VERTEX_OFFSET: f32 = 1.2;

/// Asteroids at level 1.
pub const ASTEROIDS_AT_LEVEL_START: usize = 4;

/// Extra asteroids added per level after the first.
pub const ASTEROIDS_PER_LEVEL: usize = 1;

// ── Fragmentation ─────────────────────────────────────────────────────────────

/// Weight of the unit vector from parent centre to fragment centre.
pub const FRAGMENT_PLACEMENT_WEIGHT: f32 = 2.0;

/// Weight of the parent's own velocity in a fragment's velocity.
pub const FRAGMENT_PARENT_WEIGHT: f32 = 1.0;

/// Weight of the destroying bullet's velocity in a fragment's velocity.
pub const FRAGMENT_BULLET_WEIGHT: f32 = 0.2;

/// Global scale applied to the weighted fragment velocity sum.
pub const EXPLOSION_FORCE_SCALE: f32 = 0.5;

/// Upper bound of the random extra speed given to each fragment (0–50 %).
pub const FRAGMENT_SPEED_BOOST: f32 = 0.5;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Bullet speed per tick.
pub const BULLET_SPEED: f32 = 7.0;

/// Bullet range as a fraction of the field width.
pub const BULLET_RANGE_FRACTION: f32 = 0.6;

/// Minimum wall-clock gap between accepted shots.
///
/// Tested range: 0.1–0.3 s.  Lower values make spam-fire dominate and the
/// snipe bonus irrelevant.
pub const SHOOT_COOLDOWN_SECS: f64 = 0.2;

// ── Sparks ────────────────────────────────────────────────────────────────────

/// Sparks emitted per explosion.
pub const SPARK_COUNT: usize = 10;

/// Ticks a spark lives.
pub const SPARK_LIFETIME: u32 = 50;

/// Half-width of the random spread around the blended explosion angle.  ±30°.
pub const SPARK_SPREAD: f32 = 30.0 * PI / 180.0;

pub const SPARK_MIN_SPEED: f32 = 1.0;
pub const SPARK_MAX_SPEED: f32 = 3.0;

/// Exponent applied to the normalised asteroid mass when blending bullet and
/// asteroid momentum.  Higher values let only the largest rocks dominate.
pub const MASS_WEIGHT_EXPONENT: f32 = 1.5;

// ── Snippets ──────────────────────────────────────────────────────────────────

pub const SNIPPET_LIFETIME: u32 = 60;
pub const SNIPPET_START_FONT_SIZE: f32 = 12.0;
pub const SNIPPET_END_FONT_SIZE: f32 = 24.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Score for the smallest asteroid.
pub const MAX_HIT_SCORE: f32 = 100.0;

/// Score for the largest asteroid.
pub const MIN_HIT_SCORE: f32 = 10.0;

/// Fraction of the bullet's range it must cover before a hit can be a snipe.
pub const SNIPE_DISTANCE_FRACTION: f32 = 0.25;

/// Pause since the previous shot required for a snipe (seconds, strict).
pub const SNIPE_MIN_PAUSE_SECS: f64 = 1.0;

/// Multiplier base: `round(base × traveled / snipe_distance)`.
pub const SNIPE_MULTIPLIER_BASE: f32 = 2.0;

// ── Gravity pulse ─────────────────────────────────────────────────────────────

/// Numerator of the inverse-distance push: `strength / distance`.
pub const PULSE_STRENGTH: f32 = 180.0;

pub const PULSE_COOLDOWN_SECS: f64 = 3.0;

/// Share of the ship's velocity added to every pushed asteroid.
pub const PULSE_SHIP_VELOCITY_SHARE: f32 = 0.5;

/// Candidate speed above which a pushed asteroid shatters instead.
pub const PULSE_DESTROY_SPEED: f32 = 10.0;

/// Dot product of old velocity and push below which the asteroid shatters.
pub const PULSE_ANTIPARALLEL_THRESHOLD: f32 = -1.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Radians turned per tick while a turn intent is held.
pub const SHIP_TURN_SPEED: f32 = 0.08;

/// Acceleration per tick while thrusting.
pub const SHIP_THRUST: f32 = 0.12;

/// Velocity factor applied per tick while braking.
pub const SHIP_BRAKE_FACTOR: f32 = 0.92;

/// Passive velocity decay per tick.
pub const SHIP_DRAG: f32 = 0.995;

/// Collision radius; also the nose distance bullets spawn at.
pub const SHIP_RADIUS: f32 = 12.0;

pub const SHIP_LIVES: u32 = 3;

/// Ticks of immunity to asteroid contact after a respawn.
pub const RESPAWN_INVULNERABILITY_TICKS: u32 = 120;
