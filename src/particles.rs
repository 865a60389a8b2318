//! Explosion sparks and the momentum blend that aims them.
//!
//! ## Design
//!
//! Sparks are plain values in a caller-owned `Vec<Spark>`.  Two functions
//! handle them:
//!
//! | Function           | When                     | Purpose                                  |
//! |--------------------|--------------------------|------------------------------------------|
//! | [`spawn_explosion`] | asteroid destroyed      | Append `spark_count` sparks at the impact |
//! | [`update_sparks`]  | every tick               | Move, age, and drop expired sparks       |
//!
//! The explosion direction comes from [`momentum_blend_angle`]: large rocks
//! push the debris cloud along their own heading, small rocks are swept along
//! by the bullet.

use crate::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::geometry::{uniform, velocity_from_polar};
use bevy::math::Vec2;
use rand::Rng;

/// Short-lived explosion particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Ticks since creation.
    pub age: u32,
}

impl Spark {
    /// Linear fade for the renderer: 1 at birth, 0 at `lifetime`.
    pub fn fade(&self, lifetime: u32) -> f32 {
        1.0 - (self.age as f32 / lifetime as f32).min(1.0)
    }
}

// ── Momentum blend ────────────────────────────────────────────────────────────

/// Weight of the asteroid's own momentum in the blend: `normalized_mass ^ exponent`.
///
/// `normalized_mass` is deliberately unclamped, so rocks above the declared
/// maximum weigh more than 1.  A rock below the minimum would raise a negative
/// base to a fractional power; that NaN becomes weight 0.
pub fn momentum_weight(target_radius: f32, config: &GameConfig) -> f32 {
    let span = config.max_asteroid_radius - config.min_asteroid_radius;
    let normalized_mass = (target_radius - config.min_asteroid_radius) / span;
    let weight = normalized_mass.powf(config.mass_weight_exponent);
    if weight.is_nan() {
        0.0
    } else {
        weight
    }
}

/// Base explosion angle from the blended bullet and asteroid velocities.
pub fn momentum_blend_angle(
    bullet_velocity: Vec2,
    asteroid: &Asteroid,
    config: &GameConfig,
) -> f32 {
    let weight = momentum_weight(asteroid.target_radius, config);
    let blended = bullet_velocity * (1.0 - weight) + asteroid.velocity() * weight;
    blended.y.atan2(blended.x)
}

// ── Spawn / update ────────────────────────────────────────────────────────────

/// Append exactly `config.spark_count` sparks at `origin` to `sparks`.
///
/// Each spark heads along the momentum-blend angle plus a uniform spread of
/// `±spark_spread`, at a speed uniform in `[spark_min_speed, spark_max_speed]`.
pub fn spawn_explosion<R: Rng + ?Sized>(
    origin: Vec2,
    bullet_velocity: Vec2,
    asteroid: &Asteroid,
    sparks: &mut Vec<Spark>,
    config: &GameConfig,
    rng: &mut R,
) {
    let base_angle = momentum_blend_angle(bullet_velocity, asteroid, config);
    sparks.reserve(config.spark_count);
    for _ in 0..config.spark_count {
        let angle = base_angle + uniform(rng, -config.spark_spread, config.spark_spread);
        let speed = uniform(rng, config.spark_min_speed, config.spark_max_speed);
        sparks.push(Spark {
            position: origin,
            velocity: velocity_from_polar(angle, speed),
            age: 0,
        });
    }
}

/// Advance all sparks one tick and drop those that reached `spark_lifetime`.
pub fn update_sparks(sparks: &mut Vec<Spark>, config: &GameConfig) {
    for spark in sparks.iter_mut() {
        spark.position += spark.velocity;
        spark.age += 1;
    }
    sparks.retain(|s| s.age < config.spark_lifetime);
}
