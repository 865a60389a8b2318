//! Asteroid value type, spawn factory and per-tick motion.
//!
//! An asteroid is physically a circle of [`Asteroid::radius`]; the jagged
//! outline built from `offsets` is cosmetic and never used for collision.
//! [`Asteroid::area`] is the quantity the fragmentation engine conserves.

use crate::config::GameConfig;
use crate::geometry::{polar_from_velocity, uniform, velocity_from_polar, wrap_with_margin};
use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// A drifting polygonal rock.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub position: Vec2,
    /// Heading of the velocity (radians).
    pub angle: f32,
    /// Velocity magnitude per tick.
    pub speed: f32,
    /// Drawn and collision radius.
    pub radius: f32,
    /// Base radius at creation; drives score and explosion weighting.
    pub target_radius: f32,
    /// `π · target_radius²`.
    pub area: f32,
    pub vertex_count: usize,
    /// One radial scale per outline vertex.
    pub offsets: Vec<f32>,
}

impl Asteroid {
    /// Build an asteroid with a fresh random silhouette.
    pub fn new<R: Rng + ?Sized>(
        position: Vec2,
        angle: f32,
        speed: f32,
        target_radius: f32,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        debug_assert!(target_radius > 0.0, "asteroid radius must be positive");
        debug_assert!(position.is_finite(), "asteroid position must be finite");
        let offsets = random_silhouette(config, rng);
        Self {
            position,
            angle,
            speed,
            radius: target_radius,
            target_radius,
            area: PI * target_radius * target_radius,
            vertex_count: offsets.len(),
            offsets,
        }
    }

    /// Cartesian velocity per tick.
    pub fn velocity(&self) -> Vec2 {
        velocity_from_polar(self.angle, self.speed)
    }

    /// Replace the velocity, storing it back in polar form.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        (self.angle, self.speed) = polar_from_velocity(velocity);
    }

    /// World-space outline vertices for the renderer.
    pub fn outline(&self) -> Vec<Vec2> {
        let n = self.offsets.len();
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| {
                let theta = TAU * i as f32 / n as f32;
                self.position + Vec2::new(theta.cos(), theta.sin()) * self.radius * offset
            })
            .collect()
    }

    /// Point-in-circle test used by the collision resolver.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }
}

/// Random per-vertex offsets: count in `[min_vertex_count, max_vertex_count]`,
/// each offset in `[min_vertex_offset, max_vertex_offset]`.
pub fn random_silhouette<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<f32> {
    let count = rng.gen_range(config.min_vertex_count..=config.max_vertex_count);
    (0..count)
        .map(|_| uniform(rng, config.min_vertex_offset, config.max_vertex_offset))
        .collect()
}

/// Spawn a fresh asteroid just outside a random field edge, heading inwards.
///
/// | Edge   | Spawn point                                   |
/// |--------|-----------------------------------------------|
/// | top    | random x, `-offset · height`                  |
/// | right  | `width + offset · width`, random y            |
/// | bottom | random x, `height + offset · height`          |
/// | left   | `-offset · width`, random y                   |
///
/// The heading aims at a random point inside the field, jittered by up to
/// `spawn_aim_jitter` either way.
pub fn spawn_asteroid<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Asteroid {
    let w = config.field_width;
    let h = config.field_height;
    let off = config.spawn_edge_offset;

    let position = match rng.gen_range(0..4) {
        0 => Vec2::new(uniform(rng, 0.0, w), -off * h),
        1 => Vec2::new(w + off * w, uniform(rng, 0.0, h)),
        2 => Vec2::new(uniform(rng, 0.0, w), h + off * h),
        _ => Vec2::new(-off * w, uniform(rng, 0.0, h)),
    };

    let aim = Vec2::new(uniform(rng, 0.0, w), uniform(rng, 0.0, h));
    let to_aim = aim - position;
    let jitter = uniform(rng, -config.spawn_aim_jitter, config.spawn_aim_jitter);
    let angle = to_aim.y.atan2(to_aim.x) + jitter;

    let target_radius = uniform(rng, config.min_asteroid_radius, config.max_asteroid_radius);
    let speed = uniform(rng, config.asteroid_min_speed, config.asteroid_max_speed);

    Asteroid::new(position, angle, speed, target_radius, config, rng)
}

/// Integrate every asteroid one tick and apply margin-delayed wraparound.
pub fn update_asteroids(asteroids: &mut [Asteroid], config: &GameConfig) {
    for asteroid in asteroids.iter_mut() {
        asteroid.position += asteroid.velocity();
        asteroid.position.x =
            wrap_with_margin(asteroid.position.x, config.field_width, config.outer_margin);
        asteroid.position.y =
            wrap_with_margin(asteroid.position.y, config.field_height, config.outer_margin);
    }
}
