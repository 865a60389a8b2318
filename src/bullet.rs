//! Bullets: fire-rate limiting, travel and range expiry.

use crate::config::GameConfig;
use crate::geometry::wrap_at_edge;
use crate::ship::Ship;
use bevy::math::Vec2;

/// A projectile.  Removed once `distance_traveled >= max_distance` or on its
/// first asteroid hit; bullets never pierce.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Cumulative path length; only ever grows.
    pub distance_traveled: f32,
    pub max_distance: f32,
    /// Wall-clock fire time (seconds).
    pub shot_time: f64,
    /// Gap since the previous accepted shot; `None` for the first shot.
    pub delta_shot_time: Option<f64>,
}

impl Bullet {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        max_distance: f32,
        shot_time: f64,
        delta_shot_time: Option<f64>,
    ) -> Self {
        debug_assert!(position.is_finite(), "bullet position must be finite");
        Self {
            position,
            velocity,
            distance_traveled: 0.0,
            max_distance,
            shot_time,
            delta_shot_time,
        }
    }

    pub fn expired(&self) -> bool {
        self.distance_traveled >= self.max_distance
    }
}

/// Enforces the minimum wall-clock interval between consecutive shots and
/// remembers when the last accepted shot left the ship.
#[derive(Debug, Clone, Default)]
pub struct FireControl {
    pub last_shot_time: Option<f64>,
}

impl FireControl {
    /// Fire from the ship's nose if the cooldown has elapsed.
    ///
    /// Rejected attempts leave `last_shot_time` untouched, so holding fire
    /// does not reset the snipe pause.
    pub fn try_fire(&mut self, ship: &Ship, config: &GameConfig, now: f64) -> Option<Bullet> {
        if let Some(last) = self.last_shot_time {
            if now - last < config.shoot_cooldown_secs {
                return None;
            }
        }
        let delta = self.last_shot_time.map(|last| now - last);
        self.last_shot_time = Some(now);

        let heading = ship.heading();
        Some(Bullet::new(
            ship.position + heading * config.ship_radius,
            heading * config.bullet_speed,
            config.bullet_max_distance(),
            now,
            delta,
        ))
    }
}

/// Move every bullet one tick, wrap exactly at the field edge, and drop the
/// ones that have used up their range (move-then-filter).
pub fn update_bullets(bullets: &mut Vec<Bullet>, config: &GameConfig) {
    for bullet in bullets.iter_mut() {
        bullet.position += bullet.velocity;
        bullet.distance_traveled += bullet.velocity.length();
        bullet.position.x = wrap_at_edge(bullet.position.x, config.field_width);
        bullet.position.y = wrap_at_edge(bullet.position.y, config.field_height);
    }
    bullets.retain(|b| !b.expired());
}
