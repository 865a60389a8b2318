//! Player ship: intent-driven integration and asteroid contact.
//!
//! The ship is read by the gravity pulse and the fire control; nothing in the
//! simulation core mutates it except [`Ship::integrate`] and respawns.

use crate::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::geometry::wrap_at_edge;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Boolean intents produced by the input layer each tick.
///
/// `pause_toggle` is an edge: the input layer sets it for one tick per key
/// press and the tick system clears it after consuming it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipIntents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub brake: bool,
    pub fire: bool,
    pub gravity_pulse: bool,
    pub pause_toggle: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians; screen space, so `-π/2` points up.
    pub angle: f32,
    pub radius: f32,
    /// Ticks of remaining immunity to asteroid contact.
    pub invulnerable_ticks: u32,
}

impl Ship {
    /// A stationary ship at the field centre, nose up.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.field_center(),
            velocity: Vec2::ZERO,
            angle: -FRAC_PI_2,
            radius: config.ship_radius,
            invulnerable_ticks: 0,
        }
    }

    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    /// Apply turn/thrust/brake intents, drag, and edge wraparound.
    pub fn integrate(&mut self, intents: &ShipIntents, config: &GameConfig) {
        if intents.turn_left {
            self.angle -= config.ship_turn_speed;
        }
        if intents.turn_right {
            self.angle += config.ship_turn_speed;
        }
        if intents.thrust {
            self.velocity += self.heading() * config.ship_thrust;
        }
        if intents.brake {
            self.velocity *= config.ship_brake_factor;
        }
        self.velocity *= config.ship_drag;

        self.position += self.velocity;
        self.position.x = wrap_at_edge(self.position.x, config.field_width);
        self.position.y = wrap_at_edge(self.position.y, config.field_height);

        self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
    }

    /// Circle–circle contact with any asteroid, ignoring invulnerability.
    pub fn touches_any(&self, asteroids: &[Asteroid]) -> bool {
        asteroids.iter().any(|a| {
            let reach = a.radius + self.radius;
            a.position.distance_squared(self.position) < reach * reach
        })
    }

    /// Recentre after a lost life with temporary immunity.
    pub fn respawn(&mut self, config: &GameConfig) {
        *self = Ship::new(config);
        self.invulnerable_ticks = config.respawn_invulnerability_ticks;
    }
}
