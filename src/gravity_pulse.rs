//! Gravity pulse: a cooldown-gated push that shoves every asteroid away from
//! the ship and shatters the ones that end up too fast or were pushed hard
//! against their own motion.
//!
//! Per asteroid, with `d = asteroid - ship`:
//!
//! ```text
//! push      = unit(d) · strength / |d|
//! candidate = push + share · ship_v + asteroid_v
//! shatter   if |candidate| > destroy_speed  or  asteroid_v · push < threshold
//! ```
//!
//! Shattering behaves like a zero-range hit at the asteroid's own position
//! moving at `candidate`, except that it awards no points.

use crate::asteroid::Asteroid;
use crate::collision::shatter;
use crate::config::GameConfig;
use crate::particles::Spark;
use crate::ship::Ship;
use bevy::prelude::*;
use rand::Rng;

/// What one pulse did to the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PulseOutcome {
    pub pushed: usize,
    pub shattered: usize,
    pub fragments: usize,
}

/// Wall-clock cooldown for the pulse.
#[derive(Debug, Clone, Default)]
pub struct GravityPulse {
    pub last_pulse_time: Option<f64>,
}

impl GravityPulse {
    pub fn ready(&self, now: f64, config: &GameConfig) -> bool {
        self.last_pulse_time
            .map_or(true, |last| now - last >= config.pulse_cooldown_secs)
    }

    /// Fire the pulse if off cooldown.  `None` while cooling down.
    pub fn trigger<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        ship: &Ship,
        asteroids: &mut Vec<Asteroid>,
        sparks: &mut Vec<Spark>,
        config: &GameConfig,
        rng: &mut R,
    ) -> Option<PulseOutcome> {
        if !self.ready(now, config) {
            return None;
        }
        self.last_pulse_time = Some(now);
        Some(apply_gravity_pulse(ship, asteroids, sparks, config, rng))
    }
}

/// Push every asteroid once.  Iterates a snapshot of the field; fragments
/// born here are appended afterwards and are not pushed by this pulse.
pub fn apply_gravity_pulse<R: Rng + ?Sized>(
    ship: &Ship,
    asteroids: &mut Vec<Asteroid>,
    sparks: &mut Vec<Spark>,
    config: &GameConfig,
    rng: &mut R,
) -> PulseOutcome {
    let mut outcome = PulseOutcome::default();
    let snapshot = std::mem::take(asteroids);
    let mut debris = Vec::new();
    asteroids.reserve(snapshot.len());

    for mut asteroid in snapshot {
        let offset = asteroid.position - ship.position;
        let distance = offset.length();
        if distance == 0.0 {
            asteroids.push(asteroid);
            continue;
        }

        let push = offset / distance * (config.pulse_strength / distance);
        let current = asteroid.velocity();
        let candidate = push + ship.velocity * config.pulse_ship_velocity_share + current;

        let too_fast = candidate.length() > config.pulse_destroy_speed;
        let opposed = current.dot(push) < config.pulse_antiparallel_threshold;

        if too_fast || opposed {
            let fragments = shatter(asteroid.position, candidate, &asteroid, sparks, config, rng);
            debug!(
                "pulse shattered asteroid r={:.1} into {} fragments",
                asteroid.target_radius,
                fragments.len()
            );
            outcome.shattered += 1;
            outcome.fragments += fragments.len();
            debris.extend(fragments);
        } else {
            asteroid.set_velocity(candidate);
            outcome.pushed += 1;
            asteroids.push(asteroid);
        }
    }

    asteroids.extend(debris);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rock(position: Vec2, angle: f32, speed: f32, radius: f32) -> Asteroid {
        let mut rng = StdRng::seed_from_u64(31);
        Asteroid::new(position, angle, speed, radius, &GameConfig::default(), &mut rng)
    }

    fn parked_ship(config: &GameConfig) -> Ship {
        Ship::new(config)
    }

    #[test]
    fn distant_asteroid_is_pushed_away() {
        let config = GameConfig::default();
        let ship = parked_ship(&config);
        let mut rng = StdRng::seed_from_u64(1);
        let mut asteroids = vec![rock(ship.position + Vec2::new(90.0, 0.0), 0.0, 0.0, 30.0)];
        let mut sparks = Vec::new();
        let outcome = apply_gravity_pulse(&ship, &mut asteroids, &mut sparks, &config, &mut rng);
        assert_eq!(outcome.pushed, 1);
        assert_eq!(asteroids.len(), 1);
        // 180 / 90 = 2 units per tick along +x.
        assert!((asteroids[0].speed - 2.0).abs() < 1e-4);
        assert!(asteroids[0].angle.abs() < 1e-5);
        assert!(sparks.is_empty());
    }

    #[test]
    fn close_asteroid_is_shattered_without_points() {
        let config = GameConfig::default();
        let ship = parked_ship(&config);
        let mut rng = StdRng::seed_from_u64(2);
        // 180 / 10 = 18 > 10 → shatter.
        let mut asteroids = vec![rock(ship.position + Vec2::new(10.0, 0.0), 0.0, 0.0, 60.0)];
        let mut sparks = Vec::new();
        let outcome = apply_gravity_pulse(&ship, &mut asteroids, &mut sparks, &config, &mut rng);
        assert_eq!(outcome.shattered, 1);
        assert_eq!(asteroids.len(), outcome.fragments);
        assert_eq!(sparks.len(), config.spark_count);
    }

    #[test]
    fn strongly_opposed_asteroid_is_shattered() {
        let config = GameConfig::default();
        let ship = parked_ship(&config);
        let mut rng = StdRng::seed_from_u64(3);
        // Push 180/200 = 0.9 along +x; rock moves at 3 along -x → dot = -2.7.
        let mut asteroids = vec![rock(
            ship.position + Vec2::new(200.0, 0.0),
            std::f32::consts::PI,
            3.0,
            20.0,
        )];
        let mut sparks = Vec::new();
        let outcome = apply_gravity_pulse(&ship, &mut asteroids, &mut sparks, &config, &mut rng);
        assert_eq!(outcome.shattered, 1);
        assert_eq!(outcome.pushed, 0);
    }

    #[test]
    fn asteroid_on_top_of_ship_is_skipped() {
        let config = GameConfig::default();
        let ship = parked_ship(&config);
        let mut rng = StdRng::seed_from_u64(4);
        let original = rock(ship.position, 1.0, 2.0, 30.0);
        let mut asteroids = vec![original.clone()];
        let mut sparks = Vec::new();
        let outcome = apply_gravity_pulse(&ship, &mut asteroids, &mut sparks, &config, &mut rng);
        assert_eq!(outcome, PulseOutcome::default());
        assert_eq!(asteroids, vec![original]);
    }

    #[test]
    fn ship_velocity_is_shared() {
        let config = GameConfig::default();
        let mut ship = parked_ship(&config);
        ship.velocity = Vec2::new(0.0, 2.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut asteroids = vec![rock(ship.position + Vec2::new(180.0, 0.0), 0.0, 0.0, 30.0)];
        let mut sparks = Vec::new();
        apply_gravity_pulse(&ship, &mut asteroids, &mut sparks, &config, &mut rng);
        let v = asteroids[0].velocity();
        assert!((v - Vec2::new(1.0, 1.0)).length() < 1e-4, "got {v:?}");
    }

    #[test]
    fn cooldown_gates_the_trigger() {
        let config = GameConfig::default();
        let ship = parked_ship(&config);
        let mut rng = StdRng::seed_from_u64(6);
        let mut pulse = GravityPulse::default();
        let mut asteroids = Vec::new();
        let mut sparks = Vec::new();
        assert!(pulse
            .trigger(10.0, &ship, &mut asteroids, &mut sparks, &config, &mut rng)
            .is_some());
        assert!(pulse
            .trigger(12.9, &ship, &mut asteroids, &mut sparks, &config, &mut rng)
            .is_none());
        assert!(pulse
            .trigger(13.0, &ship, &mut asteroids, &mut sparks, &config, &mut rng)
            .is_some());
    }
}
