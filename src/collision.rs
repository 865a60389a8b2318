//! Bullet–asteroid collisions and hit scoring.
//!
//! ## Resolution rules
//!
//! - Bullets are points; asteroids are circles of [`Asteroid::radius`].
//! - Each bullet destroys at most one asteroid per tick and is consumed by it.
//! - Asteroids are scanned most-recent-first.
//! - Fragments are appended only after every bullet has been checked, so debris
//!   born this tick can never be hit in the same tick.
//!
//! ## Score
//!
//! | Asteroid radius | Base score |
//! |-----------------|------------|
//! | 12 (smallest)   | 100        |
//! | 70 (largest)    | 10         |
//!
//! Linear in between.  A *snipe* (bullet covered a quarter of its range after
//! more than a one-second pause since the previous shot) multiplies the base by
//! `round(2 · traveled / (0.25 · max_distance))`.

use crate::asteroid::Asteroid;
use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::fragmentation::fragment_asteroid;
use crate::particles::{spawn_explosion, Spark};
use crate::snippet::{create_snippet, Snippet, SnippetOptions};
use bevy::math::Vec2;
use rand::Rng;

/// Points awarded for one hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitScore {
    pub base: u32,
    pub multiplier: u32,
    pub total: u32,
    /// `"SNIPE (base×multiplier)"` when the multiplier exceeds 1.
    pub label: Option<String>,
}

/// One resolved bullet hit.
#[derive(Debug, Clone, PartialEq)]
pub struct HitReport {
    /// Bullet position at impact.
    pub position: Vec2,
    pub score: HitScore,
    pub fragments: usize,
}

/// Whether `bullet` qualifies for the snipe multiplier.
pub fn is_snipe(bullet: &Bullet, config: &GameConfig) -> bool {
    let snipe_distance = config.snipe_distance_fraction * bullet.max_distance;
    let paused = bullet
        .delta_shot_time
        .is_some_and(|delta| delta > config.snipe_min_pause_secs);
    bullet.distance_traveled >= snipe_distance && paused
}

pub fn compute_score_for_hit(
    bullet: &Bullet,
    asteroid: &Asteroid,
    config: &GameConfig,
) -> HitScore {
    let span = config.max_asteroid_radius - config.min_asteroid_radius;
    let t = (asteroid.target_radius - config.min_asteroid_radius) / span;
    let base = (config.max_hit_score - t * (config.max_hit_score - config.min_hit_score))
        .round()
        .max(0.0) as u32;

    let multiplier = if is_snipe(bullet, config) {
        let snipe_distance = config.snipe_distance_fraction * bullet.max_distance;
        (config.snipe_multiplier_base * bullet.distance_traveled / snipe_distance)
            .round()
            .max(1.0) as u32
    } else {
        1
    };

    let label = (multiplier > 1).then(|| format!("SNIPE ({}×{})", base, multiplier));
    HitScore {
        base,
        multiplier,
        total: base * multiplier,
        label,
    }
}

/// Explode and fragment `asteroid` as if struck at `impact` by something moving
/// at `impact_velocity`.  Sparks go to `sparks`; the debris is returned.
pub fn shatter<R: Rng + ?Sized>(
    impact: Vec2,
    impact_velocity: Vec2,
    asteroid: &Asteroid,
    sparks: &mut Vec<Spark>,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<Asteroid> {
    spawn_explosion(impact, impact_velocity, asteroid, sparks, config, rng);
    fragment_asteroid(impact_velocity, asteroid, config, rng)
}

/// Resolve every bullet against the live asteroids.
///
/// Consumed bullets and destroyed asteroids are removed, fragments are
/// appended to `asteroids`, and each hit adds sparks and a score snippet.
pub fn resolve_bullet_hits<R: Rng + ?Sized>(
    bullets: &mut Vec<Bullet>,
    asteroids: &mut Vec<Asteroid>,
    sparks: &mut Vec<Spark>,
    snippets: &mut Vec<Snippet>,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<HitReport> {
    let mut hits = Vec::new();
    if bullets.is_empty() || asteroids.is_empty() {
        return hits;
    }

    let mut bullet_spent = vec![false; bullets.len()];
    let mut asteroid_alive = vec![true; asteroids.len()];
    let mut debris: Vec<Asteroid> = Vec::new();

    for (bullet_index, bullet) in bullets.iter().enumerate() {
        for asteroid_index in (0..asteroids.len()).rev() {
            if !asteroid_alive[asteroid_index] {
                continue;
            }
            let asteroid = &asteroids[asteroid_index];
            if !asteroid.contains(bullet.position) {
                continue;
            }

            bullet_spent[bullet_index] = true;
            asteroid_alive[asteroid_index] = false;

            let score = compute_score_for_hit(bullet, asteroid, config);
            let fragments =
                shatter(bullet.position, bullet.velocity, asteroid, sparks, config, rng);

            let text = score
                .label
                .clone()
                .unwrap_or_else(|| format!("+{}", score.total));
            snippets.push(create_snippet(
                &text,
                bullet.position,
                SnippetOptions::default(),
                config,
            ));

            hits.push(HitReport {
                position: bullet.position,
                score,
                fragments: fragments.len(),
            });
            debris.extend(fragments);
            break;
        }
    }

    let mut index = 0;
    bullets.retain(|_| {
        let keep = !bullet_spent[index];
        index += 1;
        keep
    });
    let mut index = 0;
    asteroids.retain(|_| {
        let keep = asteroid_alive[index];
        index += 1;
        keep
    });
    asteroids.extend(debris);

    hits
}
