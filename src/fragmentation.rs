//! Area-conserving asteroid fragmentation.
//!
//! A destroyed asteroid is carved into child asteroids drawn from a pool of
//! area initialised to the parent's [`Asteroid::area`]:
//!
//! 1. Draw a candidate area uniformly in
//!    `[smallest, max(smallest, available / 2)]`; stop if it does not fit.
//! 2. Place the fragment at an area-uniform point inside the disc of radius
//!    `parent.radius - fragment_radius`, so it stays within the parent circle.
//! 3. Velocity = `scale · (w_p · unit(offset) + w_a · parent_v + w_b · bullet_v)`,
//!    then boosted by a random 0–50 %.
//! 4. Deduct the area and repeat while at least one more minimum fragment fits.
//!
//! Leftover area below the minimum is discarded, so mass is bounded rather
//! than exactly conserved.
//!
//! | Parent area                  | Result                              |
//! |------------------------------|-------------------------------------|
//! | `< 2 · smallest`             | no fragments (terminal)             |
//! | `≥ 2 · smallest`             | typically 2–5 fragments             |

use crate::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::geometry::{polar_from_velocity, random_point_in_disc, uniform, unit_or_x};
use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::PI;

/// Whether `asteroid` is too small to leave any debris.
pub fn is_terminal(asteroid: &Asteroid, config: &GameConfig) -> bool {
    asteroid.area < 2.0 * config.smallest_fragment_area()
}

/// Split `asteroid` into fragments.  `bullet_velocity` nudges the debris.
pub fn fragment_asteroid<R: Rng + ?Sized>(
    bullet_velocity: Vec2,
    asteroid: &Asteroid,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<Asteroid> {
    debug_assert!(asteroid.area > 0.0, "asteroid area must be positive");
    debug_assert!(asteroid.position.is_finite(), "asteroid position must be finite");

    if is_terminal(asteroid, config) {
        return Vec::new();
    }

    let smallest = config.smallest_fragment_area();
    let parent_velocity = asteroid.velocity();
    let mut available = asteroid.area;
    let mut fragments = Vec::new();

    while available >= smallest {
        let area = uniform(rng, smallest, smallest.max(available / 2.0));
        if area > available {
            break;
        }
        let radius = (area / PI).sqrt();

        let placement_radius = (asteroid.radius - radius).max(0.0);
        let center = random_point_in_disc(rng, asteroid.position, placement_radius);
        let outward = unit_or_x(center - asteroid.position);

        let combined = (outward * config.fragment_placement_weight
            + parent_velocity * config.fragment_parent_weight
            + bullet_velocity * config.fragment_bullet_weight)
            * config.explosion_force_scale;
        let (angle, speed) = polar_from_velocity(combined);
        let speed = speed * (1.0 + rng.gen::<f32>() * config.fragment_speed_boost);

        let mut fragment = Asteroid::new(center, angle, speed, radius, config, rng);
        // Keep the drawn area identical to the deducted one.
        fragment.area = area;
        fragments.push(fragment);

        available -= area;
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parent(radius: f32, rng: &mut StdRng) -> Asteroid {
        Asteroid::new(
            Vec2::new(300.0, 200.0),
            0.7,
            2.0,
            radius,
            &GameConfig::default(),
            rng,
        )
    }

    #[test]
    fn fragment_area_never_exceeds_parent() {
        let config = GameConfig::default();
        let smallest = config.smallest_fragment_area();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let radius = uniform(&mut rng, 12.0, 70.0);
            let p = parent(radius, &mut rng);
            let fragments = fragment_asteroid(Vec2::new(7.0, 0.0), &p, &config, &mut rng);
            let total: f32 = fragments.iter().map(|f| f.area).sum();
            assert!(
                total <= p.area * (1.0 + 1e-5),
                "seed {seed}: fragments {total} exceed parent {}",
                p.area
            );
            for f in &fragments {
                assert!(f.area >= smallest * (1.0 - 1e-5), "seed {seed}: fragment too small");
            }
        }
    }

    #[test]
    fn terminal_asteroid_leaves_no_debris() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        // sqrt(2) * 12 ≈ 16.97 is the terminal boundary.
        for radius in [12.0, 14.0, 16.9] {
            let p = parent(radius, &mut rng);
            assert!(is_terminal(&p, &config));
            assert!(fragment_asteroid(Vec2::ZERO, &p, &config, &mut rng).is_empty());
        }
    }

    #[test]
    fn just_above_terminal_yields_fragments() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let p = parent(17.5, &mut rng);
        assert!(!is_terminal(&p, &config));
        let fragments = fragment_asteroid(Vec2::ZERO, &p, &config, &mut rng);
        assert!(!fragments.is_empty());
    }

    #[test]
    fn fragments_stay_inside_parent_circle() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let p = parent(70.0, &mut rng);
        for f in fragment_asteroid(Vec2::new(0.0, 7.0), &p, &config, &mut rng) {
            let reach = f.position.distance(p.position) + f.radius;
            assert!(reach <= p.radius + 1e-3, "fragment pokes out: {reach}");
        }
    }

    #[test]
    fn fragments_get_fresh_silhouettes() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(4);
        let p = parent(60.0, &mut rng);
        for f in fragment_asteroid(Vec2::ZERO, &p, &config, &mut rng) {
            assert!((8..=12).contains(&f.vertex_count));
            assert_eq!(f.offsets.len(), f.vertex_count);
            assert!((f.radius - f.target_radius).abs() < 1e-6);
        }
    }

    #[test]
    fn fragment_speed_follows_weighted_sum() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = parent(50.0, &mut rng);
        p.speed = 0.0;
        // Only the placement term remains: |0.5 · 2 · unit| = 1, boosted ≤ 50 %.
        for f in fragment_asteroid(Vec2::ZERO, &p, &config, &mut rng) {
            assert!((1.0 - 1e-4..=1.5 + 1e-4).contains(&f.speed), "speed {}", f.speed);
        }
    }

    #[test]
    fn fragment_heading_points_away_from_parent_centre() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut p = parent(60.0, &mut rng);
        p.speed = 0.0;
        for f in fragment_asteroid(Vec2::ZERO, &p, &config, &mut rng) {
            let outward = f.position - p.position;
            if outward.length() < 1e-3 {
                continue;
            }
            let heading = f.velocity().normalize();
            assert!(
                heading.dot(outward.normalize()) > 0.999,
                "fragment at {:?} heads {heading:?}",
                f.position
            );
        }
    }
}
