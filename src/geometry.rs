//! Vector helpers shared by every entity module.
//!
//! Asteroids keep their velocity in polar form (angle + speed) while bullets,
//! sparks and snippets use a cartesian [`Vec2`]; the conversions live here.

use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Polar → cartesian velocity.
pub fn velocity_from_polar(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed
}

/// Cartesian → polar velocity as `(angle, speed)`.
pub fn polar_from_velocity(velocity: Vec2) -> (f32, f32) {
    (velocity.y.atan2(velocity.x), velocity.length())
}

/// Unit vector along `v`, or `(1, 0)` when `v` has no usable direction.
pub fn unit_or_x(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        Vec2::X
    }
}

/// Uniform draw in `[low, high)`; returns `low` when the interval is empty.
///
/// Unlike `Rng::gen_range` this tolerates `low == high`, which the
/// fragmentation loop hits whenever the remaining area is exactly two minimum
/// fragments.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + rng.gen::<f32>() * (high - low)
}

/// Area-uniform random point inside a disc of `radius` around `center`.
pub fn random_point_in_disc<R: Rng + ?Sized>(rng: &mut R, center: Vec2, radius: f32) -> Vec2 {
    let r = rng.gen::<f32>().sqrt() * radius;
    let theta = rng.gen::<f32>() * TAU;
    center + Vec2::new(theta.cos(), theta.sin()) * r
}

/// Wrap `value` into `[-margin, extent + margin]`, teleporting to the far side.
pub fn wrap_with_margin(value: f32, extent: f32, margin: f32) -> f32 {
    if value > extent + margin {
        -margin
    } else if value < -margin {
        extent + margin
    } else {
        value
    }
}

/// Wrap `value` exactly at the field edge, preserving the overshoot.
pub fn wrap_at_edge(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        value + extent
    } else if value > extent {
        value - extent
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn polar_round_trip() {
        let v = velocity_from_polar(FRAC_PI_2, 3.0);
        assert!(v.x.abs() < 1e-5 && (v.y - 3.0).abs() < 1e-5);
        let (angle, speed) = polar_from_velocity(v);
        assert!((angle - FRAC_PI_2).abs() < 1e-5);
        assert!((speed - 3.0).abs() < 1e-5);
    }

    #[test]
    fn unit_of_zero_falls_back_to_x() {
        assert_eq!(unit_or_x(Vec2::ZERO), Vec2::X);
        assert_eq!(unit_or_x(Vec2::new(0.0, -4.0)), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn uniform_tolerates_empty_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 5.0, 5.0), 5.0);
    }

    #[test]
    fn disc_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Vec2::new(10.0, -3.0);
        for _ in 0..500 {
            let p = random_point_in_disc(&mut rng, center, 25.0);
            assert!(p.distance(center) <= 25.0 + 1e-4);
        }
    }

    #[test]
    fn zero_radius_disc_is_the_center() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = random_point_in_disc(&mut rng, Vec2::new(4.0, 4.0), 0.0);
        assert_eq!(p, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn margin_wrap_teleports_past_the_margin() {
        assert_eq!(wrap_with_margin(1024.0 + 51.0, 1024.0, 50.0), -50.0);
        assert_eq!(wrap_with_margin(-51.0, 1024.0, 50.0), 1074.0);
        assert_eq!(wrap_with_margin(1060.0, 1024.0, 50.0), 1060.0, "inside margin stays");
    }

    #[test]
    fn edge_wrap_keeps_overshoot() {
        assert_eq!(wrap_at_edge(-2.0, 100.0), 98.0);
        assert_eq!(wrap_at_edge(103.0, 100.0), 3.0);
    }
}
