//! Shatter simulation core
//!
//! Headless rules engine for a vector-style asteroid shooter: polygonal
//! asteroids that split into area-conserving fragments, range-limited
//! bullets, spark and text effects, distance-based scoring with snipe
//! bonuses, and a cooldown-gated gravity pulse.  Rendering, input and the
//! high-score store sit outside this crate.

pub mod asteroid;
pub mod bullet;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod fragmentation;
pub mod geometry;
pub mod gravity_pulse;
pub mod particles;
pub mod scoreboard;
pub mod ship;
pub mod simulation;
pub mod snippet;
