//! Floating score labels ("snippets") shown where a hit landed.

use crate::config::GameConfig;
use bevy::math::Vec2;

/// Screen-space "up"; the field's y axis grows downwards.
pub const SNIPPET_UP: Vec2 = Vec2::new(0.0, -1.0);

/// Transient label.  `alpha` falls linearly from 1 to 0 over its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub text: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub lifetime: u32,
    pub initial_lifetime: u32,
    pub alpha: f32,
    /// Font sizes the renderer interpolates between; not used by the core.
    pub start_font_size: f32,
    pub end_font_size: f32,
}

/// Optional overrides for [`create_snippet`].
#[derive(Debug, Clone, Default)]
pub struct SnippetOptions {
    /// Drift direction; normalised to one unit per tick.
    pub direction: Option<Vec2>,
    pub lifetime: Option<u32>,
    pub start_font_size: Option<f32>,
    pub end_font_size: Option<f32>,
}

pub fn create_snippet(
    text: &str,
    position: Vec2,
    options: SnippetOptions,
    config: &GameConfig,
) -> Snippet {
    let velocity = options
        .direction
        .and_then(|d| d.try_normalize())
        .unwrap_or(SNIPPET_UP);
    let lifetime = options.lifetime.unwrap_or(config.snippet_lifetime).max(1);
    Snippet {
        text: text.to_uppercase(),
        position,
        velocity,
        lifetime,
        initial_lifetime: lifetime,
        alpha: 1.0,
        start_font_size: options
            .start_font_size
            .unwrap_or(config.snippet_start_font_size),
        end_font_size: options.end_font_size.unwrap_or(config.snippet_end_font_size),
    }
}

/// Drift, fade, and drop finished snippets.
pub fn update_snippets(snippets: &mut Vec<Snippet>) {
    for s in snippets.iter_mut() {
        s.position += s.velocity;
        s.lifetime = s.lifetime.saturating_sub(1);
        s.alpha = s.lifetime as f32 / s.initial_lifetime as f32;
    }
    snippets.retain(|s| s.lifetime > 0);
}
