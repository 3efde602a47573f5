//! Color constants and font size tokens for consistent UI theming.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/hint text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// "GAME OVER" title.
pub const GAME_OVER_TEXT: Color = Color::srgb(0.9, 0.2, 0.2);

// === Backgrounds ===

/// Window clear color behind the background texture.
pub const CLEAR: Color = Color::srgb(0.1, 0.05, 0.15);

/// Dims the frozen playfield behind the game-over text.
pub const OVERLAY_BACKDROP: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

// === Font Size Tokens ===

pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 24.0;
