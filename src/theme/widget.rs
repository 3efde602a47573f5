//! UI constructors for the loading screen and the game-over overlay.

use bevy::prelude::*;

use super::palette;

/// Full-window column that centers its children over `backdrop`.
/// Pass `Color::NONE` to leave the playfield visible.
pub fn ui_root(
    name: impl Into<std::borrow::Cow<'static, str>>,
    backdrop: Color,
) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
        BackgroundColor(backdrop),
    )
}

/// Title-sized text in `color`.
pub fn header(text: impl Into<String>, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: palette::FONT_SIZE_HEADER,
            ..default()
        },
        TextColor(color),
    )
}

pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: palette::FONT_SIZE_LABEL,
            ..default()
        },
        TextColor(palette::BODY_TEXT),
    )
}
