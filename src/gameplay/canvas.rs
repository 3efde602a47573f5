//! Immediate-mode sprite drawing on top of Bevy's retained sprites.
//!
//! The render pass draws into a [`Frame`]; [`present_frame`] then maps the
//! recorded commands onto a pool of sprite entities, in draw order.

use bevy::prelude::*;

use super::body::{WINDOW_HEIGHT, WINDOW_WIDTH};
use super::sprite::{SpriteTexture, TextureId};
use crate::Z_SPRITES;
use crate::assets::TextureHandles;
use crate::screens::GameState;

/// Depth step between consecutive draw commands.
const Z_STEP: f32 = 0.001;

/// Draw target for the render pass.
pub trait Canvas {
    /// Draws `texture` (or its `source` sub-rect) with its top-left corner at
    /// `position`, scaled uniformly by `scale`.
    fn draw_sprite(
        &mut self,
        texture: &SpriteTexture,
        source: Option<Rect>,
        position: Vec2,
        scale: f32,
    );
}

/// One recorded sprite draw, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct DrawCommand {
    pub texture: TextureId,
    pub source: Option<Rect>,
    pub position: Vec2,
    /// On-screen size after scaling.
    pub size: Vec2,
}

impl DrawCommand {
    /// Center of the drawn sprite in world space (origin at window center, y up).
    #[must_use]
    pub fn world_center(&self) -> Vec2 {
        let center = self.position + self.size / 2.0;
        Vec2::new(center.x - WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0 - center.y)
    }
}

/// Draw commands recorded this frame.
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas for Frame {
    fn draw_sprite(
        &mut self,
        texture: &SpriteTexture,
        source: Option<Rect>,
        position: Vec2,
        scale: f32,
    ) {
        let size = source.map_or(texture.size, |rect| rect.size()) * scale;
        self.commands.push(DrawCommand {
            texture: texture.id,
            source,
            position,
            size,
        });
    }
}

/// Pooled sprite entity showing the draw command with the same index.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpriteSlot(pub usize);

#[allow(clippy::cast_precision_loss)]
fn slot_transform(index: usize, command: &DrawCommand) -> Transform {
    Transform::from_translation(
        command
            .world_center()
            .extend(Z_SPRITES + index as f32 * Z_STEP),
    )
}

fn slot_sprite(command: &DrawCommand, handles: &TextureHandles) -> Sprite {
    Sprite {
        image: handles.get(command.texture).clone(),
        rect: command.source,
        custom_size: Some(command.size),
        ..default()
    }
}

/// Shows the recorded frame: reuses existing slots, spawns missing ones and
/// hides the rest.
pub(super) fn present_frame(
    mut commands: Commands,
    frame: Res<Frame>,
    handles: Res<TextureHandles>,
    mut slots: Query<(&SpriteSlot, &mut Sprite, &mut Transform, &mut Visibility)>,
) {
    let drawn = frame.commands();
    let mut pool_size = 0;

    for (slot, mut sprite, mut transform, mut visibility) in &mut slots {
        pool_size = pool_size.max(slot.0 + 1);
        match drawn.get(slot.0) {
            Some(command) => {
                *sprite = slot_sprite(command, &handles);
                *transform = slot_transform(slot.0, command);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }

    for (index, command) in drawn.iter().enumerate().skip(pool_size) {
        commands.spawn((
            Name::new(format!("Sprite Slot {index}")),
            SpriteSlot(index),
            slot_sprite(command, &handles),
            slot_transform(index, command),
            Visibility::Inherited,
            DespawnOnExit(GameState::InGame),
        ));
    }
}
