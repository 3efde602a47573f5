//! Keyboard sampling into a per-frame control snapshot.

use bevy::prelude::*;

/// The fixed set of game inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl Key {
    /// Physical keys bound to this input.
    #[must_use]
    pub const fn bindings(self) -> &'static [KeyCode] {
        match self {
            Self::Up => &[KeyCode::KeyW, KeyCode::ArrowUp],
            Self::Down => &[KeyCode::KeyS, KeyCode::ArrowDown],
            Self::Left => &[KeyCode::KeyA, KeyCode::ArrowLeft],
            Self::Right => &[KeyCode::KeyD, KeyCode::ArrowRight],
            Self::Fire => &[KeyCode::Space],
        }
    }
}

/// Which inputs are held down this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    #[must_use]
    pub const fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Fire => self.fire,
        }
    }

    /// Snapshot with only `keys` held.
    #[must_use]
    pub fn holding(keys: &[Key]) -> Self {
        let held = |key| keys.contains(&key);
        Self {
            up: held(Key::Up),
            down: held(Key::Down),
            left: held(Key::Left),
            right: held(Key::Right),
            fire: held(Key::Fire),
        }
    }

    fn sample(keyboard: &ButtonInput<KeyCode>) -> Self {
        let held = |key: Key| keyboard.any_pressed(key.bindings().iter().copied());
        Self {
            up: held(Key::Up),
            down: held(Key::Down),
            left: held(Key::Left),
            right: held(Key::Right),
            fire: held(Key::Fire),
        }
    }
}

pub(super) fn sample_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<Controls>,
) {
    *controls = Controls::sample(&keyboard);
}
