//! Shared UI theme: color palette and reusable widget constructors.

pub mod palette;
pub mod widget;

pub fn plugin(app: &mut bevy::prelude::App) {
    app.insert_resource(bevy::prelude::ClearColor(palette::CLEAR));
}
