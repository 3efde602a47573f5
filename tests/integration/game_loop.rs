//! Frame-by-frame behavior of the running game.

use bevy::prelude::*;
use pretty_assertions::assert_eq;
use space_invader::gameplay::canvas::SpriteSlot;
use space_invader::gameplay::enemy::Enemy;
use space_invader::gameplay::player::Player;
use space_invader::gameplay::{Frame, Game, SpriteTextures, TextureId};
use space_invader::screens::InGameState;

use crate::{create_game_app, start_in_game};

#[test]
fn holding_space_fires_a_single_bullet() {
    let mut app = create_game_app();
    start_in_game(&mut app);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    for _ in 0..5 {
        app.update();
    }

    assert_eq!(app.world().resource::<Game>().bullets().len(), 1);
}

#[test]
fn arrow_keys_move_the_player() {
    let mut app = create_game_app();
    start_in_game(&mut app);
    let start = app.world().resource::<Game>().player().position();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    app.update();

    let moved = app.world().resource::<Game>().player().position();
    assert_eq!(moved, start - Vec2::new(4.0, 0.0));
}

#[test]
fn each_frame_is_rendered_back_to_front() {
    let mut app = create_game_app();
    start_in_game(&mut app);
    app.update();

    let frame = app.world().resource::<Frame>();
    let textures: Vec<_> = frame.commands().iter().map(|c| c.texture).collect();
    assert_eq!(textures[0], TextureId::Background);
    assert_eq!(textures[1], TextureId::Player);
    assert!(textures[2..].iter().all(|&t| t == TextureId::Enemy));

    app.update();
    let slots = app
        .world_mut()
        .query::<&SpriteSlot>()
        .iter(app.world())
        .count();
    assert!(slots >= textures.len());
}

#[test]
fn collision_moves_to_game_over() {
    let mut app = create_game_app();
    start_in_game(&mut app);

    let textures = *app.world().resource::<SpriteTextures>();
    let mut game = Game::with_player(Player::at(Vec2::new(200.0, 700.0), &textures), &textures);
    game.add_enemy(Enemy::at(Vec2::new(195.0, 690.0), &textures));
    app.insert_resource(game);

    app.update();
    assert!(app.world().resource::<Game>().is_game_over());

    app.update();
    assert_eq!(
        *app.world().resource::<State<InGameState>>().get(),
        InGameState::GameOver
    );
}
