// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use bevy::{
    ecs::{
        entity::Entity,
        event::{EventReader, EventWriter},
        system::{Query, Res, ResMut},
    },
    input::{ButtonInput, keyboard::KeyCode},
    log::info,
    transform::components::Transform,
};

use crate::config::GameConfig;
use crate::game::state::GameState;
use crate::input::gesture::FrameInput;
use crate::jar::components::{JarFill, JarFilled, Liquid};

pub fn fill_jar_on_tap(
    config: Res<GameConfig>,
    frame: Res<FrameInput>,
    mut jars: Query<(Entity, &mut JarFill)>,
    mut filled: EventWriter<JarFilled>,
) {
    if !frame.tapped() {
        return;
    }
    for (jar, mut fill) in &mut jars {
        if fill.full {
            continue;
        }
        info!(
            "Tap detected, filling jar ({:.0}% shown)",
            fill.fill_percentage(&config.jar)
        );
        if fill.tap(&config.jar) {
            info!("Jar is full!");
            filled.write(JarFilled { jar });
        }
    }
}

pub fn advance_fill(config: Res<GameConfig>, frame: Res<FrameInput>, mut jars: Query<&mut JarFill>) {
    for mut fill in &mut jars {
        fill.advance(frame.dt, &config.jar);
    }
}

pub fn sync_liquid_visual(jars: Query<&JarFill>, mut liquids: Query<(&mut Transform, &Liquid)>) {
    for (mut transform, liquid) in &mut liquids {
        let Ok(fill) = jars.get(liquid.jar) else {
            continue;
        };
        transform.scale.y = fill.current_height;
        transform.translation.y = liquid.offset_for(fill.current_height);
    }
}

pub fn award_coins_on_fill(
    config: Res<GameConfig>,
    mut filled: EventReader<JarFilled>,
    mut game: ResMut<GameState>,
) {
    for _ in filled.read() {
        game.on_jar_filled(config.economy.coins_per_fill);
        info!(
            "Balance: {} coins after {} jars",
            game.coins(),
            game.jars_filled()
        );
    }
}

// Desktop testing shortcut
pub fn empty_jar_on_key(
    kb: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut jars: Query<&mut JarFill>,
) {
    if kb.just_pressed(KeyCode::KeyR) {
        for mut fill in &mut jars {
            fill.empty(&config.jar);
        }
        info!("Jar emptied");
    }
}

#[cfg(test)]
mod tests {
    use bevy::{
        app::{App, Update},
        ecs::schedule::IntoScheduleConfigs,
        math::Vec3,
    };

    use super::*;
    use crate::config::JarConfig;
    use crate::input::gesture::InputEvent;

    fn jar_app() -> (App, Entity, Entity) {
        let mut config = GameConfig::default();
        config.jar = JarConfig {
            fill_amount: 0.5,
            max_fill_height: 2.0,
            fill_speed: 1.0,
            initial_fill_height: 0.5,
        };
        config.economy.coins_per_fill = 250;

        let mut app = App::new();
        app.add_event::<JarFilled>()
            .insert_resource(GameState::default())
            .init_resource::<FrameInput>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(
                Update,
                (
                    fill_jar_on_tap,
                    advance_fill,
                    sync_liquid_visual,
                    award_coins_on_fill,
                    empty_jar_on_key,
                )
                    .chain(),
            );

        let fill = JarFill::new(&config.jar);
        app.insert_resource(config);
        let jar = app.world_mut().spawn(fill).id();
        let liquid = app
            .world_mut()
            .spawn((
                Transform::from_scale(Vec3::new(1.0, 0.5, 1.0)),
                Liquid {
                    jar,
                    initial_scale_y: 0.5,
                    initial_y: 0.0,
                },
            ))
            .id();
        (app, jar, liquid)
    }

    fn tap(app: &mut App, dt: f32) {
        *app.world_mut().resource_mut::<FrameInput>() =
            FrameInput::new(dt).with(InputEvent::PrimaryPress);
        app.update();
    }

    #[test]
    fn taps_fill_jar_and_pay_once() {
        let (mut app, jar, _) = jar_app();
        for _ in 0..5 {
            tap(&mut app, 0.0);
        }

        let game = app.world().resource::<GameState>();
        assert_eq!(game.coins(), 250);
        assert_eq!(game.jars_filled(), 1);
        assert!(app.world().get::<JarFill>(jar).unwrap().full);
    }

    #[test]
    fn liquid_mesh_tracks_current_height() {
        let (mut app, jar, liquid) = jar_app();
        tap(&mut app, 0.25);

        assert_eq!(app.world().get::<JarFill>(jar).unwrap().current_height, 0.75);
        let transform = app.world().get::<Transform>(liquid).unwrap();
        assert_eq!(transform.scale.y, 0.75);
        assert_eq!(transform.translation.y, 0.125);
    }

    #[test]
    fn untapped_frames_only_animate() {
        let (mut app, jar, _) = jar_app();
        *app.world_mut().resource_mut::<FrameInput>() = FrameInput::new(1.0);
        app.update();

        let fill = app.world().get::<JarFill>(jar).unwrap();
        assert_eq!(fill.target_height, 0.5);
        assert_eq!(fill.current_height, 0.5);
    }

    #[test]
    fn reset_key_empties_a_full_jar() {
        let (mut app, jar, _) = jar_app();
        for _ in 0..3 {
            tap(&mut app, 1.0);
        }
        assert!(app.world().get::<JarFill>(jar).unwrap().full);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        *app.world_mut().resource_mut::<FrameInput>() = FrameInput::new(0.0);
        app.update();

        let fill = app.world().get::<JarFill>(jar).unwrap();
        assert!(!fill.full);
        assert_eq!(fill.current_height, 0.5);
        assert_eq!(app.world().resource::<GameState>().coins(), 250);
    }
}
