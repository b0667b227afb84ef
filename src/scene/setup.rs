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
    asset::Assets,
    color::Color,
    core_pipeline::core_3d::Camera3d,
    ecs::{
        hierarchy::ChildOf,
        system::{Commands, Res, ResMut},
    },
    math::{
        EulerRot, Quat, Vec3,
        primitives::{Cylinder, Plane3d},
    },
    pbr::{AmbientLight, DirectionalLight, MeshMaterial3d, StandardMaterial},
    render::{
        alpha::AlphaMode,
        camera::{PerspectiveProjection, Projection},
        mesh::{Mesh, Mesh3d, MeshAabb, MeshBuilder, Meshable},
    },
    transform::components::Transform,
    utils::default,
};

use crate::camera::components::{OrbitCamera, OrbitTarget};
use crate::config::GameConfig;
use crate::jar::components::{JarFill, Liquid};

pub const JAR_RADIUS: f32 = 0.6;
// Tall enough to hold the liquid at its default max fill height.
pub const JAR_HEIGHT: f32 = 2.2;
const LIQUID_RADIUS: f32 = 0.55;

pub fn setup_camera_light(mut commands: Commands, config: Res<GameConfig>) {
    // Placed properly by the orbit camera once the jar exists
    let camera_entity = commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: std::f32::consts::PI / 4.0,
                near: 0.1,
                far: 200.0,
                aspect_ratio: 1.0, // Will be adjusted automatically
            }),
            Transform::from_xyz(0.0, 4.5, 7.8).looking_at(Vec3::ZERO, Vec3::Y),
            OrbitCamera::new(&config.camera),
        ))
        .id();

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    commands
        .spawn((
            DirectionalLight {
                color: Color::WHITE,
                illuminance: 3000.0,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.25, -0.25, 0.0)),
        ))
        .insert(ChildOf(camera_entity));
}

pub fn setup_jar(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    let glass = materials.add(StandardMaterial {
        base_color: Color::srgba(0.8, 0.9, 1.0, 0.25),
        perceptual_roughness: 0.1,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let juice = materials.add(StandardMaterial {
        base_color: Color::srgb(0.95, 0.55, 0.1),
        perceptual_roughness: 0.4,
        ..default()
    });
    let table = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.25, 0.18),
        perceptual_roughness: 0.8,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(20.0, 20.0))),
        MeshMaterial3d(table),
        Transform::default(),
    ));

    // Bounds go on at spawn so the camera sees the jar's height from its first frame.
    let jar_mesh = Cylinder::new(JAR_RADIUS, JAR_HEIGHT).mesh().build();
    let jar_bounds = jar_mesh.compute_aabb();
    let jar = commands
        .spawn((
            Mesh3d(meshes.add(jar_mesh)),
            MeshMaterial3d(glass),
            Transform::from_xyz(0.0, JAR_HEIGHT / 2.0, 0.0),
            JarFill::new(&config.jar),
            OrbitTarget,
        ))
        .id();
    if let Some(bounds) = jar_bounds {
        commands.entity(jar).insert(bounds);
    }

    // Unit-height cylinder, scaled on Y to the fill height
    let initial = config.jar.initial_fill_height;
    let liquid = Liquid {
        jar,
        initial_scale_y: initial,
        initial_y: -JAR_HEIGHT / 2.0 + initial / 2.0,
    };
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(LIQUID_RADIUS, 1.0))),
        MeshMaterial3d(juice),
        Transform::from_xyz(0.0, liquid.initial_y, 0.0).with_scale(Vec3::new(1.0, initial, 1.0)),
        liquid,
        ChildOf(jar),
    ));
}
