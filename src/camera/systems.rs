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
        query::{With, Without},
        system::{Query, Res},
    },
    log::{debug, warn},
    render::primitives::Aabb,
    transform::components::Transform,
};

use crate::camera::components::{OrbitCamera, OrbitTarget};
use crate::camera::resolve::{TargetSample, resolve};
use crate::config::{CameraConfig, GameConfig};
use crate::input::gesture::{FrameInput, GestureDelta, poll};

type TargetQuery<'w, 's> =
    Query<'w, 's, (&'static Transform, Option<&'static Aabb>), (With<OrbitTarget>, Without<OrbitCamera>)>;

fn sample_target(target_query: &TargetQuery) -> Option<TargetSample> {
    let Ok((transform, aabb)) = target_query.single() else {
        return None;
    };
    Some(TargetSample::from_entity(transform, aabb))
}

// Applies the delta and writes the pose, or holds the last pose when there is
// nothing to look at.
fn drive(
    orbit: &mut OrbitCamera,
    transform: &mut Transform,
    target: Option<TargetSample>,
    delta: GestureDelta,
    config: &CameraConfig,
) {
    let Some(target) = target else {
        if !orbit.target_missing_reported {
            warn!("Orbit camera has no single OrbitTarget; holding last pose");
            orbit.target_missing_reported = true;
        }
        return;
    };
    if orbit.target_missing_reported {
        debug!("Orbit target available again");
        orbit.target_missing_reported = false;
    }

    orbit.state = orbit.state.apply(delta, config);
    let pose = resolve(&orbit.state, &target, config);

    *transform = pose.transform();
    orbit.last_pose = Some(pose);
}

/// Places the camera as soon as it exists, before any input arrives.
pub fn attach_orbit_camera(
    config: Res<GameConfig>,
    target_query: TargetQuery,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = camera_query.single_mut() else {
        warn!("Expected exactly one OrbitCamera, found {}", camera_query.iter().count());
        return;
    };

    let target = sample_target(&target_query);
    drive(
        &mut orbit,
        &mut transform,
        target,
        GestureDelta::ZERO,
        &config.camera,
    );
    if let Some(target) = target {
        debug!("Orbit camera attached, target at {}", target.position);
    }
}

// Orbit camera controller: gesture -> clamped state -> look-at pose
pub fn orbit_camera_controller(
    config: Res<GameConfig>,
    frame: Res<FrameInput>,
    target_query: TargetQuery,
    mut camera_query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut orbit)) = camera_query.single_mut() else {
        return;
    };

    let delta = poll(&frame, &config.camera);
    drive(
        &mut orbit,
        &mut transform,
        sample_target(&target_query),
        delta,
        &config.camera,
    );
}
