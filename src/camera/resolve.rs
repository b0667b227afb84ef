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
    math::Vec3,
    reflect::Reflect,
    render::primitives::Aabb,
    transform::components::Transform,
};

use crate::camera::orbit::OrbitState;
use crate::config::CameraConfig;

/// What the camera knows about its target for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSample {
    pub position: Vec3,
    /// World-space height of the target's bounds, when it has any.
    pub bounds_height: Option<f32>,
}

impl TargetSample {
    pub fn from_entity(transform: &Transform, aabb: Option<&Aabb>) -> Self {
        Self {
            position: transform.translation,
            bounds_height: aabb.map(|aabb| aabb.half_extents.y * 2.0 * transform.scale.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

/// The point the camera orbits and faces.
///
/// With bounds the fraction is measured down from the top of the target, so 0
/// is the top and 0.5 the center; without bounds it is a plain world-unit
/// lift.
pub fn anchor(target: &TargetSample, height_offset_fraction: f32) -> Vec3 {
    match target.bounds_height {
        Some(height) => target.position + Vec3::Y * (height * (0.5 - height_offset_fraction)),
        None => target.position + Vec3::Y * height_offset_fraction,
    }
}

/// Offset from the anchor for the given spherical coordinates.
pub fn orbit_offset(state: &OrbitState) -> Vec3 {
    let h = state.horizontal_angle.to_radians();
    let v = state.vertical_angle.to_radians();
    Vec3::new(h.sin() * v.cos(), v.sin(), h.cos() * v.cos()) * state.distance
}

pub fn resolve(state: &OrbitState, target: &TargetSample, config: &CameraConfig) -> CameraPose {
    let anchor = anchor(target, config.height_offset_fraction);
    CameraPose {
        position: anchor + orbit_offset(state),
        look_at: anchor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn bare(position: Vec3) -> TargetSample {
        TargetSample {
            position,
            bounds_height: None,
        }
    }

    #[test]
    fn initial_pose_sits_above_and_behind() {
        let config = CameraConfig {
            height_offset_fraction: 0.0,
            ..CameraConfig::default()
        };
        let state = OrbitState::initial(&config);
        let target = bare(Vec3::new(1.0, 2.0, 3.0));

        let pose = resolve(&state, &target, &config);
        let expected = target.position + Vec3::new(0.0, 4.5, 7.794);
        assert!(pose.position.abs_diff_eq(expected, EPS), "{pose:?}");
        assert_eq!(pose.look_at, target.position);
    }

    #[test]
    fn unbounded_target_lifts_by_raw_offset() {
        let target = bare(Vec3::new(0.0, 1.0, 0.0));
        assert!(anchor(&target, 0.2).abs_diff_eq(Vec3::new(0.0, 1.2, 0.0), 1e-6));
    }

    #[test]
    fn bounded_target_offsets_by_height_fraction() {
        let target = TargetSample {
            position: Vec3::ZERO,
            bounds_height: Some(2.0),
        };
        // Fraction 0 looks at the top, 0.5 at the vertical center.
        assert!(anchor(&target, 0.0).abs_diff_eq(Vec3::Y, 1e-6));
        assert!(anchor(&target, 0.5).abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(anchor(&target, 0.25).abs_diff_eq(Vec3::Y * 0.5, 1e-6));
    }

    #[test]
    fn bounds_height_follows_target_scale() {
        let transform = Transform::from_xyz(0.0, 1.0, 0.0).with_scale(Vec3::new(1.0, 3.0, 1.0));
        let aabb = Aabb::from_min_max(Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.5, 0.5, 0.5));

        let sample = TargetSample::from_entity(&transform, Some(&aabb));
        assert_eq!(sample.position, Vec3::new(0.0, 1.0, 0.0));
        assert!((sample.bounds_height.unwrap() - 3.0).abs() < 1e-6);
        assert_eq!(TargetSample::from_entity(&transform, None).bounds_height, None);
    }

    #[test]
    fn camera_stays_at_orbit_distance_facing_anchor() {
        let config = CameraConfig {
            height_offset_fraction: 0.3,
            ..CameraConfig::default()
        };
        let target = TargetSample {
            position: Vec3::new(-2.0, 0.5, 4.0),
            bounds_height: Some(1.5),
        };

        for h in [-45.0, -20.0, 0.0, 12.5, 45.0] {
            for v in [30.0, 45.0, 70.0] {
                for distance in [3.0, 9.0, 15.0] {
                    let state = OrbitState {
                        distance,
                        vertical_angle: v,
                        horizontal_angle: h,
                    };
                    let pose = resolve(&state, &target, &config);
                    let anchor = anchor(&target, config.height_offset_fraction);

                    assert_eq!(pose.look_at, anchor);
                    assert!((pose.position.distance(anchor) - distance).abs() < EPS);

                    let forward = pose.transform().forward().as_vec3();
                    let toward = (pose.look_at - pose.position).normalize();
                    assert!(forward.dot(toward) > 0.999, "camera faces away at {h}/{v}");
                }
            }
        }
    }

    #[test]
    fn small_state_changes_move_camera_a_little() {
        let config = CameraConfig::default();
        let target = bare(Vec3::ZERO);
        let base = OrbitState {
            distance: 12.0,
            vertical_angle: 50.0,
            horizontal_angle: -10.0,
        };

        for step in [0.01_f32, 0.1, 1.0] {
            let moved = OrbitState {
                distance: base.distance + step,
                vertical_angle: base.vertical_angle + step,
                horizontal_angle: base.horizontal_angle + step,
            };
            let a = resolve(&base, &target, &config).position;
            let b = resolve(&moved, &target, &config).position;
            // Arc length bound: each degree moves at most distance * pi/180.
            let bound = step + 2.0 * moved.distance * step.to_radians();
            assert!(a.distance(b) <= bound + EPS, "jump {} > {bound}", a.distance(b));
        }
    }
}
