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

use bevy::reflect::Reflect;

use crate::config::CameraConfig;
use crate::input::gesture::GestureDelta;

/// Spherical camera coordinates around the anchor. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct OrbitState {
    pub distance: f32,
    /// Elevation above the anchor's horizontal plane.
    pub vertical_angle: f32,
    /// Azimuth around the anchor, 0 looks down -Z from +Z.
    pub horizontal_angle: f32,
}

impl OrbitState {
    /// Attach-time state: middle of the zoom range, default elevation, centered azimuth.
    pub fn initial(config: &CameraConfig) -> Self {
        Self {
            distance: (config.min_distance + config.max_distance) / 2.0,
            vertical_angle: config.default_vertical_angle,
            horizontal_angle: 0.0,
        }
    }

    /// Applies a gesture delta, clamping each axis to its own window.
    pub fn apply(self, delta: GestureDelta, config: &CameraConfig) -> Self {
        Self {
            distance: clamp_window(
                self.distance + delta.zoom,
                config.min_distance,
                config.max_distance,
            ),
            vertical_angle: clamp_window(
                self.vertical_angle + delta.orbit_v,
                config.min_vertical_angle,
                config.max_vertical_angle,
            ),
            horizontal_angle: clamp_window(
                self.horizontal_angle + delta.orbit_h,
                config.min_horizontal_angle,
                config.max_horizontal_angle,
            ),
        }
    }
}

/// Like `f32::clamp` but never panics: with `min > max` values below `min`
/// snap to `min` and everything else snaps to `max`.
pub fn clamp_window(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
