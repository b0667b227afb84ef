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

use bevy::{ecs::component::Component, ecs::reflect::ReflectComponent, reflect::Reflect};

use crate::camera::orbit::OrbitState;
use crate::camera::resolve::CameraPose;
use crate::config::CameraConfig;

/// The entity the orbit camera follows. Expected to be a root entity so its
/// `Transform` is its world placement.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct OrbitTarget;

#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct OrbitCamera {
    pub state: OrbitState,
    pub last_pose: Option<CameraPose>,
    /// Set while a missing target has already been logged.
    pub target_missing_reported: bool,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            state: OrbitState::initial(config),
            last_pose: None,
            target_missing_reported: false,
        }
    }
}
