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

use std::{fs, io, path::Path};

use bevy::{ecs::resource::Resource, log::warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Orbit camera knobs. Angles are in degrees, distances in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub orbit_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    pub min_horizontal_angle: f32,
    pub max_horizontal_angle: f32,
    /// With bounds, fraction of the target height measured down from its top
    /// (0 is the top, 0.5 the center). Without bounds, a raw world-unit lift.
    pub height_offset_fraction: f32,
    pub default_vertical_angle: f32,
    /// Pointer pixels to axis units.
    pub pointer_axis_scale: f32,
    /// Scroll lines to axis units.
    pub scroll_line_scale: f32,
    /// Scroll pixels to axis units.
    pub scroll_pixel_scale: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_speed: 100.0,
            zoom_speed: 10.0,
            min_distance: 3.0,
            max_distance: 15.0,
            min_vertical_angle: 30.0,
            max_vertical_angle: 70.0,
            min_horizontal_angle: -45.0,
            max_horizontal_angle: 45.0,
            height_offset_fraction: 0.5,
            default_vertical_angle: 30.0,
            pointer_axis_scale: 0.1,
            scroll_line_scale: 0.1,
            scroll_pixel_scale: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JarConfig {
    /// Height added to the fill target per tap.
    pub fill_amount: f32,
    pub max_fill_height: f32,
    /// Liquid rise rate in height units per second.
    pub fill_speed: f32,
    pub initial_fill_height: f32,
}

impl Default for JarConfig {
    fn default() -> Self {
        Self {
            fill_amount: 0.1,
            max_fill_height: 2.0,
            fill_speed: 1.0,
            initial_fill_height: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub coins_per_fill: u32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            coins_per_fill: 500,
        }
    }
}

/// Session configuration, built once at startup and only ever read afterwards.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub camera: CameraConfig,
    pub jar: JarConfig,
    pub economy: EconomyConfig,
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` when given, falling back to defaults on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default config, {} unusable: {e}", path.display());
                Self::default()
            }
        }
    }
}
