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
    ecs::{component::Component, entity::Entity, event::Event, reflect::ReflectComponent},
    reflect::Reflect,
};

use crate::config::JarConfig;

/// Fired once when a jar reaches its maximum fill height.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JarFilled {
    pub jar: Entity,
}

#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct JarFill {
    /// Height currently shown by the liquid.
    pub current_height: f32,
    /// Height the liquid is rising towards.
    pub target_height: f32,
    pub full: bool,
    pub coins_awarded: bool,
}

impl JarFill {
    pub fn new(config: &JarConfig) -> Self {
        Self {
            current_height: config.initial_fill_height,
            target_height: config.initial_fill_height,
            full: false,
            coins_awarded: false,
        }
    }

    /// Raises the fill target by one tap. Returns true only for the tap that
    /// fills the jar; a full jar ignores taps.
    pub fn tap(&mut self, config: &JarConfig) -> bool {
        if self.full {
            return false;
        }
        self.target_height = (self.target_height + config.fill_amount).min(config.max_fill_height);

        if self.target_height >= config.max_fill_height && !self.coins_awarded {
            self.full = true;
            self.coins_awarded = true;
            return true;
        }
        false
    }

    /// Moves the visible height towards the target at `fill_speed`.
    pub fn advance(&mut self, dt: f32, config: &JarConfig) {
        if self.current_height < self.target_height {
            self.current_height =
                (self.current_height + config.fill_speed * dt).min(self.target_height);
        }
    }

    pub fn fill_percentage(&self, config: &JarConfig) -> f32 {
        self.current_height / config.max_fill_height * 100.0
    }

    pub fn empty(&mut self, config: &JarConfig) {
        *self = Self::new(config);
    }
}

/// The liquid mesh inside a jar, scaled on Y to show the fill height.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Liquid {
    pub jar: Entity,
    pub initial_scale_y: f32,
    pub initial_y: f32,
}

impl Liquid {
    /// Local Y for the liquid so that it grows up from the jar floor.
    pub fn offset_for(&self, height: f32) -> f32 {
        self.initial_y + (height - self.initial_scale_y) / 2.0
    }
}
