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

pub mod components;
pub mod systems;

use bevy::{
    app::{App, Plugin, Update},
    ecs::schedule::IntoScheduleConfigs,
};

use crate::frame::FrameSet;
use crate::jar::components::{JarFill, JarFilled, Liquid};
use crate::jar::systems::{
    advance_fill, award_coins_on_fill, empty_jar_on_key, fill_jar_on_tap, sync_liquid_visual,
};

pub struct JarPlugin;

impl Plugin for JarPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JarFilled>()
            .register_type::<JarFill>()
            .register_type::<Liquid>()
            .add_systems(
                Update,
                (
                    empty_jar_on_key,
                    fill_jar_on_tap,
                    advance_fill,
                    award_coins_on_fill,
                    sync_liquid_visual,
                )
                    .chain()
                    .in_set(FrameSet::Simulate),
            );
    }
}
