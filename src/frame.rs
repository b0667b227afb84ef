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
    app::{App, Plugin, Update},
    ecs::schedule::{IntoScheduleConfigs, SystemSet},
};

/// Per-frame ordering: input is collected, the game simulates, then the
/// camera resolves against the final target placement of the frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Camera,
}

pub struct FramePipelinePlugin;

impl Plugin for FramePipelinePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulate, FrameSet::Camera).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::{resource::Resource, system::ResMut};

    use super::*;

    #[derive(Resource, Default)]
    struct Trace(Vec<&'static str>);

    #[test]
    fn camera_runs_after_simulation_after_input() {
        let mut app = App::new();
        app.add_plugins(FramePipelinePlugin)
            .init_resource::<Trace>()
            .add_systems(
                Update,
                (|mut t: ResMut<Trace>| t.0.push("camera")).in_set(FrameSet::Camera),
            )
            .add_systems(
                Update,
                (|mut t: ResMut<Trace>| t.0.push("simulate")).in_set(FrameSet::Simulate),
            )
            .add_systems(
                Update,
                (|mut t: ResMut<Trace>| t.0.push("input")).in_set(FrameSet::Input),
            );

        app.update();
        app.update();

        assert_eq!(
            app.world().resource::<Trace>().0,
            ["input", "simulate", "camera", "input", "simulate", "camera"]
        );
    }
}
