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
    ecs::system::{Res, ResMut},
    input::{
        ButtonInput,
        mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseButton, MouseScrollUnit},
        touch::Touches,
    },
    math::Vec2,
    time::Time,
};

use crate::config::{CameraConfig, GameConfig};
use crate::input::gesture::{FrameInput, InputEvent, TouchPhase, TouchSample};

// Window coordinates grow downwards; gestures are expressed with y up.
fn y_up(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

pub fn touch_phase(just_pressed: bool, delta: Vec2) -> TouchPhase {
    if just_pressed {
        TouchPhase::Began
    } else if delta != Vec2::ZERO {
        TouchPhase::Moved
    } else {
        TouchPhase::Stationary
    }
}

pub fn scroll_axis(unit: MouseScrollUnit, delta_y: f32, config: &CameraConfig) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta_y * config.scroll_line_scale,
        MouseScrollUnit::Pixel => delta_y * config.scroll_pixel_scale,
    }
}

/// Snapshot the engine's input resources into this frame's [`FrameInput`].
pub fn collect_frame_input(
    time: Res<Time>,
    config: Res<GameConfig>,
    touches: Res<Touches>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut frame: ResMut<FrameInput>,
) {
    let camera = &config.camera;
    *frame = FrameInput::new(time.delta_secs());

    for touch in touches.iter() {
        frame.events.push(InputEvent::Touch(TouchSample {
            position: y_up(touch.position()),
            delta: y_up(touch.delta()),
            phase: touch_phase(touches.just_pressed(touch.id()), touch.delta()),
        }));
    }
    let finished = touches
        .iter_just_released()
        .map(|t| (t, TouchPhase::Ended))
        .chain(touches.iter_just_canceled().map(|t| (t, TouchPhase::Canceled)));
    for (touch, phase) in finished {
        frame.events.push(InputEvent::Touch(TouchSample {
            position: y_up(touch.position()),
            delta: y_up(touch.delta()),
            phase,
        }));
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        frame.events.push(InputEvent::PrimaryPress);
    }

    if mouse_buttons.pressed(MouseButton::Right) {
        frame.events.push(InputEvent::SecondaryDrag {
            axis: y_up(mouse_motion.delta) * camera.pointer_axis_scale,
        });
    }

    let scroll = scroll_axis(mouse_scroll.unit, mouse_scroll.delta.y, camera);
    if scroll != 0.0 {
        frame.events.push(InputEvent::Scroll { value: scroll });
    }
}
