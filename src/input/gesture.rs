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

use bevy::{ecs::resource::Resource, math::Vec2};

use crate::config::CameraConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Current screen position in pixels.
    pub position: Vec2,
    /// Displacement since the previous frame.
    pub delta: Vec2,
    pub phase: TouchPhase,
}

impl TouchSample {
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, TouchPhase::Ended | TouchPhase::Canceled)
    }

    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// One normalized input occurrence for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Touch(TouchSample),
    /// Secondary pointer button held; `axis` is this frame's pointer motion in axis units.
    SecondaryDrag { axis: Vec2 },
    /// Scroll axis value, forward is positive.
    Scroll { value: f32 },
    /// Primary pointer button went down this frame.
    PrimaryPress,
}

/// Everything the frame pipeline knows about input for one frame.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    /// Elapsed frame time in seconds.
    pub dt: f32,
}

impl FrameInput {
    pub fn new(dt: f32) -> Self {
        Self {
            events: Vec::new(),
            dt,
        }
    }

    #[cfg(test)]
    pub fn with(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn touches(&self) -> impl Iterator<Item = &TouchSample> {
        self.events.iter().filter_map(|event| match event {
            InputEvent::Touch(touch) => Some(touch),
            _ => None,
        })
    }

    /// A tap is a fresh primary press or a touch that began this frame.
    pub fn tapped(&self) -> bool {
        self.events.iter().any(|event| match event {
            InputEvent::PrimaryPress => true,
            InputEvent::Touch(touch) => touch.phase == TouchPhase::Began,
            _ => false,
        })
    }
}

/// Per-frame orbit and zoom change. Orbit components are in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureDelta {
    pub orbit_h: f32,
    pub orbit_v: f32,
    pub zoom: f32,
}

impl GestureDelta {
    pub const ZERO: Self = Self {
        orbit_h: 0.0,
        orbit_v: 0.0,
        zoom: 0.0,
    };
}

/// Folds a frame's input into a single gesture delta.
///
/// Touch gestures are classified first: a single moving touch orbits, two
/// active touches pinch-zoom. Secondary-button drags and scroll are separate
/// channels and add on top of whatever the touches produced.
pub fn poll(input: &FrameInput, config: &CameraConfig) -> GestureDelta {
    let mut delta = GestureDelta::ZERO;
    let dt = input.dt;

    let active: Vec<&TouchSample> = input.touches().filter(|t| t.is_active()).collect();
    match active.as_slice() {
        [touch] if touch.phase == TouchPhase::Moved => {
            delta.orbit_h += touch.delta.x * config.orbit_speed * 0.1 * dt;
            delta.orbit_v += -touch.delta.y * config.orbit_speed * 0.1 * dt;
        }
        [a, b] => {
            let prev = a.previous_position().distance(b.previous_position());
            let curr = a.position.distance(b.position);
            delta.zoom += pinch_zoom(prev, curr, config.zoom_speed);
        }
        _ => {}
    }

    for event in &input.events {
        match *event {
            InputEvent::SecondaryDrag { axis } => {
                delta.orbit_h += axis.x * config.orbit_speed * dt;
                delta.orbit_v += -axis.y * config.orbit_speed * dt;
            }
            // Scroll forward zooms in, opposite to pinch.
            InputEvent::Scroll { value } => delta.zoom -= value * config.zoom_speed,
            _ => {}
        }
    }

    delta
}

/// Fingers moving apart shrink the distance.
pub fn pinch_zoom(prev_dist: f32, curr_dist: f32, zoom_speed: f32) -> f32 {
    (prev_dist - curr_dist) * zoom_speed * 0.01
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(position: Vec2, delta: Vec2, phase: TouchPhase) -> InputEvent {
        InputEvent::Touch(TouchSample {
            position,
            delta,
            phase,
        })
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn no_input_is_zero() {
        let config = CameraConfig::default();
        assert_eq!(poll(&FrameInput::new(0.016), &config), GestureDelta::ZERO);
    }

    #[test]
    fn single_moving_touch_orbits() {
        let config = CameraConfig::default();
        let input = FrameInput::new(0.5).with(touch(
            Vec2::new(100.0, 100.0),
            Vec2::new(4.0, 2.0),
            TouchPhase::Moved,
        ));

        let delta = poll(&input, &config);
        // 4 * 100 * 0.1 * 0.5
        assert!(close(delta.orbit_h, 20.0));
        assert!(close(delta.orbit_v, -10.0));
        assert_eq!(delta.zoom, 0.0);
    }

    #[test]
    fn single_stationary_touch_does_nothing() {
        let config = CameraConfig::default();
        let input = FrameInput::new(0.5).with(touch(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            TouchPhase::Stationary,
        ));
        assert_eq!(poll(&input, &config), GestureDelta::ZERO);
    }

    #[test]
    fn ended_touch_does_not_count_as_active() {
        let config = CameraConfig::default();
        let input = FrameInput::new(1.0)
            .with(touch(Vec2::new(10.0, 0.0), Vec2::new(1.0, 0.0), TouchPhase::Moved))
            .with(touch(Vec2::new(50.0, 0.0), Vec2::new(5.0, 0.0), TouchPhase::Ended));

        let delta = poll(&input, &config);
        assert!(close(delta.orbit_h, 10.0));
        assert_eq!(delta.zoom, 0.0);
    }

    #[test]
    fn pinch_matches_worked_example() {
        assert!(close(pinch_zoom(100.0, 80.0, 10.0), 2.0));
    }

    #[test]
    fn two_touches_pinch_from_previous_positions() {
        let config = CameraConfig::default();
        // Previously 100 apart on the x axis, now 80 apart.
        let input = FrameInput::new(0.016)
            .with(touch(Vec2::new(10.0, 0.0), Vec2::new(10.0, 0.0), TouchPhase::Moved))
            .with(touch(Vec2::new(90.0, 0.0), Vec2::new(-10.0, 0.0), TouchPhase::Moved));

        let delta = poll(&input, &config);
        assert!(close(delta.zoom, 2.0));
        assert_eq!(delta.orbit_h, 0.0);
        assert_eq!(delta.orbit_v, 0.0);
    }

    #[test]
    fn three_touches_are_ignored() {
        let config = CameraConfig::default();
        let moved = |i: u8| touch(Vec2::splat(f32::from(i) * 10.0), Vec2::ONE, TouchPhase::Moved);
        let input = FrameInput::new(1.0).with(moved(0)).with(moved(1)).with(moved(2));
        assert_eq!(poll(&input, &config), GestureDelta::ZERO);
    }

    #[test]
    fn secondary_drag_uses_axis_velocity() {
        let config = CameraConfig::default();
        let input = FrameInput::new(0.1).with(InputEvent::SecondaryDrag {
            axis: Vec2::new(0.5, -0.2),
        });

        let delta = poll(&input, &config);
        assert!(close(delta.orbit_h, 5.0));
        assert!(close(delta.orbit_v, 2.0));
    }

    #[test]
    fn scroll_is_inverted_and_unscaled() {
        let config = CameraConfig::default();
        let input = FrameInput::new(0.016).with(InputEvent::Scroll { value: 0.1 });
        assert!(close(poll(&input, &config).zoom, -1.0));
    }

    #[test]
    fn channels_accumulate_in_one_frame() {
        let config = CameraConfig::default();
        let input = FrameInput::new(1.0)
            .with(touch(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), TouchPhase::Moved))
            .with(InputEvent::SecondaryDrag {
                axis: Vec2::new(0.1, 0.0),
            })
            .with(InputEvent::Scroll { value: -0.1 });

        let delta = poll(&input, &config);
        assert!(close(delta.orbit_h, 10.0));
        assert!(close(delta.orbit_v, -100.0));
        assert!(close(delta.zoom, 1.0));
    }

    #[test]
    fn taps_come_from_press_or_new_touch() {
        assert!(!FrameInput::new(0.0).tapped());
        assert!(FrameInput::new(0.0).with(InputEvent::PrimaryPress).tapped());
        assert!(
            FrameInput::new(0.0)
                .with(touch(Vec2::ZERO, Vec2::ZERO, TouchPhase::Began))
                .tapped()
        );
        assert!(
            !FrameInput::new(0.0)
                .with(touch(Vec2::ZERO, Vec2::ONE, TouchPhase::Moved))
                .tapped()
        );
    }
}
