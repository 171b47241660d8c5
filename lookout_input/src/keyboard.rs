// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lookout_camera::{Camera, ScaleModel};

use crate::commit::CameraCommit;

/// Logical pixels the camera moves per arrow-key press.
pub const PAN_STEP_PX: f64 = 10.0;

/// Arrow-key pan direction.
///
/// The exact sign each key applies to the offsets is spelled out in the
/// crate-level "Sign conventions" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanKey {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// Pans the camera one keyboard step in the given direction.
///
/// The step is [`PAN_STEP_PX`] logical pixels converted to world units at
/// the current scale (`step / scale`), so a key press covers the same
/// on-screen distance at every zoom level. Note the step is deliberately
/// *logical* pixels: unlike drag deltas, it carries no device-pixel-ratio
/// factor.
///
/// Exactly one offset axis changes and is committed.
pub fn pan_by_key(camera: &mut Camera, model: &impl ScaleModel, key: PanKey) -> CameraCommit {
    let step = PAN_STEP_PX / model.scale(camera.zoom);
    let mut commit = CameraCommit::NONE;
    match key {
        PanKey::Up => {
            camera.offset_y += step;
            commit.offset_y = Some(camera.offset_y);
        }
        PanKey::Down => {
            camera.offset_y -= step;
            commit.offset_y = Some(camera.offset_y);
        }
        PanKey::Left => {
            camera.offset_x += step;
            commit.offset_x = Some(camera.offset_x);
        }
        PanKey::Right => {
            camera.offset_x -= step;
            commit.offset_x = Some(camera.offset_x);
        }
    }
    commit
}
