// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use lookout_camera::{Camera, ScaleModel};

use crate::commit::CameraCommit;

/// Applies a wheel delta as a zoom change anchored at the cursor.
///
/// `delta` is added to the zoom level and clamped into the model's bounds.
/// If clamping leaves the zoom unchanged (spinning the wheel at a limit),
/// the event is a complete no-op and an empty commit is returned.
///
/// Otherwise the offsets are adjusted so that the world point under
/// `cursor` stays under it: with the cursor's offset from the viewport
/// center `(px, py)` in logical pixels (`py` positive upward), each offset
/// moves by `device_pixel_ratio * (p / new_scale - p / old_scale)`. The
/// identity `world = device_pixel_ratio * p / scale - offset` then yields
/// the same world point before and after, up to floating-point rounding.
///
/// Commits the zoom and both offsets.
pub fn zoom_by_wheel(
    camera: &mut Camera,
    model: &impl ScaleModel,
    delta: f64,
    cursor: Point,
) -> CameraCommit {
    let new_zoom = model.clamp_zoom(camera.zoom + delta);
    if new_zoom == camera.zoom {
        return CameraCommit::NONE;
    }

    let old_scale = model.scale(camera.zoom);
    let new_scale = model.scale(new_zoom);
    let px = cursor.x - camera.width / 2.0;
    let py = camera.height / 2.0 - cursor.y;

    camera.zoom = new_zoom;
    camera.offset_x += camera.device_pixel_ratio * (px / new_scale - px / old_scale);
    camera.offset_y += camera.device_pixel_ratio * (py / new_scale - py / old_scale);

    CameraCommit {
        offset_x: Some(camera.offset_x),
        offset_y: Some(camera.offset_y),
        zoom: Some(camera.zoom),
    }
}
