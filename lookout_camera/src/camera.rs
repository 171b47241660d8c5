// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::region::VisibleRegion;
use crate::scale::ScaleModel;

/// Camera state for an infinite pannable/zoomable 2D canvas.
///
/// `Camera` is a transparent record: the pan offsets, the zoom level, the
/// viewport size in logical pixels, and the device pixel ratio. Everything
/// else (scale, visible region, cursor→world mapping) is derived on demand
/// through a [`ScaleModel`].
///
/// The view transform places the world point `(-offset_x, -offset_y)` at
/// the viewport center. Increasing `offset_x` therefore shifts the camera
/// left (content appears to move right), and symmetrically for y.
///
/// Zoom is kept inside the model's `[min_zoom, max_zoom]` by the input
/// mapping layer; the record itself does not enforce it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// World-space x pan term of the view transform.
    pub offset_x: f64,
    /// World-space y pan term of the view transform.
    pub offset_y: f64,
    /// Abstract zoom level, mapped to a scale factor by the model.
    pub zoom: f64,
    /// Viewport width in logical pixels.
    pub width: f64,
    /// Viewport height in logical pixels.
    pub height: f64,
    /// Device pixels per logical pixel, captured once at creation.
    ///
    /// A display change at runtime is not tracked; hosts that care should
    /// rebuild the camera (and anything mirroring it) when it changes.
    pub device_pixel_ratio: f64,
}

impl Camera {
    /// Creates a camera at the world origin with zoom level `0.0`.
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 0.0,
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Returns the world point at the viewport center.
    #[must_use]
    pub fn center_world(&self) -> Point {
        Point::new(-self.offset_x, -self.offset_y)
    }

    /// Derives the world-space region currently visible.
    ///
    /// The visible half-extent along each axis is half the physical canvas
    /// size divided by the scale: `device_pixel_ratio * size / 2 / scale`,
    /// centered on [`Camera::center_world`]. The region's `min_z` comes
    /// from the model at the current scale.
    #[must_use]
    pub fn visible_region(&self, model: &impl ScaleModel) -> VisibleRegion {
        let scale = model.scale(self.zoom);
        let half_w = self.device_pixel_ratio * self.width / 2.0;
        let half_h = self.device_pixel_ratio * self.height / 2.0;
        let bounds = Rect::new(
            -half_w / scale - self.offset_x,
            -half_h / scale - self.offset_y,
            half_w / scale - self.offset_x,
            half_h / scale - self.offset_y,
        );
        VisibleRegion {
            bounds,
            min_z: model.min_z(scale),
        }
    }

    /// Returns the world point under a cursor position.
    ///
    /// `cursor` is in logical viewport pixels with the origin at the
    /// top-left corner and y growing downward; the result is in world
    /// coordinates with y growing upward.
    #[must_use]
    pub fn world_at(&self, model: &impl ScaleModel, cursor: Point) -> Point {
        let scale = model.scale(self.zoom);
        let px = cursor.x - self.width / 2.0;
        let py = self.height / 2.0 - cursor.y;
        Point::new(
            self.device_pixel_ratio * px / scale - self.offset_x,
            self.device_pixel_ratio * py / scale - self.offset_y,
        )
    }
}
