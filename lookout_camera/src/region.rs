// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// World-space region visible through a camera, plus the LOD cutoff.
///
/// A `VisibleRegion` is a transient value derived from camera state via
/// [`Camera::visible_region`](crate::Camera::visible_region). It carries
/// everything a spatial query needs: the axis-aligned bounds and the
/// smallest entity extent worth returning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRegion {
    /// Axis-aligned world-space bounds. `x0`/`y0` hold the minimum visible
    /// coordinates, `x1`/`y1` the maximum (world y grows upward).
    pub bounds: Rect,
    /// Smallest entity extent worth returning at the current scale.
    pub min_z: f64,
}

impl VisibleRegion {
    /// Returns the minimum visible world-space x coordinate.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.bounds.x0
    }

    /// Returns the maximum visible world-space x coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.bounds.x1
    }

    /// Returns the minimum visible world-space y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.bounds.y0
    }

    /// Returns the maximum visible world-space y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.bounds.y1
    }
}
