// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts the embedding host fills in.

use alloc::vec::Vec;

use lookout_camera::VisibleRegion;

/// A queryable store of world-space entities.
///
/// The controller owns *when* to query (its debounced refresh schedule) and
/// hands the index a [`VisibleRegion`] describing *what* is on screen. The
/// index appends every entity id whose geometry intersects `region.bounds`
/// and whose footprint is worth drawing at `region.min_z`.
///
/// `out` is cleared by the caller before each query, so implementations only
/// append. The same buffer is reused across queries to avoid reallocating.
pub trait SpatialIndex {
    /// Append the ids of all entities visible in `region` to `out`.
    fn query_into(&mut self, region: &VisibleRegion, out: &mut Vec<u32>);
}

impl<T: SpatialIndex + ?Sized> SpatialIndex for &mut T {
    fn query_into(&mut self, region: &VisibleRegion, out: &mut Vec<u32>) {
        (**self).query_into(region, out);
    }
}

/// Everything a renderer needs to draw one frame.
///
/// Offsets and scale are in the same convention as
/// [`Camera`](lookout_camera::Camera): world units for offsets, device pixels
/// per world unit for `scale`. The pixel dimensions are the viewport's
/// *physical* size, logical size times the device pixel ratio, which is what
/// a backing surface is allocated at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Horizontal camera offset in world units.
    pub offset_x: f64,
    /// Vertical camera offset in world units.
    pub offset_y: f64,
    /// Device pixels per world unit.
    pub scale: f64,
    /// Viewport width in device pixels.
    pub pixel_width: f64,
    /// Viewport height in device pixels.
    pub pixel_height: f64,
}

/// A sink for rendered frames.
///
/// [`ViewportController::frame`](crate::ViewportController::frame) calls
/// [`render`](Self::render) with the current camera transform and the ids
/// from the most recent spatial query. Drawing the same frame twice must be
/// safe; the controller never mutates its state on the frame path.
pub trait RenderTarget {
    /// Draw one frame.
    fn render(&mut self, params: &FrameParams, ids: &[u32]);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn render(&mut self, params: &FrameParams, ids: &[u32]) {
        (**self).render(params, ids);
    }
}
