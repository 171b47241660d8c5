// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("lookout_camera requires either the `std` or `libm` feature");

/// Maps an abstract zoom level to a rendering scale and a LOD cutoff.
///
/// The zoom level is an opaque real number chosen by the host (wheel deltas
/// accumulate into it directly); the model turns it into:
///
/// - a **scale** factor in device pixels per world unit, which must be
///   strictly positive and strictly increasing in zoom, and
/// - a **`min_z`** cutoff: the smallest entity extent worth returning from
///   a spatial query at that scale, which bounds result sizes as the view
///   zooms out.
///
/// The model also owns the zoom bounds. Input mapping clamps every zoom
/// mutation through [`ScaleModel::clamp_zoom`], so a camera driven through
/// this crate's siblings never leaves `[min_zoom, max_zoom]`.
pub trait ScaleModel {
    /// Returns the scale factor for a zoom level, in device pixels per
    /// world unit.
    fn scale(&self, zoom: f64) -> f64;

    /// Returns the smallest entity extent worth querying at a scale.
    fn min_z(&self, scale: f64) -> f64;

    /// Returns the inclusive lower zoom bound.
    fn min_zoom(&self) -> f64;

    /// Returns the inclusive upper zoom bound.
    fn max_zoom(&self) -> f64;

    /// Clamps a zoom level into `[min_zoom, max_zoom]`.
    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom(), self.max_zoom())
    }
}

impl<M: ScaleModel + ?Sized> ScaleModel for &M {
    fn scale(&self, zoom: f64) -> f64 {
        (*self).scale(zoom)
    }

    fn min_z(&self, scale: f64) -> f64 {
        (*self).min_z(scale)
    }

    fn min_zoom(&self) -> f64 {
        (*self).min_zoom()
    }

    fn max_zoom(&self) -> f64 {
        (*self).max_zoom()
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        (*self).clamp_zoom(zoom)
    }
}

/// Power-of-two scale model: `scale = 2^(zoom / step)`.
///
/// Every `step` zoom units double the scale, which keeps wheel zooming
/// perceptually even across the whole range. The LOD cutoff is a fixed
/// on-screen footprint: entities smaller than `min_footprint` device pixels
/// at the current scale fall below `min_z` and drop out of queries.
///
/// The defaults (`step = 200`, zoom in `[-1600, 1600]`, footprint `8`)
/// give a scale range of `2^-8` to `2^8` with `min_z` shrinking as the
/// view zooms in. The exact numbers are a starting point, not a contract;
/// hosts with their own zoom curves implement [`ScaleModel`] directly.
///
/// ```rust
/// use lookout_camera::{Exp2Scale, ScaleModel};
///
/// let model = Exp2Scale::default();
/// assert_eq!(model.scale(0.0), 1.0);
/// assert_eq!(model.scale(200.0), 2.0);
/// assert_eq!(model.scale(-200.0), 0.5);
///
/// // Zooming in halves the world-space size of the smallest visible entity.
/// assert_eq!(model.min_z(2.0), model.min_z(1.0) / 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exp2Scale {
    step: f64,
    min_zoom: f64,
    max_zoom: f64,
    min_footprint: f64,
}

impl Exp2Scale {
    /// Creates a model with explicit step, zoom bounds, and LOD footprint.
    ///
    /// `step` is forced positive and the zoom bounds are normalized so that
    /// `min_zoom <= max_zoom`.
    #[must_use]
    pub fn new(step: f64, min_zoom: f64, max_zoom: f64, min_footprint: f64) -> Self {
        let step = step.abs().max(f64::MIN_POSITIVE);
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        Self {
            step,
            min_zoom,
            max_zoom,
            min_footprint,
        }
    }

    /// Returns the zoom distance over which the scale doubles.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the LOD footprint in device pixels.
    #[must_use]
    pub fn min_footprint(&self) -> f64 {
        self.min_footprint
    }
}

impl Default for Exp2Scale {
    fn default() -> Self {
        Self::new(200.0, -1600.0, 1600.0, 8.0)
    }
}

impl ScaleModel for Exp2Scale {
    fn scale(&self, zoom: f64) -> f64 {
        exp2(zoom / self.step)
    }

    fn min_z(&self, scale: f64) -> f64 {
        self.min_footprint / scale
    }

    fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    fn max_zoom(&self) -> f64 {
        self.max_zoom
    }
}

#[cfg(feature = "std")]
#[inline]
fn exp2(x: f64) -> f64 {
    x.exp2()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn exp2(x: f64) -> f64 {
    libm::exp2(x)
}
