// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Committed camera fields produced by one input event.
///
/// Input handlers mutate the camera mirror synchronously and return a
/// `CameraCommit` describing which host-visible fields changed, carrying
/// the new values. Each populated field maps one-for-one onto a committed
/// setter in the host: keyboard pans commit a single axis, wheel zooms
/// commit the zoom and both offsets, drags commit both offsets at gesture
/// end, and a clamped-out wheel event commits nothing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraCommit {
    /// New committed `offset_x`, if this event changed it.
    pub offset_x: Option<f64>,
    /// New committed `offset_y`, if this event changed it.
    pub offset_y: Option<f64>,
    /// New committed `zoom`, if this event changed it.
    pub zoom: Option<f64>,
}

impl CameraCommit {
    /// A commit that changes nothing.
    pub const NONE: Self = Self {
        offset_x: None,
        offset_y: None,
        zoom: None,
    };

    /// Returns `true` if no field was committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset_x.is_none() && self.offset_y.is_none() && self.zoom.is_none()
    }
}
