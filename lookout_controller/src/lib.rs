// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_controller --heading-base-level=0

//! Lookout Controller: the assembled viewport loop for infinite 2D canvases.
//!
//! [`ViewportController`] ties the sibling crates together into one
//! host-pumped state machine:
//!
//! - It owns the live [`Camera`](lookout_camera::Camera) and routes keyboard,
//!   wheel, and pointer events through the `lookout_input` mappers.
//! - Camera commits feed a `lookout_debounce` window
//!   ([`REFRESH_SETTLE_TICKS`] / [`REFRESH_MAX_WAIT_TICKS`]), so bursts of
//!   movement coalesce into few [`SpatialIndex`] queries while sustained
//!   movement still refreshes on a bounded cadence.
//! - Query results replace the visible id set wholesale, and
//!   [`frame`](ViewportController::frame) hands the current transform and
//!   ids to a [`RenderTarget`].
//!
//! The host supplies the index and render target, pumps events as they
//! arrive, calls [`poll`](ViewportController::poll) with the current tick
//! every frame, and mirrors committed state through
//! [`sync_committed`](ViewportController::sync_committed).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use lookout_camera::{Camera, Exp2Scale, VisibleRegion};
//! use lookout_controller::{
//!     CommittedCamera, FrameParams, RenderTarget, SpatialIndex, ViewportController,
//! };
//!
//! // A toy index: a 10x10 grid of unit-footprint-10 cells over [0, 100]^2.
//! struct Grid;
//! impl SpatialIndex for Grid {
//!     fn query_into(&mut self, region: &VisibleRegion, out: &mut Vec<u32>) {
//!         for id in 0..100u32 {
//!             let x = f64::from(id % 10) * 10.0;
//!             let y = f64::from(id / 10) * 10.0;
//!             let cell = Rect::new(x, y, x + 10.0, y + 10.0);
//!             if 10.0 >= region.min_z && cell.intersect(region.bounds).area() > 0.0 {
//!                 out.push(id);
//!             }
//!         }
//!     }
//! }
//!
//! let camera = Camera::new(800.0, 600.0, 1.0);
//! let mut controller = ViewportController::new(Exp2Scale::default(), Grid, camera);
//!
//! // Mount: push the initial committed state; the leading query runs now.
//! controller.sync_committed(CommittedCamera::from(camera), 0);
//! assert_eq!(controller.visible_ids().len(), 100);
//!
//! // Input maps to commits; refreshes are debounced behind the scenes.
//! let commit = controller.zoom_by_wheel(50.0, Point::new(500.0, 300.0), 10);
//! assert!(commit.zoom.is_some());
//! assert!(controller.poll(250));
//!
//! // Frames are pure reads of the current transform and visible set.
//! struct Capture(Vec<u32>);
//! impl RenderTarget for Capture {
//!     fn render(&mut self, _params: &FrameParams, ids: &[u32]) {
//!         self.0 = ids.to_vec();
//!     }
//! }
//! let mut capture = Capture(Vec::new());
//! controller.frame(&mut capture);
//! assert_eq!(capture.0.len(), controller.visible_ids().len());
//! ```
//!
//! ## Design notes
//!
//! - The controller never reads a clock. Every entry point that can
//!   schedule or fire a refresh takes `now` in host ticks, which keeps the
//!   whole loop deterministic under test.
//! - Spatial queries run synchronously inside
//!   [`poll`](ViewportController::poll) (or on a leading edge, inside the
//!   scheduling call itself), so the id set always corresponds to a region
//!   the camera actually occupied. There is no in-flight result to arrive
//!   stale.
//! - Drag movement pans the live camera only. The committed state, and with
//!   it the refresh schedule, sees a single commit when the gesture ends.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod controller;
mod host;

pub use controller::{
    CommittedCamera, ControllerDebugInfo, REFRESH_MAX_WAIT_TICKS, REFRESH_SETTLE_TICKS,
    ViewportController,
};
pub use host::{FrameParams, RenderTarget, SpatialIndex};
