// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_camera --heading-base-level=0

//! Lookout Camera: camera state and visible-region math for infinite 2D canvases.
//!
//! This crate provides the headless core of a pannable/zoomable view over an
//! unbounded world plane:
//!
//! - [`Camera`]: a plain record of pan offsets, zoom level, viewport size,
//!   and device pixel ratio.
//! - [`ScaleModel`]: the contract mapping an abstract zoom level to a
//!   rendering scale factor and a level-of-detail cutoff, and owning the
//!   zoom clamping bounds.
//! - [`VisibleRegion`]: the world-space rectangle (plus LOD cutoff)
//!   currently visible through the camera, derived on demand.
//! - [`Exp2Scale`]: a built-in power-of-two scale model for documentation,
//!   tests, and hosts without bespoke zoom curves.
//!
//! The camera does **not** own input handling, scheduling, or rendering.
//! Input mapping lives in `lookout_input`; the refresh/render assembly
//! lives in `lookout_controller`.
//!
//! ## Coordinate conventions
//!
//! - Cursor positions are logical viewport pixels with the origin at the
//!   top-left corner and y growing downward.
//! - World coordinates have y growing upward; the viewport center sits at
//!   the world point `(-offset_x, -offset_y)`.
//! - The scale factor is *device* pixels per world unit, so the visible
//!   world extent along each axis is `device_pixel_ratio * size / scale`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use lookout_camera::{Camera, Exp2Scale, ScaleModel};
//!
//! let model = Exp2Scale::default();
//! let mut camera = Camera::new(800.0, 600.0, 1.0);
//!
//! // Zoom level 0 maps to scale 1.0 in the default model.
//! assert_eq!(model.scale(camera.zoom), 1.0);
//!
//! // The freshly created camera is centered on the world origin.
//! let region = camera.visible_region(&model);
//! assert_eq!(region.min_x(), -400.0);
//! assert_eq!(region.max_x(), 400.0);
//! assert_eq!(region.min_y(), -300.0);
//! assert_eq!(region.max_y(), 300.0);
//!
//! // The world point under the viewport center is the negated offset.
//! camera.offset_x = 25.0;
//! let world = camera.world_at(&model, Point::new(400.0, 300.0));
//! assert_eq!(world, Point::new(-25.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Scale is always derived from zoom through the model and never stored,
//!   so the two cannot drift apart.
//! - The camera record is transparent on purpose: input mappers and
//!   controllers in sibling crates mutate it directly, and hosts snapshot
//!   it for committed state.
//! - All fields are expected to be finite; `width`/`height` non-negative;
//!   `device_pixel_ratio` and the model's scale strictly positive.
//!   Degenerate values produce degenerate regions rather than panics.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod region;
mod scale;

pub use camera::Camera;
pub use region::VisibleRegion;
pub use scale::{Exp2Scale, ScaleModel};
