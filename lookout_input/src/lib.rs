// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_input --heading-base-level=0

//! Lookout Input: raw input events mapped onto camera state.
//!
//! This crate turns keyboard, wheel, and pointer-drag events into mutations
//! of a [`Camera`], reporting which host-visible fields each event committed
//! via [`CameraCommit`]:
//!
//! - [`pan_by_key`]: arrow-key panning by a fixed logical-pixel step.
//! - [`zoom_by_wheel`]: wheel zooming that keeps the world point under the
//!   cursor fixed (zoom-to-cursor), clamped to the model's zoom bounds.
//! - [`DragPan`]: a pointer-drag gesture that pans the camera smoothly
//!   while the button is held and commits once at gesture end.
//!
//! The crate is deliberately event-source-agnostic: there is no `winit` or
//! web dependency here. Hosts translate their own event types into these
//! calls and forward the returned commits into whatever owns committed
//! camera state (see `lookout_controller` for the standard wiring).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use lookout_camera::{Camera, Exp2Scale};
//! use lookout_input::{pan_by_key, zoom_by_wheel, PanKey};
//!
//! let model = Exp2Scale::default();
//! let mut camera = Camera::new(800.0, 600.0, 1.0);
//!
//! // One arrow-key step pans by 10 logical pixels worth of world units.
//! let commit = pan_by_key(&mut camera, &model, PanKey::Left);
//! assert_eq!(commit.offset_x, Some(10.0));
//! assert_eq!(commit.offset_y, None);
//!
//! // Wheel zoom keeps the world point under the cursor fixed.
//! let cursor = Point::new(500.0, 300.0);
//! let before = camera.world_at(&model, cursor);
//! let commit = zoom_by_wheel(&mut camera, &model, 50.0, cursor);
//! let after = camera.world_at(&model, cursor);
//! assert!(commit.zoom.is_some());
//! assert!((after.x - before.x).abs() < 1e-12);
//! assert!((after.y - before.y).abs() < 1e-12);
//! ```
//!
//! ## Sign conventions
//!
//! The camera's offsets are the pan terms of the view transform: the
//! viewport is centered on `(-offset_x, -offset_y)`. Up and Left add their
//! key's step to the offset, Down and Right subtract it, so pressing Right
//! shifts the visible region toward larger world x while pressing Up
//! shifts it toward smaller world y (the scene slides upward on screen).
//! A drag moves the content with the pointer; its y delta enters negated
//! because screen y grows down while world y grows up.
//!
//! This crate is `no_std`.

#![no_std]

mod commit;
mod drag;
mod keyboard;
mod wheel;

pub use commit::CameraCommit;
pub use drag::DragPan;
pub use keyboard::{PAN_STEP_PX, PanKey, pan_by_key};
pub use wheel::zoom_by_wheel;
