// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport controller and its committed-state plumbing.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use lookout_camera::{Camera, ScaleModel, VisibleRegion};
use lookout_debounce::Debounce;
use lookout_input::{CameraCommit, DragPan, PanKey, pan_by_key, zoom_by_wheel};

use crate::host::{FrameParams, RenderTarget, SpatialIndex};

/// Default settle window for the refresh debounce, in host ticks.
pub const REFRESH_SETTLE_TICKS: u64 = 100;

/// Default max-wait cap for the refresh debounce, in host ticks.
///
/// Under a sustained stream of camera commits the visible set is still
/// re-queried at least once per this interval.
pub const REFRESH_MAX_WAIT_TICKS: u64 = 200;

/// The durable camera state owned by the host.
///
/// The controller keeps a live [`Camera`] mirror for per-event math and this
/// committed snapshot for change detection. Hosts that persist or share the
/// camera (an app store, a URL, a collaborating peer) hold one of these and
/// feed external changes back through
/// [`ViewportController::sync_committed`].
///
/// The device pixel ratio is deliberately absent: it is a property of the
/// surface the controller was created for, not of the saved view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommittedCamera {
    /// Horizontal camera offset in world units.
    pub offset_x: f64,
    /// Vertical camera offset in world units.
    pub offset_y: f64,
    /// Zoom in model units (see [`ScaleModel`]).
    pub zoom: f64,
    /// Viewport width in logical pixels.
    pub width: f64,
    /// Viewport height in logical pixels.
    pub height: f64,
}

impl From<Camera> for CommittedCamera {
    fn from(camera: Camera) -> Self {
        Self {
            offset_x: camera.offset_x,
            offset_y: camera.offset_y,
            zoom: camera.zoom,
            width: camera.width,
            height: camera.height,
        }
    }
}

/// A point-in-time snapshot of controller internals for debug overlays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerDebugInfo {
    /// The live camera mirror, including any uncommitted drag movement.
    pub camera: Camera,
    /// The last committed camera state.
    pub committed: CommittedCamera,
    /// The region currently on screen.
    pub visible_region: VisibleRegion,
    /// How many ids the last spatial query produced.
    pub visible_id_count: usize,
    /// Bumped once per spatial query.
    pub refresh_revision: u64,
    /// Whether a debounced refresh window is open.
    pub refresh_pending: bool,
    /// Whether a drag pan is in progress.
    pub dragging: bool,
}

/// Drives a pannable, zoomable viewport over a host-provided spatial index.
///
/// The controller owns the live [`Camera`], routes input events through the
/// `lookout_input` helpers, debounces the resulting camera commits into
/// spatial queries, and hands frames to a [`RenderTarget`]. The host pumps
/// it: events as they arrive, [`poll`](Self::poll) with the current tick
/// every frame, and [`frame`](Self::frame) to draw.
///
/// Construction is inert. Feed the initial state through
/// [`sync_committed`](Self::sync_committed) to run the first query.
#[derive(Clone, Debug)]
pub struct ViewportController<M, I> {
    model: M,
    index: I,
    camera: Camera,
    committed: CommittedCamera,
    drag: DragPan,
    refresh: Debounce<VisibleRegion>,
    ids: Vec<u32>,
    refresh_revision: u64,
    primed: bool,
}

impl<M: ScaleModel, I: SpatialIndex> ViewportController<M, I> {
    /// Create a controller with the default refresh cadence
    /// ([`REFRESH_SETTLE_TICKS`] / [`REFRESH_MAX_WAIT_TICKS`]).
    ///
    /// `camera` fixes the viewport size and device pixel ratio for this
    /// controller's lifetime; a surface moved to a display with a different
    /// ratio warrants a fresh controller.
    pub fn new(model: M, index: I, camera: Camera) -> Self {
        Self::with_refresh_policy(
            model,
            index,
            camera,
            REFRESH_SETTLE_TICKS,
            REFRESH_MAX_WAIT_TICKS,
        )
    }

    /// Create a controller with a custom refresh debounce policy.
    ///
    /// `settle` and `max_wait` are in host ticks, as for
    /// [`Debounce::new`].
    pub fn with_refresh_policy(
        model: M,
        index: I,
        camera: Camera,
        settle: u64,
        max_wait: u64,
    ) -> Self {
        Self {
            model,
            index,
            camera,
            committed: camera.into(),
            drag: DragPan::default(),
            refresh: Debounce::new(settle, max_wait),
            ids: Vec::new(),
            refresh_revision: 0,
            primed: false,
        }
    }

    /// The live camera, including any uncommitted drag movement.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The last committed camera state.
    #[must_use]
    pub fn committed(&self) -> CommittedCamera {
        self.committed
    }

    /// The scale model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The spatial index.
    #[must_use]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Mutable access to the spatial index, for hosts that edit entities in
    /// place. Follow edits with [`request_refresh`](Self::request_refresh)
    /// so the visible set catches up.
    pub fn index_mut(&mut self) -> &mut I {
        &mut self.index
    }

    /// Ids from the most recent spatial query, in the order the index
    /// produced them. Empty until the first query runs.
    #[must_use]
    pub fn visible_ids(&self) -> &[u32] {
        &self.ids
    }

    /// Bumped once per spatial query, so hosts can cheaply detect a new
    /// visible set without diffing ids.
    #[must_use]
    pub fn refresh_revision(&self) -> u64 {
        self.refresh_revision
    }

    /// Whether a drag pan is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The world region currently on screen, derived from the live camera.
    #[must_use]
    pub fn visible_region(&self) -> VisibleRegion {
        self.camera.visible_region(&self.model)
    }

    /// When the open refresh window can next fire, if one is open.
    ///
    /// Hosts without a steady frame loop can sleep until this tick instead
    /// of polling blind.
    #[must_use]
    pub fn next_refresh_deadline(&self) -> Option<u64> {
        self.refresh.next_deadline()
    }

    /// Snapshot the controller for a debug overlay.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            camera: self.camera,
            committed: self.committed,
            visible_region: self.visible_region(),
            visible_id_count: self.ids.len(),
            refresh_revision: self.refresh_revision,
            refresh_pending: self.refresh.is_pending(),
            dragging: self.drag.is_dragging(),
        }
    }

    /// Pan one step with an arrow key and schedule a refresh.
    ///
    /// Returns the commit for the host to persist.
    pub fn pan_by_key(&mut self, key: PanKey, now: u64) -> CameraCommit {
        let commit = pan_by_key(&mut self.camera, &self.model, key);
        self.apply_commit(&commit, now);
        commit
    }

    /// Zoom toward `cursor` by a wheel delta and schedule a refresh.
    ///
    /// The world point under the cursor stays put. At a zoom bound this is
    /// a complete no-op and returns an empty commit.
    pub fn zoom_by_wheel(&mut self, delta: f64, cursor: Point, now: u64) -> CameraCommit {
        let commit = zoom_by_wheel(&mut self.camera, &self.model, delta, cursor);
        self.apply_commit(&commit, now);
        commit
    }

    /// Begin a drag pan.
    pub fn pointer_down(&mut self) {
        self.drag.pointer_down();
    }

    /// Apply pointer movement while dragging.
    ///
    /// Only the live camera moves; nothing is committed and no refresh is
    /// scheduled, so the visible set stays stable for the whole gesture.
    /// Ignored when no drag is in progress.
    pub fn pointer_move(&mut self, movement: Vec2) {
        self.drag.pointer_move(&mut self.camera, &self.model, movement);
    }

    /// End a drag pan, committing the accumulated offsets.
    pub fn pointer_up(&mut self, now: u64) -> CameraCommit {
        let commit = self.drag.pointer_up(&self.camera);
        self.apply_commit(&commit, now);
        commit
    }

    /// Treat the pointer leaving the surface as the end of any drag.
    pub fn pointer_leave(&mut self, now: u64) -> CameraCommit {
        let commit = self.drag.pointer_leave(&self.camera);
        self.apply_commit(&commit, now);
        commit
    }

    /// Adopt a committed camera state from outside the controller.
    ///
    /// Zoom is clamped to the model's bounds before comparing. A snapshot
    /// equal to the current committed state is ignored, which makes echoes
    /// of this controller's own commits free. The first sync after
    /// construction always applies, so it doubles as the mount step that
    /// runs the initial query.
    ///
    /// The live camera adopts the snapshot wholesale, even mid-drag; an
    /// external change wins over movement that was never committed.
    pub fn sync_committed(&mut self, committed: CommittedCamera, now: u64) {
        let committed = CommittedCamera {
            zoom: self.model.clamp_zoom(committed.zoom),
            ..committed
        };
        if self.primed && committed == self.committed {
            return;
        }
        self.committed = committed;
        self.camera.offset_x = committed.offset_x;
        self.camera.offset_y = committed.offset_y;
        self.camera.zoom = committed.zoom;
        self.camera.width = committed.width;
        self.camera.height = committed.height;
        self.schedule_refresh(now);
    }

    /// Resize the viewport in logical pixels. Equal dimensions are ignored.
    pub fn set_viewport_size(&mut self, width: f64, height: f64, now: u64) {
        if width == self.camera.width && height == self.camera.height {
            return;
        }
        self.camera.width = width;
        self.camera.height = height;
        self.committed.width = width;
        self.committed.height = height;
        self.schedule_refresh(now);
    }

    /// Schedule a refresh of the visible set without a camera change, for
    /// hosts that mutated the index through
    /// [`index_mut`](Self::index_mut).
    ///
    /// Goes through the same debounce as camera-driven refreshes.
    pub fn request_refresh(&mut self, now: u64) {
        self.schedule_refresh(now);
    }

    /// Pump the refresh schedule. Returns `true` if a spatial query ran.
    ///
    /// Call once per frame (or timer wakeup) with the current tick.
    pub fn poll(&mut self, now: u64) -> bool {
        if let Some(region) = self.refresh.poll(now) {
            self.run_query(&region);
            return true;
        }
        false
    }

    /// Draw one frame into `target`.
    ///
    /// Pure read: the camera transform and the current visible ids go out,
    /// nothing in the controller changes, so drawing twice yields identical
    /// frames.
    pub fn frame(&self, target: &mut impl RenderTarget) {
        let params = self.frame_params();
        target.render(&params, &self.ids);
    }

    /// The transform and physical surface size for the current frame.
    #[must_use]
    pub fn frame_params(&self) -> FrameParams {
        FrameParams {
            offset_x: self.camera.offset_x,
            offset_y: self.camera.offset_y,
            scale: self.model.scale(self.camera.zoom),
            pixel_width: self.camera.device_pixel_ratio * self.camera.width,
            pixel_height: self.camera.device_pixel_ratio * self.camera.height,
        }
    }

    fn apply_commit(&mut self, commit: &CameraCommit, now: u64) {
        if commit.is_empty() {
            return;
        }
        if let Some(offset_x) = commit.offset_x {
            self.committed.offset_x = offset_x;
        }
        if let Some(offset_y) = commit.offset_y {
            self.committed.offset_y = offset_y;
        }
        if let Some(zoom) = commit.zoom {
            self.committed.zoom = zoom;
        }
        self.schedule_refresh(now);
    }

    fn schedule_refresh(&mut self, now: u64) {
        self.primed = true;
        let region = self.camera.visible_region(&self.model);
        if let Some(region) = self.refresh.call(region, now) {
            self.run_query(&region);
        }
    }

    fn run_query(&mut self, region: &VisibleRegion) {
        self.ids.clear();
        self.index.query_into(region, &mut self.ids);
        self.refresh_revision = self.refresh_revision.wrapping_add(1);
    }
}
