// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use lookout_camera::{Camera, ScaleModel};

use crate::commit::CameraCommit;

/// Pointer-drag pan gesture.
///
/// While a drag is active, every pointer movement pans the camera mirror
/// immediately so the content tracks the pointer with zero latency, but
/// nothing is committed: the single commit for the whole gesture happens
/// when the pointer is released (or leaves the surface). This keeps
/// host-side committed state from churning on every movement event while
/// the on-screen result stays smooth.
///
/// Events outside an active gesture are no-ops: moves without a preceding
/// [`DragPan::pointer_down`] are ignored, and release events while idle
/// commit nothing.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::Vec2;
/// use lookout_camera::{Camera, Exp2Scale};
/// use lookout_input::DragPan;
///
/// let model = Exp2Scale::default();
/// let mut camera = Camera::new(800.0, 600.0, 1.0);
/// let mut drag = DragPan::default();
///
/// drag.pointer_down();
/// drag.pointer_move(&mut camera, &model, Vec2::new(30.0, -12.0));
/// drag.pointer_move(&mut camera, &model, Vec2::new(5.0, 0.0));
///
/// // The mirror moved, and release commits the final offsets once.
/// let commit = drag.pointer_up(&camera);
/// assert_eq!(commit.offset_x, Some(35.0));
/// assert_eq!(commit.offset_y, Some(12.0));
/// assert_eq!(commit.zoom, None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DragPan {
    dragging: bool,
}

impl DragPan {
    /// Begins a drag gesture.
    pub fn pointer_down(&mut self) {
        self.dragging = true;
    }

    /// Applies a pointer movement delta to the camera while dragging.
    ///
    /// `movement` is in logical pixels with screen orientation (y down).
    /// The content follows the pointer: offsets move by
    /// `device_pixel_ratio * movement / scale`, with y negated to convert
    /// into world orientation. Ignored when no drag is active.
    pub fn pointer_move(&self, camera: &mut Camera, model: &impl ScaleModel, movement: Vec2) {
        if !self.dragging {
            return;
        }
        let scale = model.scale(camera.zoom);
        camera.offset_x += camera.device_pixel_ratio * movement.x / scale;
        camera.offset_y -= camera.device_pixel_ratio * movement.y / scale;
    }

    /// Ends the gesture on pointer release, committing both offsets.
    pub fn pointer_up(&mut self, camera: &Camera) -> CameraCommit {
        self.release(camera)
    }

    /// Ends the gesture when the pointer leaves the surface.
    ///
    /// Without this, a release outside the surface would leave the gesture
    /// stuck active and the pan uncommitted.
    pub fn pointer_leave(&mut self, camera: &Camera) -> CameraCommit {
        self.release(camera)
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn release(&mut self, camera: &Camera) -> CameraCommit {
        if !self.dragging {
            return CameraCommit::NONE;
        }
        self.dragging = false;
        CameraCommit {
            offset_x: Some(camera.offset_x),
            offset_y: Some(camera.offset_y),
            zoom: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use lookout_camera::{Camera, Exp2Scale};

    use super::DragPan;
    use crate::commit::CameraCommit;

    #[test]
    fn fresh_state_is_not_dragging() {
        let drag = DragPan::default();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn move_without_down_is_ignored() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 1.0);
        let drag = DragPan::default();

        drag.pointer_move(&mut camera, &model, Vec2::new(50.0, 50.0));
        assert_eq!(camera.offset_x, 0.0);
        assert_eq!(camera.offset_y, 0.0);
    }

    #[test]
    fn release_without_down_commits_nothing() {
        let camera = Camera::new(800.0, 600.0, 1.0);
        let mut drag = DragPan::default();

        assert_eq!(drag.pointer_up(&camera), CameraCommit::NONE);
        assert_eq!(drag.pointer_leave(&camera), CameraCommit::NONE);
    }

    #[test]
    fn moves_mutate_mirror_without_committing() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 1.0);
        let mut drag = DragPan::default();

        drag.pointer_down();
        assert!(drag.is_dragging());

        drag.pointer_move(&mut camera, &model, Vec2::new(10.0, 4.0));
        // Content follows the pointer: +x adds, +y (screen down) subtracts.
        assert_eq!(camera.offset_x, 10.0);
        assert_eq!(camera.offset_y, -4.0);

        drag.pointer_move(&mut camera, &model, Vec2::new(-2.5, -4.0));
        assert_eq!(camera.offset_x, 7.5);
        assert_eq!(camera.offset_y, 0.0);
    }

    #[test]
    fn release_commits_accumulated_offsets_once() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 1.0);
        let mut drag = DragPan::default();

        drag.pointer_down();
        drag.pointer_move(&mut camera, &model, Vec2::new(30.0, -12.0));
        let commit = drag.pointer_up(&camera);

        assert!(!drag.is_dragging());
        assert_eq!(commit.offset_x, Some(30.0));
        assert_eq!(commit.offset_y, Some(12.0));
        assert_eq!(commit.zoom, None);

        // A second release commits nothing.
        assert_eq!(drag.pointer_up(&camera), CameraCommit::NONE);
    }

    #[test]
    fn leave_while_dragging_commits_like_release() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 1.0);
        let mut drag = DragPan::default();

        drag.pointer_down();
        drag.pointer_move(&mut camera, &model, Vec2::new(-8.0, 0.0));
        let commit = drag.pointer_leave(&camera);

        assert!(!drag.is_dragging());
        assert_eq!(commit.offset_x, Some(-8.0));
        assert_eq!(commit.offset_y, Some(0.0));
    }

    #[test]
    fn drag_deltas_scale_with_device_pixel_ratio_and_zoom() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 2.0);
        camera.zoom = 200.0; // scale 2
        let mut drag = DragPan::default();

        drag.pointer_down();
        drag.pointer_move(&mut camera, &model, Vec2::new(10.0, 0.0));
        // dpr * dx / scale = 2 * 10 / 2.
        assert_eq!(camera.offset_x, 10.0);

        camera.zoom = -200.0; // scale 0.5
        drag.pointer_move(&mut camera, &model, Vec2::new(10.0, 0.0));
        // 2 * 10 / 0.5 = 40 more world units for the same screen distance.
        assert_eq!(camera.offset_x, 50.0);
    }

    #[test]
    fn down_during_drag_keeps_gesture_active() {
        let model = Exp2Scale::default();
        let mut camera = Camera::new(800.0, 600.0, 1.0);
        let mut drag = DragPan::default();

        drag.pointer_down();
        drag.pointer_move(&mut camera, &model, Vec2::new(1.0, 0.0));
        drag.pointer_down();
        assert!(drag.is_dragging());
        drag.pointer_move(&mut camera, &model, Vec2::new(1.0, 0.0));
        assert_eq!(camera.offset_x, 2.0);
    }
}
