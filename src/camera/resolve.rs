//! Applying pending changes and emitting the view matrix.

use super::matrix::ViewMatrix;
use super::mode::CameraMode;
use super::state::Camera;
use crate::math::{CameraMath, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};

/// How close to vertical a direction may get before world-plane movement
/// swaps in a perpendicular axis.
const VERTICAL_EPSILON: f32 = 1e-4;

impl<M: CameraMath> Camera<M> {
    /// Apply pending rotation and movement, then build the view matrix.
    ///
    /// Call once per frame. Both accumulators are cleared and the
    /// orientation is renormalized, so this is also where externally set
    /// non-unit orientations get corrected.
    #[must_use = "resolving consumes pending input; use the matrix or \
                  call resolve_into"]
    pub fn resolve(&mut self) -> ViewMatrix {
        let mut out = ViewMatrix::IDENTITY;
        self.resolve_into(&mut out.0);
        out
    }

    /// Same as [`resolve`](Self::resolve), writing into a caller-owned
    /// buffer instead.
    pub fn resolve_into(&mut self, out: &mut [f32; 16]) {
        if self.mode.clamps_any() {
            self.clamp_pending_rotation();
        }
        self.apply_rotation();
        self.apply_movement();
        self.write_view_matrix(out);
    }

    /// Shrink the pending rotation so the world-space angles stay within
    /// the enabled limits.
    ///
    /// Angles come from an Euler decomposition and inherit its ambiguity
    /// near a roll of ±π/2.
    fn clamp_pending_rotation(&mut self) {
        let [pitch, yaw, roll] =
            M::vec3_to_array(M::to_euler(self.orientation));
        let [mut dp, mut dy, mut dr] = M::vec3_to_array(self.rotation);

        let limits = self.limits;
        if self.mode.contains(CameraMode::CLAMP_PITCH) {
            let clamped = limits.pitch.clamp_delta::<M>(pitch, dp);
            dp = clamp_logged("pitch", dp, clamped);
        }
        if self.mode.contains(CameraMode::CLAMP_YAW) {
            let clamped = limits.yaw.clamp_delta::<M>(yaw, dy);
            dy = clamp_logged("yaw", dy, clamped);
        }
        if self.mode.contains(CameraMode::CLAMP_ROLL) {
            let clamped = limits.roll.clamp_delta::<M>(roll, dr);
            dr = clamp_logged("roll", dr, clamped);
        }

        self.rotation = M::vec3(dp, dy, dr);
    }

    fn apply_rotation(&mut self) {
        let [dp, dy, dr] = M::vec3_to_array(self.rotation);
        let pitch = M::from_axis_angle(M::vec3_from_array(WORLD_RIGHT), dp);
        let yaw = M::from_axis_angle(M::vec3_from_array(WORLD_UP), dy);

        let orientation = if self.mode.contains(CameraMode::DISABLE_ROLL) {
            // Pitch about the camera's own right axis, yaw about world up.
            // In this order the two never combine into roll.
            M::mul_quat(yaw, M::mul_quat(self.orientation, pitch))
        } else {
            let roll =
                M::from_axis_angle(M::vec3_from_array(WORLD_FORWARD), dr);
            M::mul_quat(
                M::mul_quat(M::mul_quat(self.orientation, pitch), yaw),
                roll,
            )
        };

        self.orientation = M::normalize_quat(orientation);
        self.rotation = M::zero();
    }

    fn apply_movement(&mut self) {
        let mut forward = self.forward();
        let mut up = self.up();
        let mut right = self.right();

        if self.mode.contains(CameraMode::MOVE_IN_WORLD_PLANE) {
            (forward, right) = level_axes::<M>(forward, up, right);
            up = M::vec3_from_array(WORLD_UP);
        }

        let [df, du, dr] = M::vec3_to_array(self.movement);
        let offset = M::add(
            M::add(M::scale(forward, df), M::scale(up, du)),
            M::scale(right, dr),
        );
        self.target_position = M::add(self.target_position, offset);
        self.movement = M::zero();
    }

    fn write_view_matrix(&self, out: &mut [f32; 16]) {
        // The view rotates world space into camera space: the inverse of
        // the orientation.
        let inverse = M::invert(self.orientation);
        *out = M::rotation_matrix(inverse);

        let translation = M::rotate(inverse, M::negate(self.eye()));
        out[12..15].copy_from_slice(&M::vec3_to_array(translation));
    }
}

fn clamp_logged(axis: &str, requested: f32, clamped: f32) -> f32 {
    if clamped != requested {
        log::trace!("{axis} delta clamped from {requested} to {clamped}");
    }
    clamped
}

/// Forward and right flattened onto the horizontal plane.
///
/// When either axis points (nearly) straight up or down its horizontal part
/// vanishes, so the camera's up axis, which is horizontal in that pose,
/// stands in for it.
fn level_axes<M: CameraMath>(
    forward: M::Vec3,
    up: M::Vec3,
    right: M::Vec3,
) -> (M::Vec3, M::Vec3) {
    let mut forward = forward;
    let mut right = right;
    let forward_y = M::vec3_to_array(forward)[1];
    let right_y = M::vec3_to_array(right)[1];

    if forward_y > 1.0 - VERTICAL_EPSILON {
        log::trace!("world-plane move while looking straight up");
        forward = M::negate(up);
    } else if forward_y < -1.0 + VERTICAL_EPSILON {
        log::trace!("world-plane move while looking straight down");
        forward = up;
    } else if right_y > 1.0 - VERTICAL_EPSILON {
        right = up;
    } else if right_y < -1.0 + VERTICAL_EPSILON {
        right = M::negate(up);
    }

    (flatten::<M>(forward), flatten::<M>(right))
}

fn flatten<M: CameraMath>(v: M::Vec3) -> M::Vec3 {
    let [x, _, z] = M::vec3_to_array(v);
    M::normalize(M::vec3(x, 0.0, z))
}
