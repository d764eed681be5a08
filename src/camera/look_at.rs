//! Direct orientation from a view direction.

use super::state::Camera;
use crate::math::CameraMath;

impl<M: CameraMath> Camera<M> {
    /// Turn the camera to look along `forward`, with `up` as the vertical
    /// hint.
    ///
    /// Only the orientation changes: the target position, target distance
    /// and pending deltas are untouched, so the camera swings around its
    /// target instead of moving. Both inputs must be unit length; `up` need
    /// not be orthogonal to `forward` but must not be parallel to it.
    pub fn look_at(&mut self, forward: M::Vec3, up: M::Vec3) {
        let right = M::normalize(M::cross(up, forward));
        let up = M::cross(forward, right);
        self.orientation = quat_from_basis::<M>(right, up, forward);
    }
}

/// Rotation taking the world axes onto the orthonormal basis
/// `(right, up, forward)`.
///
/// Uses the trace of the rotation matrix when it is positive and otherwise
/// branches on the largest diagonal element, which keeps the divisor away
/// from zero.
fn quat_from_basis<M: CameraMath>(
    right: M::Vec3,
    up: M::Vec3,
    forward: M::Vec3,
) -> M::Quat {
    // mRC: row R, column C of the matrix with columns (right, up, forward).
    let [m00, m10, m20] = M::vec3_to_array(right);
    let [m01, m11, m21] = M::vec3_to_array(up);
    let [m02, m12, m22] = M::vec3_to_array(forward);

    let trace = m00 + m11 + m22;
    if trace > 0.0 {
        let s = 0.5 / M::sqrt(trace + 1.0);
        M::quat(
            (m21 - m12) * s,
            (m02 - m20) * s,
            (m10 - m01) * s,
            0.25 / s,
        )
    } else if m00 > m11 && m00 > m22 {
        let s = 2.0 * M::sqrt(1.0 + m00 - m11 - m22);
        M::quat(
            0.25 * s,
            (m01 + m10) / s,
            (m02 + m20) / s,
            (m21 - m12) / s,
        )
    } else if m11 > m22 {
        let s = 2.0 * M::sqrt(1.0 + m11 - m00 - m22);
        M::quat(
            (m01 + m10) / s,
            0.25 * s,
            (m12 + m21) / s,
            (m02 - m20) / s,
        )
    } else {
        let s = 2.0 * M::sqrt(1.0 + m22 - m00 - m11);
        M::quat(
            (m02 + m20) / s,
            (m12 + m21) / s,
            0.25 * s,
            (m10 - m01) / s,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_1_SQRT_2;

    use glam::{Quat, Vec3};

    use super::*;
    use crate::math::{ArrayMath, GlamMath};

    fn round_trip(forward: Vec3, up: Vec3) {
        let mut camera: Camera = Camera::new();
        camera.look_at(forward, up);
        let got = camera.forward();
        assert!(
            got.abs_diff_eq(forward, 1e-5),
            "look_at({forward}, {up}) -> forward {got}"
        );
        let len = camera.orientation().length();
        assert!((len - 1.0).abs() < 1e-5, "non-unit orientation {len}");
    }

    #[test]
    fn axis_aligned_round_trips() {
        round_trip(Vec3::Z, Vec3::Y);
        round_trip(Vec3::NEG_Z, Vec3::Y);
        round_trip(Vec3::X, Vec3::Y);
        round_trip(Vec3::NEG_X, Vec3::Y);
        round_trip(Vec3::Y, Vec3::NEG_Z);
        round_trip(Vec3::NEG_Y, Vec3::Z);
    }

    #[test]
    fn diagonal_round_trips() {
        let h = FRAC_1_SQRT_2;
        round_trip(Vec3::new(h, 0.0, h), Vec3::Y);
        round_trip(Vec3::new(-h, 0.0, -h), Vec3::Y);
        round_trip(Vec3::new(0.0, h, h), Vec3::new(0.0, h, -h));
        round_trip(Vec3::new(1.0, 1.0, 1.0).normalize(), Vec3::Y);
        round_trip(Vec3::new(-1.0, -2.0, 0.5).normalize(), Vec3::Y);
    }

    #[test]
    fn every_conversion_branch_round_trips() {
        // Each orientation forces a different branch of quat_from_basis.
        let cases = [
            Quat::from_rotation_y(0.3),
            Quat::from_rotation_x(std::f32::consts::PI),
            Quat::from_rotation_y(std::f32::consts::PI),
            Quat::from_rotation_z(std::f32::consts::PI),
        ];
        for q in cases {
            let expected = q * Vec3::Z;
            let mut camera: Camera = Camera::new();
            camera.look_at(expected, q * Vec3::Y);
            assert!(camera.forward().abs_diff_eq(expected, 1e-5));
            assert!(camera.up().abs_diff_eq(q * Vec3::Y, 1e-5));
        }
    }

    #[test]
    fn up_parallel_to_forward_is_not_finite() {
        // No right axis exists, so the basis normalizes a zero vector.
        let mut camera: Camera = Camera::new();
        camera.look_at(Vec3::Y, Vec3::Y);
        assert!(!camera.orientation().is_finite());

        let mut camera = Camera::<ArrayMath>::new();
        camera.look_at([0.0, -1.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(camera.orientation().iter().any(|c| !c.is_finite()));
    }

    #[test]
    fn non_orthogonal_up_is_corrected() {
        let mut camera: Camera = Camera::new();
        let forward = Vec3::new(0.0, 0.0, 1.0);
        camera.look_at(forward, Vec3::new(0.0, 1.0, 0.5).normalize());
        assert!(camera.forward().abs_diff_eq(forward, 1e-5));
        assert!(camera.up().abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn look_at_keeps_target_and_pending_deltas() {
        let mut camera: Camera = Camera::new();
        camera.set_target_position(Vec3::new(3.0, 0.0, 0.0));
        camera.set_target_distance(2.0);
        camera.rotate(Vec3::new(0.1, 0.0, 0.0));
        camera.move_by(Vec3::X);

        camera.look_at(Vec3::X, Vec3::Y);

        assert_eq!(camera.target_position(), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(camera.target_distance(), 2.0);
        assert_eq!(camera.pending_rotation(), Vec3::new(0.1, 0.0, 0.0));
        assert_eq!(camera.pending_movement(), Vec3::X);
        assert!(camera.eye().abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn backends_build_the_same_orientation() {
        let h = FRAC_1_SQRT_2;
        let q = quat_from_basis::<GlamMath>(
            Vec3::new(h, 0.0, -h),
            Vec3::Y,
            Vec3::new(h, 0.0, h),
        );
        let a = quat_from_basis::<ArrayMath>(
            [h, 0.0, -h],
            [0.0, 1.0, 0.0],
            [h, 0.0, h],
        );
        for (g, a) in q.to_array().into_iter().zip(a) {
            assert!((g - a).abs() < 1e-6);
        }
    }
}
