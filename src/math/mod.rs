//! Math backend abstraction.
//!
//! The camera core never touches a concrete vector or quaternion type. All
//! arithmetic goes through [`CameraMath`], which is implemented by zero-sized
//! backend types and resolved at compile time, so swapping the math library
//! costs nothing at runtime.
//!
//! Two backends ship with the crate:
//!
//! - [`GlamMath`] - `glam::Vec3` / `glam::Quat` (the default)
//! - [`ArrayMath`] - plain `[f32; 3]` / `[f32; 4]` arrays in `(x, y, z, w)`
//!   order, for callers without a math library

mod array_math;
mod glam_math;

use std::fmt::Debug;

pub use array_math::ArrayMath;
pub use glam_math::GlamMath;

/// World forward axis (left-handed, +Z into the screen).
pub const WORLD_FORWARD: [f32; 3] = [0.0, 0.0, 1.0];
/// World up axis.
pub const WORLD_UP: [f32; 3] = [0.0, 1.0, 0.0];
/// World right axis.
pub const WORLD_RIGHT: [f32; 3] = [1.0, 0.0, 0.0];

/// Capability set the camera needs from a vector/quaternion library.
///
/// Quaternion multiplication is the Hamilton product (`a * b` applies `b`
/// first when rotating vectors) and [`rotate`](CameraMath::rotate) is the
/// active rotation `q * v * q⁻¹`.
pub trait CameraMath: Copy + Debug + Default {
    /// Three-component vector type.
    type Vec3: Copy + Debug + PartialEq;
    /// Quaternion type.
    type Quat: Copy + Debug + PartialEq;

    /// Construct a vector.
    fn vec3(x: f32, y: f32, z: f32) -> Self::Vec3;
    /// Construct a quaternion from its `(x, y, z, w)` components.
    fn quat(x: f32, y: f32, z: f32, w: f32) -> Self::Quat;
    /// Vector components as `[x, y, z]`.
    fn vec3_to_array(v: Self::Vec3) -> [f32; 3];
    /// Quaternion components as `[x, y, z, w]`.
    fn quat_to_array(q: Self::Quat) -> [f32; 4];

    /// Component-wise sum.
    fn add(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3;
    /// Uniform scale.
    fn scale(v: Self::Vec3, s: f32) -> Self::Vec3;
    /// Cross product `a × b`.
    fn cross(a: Self::Vec3, b: Self::Vec3) -> Self::Vec3;
    /// Negation.
    fn negate(v: Self::Vec3) -> Self::Vec3;
    /// Unit-length copy. Zero-length input yields non-finite components.
    fn normalize(v: Self::Vec3) -> Self::Vec3;

    /// Hamilton product `a * b`.
    fn mul_quat(a: Self::Quat, b: Self::Quat) -> Self::Quat;
    /// Conjugate, which is the inverse for unit quaternions.
    fn invert(q: Self::Quat) -> Self::Quat;
    /// Unit-length copy. A zero quaternion normalizes to identity.
    fn normalize_quat(q: Self::Quat) -> Self::Quat;
    /// Rotate `v` by `q`.
    fn rotate(q: Self::Quat, v: Self::Vec3) -> Self::Vec3;
    /// Rotation of `angle` radians around the unit vector `axis`.
    fn from_axis_angle(axis: Self::Vec3, angle: f32) -> Self::Quat;
    /// Column-major 4×4 rotation matrix of `q` with no translation.
    fn rotation_matrix(q: Self::Quat) -> [f32; 16];

    /// Identity rotation.
    fn identity() -> Self::Quat {
        Self::quat(0.0, 0.0, 0.0, 1.0)
    }

    /// Zero vector.
    fn zero() -> Self::Vec3 {
        Self::vec3(0.0, 0.0, 0.0)
    }

    /// Vector from an `[x, y, z]` array.
    fn vec3_from_array(a: [f32; 3]) -> Self::Vec3 {
        Self::vec3(a[0], a[1], a[2])
    }

    /// Euler angles `(pitch, yaw, roll)` of `q`, in radians.
    ///
    /// Pitch and yaw come from `atan2` and span `(-π, π]`; roll comes from
    /// `asin` and spans `[-π/2, π/2]`, so decoding is ambiguous near a roll
    /// of ±π/2.
    fn to_euler(q: Self::Quat) -> Self::Vec3 {
        let [x, y, z, w] = Self::quat_to_array(q);
        let (xsq, ysq, zsq) = (x * x, y * y, z * z);
        Self::vec3(
            (2.0 * (x * w - y * z)).atan2(1.0 - 2.0 * (xsq + zsq)),
            (2.0 * (y * w + x * z)).atan2(1.0 - 2.0 * (ysq + zsq)),
            (2.0 * (x * y + z * w)).asin(),
        )
    }

    /// Euclidean norm of `q`.
    fn quat_length(q: Self::Quat) -> f32 {
        let [x, y, z, w] = Self::quat_to_array(q);
        Self::sqrt(x * x + y * y + z * z + w * w)
    }

    /// Smaller of two scalars.
    fn min(a: f32, b: f32) -> f32 {
        if a < b {
            a
        } else {
            b
        }
    }

    /// Larger of two scalars.
    fn max(a: f32, b: f32) -> f32 {
        if a > b {
            a
        } else {
            b
        }
    }

    /// Square root.
    fn sqrt(a: f32) -> f32 {
        a.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "{a:?} != {b:?}");
        }
    }

    fn assert_quat_eq(a: [f32; 4], b: [f32; 4]) {
        for i in 0..4 {
            assert!((a[i] - b[i]).abs() < EPS, "{a:?} != {b:?}");
        }
    }

    /// Exercise one backend and return values that must agree across
    /// backends.
    fn probe<M: CameraMath>() -> ([f32; 3], [f32; 4], [f32; 16]) {
        let q = M::mul_quat(
            M::from_axis_angle(M::vec3_from_array(WORLD_UP), 0.7),
            M::from_axis_angle(M::vec3_from_array(WORLD_RIGHT), -0.3),
        );
        let v = M::rotate(q, M::vec3(0.2, -1.0, 3.0));
        (
            M::vec3_to_array(v),
            M::quat_to_array(q),
            M::rotation_matrix(q),
        )
    }

    #[test]
    fn backends_agree() {
        let (gv, gq, gm) = probe::<GlamMath>();
        let (av, aq, am) = probe::<ArrayMath>();
        assert_vec_eq(gv, av);
        assert_quat_eq(gq, aq);
        for i in 0..16 {
            assert!((gm[i] - am[i]).abs() < EPS, "index {i}: {gm:?} != {am:?}");
        }
    }

    #[test]
    fn rotate_is_active_rotation() {
        // +90° about up turns forward (+Z) into +X.
        let q = GlamMath::from_axis_angle(glam::Vec3::Y, FRAC_PI_2);
        let v = GlamMath::rotate(q, glam::Vec3::Z);
        assert_vec_eq(v.to_array(), [1.0, 0.0, 0.0]);

        let q = ArrayMath::from_axis_angle(WORLD_UP, FRAC_PI_2);
        assert_vec_eq(ArrayMath::rotate(q, WORLD_FORWARD), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn euler_decodes_single_axis_rotations() {
        let pitch = ArrayMath::from_axis_angle(WORLD_RIGHT, 0.4);
        assert_vec_eq(ArrayMath::to_euler(pitch), [0.4, 0.0, 0.0]);

        let yaw = ArrayMath::from_axis_angle(WORLD_UP, -1.1);
        assert_vec_eq(ArrayMath::to_euler(yaw), [0.0, -1.1, 0.0]);

        let roll = ArrayMath::from_axis_angle(WORLD_FORWARD, 0.25);
        assert_vec_eq(ArrayMath::to_euler(roll), [0.0, 0.0, 0.25]);
    }

    #[test]
    fn zero_quaternion_normalizes_to_identity() {
        let zero = [0.0; 4];
        assert_eq!(ArrayMath::normalize_quat(zero), ArrayMath::identity());
        assert_eq!(
            GlamMath::normalize_quat(glam::Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
            glam::Quat::IDENTITY
        );
    }

    #[test]
    fn scalar_helpers() {
        assert_eq!(ArrayMath::min(1.0, 2.0), 1.0);
        assert_eq!(ArrayMath::max(1.0, 2.0), 2.0);
        assert_eq!(GlamMath::sqrt(9.0), 3.0);
        let length = GlamMath::quat_length(glam::Quat::IDENTITY);
        assert!((length - 1.0).abs() < EPS);
        assert_eq!(ArrayMath::quat_length([0.0, 2.0, 0.0, 2.0]), 8f32.sqrt());
    }

    #[test]
    fn normalizing_a_zero_vector_is_not_finite() {
        let glam_zero = GlamMath::normalize(glam::Vec3::ZERO);
        assert!(!glam_zero.is_finite());

        let array_zero = ArrayMath::normalize([0.0; 3]);
        assert!(array_zero.iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn scalar_min_max_keep_the_second_argument_on_nan() {
        assert!(ArrayMath::max(0.5, f32::NAN).is_nan());
        assert!(GlamMath::min(0.5, f32::NAN).is_nan());
        assert_eq!(ArrayMath::max(f32::NAN, 0.5), 0.5);
    }
}
