use glam::{Mat4, Quat, Vec3};

use super::CameraMath;

/// [`CameraMath`] backend over `glam`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlamMath;

impl CameraMath for GlamMath {
    type Vec3 = Vec3;
    type Quat = Quat;

    #[inline]
    fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(x, y, z)
    }

    #[inline]
    fn quat(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat::from_xyzw(x, y, z, w)
    }

    #[inline]
    fn vec3_to_array(v: Vec3) -> [f32; 3] {
        v.to_array()
    }

    #[inline]
    fn quat_to_array(q: Quat) -> [f32; 4] {
        q.to_array()
    }

    #[inline]
    fn add(a: Vec3, b: Vec3) -> Vec3 {
        a + b
    }

    #[inline]
    fn scale(v: Vec3, s: f32) -> Vec3 {
        v * s
    }

    #[inline]
    fn cross(a: Vec3, b: Vec3) -> Vec3 {
        a.cross(b)
    }

    #[inline]
    fn negate(v: Vec3) -> Vec3 {
        -v
    }

    #[inline]
    fn normalize(v: Vec3) -> Vec3 {
        v * v.length().recip()
    }

    #[inline]
    fn mul_quat(a: Quat, b: Quat) -> Quat {
        a * b
    }

    #[inline]
    fn invert(q: Quat) -> Quat {
        q.conjugate()
    }

    #[inline]
    fn normalize_quat(q: Quat) -> Quat {
        let norm = q.length_squared();
        if norm > 0.0 {
            q * norm.sqrt().recip()
        } else {
            Quat::IDENTITY
        }
    }

    #[inline]
    fn rotate(q: Quat, v: Vec3) -> Vec3 {
        // glam's `Quat * Vec3` assumes a unit quaternion; the camera only
        // rotates by normalized orientations.
        q * v
    }

    #[inline]
    fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
        Quat::from_axis_angle(axis, angle)
    }

    #[inline]
    fn rotation_matrix(q: Quat) -> [f32; 16] {
        Mat4::from_quat(q).to_cols_array()
    }
}
