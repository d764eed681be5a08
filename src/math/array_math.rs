use super::CameraMath;

/// [`CameraMath`] backend over plain arrays.
///
/// Vectors are `[x, y, z]` and quaternions `[x, y, z, w]`, so camera state
/// can be handed to C-style consumers without conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayMath;

impl CameraMath for ArrayMath {
    type Vec3 = [f32; 3];
    type Quat = [f32; 4];

    #[inline]
    fn vec3(x: f32, y: f32, z: f32) -> [f32; 3] {
        [x, y, z]
    }

    #[inline]
    fn quat(x: f32, y: f32, z: f32, w: f32) -> [f32; 4] {
        [x, y, z, w]
    }

    #[inline]
    fn vec3_to_array(v: [f32; 3]) -> [f32; 3] {
        v
    }

    #[inline]
    fn quat_to_array(q: [f32; 4]) -> [f32; 4] {
        q
    }

    #[inline]
    fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    #[inline]
    fn scale(v: [f32; 3], s: f32) -> [f32; 3] {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    #[inline]
    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[inline]
    fn negate(v: [f32; 3]) -> [f32; 3] {
        [-v[0], -v[1], -v[2]]
    }

    #[inline]
    fn normalize(v: [f32; 3]) -> [f32; 3] {
        let inv_len = 1.0 / (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        Self::scale(v, inv_len)
    }

    #[inline]
    fn mul_quat(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
        let [ax, ay, az, aw] = a;
        let [bx, by, bz, bw] = b;
        [
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        ]
    }

    #[inline]
    fn invert(q: [f32; 4]) -> [f32; 4] {
        [-q[0], -q[1], -q[2], q[3]]
    }

    #[inline]
    fn normalize_quat(q: [f32; 4]) -> [f32; 4] {
        let norm = q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3];
        if norm > 0.0 {
            let inv_norm = norm.powf(-0.5);
            [q[0] * inv_norm, q[1] * inv_norm, q[2] * inv_norm, q[3] * inv_norm]
        } else {
            Self::identity()
        }
    }

    #[inline]
    fn rotate(q: [f32; 4], v: [f32; 3]) -> [f32; 3] {
        let pure = [v[0], v[1], v[2], 0.0];
        let r = Self::mul_quat(Self::mul_quat(q, pure), Self::invert(q));
        [r[0], r[1], r[2]]
    }

    #[inline]
    fn from_axis_angle(axis: [f32; 3], angle: f32) -> [f32; 4] {
        let (sa, ca) = (angle * 0.5).sin_cos();
        [axis[0] * sa, axis[1] * sa, axis[2] * sa, ca]
    }

    fn rotation_matrix(q: [f32; 4]) -> [f32; 16] {
        let [qx, qy, qz, qw] = q;
        let (x2, y2, z2) = (qx + qx, qy + qy, qz + qz);
        let (xx, xy, xz) = (x2 * qx, x2 * qy, x2 * qz);
        let (yy, yz, zz) = (y2 * qy, y2 * qz, z2 * qz);
        let (wx, wy, wz) = (x2 * qw, y2 * qw, z2 * qw);

        [
            1.0 - (yy + zz),
            xy + wz,
            xz - wy,
            0.0,
            xy - wz,
            1.0 - (xx + zz),
            yz + wx,
            0.0,
            xz + wy,
            yz - wx,
            1.0 - (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ]
    }
}
