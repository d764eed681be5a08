use glam::Mat4;

/// View matrix produced by [`Camera::resolve`](super::Camera::resolve).
///
/// Sixteen floats in column-major order: rotation in indices 0-11,
/// translation in 12-14 and 1.0 in 15. The layout is bit-compatible with
/// GPU uniform buffers and with `glam::Mat4`.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewMatrix(pub [f32; 16]);

impl ViewMatrix {
    /// Identity view (camera at the origin looking down +Z).
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// The raw column-major elements.
    #[must_use]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Raw bytes for uploading into a uniform buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Translation part (indices 12-14).
    #[must_use]
    pub const fn translation(&self) -> [f32; 3] {
        [self.0[12], self.0[13], self.0[14]]
    }

    /// Transform a world-space point into view space.
    #[must_use]
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12],
            m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13],
            m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14],
        ]
    }
}

impl Default for ViewMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ViewMatrix> for Mat4 {
    fn from(m: ViewMatrix) -> Self {
        Self::from_cols_array(&m.0)
    }
}

impl From<ViewMatrix> for [f32; 16] {
    fn from(m: ViewMatrix) -> Self {
        m.0
    }
}
