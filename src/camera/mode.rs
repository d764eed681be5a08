bitflags::bitflags! {
    /// Behaviour flags controlling how pending rotation and movement are
    /// applied. Flags combine freely and may change between frames; the new
    /// mode takes effect at the next resolve.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CameraMode: u32 {
        /// Ignore the roll axis; yaw is applied around world up so pitch and
        /// yaw never induce roll.
        const DISABLE_ROLL = 0x0000_0001;
        /// Project forward/right movement onto the horizontal world plane.
        const MOVE_IN_WORLD_PLANE = 0x0000_0002;
        /// Keep world-space pitch inside the pitch limits.
        const CLAMP_PITCH = 0x0000_0004;
        /// Keep world-space yaw inside the yaw limits.
        const CLAMP_YAW = 0x0000_0008;
        /// Keep world-space roll inside the roll limits.
        const CLAMP_ROLL = 0x0000_0010;
    }
}

impl CameraMode {
    /// Free-flying camera, no restrictions.
    pub const FREE: Self = Self::empty();

    /// First person: no roll, level movement, clamped pitch.
    ///
    /// Pair with pitch limits of ±π/2.
    pub const FIRST_PERSON: Self = Self::DISABLE_ROLL
        .union(Self::MOVE_IN_WORLD_PLANE)
        .union(Self::CLAMP_PITCH);

    /// Third person. Same flags as [`FIRST_PERSON`](Self::FIRST_PERSON);
    /// use a positive target distance.
    pub const THIRD_PERSON: Self = Self::FIRST_PERSON;

    /// Orbit around the target, for inspecting models.
    pub const ORBITAL: Self = Self::DISABLE_ROLL.union(Self::CLAMP_PITCH);

    const ANY_CLAMP: Self = Self::CLAMP_PITCH
        .union(Self::CLAMP_YAW)
        .union(Self::CLAMP_ROLL);

    /// Whether any of the angle clamp flags is set.
    #[must_use]
    pub const fn clamps_any(self) -> bool {
        self.intersects(Self::ANY_CLAMP)
    }
}

impl Default for CameraMode {
    fn default() -> Self {
        Self::FREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_flag_values() {
        assert_eq!(CameraMode::FREE.bits(), 0);
        assert_eq!(CameraMode::FIRST_PERSON.bits(), 0x7);
        assert_eq!(CameraMode::THIRD_PERSON, CameraMode::FIRST_PERSON);
        assert_eq!(CameraMode::ORBITAL.bits(), 0x5);
    }

    #[test]
    fn clamps_any_detects_each_axis() {
        assert!(!CameraMode::FREE.clamps_any());
        assert!(!(CameraMode::DISABLE_ROLL | CameraMode::MOVE_IN_WORLD_PLANE)
            .clamps_any());
        assert!(CameraMode::CLAMP_PITCH.clamps_any());
        assert!(CameraMode::CLAMP_YAW.clamps_any());
        assert!(CameraMode::CLAMP_ROLL.clamps_any());
        assert!(CameraMode::ORBITAL.clamps_any());
    }

    #[test]
    fn unknown_bits_are_dropped() {
        let mode = CameraMode::from_bits_truncate(0xFF);
        assert_eq!(mode, CameraMode::all());
    }
}
