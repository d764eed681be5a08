use super::limits::AngleLimits;
use super::mode::CameraMode;
use crate::math::{CameraMath, GlamMath, WORLD_FORWARD, WORLD_RIGHT, WORLD_UP};
use crate::options::CameraOptions;

/// Deviation from unit length above which a supplied orientation is logged.
const UNIT_TOLERANCE: f32 = 1e-3;

/// Quaternion camera with deferred updates.
///
/// [`move_by`](Self::move_by) and [`rotate`](Self::rotate) only accumulate
/// deltas. Everything pending is applied in one step by
/// [`resolve`](Self::resolve), usually once per frame, which keeps the
/// orientation from drifting under many small multiplications. Queries such
/// as [`eye`](Self::eye) and [`forward`](Self::forward) report resolved
/// state only.
///
/// The math library is a type parameter; see [`CameraMath`].
#[derive(Debug, Clone, Copy)]
pub struct Camera<M: CameraMath = GlamMath> {
    pub(super) target_position: M::Vec3,
    pub(super) target_distance: f32,
    pub(super) orientation: M::Quat,
    pub(super) mode: CameraMode,
    /// Pending (forward, up, right) movement.
    pub(super) movement: M::Vec3,
    /// Pending (pitch, yaw, roll) rotation in radians.
    pub(super) rotation: M::Vec3,
    pub(super) limits: AngleLimits,
}

impl<M: CameraMath> Default for Camera<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: CameraMath> Camera<M> {
    /// Camera at the origin with identity orientation, zero target distance,
    /// [`CameraMode::FREE`] and zeroed limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target_position: M::zero(),
            target_distance: 0.0,
            orientation: M::identity(),
            mode: CameraMode::FREE,
            movement: M::zero(),
            rotation: M::zero(),
            limits: AngleLimits::default(),
        }
    }

    /// Build a camera from loaded options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self::new();
        camera.apply_options(options);
        camera
    }

    /// Replace mode, limits and target from `options`.
    ///
    /// Orientation and pending deltas are kept, so switching presets at
    /// runtime is seamless.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.set_mode(options.mode.to_mode());
        self.limits = options.limits.to_limits();
        self.target_position = M::vec3_from_array(options.target_position);
        self.target_distance = options.target_distance;
    }

    /// Return to the state of [`Camera::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // -- Resolved state --------------------------------------------------

    /// The world-space point the camera looks at.
    ///
    /// This is also the eye position when the target distance is zero.
    #[must_use]
    pub fn target_position(&self) -> M::Vec3 {
        self.target_position
    }

    /// Distance from the eye to the target along the forward axis.
    #[must_use]
    pub const fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> M::Quat {
        self.orientation
    }

    /// Current mode flags.
    #[must_use]
    pub const fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Current clamp limits.
    #[must_use]
    pub const fn limits(&self) -> AngleLimits {
        self.limits
    }

    /// Forward direction (unit length while the orientation is normalized).
    #[must_use]
    pub fn forward(&self) -> M::Vec3 {
        M::rotate(self.orientation, M::vec3_from_array(WORLD_FORWARD))
    }

    /// Up direction.
    #[must_use]
    pub fn up(&self) -> M::Vec3 {
        M::rotate(self.orientation, M::vec3_from_array(WORLD_UP))
    }

    /// Right direction.
    #[must_use]
    pub fn right(&self) -> M::Vec3 {
        M::rotate(self.orientation, M::vec3_from_array(WORLD_RIGHT))
    }

    /// Eye position: the target pulled back along forward by the target
    /// distance.
    #[must_use]
    pub fn eye(&self) -> M::Vec3 {
        M::add(
            self.target_position,
            M::scale(self.forward(), -self.target_distance),
        )
    }

    /// World-space `(pitch, yaw, roll)` of the current orientation.
    ///
    /// This is the decomposition angle clamping works against.
    #[must_use]
    pub fn euler_angles(&self) -> M::Vec3 {
        M::to_euler(self.orientation)
    }

    // -- Pending state ---------------------------------------------------

    /// Movement queued since the last resolve, as (forward, up, right).
    #[must_use]
    pub fn pending_movement(&self) -> M::Vec3 {
        self.movement
    }

    /// Rotation queued since the last resolve, as (pitch, yaw, roll).
    #[must_use]
    pub fn pending_rotation(&self) -> M::Vec3 {
        self.rotation
    }

    // -- Mutators --------------------------------------------------------

    /// Queue movement relative to the camera, `offset = (forward, up,
    /// right)`. Applied on the next resolve.
    pub fn move_by(&mut self, offset: M::Vec3) {
        self.movement = M::add(self.movement, offset);
    }

    /// Queue a rotation, `angles = (pitch, yaw, roll)` in radians. Applied
    /// on the next resolve.
    ///
    /// Pitch looks up/down, yaw looks left/right, roll tilts the head.
    /// Roll is ignored while [`CameraMode::DISABLE_ROLL`] is set.
    pub fn rotate(&mut self, angles: M::Vec3) {
        self.rotation = M::add(self.rotation, angles);
    }

    /// Move the target point directly, bypassing pending movement.
    pub fn set_target_position(&mut self, position: M::Vec3) {
        self.target_position = position;
    }

    /// Set the eye-to-target distance.
    ///
    /// Negative distances put the eye past the target, which behaves like
    /// zooming through it.
    pub fn set_target_distance(&mut self, distance: f32) {
        self.target_distance = distance;
    }

    /// Overwrite the orientation.
    ///
    /// `orientation` should be unit length. A non-unit value is only
    /// corrected at the next resolve; queries made before then are skewed.
    pub fn set_orientation(&mut self, orientation: M::Quat) {
        let length = M::quat_length(orientation);
        if (length - 1.0).abs() > UNIT_TOLERANCE {
            log::debug!("non-unit orientation set (|q| = {length})");
        }
        self.orientation = orientation;
    }

    /// Change the mode. Takes effect at the next resolve; pending deltas are
    /// kept.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode != self.mode {
            log::debug!("camera mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Set the clamp limits.
    ///
    /// Each range should satisfy `min < max` within `[-π, π]`; this is not
    /// checked.
    pub fn set_limits(&mut self, limits: AngleLimits) {
        self.limits = limits;
    }
}
