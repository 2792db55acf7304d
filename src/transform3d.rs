//! 3D model-view-projection transforms for spinning objects.
//!
//! [`Transform3d`] carries the parameters a 3D scene exposes to its controls
//! and [`SceneConfig`] carries the fixed parts (projection, camera distance).
//! [`build_transform_3d`] combines them with the current time into the single
//! matrix the vertex shader receives:
//!
//! ```text
//! Projection · Translate(tx, ty, tz - distance) · Scale(s)
//!            · RotateX(rx) · RotateY(ry) · RotateY(spin)
//! ```
//!
//! Each factor is applied in the local frame produced by the ones before it:
//! the object is placed first, then scaled about its new origin, then rotated.
//!
//! The spin angle is `seconds · rotation_speed`, recomputed from the timestamp
//! on every call. Passing the same parameters with a later timestamp yields a
//! different matrix; nothing is cached.

use glam::{Mat4, Vec3};

use crate::projection::Projection;

/// Distance from the camera to the object's origin along -Z.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 6.0;

/// Spin rate (radians per second) the reference scenes start with.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.5;

/// Per-object parameters for a 3D scene.
///
/// All values are accepted as is. `scale == 0.0` collapses the object and is
/// left for the draw layer to deal with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Offset from the scene origin. `z` is added to the camera distance.
    pub translation: Vec3,
    /// Uniform scale factor.
    pub scale: f32,
    /// Tilt around the X axis in radians.
    pub rotate_x: f32,
    /// Turn around the Y axis in radians.
    pub rotate_y: f32,
    /// Continuous spin around Y in radians per second.
    pub rotation_speed: f32,
}

impl Default for Transform3d {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

impl Transform3d {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translation(mut self, translation: impl Into<Vec3>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the X and Y rotation angles in radians.
    pub fn rotation(mut self, rotate_x: f32, rotate_y: f32) -> Self {
        self.rotate_x = rotate_x;
        self.rotate_y = rotate_y;
        self
    }

    pub fn rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Model-view part of the transform (everything except the projection).
    pub fn model_view(&self, camera_distance: f32, current_time_ms: f64) -> Mat4 {
        let spin = spin_angle(current_time_ms, self.rotation_speed);
        let offset = Vec3::new(
            self.translation.x,
            self.translation.y,
            self.translation.z - camera_distance,
        );

        Mat4::from_translation(offset)
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_rotation_x(self.rotate_x)
            * Mat4::from_rotation_y(self.rotate_y)
            * Mat4::from_rotation_y(spin)
    }
}

/// Fixed, per-scene inputs to the 3D transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub projection: Projection,
    /// How far in front of the camera the object sits.
    pub camera_distance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            projection: Projection::default(),
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projection(mut self, projection: impl Into<Projection>) -> Self {
        self.projection = projection.into();
        self
    }

    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }
}

/// Spin angle in radians after `current_time_ms` milliseconds.
pub fn spin_angle(current_time_ms: f64, rotation_speed: f32) -> f32 {
    (current_time_ms / 1000.0 * rotation_speed as f64) as f32
}

/// Builds the full clip-space matrix for one frame.
///
/// `current_time_ms` is the frame timestamp in milliseconds, usually
/// [`FrameClock::now_ms`](crate::FrameClock::now_ms).
pub fn build_transform_3d(
    transform: &Transform3d,
    scene: &SceneConfig,
    current_time_ms: f64,
) -> Mat4 {
    scene.projection.matrix() * transform.model_view(scene.camera_distance, current_time_ms)
}
