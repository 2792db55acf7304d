//! # Uniforma
//!
//! **Transform matrices from slider values, ready for a shader uniform.**
//!
//! Two builders cover the scenes this crate was made for:
//!
//! - [`Transform2d`] / [`build_transform_2d`]: a 3×3 fused scale, rotate and
//!   translate matrix for flat sprites.
//! - [`Transform3d`] / [`build_transform_3d`]: a 4×4 projection times
//!   model-view matrix for an object spinning in front of the camera.
//!
//! Both are pure functions of their inputs. The caller owns the parameters,
//! updates them from UI events (see [`Slider`]), and rebuilds the matrix every
//! frame.
//!
//! ## Quick Start
//!
//! ```
//! use uniforma::*;
//!
//! let mut cube = Transform3d::new();
//! cube.apply_slider(Slider::RotateX, "30").unwrap();
//!
//! let scene = SceneConfig::new().projection(Perspective::new().viewport(800, 600));
//! let clock = FrameClock::new();
//!
//! let matrix = build_transform_3d(&cube, &scene, clock.now_ms());
//! let uniform = Mat4Uniform::from(matrix);
//! assert_eq!(uniform.to_flat(), matrix.to_cols_array());
//! ```
//!
//! ## Layout
//!
//! Every matrix is column-major. [`Mat3Uniform`] and [`Mat4Uniform`] give the
//! exact byte layout of a WGSL `mat3x3<f32>` / `mat4x4<f32>` uniform, and their
//! `to_flat` views give the unpadded arrays a GL-style upload takes.

mod clock;
mod controls;
mod gpu;
mod logging;
mod projection;
mod transform2d;
mod transform3d;
mod uniform;

pub use clock::FrameClock;
pub use controls::{ControlError, Slider};
pub use gpu::{GpuContext, GpuError};
pub use logging::{LoggingConfig, init_logging};
pub use projection::{
    DEFAULT_FAR, DEFAULT_FOV_Y, DEFAULT_NEAR, Orthographic, Perspective, Projection,
};
pub use transform2d::{Transform2d, build_transform_2d};
pub use transform3d::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_ROTATION_SPEED, SceneConfig, Transform3d,
    build_transform_3d, spin_angle,
};
pub use uniform::{Mat3Uniform, Mat4Uniform, TransformBuffer};

// Re-export glam math types for convenience
pub use glam::{Mat3, Mat4, Vec2, Vec3};
