//! 2D affine transforms for sprite-style rendering.
//!
//! [`Transform2d`] holds the parameters a 2D scene exposes to its controls
//! (scale, rotation in degrees, translation) and turns them into the 3×3 matrix
//! a vertex shader multiplies `vec3(position, 1.0)` by.
//!
//! # Composition
//!
//! Scale and rotation are fused into a single linear block: the scale factors
//! multiply the cosine terms of the rotation only. The resulting flat array is
//!
//! ```text
//! [ sx·cos, -sin,   0,
//!   sin,    sy·cos, 0,
//!   tx,     ty,     1 ]
//! ```
//!
//! which is *not* the product `R · S`. Scenes authored against this matrix
//! depend on the fused form, so it is kept as is.
//!
//! With the shader computing `M * v`, a positive angle turns the sprite
//! clockwise: +90° sends +X to -Y.
//!
//! # Layout
//!
//! The matrix is column-major: [`Mat3::to_cols_array`] yields the nine floats
//! above in order, ready for an untransposed `mat3` uniform upload.
//!
//! # Example
//!
//! ```
//! use uniforma::{Transform2d, Vec2};
//!
//! let transform = Transform2d::new()
//!     .scale(Vec2::new(2.0, 1.0))
//!     .rotation_degrees(90.0)
//!     .translation(Vec2::new(0.5, -0.5));
//!
//! let flat = transform.matrix().to_cols_array();
//! assert!((flat[6] - 0.5).abs() < 1e-6);
//! ```

use glam::{Mat3, Vec2};

/// Parameters for a 2D scale/rotate/translate transform.
///
/// Values are not clamped; any float is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    /// Per-axis scale factors.
    pub scale: Vec2,
    /// Clockwise rotation in degrees (see module docs).
    pub rotation_degrees: f32,
    /// Translation in clip-space units.
    pub translation: Vec2,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self {
            scale: Vec2::ONE,
            rotation_degrees: 0.0,
            translation: Vec2::ZERO,
        }
    }
}

impl Transform2d {
    /// Creates an identity transform (unit scale, no rotation, no translation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-axis scale.
    pub fn scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn rotation_degrees(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Sets the translation.
    pub fn translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// Builds the 3×3 matrix for these parameters.
    ///
    /// See the [module docs](self) for the exact entry layout.
    pub fn matrix(&self) -> Mat3 {
        build_transform_2d(
            self.scale.x,
            self.scale.y,
            self.rotation_degrees,
            self.translation.x,
            self.translation.y,
        )
    }
}

/// Builds the fused 2D scale/rotate/translate matrix from raw scalars.
///
/// Equivalent to [`Transform2d::matrix`] for callers that keep their
/// parameters as loose values.
pub fn build_transform_2d(
    scale_x: f32,
    scale_y: f32,
    rotation_degrees: f32,
    translation_x: f32,
    translation_y: f32,
) -> Mat3 {
    let rad = rotation_degrees.to_radians();
    let (sin, cos) = rad.sin_cos();

    Mat3::from_cols_array(&[
        scale_x * cos,
        -sin,
        0.0,
        sin,
        scale_y * cos,
        0.0,
        translation_x,
        translation_y,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn assert_mat3_eq(actual: Mat3, expected: [f32; 9]) {
        let expected = Mat3::from_cols_array(&expected);
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_is_identity() {
        assert_mat3_eq(Transform2d::new().matrix(), Mat3::IDENTITY.to_cols_array());
    }

    #[test]
    fn quarter_turn_rotations() {
        for (degrees, cos, sin) in [
            (0.0, 1.0, 0.0),
            (90.0, 0.0, 1.0),
            (180.0, -1.0, 0.0),
            (270.0, 0.0, -1.0),
        ] {
            let matrix = build_transform_2d(1.0, 1.0, degrees, 0.0, 0.0);
            assert_mat3_eq(matrix, [cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn translation_only_lands_in_last_column() {
        let matrix = Transform2d::new()
            .translation(Vec2::new(0.25, -0.75))
            .matrix();

        let cols = matrix.to_cols_array_2d();
        assert_eq!(cols[2], [0.25, -0.75, 1.0]);
        assert_eq!(cols[0], [1.0, 0.0, 0.0]);
        assert_eq!(cols[1], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn scaled_quarter_turn_with_offset() {
        let matrix = build_transform_2d(2.0, 1.0, 90.0, 0.5, -0.5);
        let expected = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.5, -0.5, 1.0]];
        assert!(matrix.abs_diff_eq(Mat3::from_cols_array_2d(&expected), EPS));
    }

    #[test]
    fn scale_only_touches_cosine_terms() {
        let degrees = 30.0_f32;
        let (sin, cos) = degrees.to_radians().sin_cos();
        let flat = build_transform_2d(3.0, 0.5, degrees, 0.0, 0.0).to_cols_array();

        assert!((flat[0] - 3.0 * cos).abs() < EPS);
        assert!((flat[1] + sin).abs() < EPS);
        assert!((flat[3] - sin).abs() < EPS);
        assert!((flat[4] - 0.5 * cos).abs() < EPS);
    }

    #[test]
    fn builder_matches_free_function() {
        let transform = Transform2d::new()
            .scale(Vec2::new(1.5, 0.75))
            .rotation_degrees(-45.0)
            .translation(Vec2::new(0.1, 0.2));

        assert_eq!(
            transform.matrix(),
            build_transform_2d(1.5, 0.75, -45.0, 0.1, 0.2)
        );
    }

    #[test]
    fn positive_angles_turn_clockwise() {
        let matrix = Transform2d::new().rotation_degrees(90.0).matrix();

        let x = matrix.transform_point2(Vec2::X);
        assert!(x.abs_diff_eq(Vec2::new(0.0, -1.0), EPS));

        let y = matrix.transform_point2(Vec2::Y);
        assert!(y.abs_diff_eq(Vec2::new(1.0, 0.0), EPS));
    }

    #[test]
    fn zero_scale_is_not_rejected() {
        let flat = build_transform_2d(0.0, 0.0, 0.0, 0.0, 0.0).to_cols_array();
        assert_eq!(flat[0], 0.0);
        assert_eq!(flat[4], 0.0);
        assert_eq!(flat[8], 1.0);
    }
}
