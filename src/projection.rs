//! Projection matrices for 3D scenes.
//!
//! Both projections use the right-handed, OpenGL clip-space convention
//! (depth mapped to `[-1, 1]`), which is what the 3D scenes were authored
//! against. Neither constructor validates its inputs: `near == far` or a zero
//! aspect ratio produce non-finite entries rather than an error.

use glam::Mat4;

/// Vertical field of view used by the reference scenes.
///
/// This value is in **radians**. The scenes pass a literal `45` to a
/// radians-based helper, and the rendered framing depends on it.
pub const DEFAULT_FOV_Y: f32 = 45.0;

/// Default near clip plane.
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far clip plane.
pub const DEFAULT_FAR: f32 = 100.0;

/// Perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width divided by height.
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov_y: DEFAULT_FOV_Y,
            aspect: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Perspective {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical field of view in radians.
    pub fn fov_y(mut self, radians: f32) -> Self {
        self.fov_y = radians;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn fov_y_degrees(mut self, degrees: f32) -> Self {
        self.fov_y = degrees.to_radians();
        self
    }

    pub fn aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the aspect ratio from a viewport size in pixels.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.aspect = width as f32 / height as f32;
        self
    }

    pub fn clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Orthographic projection parameters (a box in view space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthographic {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl Orthographic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal and vertical extents of the view box.
    pub fn bounds(mut self, left: f32, right: f32, bottom: f32, top: f32) -> Self {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self
    }

    pub fn clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

/// The projection a 3D scene renders through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective(Perspective),
    Orthographic(Orthographic),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective(Perspective::default())
    }
}

impl From<Perspective> for Projection {
    fn from(perspective: Perspective) -> Self {
        Self::Perspective(perspective)
    }
}

impl From<Orthographic> for Projection {
    fn from(orthographic: Orthographic) -> Self {
        Self::Orthographic(orthographic)
    }
}

impl Projection {
    /// Returns the 4×4 clip-space projection matrix.
    pub fn matrix(&self) -> Mat4 {
        match self {
            Projection::Perspective(p) => p.matrix(),
            Projection::Orthographic(o) => o.matrix(),
        }
    }

    /// Update the aspect ratio after a viewport resize.
    ///
    /// Orthographic projections keep their explicit bounds and are unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Projection::Perspective(p) = self {
            *p = p.viewport(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn reference_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
        let f = 1.0 / (fov / 2.0).tan();
        let range_inv = 1.0 / (near - far);
        [
            f / aspect,
            0.0,
            0.0,
            0.0,
            0.0,
            f,
            0.0,
            0.0,
            0.0,
            0.0,
            (near + far) * range_inv,
            -1.0,
            0.0,
            0.0,
            near * far * range_inv * 2.0,
            0.0,
        ]
    }

    fn reference_orthographic(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> [f32; 16] {
        let lr = 1.0 / (l - r);
        let bt = 1.0 / (b - t);
        let nf = 1.0 / (n - f);
        [
            -2.0 * lr,
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 * bt,
            0.0,
            0.0,
            0.0,
            0.0,
            2.0 * nf,
            0.0,
            (l + r) * lr,
            (t + b) * bt,
            (f + n) * nf,
            1.0,
        ]
    }

    #[test]
    fn perspective_matches_reference_layout() {
        let perspective = Perspective::new().viewport(800, 600);
        let expected = Mat4::from_cols_array(&reference_perspective(
            DEFAULT_FOV_Y,
            800.0 / 600.0,
            DEFAULT_NEAR,
            DEFAULT_FAR,
        ));
        assert!(perspective.matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn perspective_degrees_helper_converts() {
        let p = Perspective::new().fov_y_degrees(90.0);
        assert!((p.fov_y - std::f32::consts::FRAC_PI_2).abs() < EPS);
        // f = 1 / tan(45deg) = 1
        let m = p.matrix().to_cols_array();
        assert!((m[5] - 1.0).abs() < EPS);
    }

    #[test]
    fn orthographic_matches_reference_layout() {
        let ortho = Orthographic::new().bounds(-2.0, 4.0, -1.0, 3.0).clip(0.5, 20.0);
        let expected =
            Mat4::from_cols_array(&reference_orthographic(-2.0, 4.0, -1.0, 3.0, 0.5, 20.0));
        assert!(ortho.matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn degenerate_clip_planes_are_not_rejected() {
        let m = Perspective::new().clip(1.0, 1.0).matrix();
        assert!(!m.is_finite());
    }

    #[test]
    fn resize_only_affects_perspective() {
        let mut projection = Projection::default();
        projection.resize(1920, 1080);
        match projection {
            Projection::Perspective(p) => assert!((p.aspect - 1920.0 / 1080.0).abs() < EPS),
            Projection::Orthographic(_) => panic!("expected perspective"),
        }

        let ortho = Orthographic::new().bounds(-3.0, 3.0, -1.0, 1.0);
        let mut projection = Projection::from(ortho);
        projection.resize(100, 10);
        assert_eq!(projection, Projection::Orthographic(ortho));
    }
}
