//! Slider controls that feed the transform builders.
//!
//! Form controls hand over their value as a string. Each [`Slider`] knows how
//! to parse that string and map it onto the parameter it drives, so the event
//! handler of a host only has to do:
//!
//! ```
//! use uniforma::{Slider, Transform3d};
//!
//! let mut params = Transform3d::new();
//! params.apply_slider(Slider::Translate3dX, "25").unwrap();
//! assert_eq!(params.translation.x, 0.5);
//! ```
//!
//! The params record stays owned by the caller and is passed to the builder on
//! the next frame. A value that fails to parse leaves the record untouched;
//! reporting the [`ControlError`] is up to the caller.
//!
//! # Scaling
//!
//! | Slider                         | Mapping            |
//! |--------------------------------|--------------------|
//! | 2D sliders                     | unchanged          |
//! | `Translate3dX`, `Translate3dY` | `value / 50`       |
//! | `Scale`                        | `value / 50`       |
//! | `RotateX`, `RotateY`           | degrees to radians |
//! | `RotationSpeed`                | `value / 100`      |

use std::fmt;

use crate::transform2d::Transform2d;
use crate::transform3d::Transform3d;

/// Errors produced while applying a slider value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    /// The raw value is not a number.
    InvalidValue { slider: Slider, raw: String },
    /// The slider drives the other kind of transform.
    WrongTarget(Slider),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InvalidValue { slider, raw } => {
                write!(f, "Invalid value for slider '{}': '{}'", slider.id(), raw)
            }
            ControlError::WrongTarget(slider) => {
                write!(f, "Slider '{}' does not drive this transform", slider.id())
            }
        }
    }
}

impl std::error::Error for ControlError {}

/// A single UI control bound to one transform parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    // 2D sprite scene
    TranslateX,
    TranslateY,
    Rotation,
    ScaleX,
    ScaleY,
    // 3D scene
    Translate3dX,
    Translate3dY,
    Scale,
    RotateX,
    RotateY,
    RotationSpeed,
}

impl Slider {
    pub const ALL_2D: [Slider; 5] = [
        Slider::TranslateX,
        Slider::TranslateY,
        Slider::Rotation,
        Slider::ScaleX,
        Slider::ScaleY,
    ];

    pub const ALL_3D: [Slider; 6] = [
        Slider::Translate3dX,
        Slider::Translate3dY,
        Slider::Scale,
        Slider::RotateX,
        Slider::RotateY,
        Slider::RotationSpeed,
    ];

    /// Element id of the control in the scene markup.
    pub fn id(self) -> &'static str {
        match self {
            Slider::TranslateX => "sliderX",
            Slider::TranslateY => "sliderY",
            Slider::Rotation => "sliderRotation",
            Slider::ScaleX => "sliderScaleX",
            Slider::ScaleY => "sliderScaleY",
            Slider::Translate3dX => "translateX",
            Slider::Translate3dY => "translateY",
            Slider::Scale => "scale",
            Slider::RotateX => "rotateX",
            Slider::RotateY => "rotateY",
            Slider::RotationSpeed => "rotationSpeed",
        }
    }

    /// Looks up a slider by element id.
    pub fn from_id(id: &str) -> Option<Slider> {
        Self::ALL_2D
            .into_iter()
            .chain(Self::ALL_3D)
            .find(|slider| slider.id() == id)
    }

    /// Whether this slider drives a [`Transform3d`] rather than a [`Transform2d`].
    pub fn is_3d(self) -> bool {
        Self::ALL_3D.contains(&self)
    }

    /// Maps a raw slider position to the parameter value it controls.
    pub fn scaled(self, raw: f32) -> f32 {
        match self {
            Slider::Translate3dX | Slider::Translate3dY | Slider::Scale => raw / 50.0,
            Slider::RotateX | Slider::RotateY => raw.to_radians(),
            Slider::RotationSpeed => raw / 100.0,
            Slider::TranslateX
            | Slider::TranslateY
            | Slider::Rotation
            | Slider::ScaleX
            | Slider::ScaleY => raw,
        }
    }

    /// Parses a raw control value and applies this slider's scaling.
    pub fn parse(self, raw: &str) -> Result<f32, ControlError> {
        raw.trim()
            .parse::<f32>()
            .map(|value| self.scaled(value))
            .map_err(|_| ControlError::InvalidValue {
                slider: self,
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Transform2d {
    fn slot(&mut self, slider: Slider) -> Option<&mut f32> {
        match slider {
            Slider::TranslateX => Some(&mut self.translation.x),
            Slider::TranslateY => Some(&mut self.translation.y),
            Slider::Rotation => Some(&mut self.rotation_degrees),
            Slider::ScaleX => Some(&mut self.scale.x),
            Slider::ScaleY => Some(&mut self.scale.y),
            _ => None,
        }
    }

    /// Updates the parameter driven by `slider` from its raw control value.
    pub fn apply_slider(&mut self, slider: Slider, raw: &str) -> Result<(), ControlError> {
        let slot = self.slot(slider).ok_or(ControlError::WrongTarget(slider))?;
        let value = slider.parse(raw)?;
        *slot = value;
        log::debug!("{slider} = {value}");
        Ok(())
    }
}

impl Transform3d {
    fn slot(&mut self, slider: Slider) -> Option<&mut f32> {
        match slider {
            Slider::Translate3dX => Some(&mut self.translation.x),
            Slider::Translate3dY => Some(&mut self.translation.y),
            Slider::Scale => Some(&mut self.scale),
            Slider::RotateX => Some(&mut self.rotate_x),
            Slider::RotateY => Some(&mut self.rotate_y),
            Slider::RotationSpeed => Some(&mut self.rotation_speed),
            _ => None,
        }
    }

    /// Updates the parameter driven by `slider` from its raw control value.
    pub fn apply_slider(&mut self, slider: Slider, raw: &str) -> Result<(), ControlError> {
        let slot = self.slot(slider).ok_or(ControlError::WrongTarget(slider))?;
        let value = slider.parse(raw)?;
        *slot = value;
        log::debug!("{slider} = {value}");
        Ok(())
    }
}
