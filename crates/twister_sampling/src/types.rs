//! Sampled value types with no counterpart in `glam`.
//!
//! Vectors and quaternions are `glam`'s double-precision types
//! ([`DVec2`](glam::DVec2), [`DVec3`](glam::DVec3), [`DQuat`](glam::DQuat)).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Euler-angle rotation in degrees.
///
/// Independent angles do not describe a uniform orientation; convert
/// with [`to_quat`](Self::to_quat) when a `glam` rotation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotator {
    /// Rotation about the right axis (up/down), degrees
    pub pitch: f64,
    /// Rotation about the up axis (left/right), degrees
    pub yaw: f64,
    /// Rotation about the forward axis, degrees
    pub roll: f64,
}

impl Rotator {
    /// Creates a rotator from angles in degrees.
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Equivalent quaternion, applying roll about X, pitch about Y,
    /// then yaw about Z.
    pub fn to_quat(&self) -> glam::DQuat {
        glam::DQuat::from_euler(
            glam::EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

impl fmt::Display for Rotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(pitch {:.6}, yaw {:.6}, roll {:.6})",
            self.pitch, self.yaw, self.roll
        )
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Creates a colour from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}
