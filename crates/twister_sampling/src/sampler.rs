//! Uniform geometric sampling.
//!
//! [`GeometricSampler`] borrows a [`UniformSource`] and turns a fixed
//! number of primitive draws into directions, points and rotations.
//! The draw count of each operation is part of its contract: callers
//! replaying a stream rely on it, so the constructions below must not
//! be swapped for rejection-based ones.
//!
//! ## Constructions
//!
//! - Sphere directions sample the azimuth and `cos(polar)` uniformly.
//!   Equal-area bands of the sphere have equal height in `z`, so this
//!   is uniform on the surface; sampling the polar angle itself would
//!   crowd the poles.
//! - Ball and disc radii use `u^(1/3)` and `u^(1/2)` so that density is
//!   uniform in volume and area.
//! - Quaternions use Shoemake's subgroup algorithm, which is uniform
//!   (Haar measure) over rotations. Euler angles drawn independently are
//!   not, and [`GeometricSampler::rotator`] is kept separate for that
//!   reason.
//!
//! ## Reference
//!
//! - Shoemake, K. (1992). "Uniform Random Rotations". Graphics Gems III.

use std::f64::consts::TAU;

use twister_engine::UniformSource;

use glam::{DQuat, DVec2, DVec3};

use crate::types::{Color, Rotator};

/// Geometric sampler over a borrowed primitive source.
///
/// The sampler holds no state of its own: every result is a pure
/// function of the source's position when the call is made.
///
/// # Examples
///
/// ```rust
/// use twister_engine::RandomEngine;
/// use twister_sampling::GeometricSampler;
///
/// let mut engine = RandomEngine::new(42);
/// let direction = GeometricSampler::new(&mut engine).unit_vector();
/// assert!((direction.length() - 1.0).abs() < 1e-12);
/// assert_eq!(engine.current_count(), 2);
/// ```
pub struct GeometricSampler<'a, S: UniformSource + ?Sized> {
    pub(crate) source: &'a mut S,
}

impl<'a, S: UniformSource + ?Sized> GeometricSampler<'a, S> {
    /// Wraps a primitive source.
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    // ------------------------------------------------------------------
    // Sphere
    // ------------------------------------------------------------------

    /// Uniform direction on the unit sphere; 2 draws.
    ///
    /// Draws the azimuth `theta` in `[0, 2pi]` then `cos(phi)` in
    /// `[-1, 1]`. `sin(phi)` is taken as `sqrt(1 - cos^2)`, which stays
    /// accurate near the poles where `sin(acos(c))` does not.
    pub fn unit_vector(&mut self) -> DVec3 {
        let theta = self.source.uniform_float(0.0, TAU);
        let cos_phi = self.source.uniform_float(-1.0, 1.0);
        spherical_direction(theta, cos_phi)
    }

    /// Uniform point on the surface of a sphere of `radius`; 2 draws.
    pub fn point_on_sphere(&mut self, radius: f64) -> DVec3 {
        self.unit_vector() * radius
    }

    /// Uniform point inside a ball of `radius`; 3 draws.
    ///
    /// The direction is drawn first, then `u` in `[0, 1]`; the radius is
    /// `radius * cbrt(u)`.
    pub fn point_in_sphere(&mut self, radius: f64) -> DVec3 {
        let direction = self.unit_vector();
        let u = self.source.uniform_float(0.0, 1.0);
        direction * (u.cbrt() * radius)
    }

    // ------------------------------------------------------------------
    // Circle
    // ------------------------------------------------------------------

    /// Uniform direction on the unit circle; 1 draw.
    pub fn unit_vector2(&mut self) -> DVec2 {
        let angle = self.source.uniform_float(0.0, TAU);
        DVec2::new(angle.cos(), angle.sin())
    }

    /// Uniform point on a circle of `radius`; 1 draw.
    pub fn point_on_circle(&mut self, radius: f64) -> DVec2 {
        self.unit_vector2() * radius
    }

    /// Uniform point inside a disc of `radius`; 2 draws.
    ///
    /// The angle is drawn first, then `u` in `[0, 1]`; the radius is
    /// `radius * sqrt(u)`.
    pub fn point_in_circle(&mut self, radius: f64) -> DVec2 {
        let angle = self.source.uniform_float(0.0, TAU);
        let r = self.source.uniform_float(0.0, 1.0).sqrt() * radius;
        DVec2::new(r * angle.cos(), r * angle.sin())
    }

    /// [`point_on_circle`](Self::point_on_circle) in the XY plane; 1 draw.
    pub fn point_on_circle_3d(&mut self, radius: f64) -> DVec3 {
        self.point_on_circle(radius).extend(0.0)
    }

    /// [`point_in_circle`](Self::point_in_circle) in the XY plane; 2 draws.
    pub fn point_in_circle_3d(&mut self, radius: f64) -> DVec3 {
        self.point_in_circle(radius).extend(0.0)
    }

    // ------------------------------------------------------------------
    // Rotations
    // ------------------------------------------------------------------

    /// Uniformly distributed unit quaternion; 3 draws.
    ///
    /// Shoemake's method: `u1` in `[0, 1]`, `u2` and `u3` in `[0, 2pi]`,
    /// giving `(sqrt(1-u1) sin u2, sqrt(1-u1) cos u2, sqrt(u1) sin u3,
    /// sqrt(u1) cos u3)` as `(x, y, z, w)`.
    pub fn quat(&mut self) -> DQuat {
        let u1 = self.source.uniform_float(0.0, 1.0);
        let u2 = self.source.uniform_float(0.0, TAU);
        let u3 = self.source.uniform_float(0.0, TAU);

        let sqrt_u1 = u1.sqrt();
        let sqrt_1_minus_u1 = (1.0 - u1).sqrt();

        DQuat::from_xyzw(
            sqrt_1_minus_u1 * u2.sin(),
            sqrt_1_minus_u1 * u2.cos(),
            sqrt_u1 * u3.sin(),
            sqrt_u1 * u3.cos(),
        )
    }

    /// Independent Euler angles in degrees; 3 draws.
    ///
    /// Pitch in `[-90, 90]`, yaw and roll in `[-180, 180]`. This is *not*
    /// uniform over rotations (no area correction); use
    /// [`quat`](Self::quat) when an unbiased orientation is needed.
    pub fn rotator(&mut self) -> Rotator {
        let pitch = self.source.uniform_float(-90.0, 90.0);
        let yaw = self.source.uniform_float(-180.0, 180.0);
        let roll = self.source.uniform_float(-180.0, 180.0);
        Rotator::new(pitch, yaw, roll)
    }

    // ------------------------------------------------------------------
    // Boxes and colours
    // ------------------------------------------------------------------

    /// Vector with each component in `[min, max]`; 3 draws (x, y, z).
    pub fn vector_in_box(&mut self, min: f64, max: f64) -> DVec3 {
        let x = self.source.uniform_float(min, max);
        let y = self.source.uniform_float(min, max);
        let z = self.source.uniform_float(min, max);
        DVec3::new(x, y, z)
    }

    /// Vector with each component in `[min, max]`; 2 draws (x, y).
    pub fn vector2_in_box(&mut self, min: f64, max: f64) -> DVec2 {
        let x = self.source.uniform_float(min, max);
        let y = self.source.uniform_float(min, max);
        DVec2::new(x, y)
    }

    /// Opaque colour with uniform RGB channels; 3 draws.
    pub fn color(&mut self) -> Color {
        let r = self.channel();
        let g = self.channel();
        let b = self.channel();
        Color::rgb(r, g, b)
    }

    /// Colour with uniform RGBA channels; 4 draws.
    pub fn color_with_alpha(&mut self) -> Color {
        let r = self.channel();
        let g = self.channel();
        let b = self.channel();
        let a = self.channel();
        Color::rgba(r, g, b, a)
    }

    fn channel(&mut self) -> u8 {
        self.source.uniform_int(0, i32::from(u8::MAX)) as u8
    }
}

/// Maps an azimuth and polar cosine onto the unit sphere.
pub(crate) fn spherical_direction(theta: f64, cos_phi: f64) -> DVec3 {
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    DVec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}
