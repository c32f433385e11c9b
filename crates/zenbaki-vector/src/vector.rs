//! The [`Vector2`] value type.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;
use zenbaki_core::format_number;

/// A vector in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector from a magnitude and a direction in degrees.
    #[must_use]
    pub fn from_polar(magnitude: f64, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(magnitude * cos, magnitude * sin)
    }

    /// Component-wise sum.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `k`.
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self::new(k * self.x, k * self.y)
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length, always non-negative.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction in degrees, normalized into `[0, 360)`.
    ///
    /// The zero vector has angle 0, following `atan2(0, 0) = 0`.
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        let deg = self.y.atan2(self.x).to_degrees();
        let normalized = deg.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative angles
        if normalized >= 360.0 {
            0.0
        } else {
            normalized
        }
    }

    /// Angle between two vectors in degrees, in `[0, 180]`.
    ///
    /// Returns `None` when either vector is zero.
    #[must_use]
    pub fn angle_between(self, other: Self) -> Option<f64> {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return None;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        Some(cos.acos().to_degrees())
    }

    /// Returns true when both vectors are non-zero and their dot product
    /// vanishes within `epsilon`.
    #[must_use]
    pub fn is_perpendicular(self, other: Self, epsilon: f64) -> bool {
        !self.is_zero() && !other.is_zero() && self.dot(other).abs() <= epsilon
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_number(self.x, 4), format_number(self.y, 4))
    }
}
