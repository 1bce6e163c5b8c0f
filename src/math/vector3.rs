//! Three-component `f32` vector.
//!
//! [`Vector3`] is a plain value type: every operator returns a fresh copy and
//! nothing is heap-allocated. Degenerate inputs never fail. They resolve to
//! fixed sentinel values instead:
//!
//! | Operation                 | Degenerate input      | Result            |
//! |---------------------------|-----------------------|-------------------|
//! | `v / s`                   | `s == 0.0`            | zero vector       |
//! | [`Vector3::unit`]         | zero-length `v`       | `v` unchanged     |
//! | [`Vector3::normalise`]    | zero-length `v`       | no-op             |
//! | [`Vector3::angle_between`]| either vector zero    | `0.0` degrees     |
//! | [`Vector3::projection`]   | zero-length `onto`    | zero vector       |
//!
//! Note that a zero angle is therefore ambiguous: it means either "parallel"
//! or "one of the inputs had no length".
//!
//! Equality is exact per component. Vectors that went through a few
//! transforms will rarely compare equal to hand-written literals; compare
//! with a tolerance in that case.

use std::fmt;
use std::ops::{Add, AddAssign, BitXor, Div, Mul, Neg, Sub, SubAssign};

/// A 3D position, direction or displacement.
///
/// # Example
///
/// ```
/// use spincube::Vector3;
///
/// let x = Vector3::new(1.0, 0.0, 0.0);
/// let y = Vector3::new(0.0, 1.0, 0.0);
///
/// assert_eq!(x.dot(y), 0.0);
/// assert_eq!(x ^ y, Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(Vector3::new(1.0, 2.0, 3.0) / 0.0, Vector3::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector, also the sentinel for degenerate results.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector from an `[x, y, z]` triple.
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    /// Negates the x component in place.
    pub fn reverse_x(&mut self) {
        self.x = -self.x;
    }

    /// Negates the y component in place.
    pub fn reverse_y(&mut self) {
        self.y = -self.y;
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length. Skips the square root, handy for comparisons.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scalar (dot) product.
    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed vector (cross) product.
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between `self` and `other`, in **degrees**.
    ///
    /// Returns `0.0` when either vector has zero length.
    pub fn angle_between(&self, other: Vector3) -> f32 {
        let length_product = self.length() * other.length();
        if length_product == 0.0 {
            return 0.0;
        }

        (self.dot(other) / length_product).acos().to_degrees()
    }

    /// Returns a normalised copy, or `self` unchanged if it has zero length.
    pub fn unit(&self) -> Vector3 {
        let magnitude = self.length();
        if magnitude > 0.0 { *self / magnitude } else { *self }
    }

    /// Normalises in place. Does nothing to a zero-length vector.
    pub fn normalise(&mut self) {
        *self = self.unit();
    }

    /// The component of `self` lying along `onto`.
    ///
    /// Returns [`Vector3::ZERO`] when `onto` has zero length.
    pub fn projection(&self, onto: Vector3) -> Vector3 {
        let magnitude = onto.length();
        if magnitude == 0.0 {
            return Vector3::ZERO;
        }

        onto.unit() * (self.dot(onto) / magnitude)
    }

    /// The component of `self` orthogonal to `onto`.
    pub fn rejection(&self, onto: Vector3) -> Vector3 {
        *self - self.projection(onto)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.0
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f32) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// `a * b` between two vectors is the dot product.
impl Mul<Vector3> for Vector3 {
    type Output = f32;

    fn mul(self, rhs: Vector3) -> f32 {
        self.dot(rhs)
    }
}

/// `a ^ b` is the cross product.
impl BitXor for Vector3 {
    type Output = Vector3;

    fn bitxor(self, rhs: Vector3) -> Vector3 {
        self.cross(rhs)
    }
}

/// Division by exactly `0.0` yields [`Vector3::ZERO`] rather than infinities.
impl Div<f32> for Vector3 {
    type Output = Vector3;

    fn div(self, divisor: f32) -> Vector3 {
        if divisor == 0.0 {
            return Vector3::ZERO;
        }

        Vector3::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.x, self.y, self.z)
    }
}
