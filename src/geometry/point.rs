use derive_more::{Add, AddAssign, Display, From, Into, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// This vector scaled to unit length.
    ///
    /// A zero vector stays zero.
    pub fn normalized(self) -> Point2 {
        let length = self.length();
        if length == 0.0 {
            self
        } else {
            self * (1.0 / length)
        }
    }

    /// Component-wise product.
    pub fn scale(self, x: f64, y: f64) -> Point2 {
        Point2::new(self.x * x, self.y * y)
    }
}
