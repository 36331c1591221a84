use super::direction::{Directions, HexDirection};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub},
};

/// Axial hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint: `q + r + s == 0`. Only `q` and `r` are stored; `s` is always
/// derived, so the constraint holds for every value of this type.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize,
)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    /// `(0, 0, 0)`; the default rotation pivot.
    pub const ORIGIN: HexCoord = HexCoord::new(0, 0);

    pub const fn new(q: i32, r: i32) -> HexCoord {
        HexCoord { q, r }
    }

    /// Construct from cube components, discarding `s`.
    ///
    /// Returns `None` if the components do not satisfy `q + r + s == 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Option<HexCoord> {
        (q + r + s == 0).then(|| HexCoord::new(q, r))
    }

    /// The derived third cube component.
    #[inline]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Cube components `(q, r, s)`.
    #[inline]
    pub const fn cube(self) -> (i32, i32, i32) {
        (self.q, self.r, self.s())
    }

    /// Hex distance between two coordinates: `max(|dq|, |dr|, |ds|)`.
    pub fn distance(self, other: HexCoord) -> i32 {
        (self - other).length()
    }

    /// Hex distance from the origin.
    pub fn length(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }

    /// The coordinate `distance` steps away in `direction`.
    ///
    /// Negative distances move the opposite way.
    pub fn neighbor(self, direction: HexDirection, distance: i32) -> HexCoord {
        self + direction.offset() * distance
    }

    /// The six adjacent coordinates, clockwise from `East`.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = HexCoord> + Clone {
        HexDirection::iter().map(move |direction| self + direction)
    }

    /// Like [`HexCoord::neighbor`], but non-positive distances leave the coordinate where it is.
    pub fn at_distance(self, direction: HexDirection, distance: i32) -> HexCoord {
        if distance <= 0 {
            self
        } else {
            self.neighbor(direction, distance)
        }
    }

    /// Follow a path of directions, one step each.
    pub fn walk(self, directions: &Directions) -> HexCoord {
        directions.0.iter().fold(self, |position, &direction| position + direction)
    }

    /// `true` when `other` lies on one of the six axial rays through `self`.
    ///
    /// Equal coordinates are trivially in line.
    pub fn in_straight_line_with(self, other: HexCoord) -> bool {
        let (dq, dr, ds) = (other - self).cube();
        dq == 0 || dr == 0 || ds == 0
    }

    /// Round fractional axial coordinates to the nearest hex.
    ///
    /// `s` is derived as `-q - r` before rounding.
    pub fn round(q: f64, r: f64) -> HexCoord {
        Self::round_cube(q, r, -q - r)
    }

    /// Round fractional cube coordinates to the nearest hex.
    ///
    /// Each component is rounded independently, then whichever component moved
    /// furthest is recomputed from the other two. `q` is checked first, then
    /// `r`; otherwise `s` is the one discarded.
    pub fn round_cube(q: f64, r: f64, s: f64) -> HexCoord {
        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }

        HexCoord::new(rq as i32, rr as i32)
    }
}

impl Add for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn add(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn sub(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn neg(self) -> HexCoord {
        HexCoord::new(-self.q, -self.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = HexCoord;

    #[inline]
    fn mul(self, rhs: i32) -> HexCoord {
        HexCoord::new(self.q * rhs, self.r * rhs)
    }
}

impl AddAssign<HexDirection> for HexCoord {
    fn add_assign(&mut self, rhs: HexDirection) {
        *self = *self + rhs.offset();
    }
}

impl Add<HexDirection> for HexCoord {
    type Output = HexCoord;

    fn add(mut self, rhs: HexDirection) -> Self::Output {
        self += rhs;
        self
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s())
    }
}
