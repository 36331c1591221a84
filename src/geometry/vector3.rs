use super::hex::{Error, HexCoord, HexDirection, EPSILON};
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// An unconstrained cube vector `(q, r, s)` stored as `x`, `y`, `z`.
///
/// Nothing forces `x + y + z == 0`; use [`Vector3::is_valid_hex_coordinate`]
/// before trusting one. Rounding and direction lookups delegate to
/// [`HexCoord`] and [`HexDirection`]; the float predicates and the distance
/// are computed here, and agree with their `HexCoord` counterparts on
/// integer inputs.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Add, Sub, Mul, Neg, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    /// Cube vector for axial `(q, r)`.
    pub fn from_axial(q: f64, r: f64) -> Vector3 {
        Vector3::new(q, r, -q - r)
    }

    /// Axial `(q, r)`, dropping `s`.
    pub fn to_axial(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// `true` if the components sum to zero, within [`EPSILON`].
    pub fn is_valid_hex_coordinate(self) -> bool {
        (self.x + self.y + self.z).abs() < EPSILON
    }

    /// `true` if this is exactly one of the six unit directions.
    pub fn is_valid_hex_direction(self) -> bool {
        HexDirection::try_from(self).is_ok()
    }

    /// Round to the nearest hex.
    pub fn to_hex(self) -> HexCoord {
        HexCoord::round_cube(self.x, self.y, self.z)
    }

    /// Half the sum of the absolute component differences.
    pub fn hex_distance(self, other: Vector3) -> f64 {
        let delta = other - self;
        (delta.x.abs() + delta.y.abs() + delta.z.abs()) / 2.0
    }

    /// The hex `distance` steps away in `direction`.
    ///
    /// `direction` must be exactly a unit direction vector. Non-positive
    /// distances return `self` unchanged.
    pub fn hex_at_distance(self, direction: Vector3, distance: i32) -> Result<Vector3, Error> {
        let direction = HexDirection::try_from(direction)?;
        if distance <= 0 {
            return Ok(self);
        }
        Ok(self + Vector3::from(direction.offset()) * distance as f64)
    }

    /// The unit direction vector closest in angle to this vector.
    pub fn closest_direction(self) -> Result<Vector3, Error> {
        if self.is_valid_hex_direction() {
            return Ok(self);
        }
        let direction = HexDirection::closest_cube(self.x, self.y, self.z)?;
        Ok(direction.offset().into())
    }

    /// `true` if `other` lies on one of the six axial rays through `self`.
    pub fn in_straight_line_with(self, other: Vector3) -> bool {
        let delta = other - self;
        delta.x.abs() < EPSILON || delta.y.abs() < EPSILON || delta.z.abs() < EPSILON
    }
}

impl From<HexCoord> for Vector3 {
    fn from(hex: HexCoord) -> Vector3 {
        Vector3::new(hex.q as f64, hex.r as f64, hex.s() as f64)
    }
}

impl TryFrom<Vector3> for HexDirection {
    type Error = Error;

    fn try_from(vector: Vector3) -> Result<HexDirection, Error> {
        HexDirection::iter()
            .find(|direction| Vector3::from(direction.offset()) == vector)
            .ok_or(Error::InvalidDirectionVector {
                x: vector.x,
                y: vector.y,
                z: vector.z,
            })
    }
}
