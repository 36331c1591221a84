//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)
//!
//! [`HexCoord`] is the primary coordinate type; it stores axial `q` and `r`
//! and derives `s`, so `q + r + s == 0` always holds. [`Vector3`] offers the
//! same operations for raw cube vectors coming from external vector math.
//!
//! [`Vector3`]: crate::geometry::Vector3

pub mod coordinate;
pub mod direction;
pub mod metadata;
pub mod ring;
mod rotation;

pub use coordinate::HexCoord;
pub use direction::{Directions, HexDirection, ParseDirectionsError};
pub use metadata::{HexMetadata, NonFiniteField};
pub use ring::{ring, spiral, Ring, Spiral};

/// Tolerance for squared lengths and for the `q + r + s == 0` check on float vectors.
pub const EPSILON: f64 = 0.001;

/// A precondition of a hex operation was violated.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("({x}, {y}, {z}) is not one of the six unit hex directions")]
    InvalidDirectionVector { x: f64, y: f64, z: f64 },
    #[error("invalid rotation reference: {0}")]
    InvalidRotationReference(RotationReferenceProblem),
    #[error("cannot infer a direction from a zero-length vector")]
    ZeroDirection,
}

/// Why a pair of orientation references cannot define a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, parse_display::Display)]
pub enum RotationReferenceProblem {
    #[display("a reference coincides with the pivot")]
    CoincidesWithPivot,
    #[display("references are at different distances from the pivot")]
    DistanceMismatch,
    #[display("no whole-step rotation carries one reference onto the other")]
    NotAligned,
}
