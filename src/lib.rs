//! Coordinate math for hexagonal grids.
//!
//! Everything here is a pure function over small `Copy` values: conversions
//! between hex and pixel space, distances and neighbors, ring and spiral
//! enumeration, and rotation in 60° steps. See [`geometry::hex`] for the core
//! types.

pub mod config;
pub mod geometry;

pub use geometry::{
    hex::{ring, spiral, Directions, Error, Ring, Spiral},
    HexCoord, HexDirection, HexMetadata, Point2, Vector3,
};
