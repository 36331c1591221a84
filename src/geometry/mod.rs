pub mod hex;
pub mod point;
pub mod vector3;

pub use hex::{HexCoord, HexDirection, HexMetadata};
pub use point::Point2;
pub use vector3::Vector3;
