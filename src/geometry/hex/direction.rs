use super::{coordinate::HexCoord, Error, EPSILON};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Direction in a hexagonal coordinate system
///
/// Assumes that the major orientation is horizontal. Variants are declared
/// clockwise from `East`; that order is what [`HexDirection::next`] and
/// [`HexDirection::opposite`] step through.
///
/// Displays and parses as a lowercase compass abbreviation: `e`, `se`, `sw`,
/// `w`, `nw`, `ne`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum HexDirection {
    #[display("e")]
    East,
    #[display("se")]
    SouthEast,
    #[display("sw")]
    SouthWest,
    #[display("w")]
    West,
    #[display("nw")]
    NorthWest,
    #[display("ne")]
    NorthEast,
}

/// Unit offsets, indexed by [`HexDirection::index`].
const OFFSETS: [HexCoord; 6] = [
    HexCoord::new(1, 0),
    HexCoord::new(0, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(-1, 0),
    HexCoord::new(0, -1),
    HexCoord::new(1, -1),
];

impl HexDirection {
    /// All `HexDirection`s, clockwise from `East`.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
        HexDirection::NorthEast,
    ];

    /// Iterate through all `HexDirection`s, clockwise from `East`.
    pub fn iter() -> impl Iterator<Item = HexDirection> + Clone {
        (0..6).map(HexDirection::from_index)
    }

    /// Position of this direction in the clockwise ordering.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction at `index` in the clockwise ordering, wrapping modulo 6.
    #[inline]
    pub const fn from_index(index: usize) -> HexDirection {
        Self::ALL[index % 6]
    }

    /// The coordinate offset of a single step in this direction.
    #[inline]
    pub const fn offset(self) -> HexCoord {
        OFFSETS[self.index()]
    }

    /// Reverse lookup: the direction whose unit offset is exactly `offset`.
    pub fn from_offset(offset: HexCoord) -> Option<HexDirection> {
        Self::iter().find(|direction| direction.offset() == offset)
    }

    /// The adjacent direction, one step clockwise or counterclockwise.
    pub const fn next(self, clockwise: bool) -> HexDirection {
        if clockwise {
            Self::from_index(self.index() + 1)
        } else {
            Self::from_index(self.index() + 5)
        }
    }

    #[inline]
    pub const fn clockwise(self) -> HexDirection {
        self.next(true)
    }

    #[inline]
    pub const fn counterclockwise(self) -> HexDirection {
        self.next(false)
    }

    /// The direction pointing the other way.
    ///
    /// The offsets of opposite directions are exact negatives of each other.
    pub const fn opposite(self) -> HexDirection {
        Self::from_index(self.index() + 3)
    }

    /// Find the direction which most closely matches an arbitrary axial vector.
    ///
    /// The vector is interpreted in cube space (`s = -q - r`), where the six
    /// unit offsets are evenly spaced. The direction with the smallest angle to
    /// the vector wins; on a tie, the earliest direction in clockwise order wins.
    ///
    /// Fails with [`Error::ZeroDirection`] when `q² + r²` is below [`EPSILON`].
    pub fn closest(q: f64, r: f64) -> Result<HexDirection, Error> {
        if q * q + r * r < EPSILON {
            return Err(Error::ZeroDirection);
        }
        Ok(Self::nearest_by_angle(q, r, -q - r))
    }

    /// As [`HexDirection::closest`], for a raw cube vector.
    ///
    /// The vector need not lie on the `q + r + s == 0` plane. Fails when
    /// `q² + r² + s²` is below [`EPSILON`].
    pub(crate) fn closest_cube(q: f64, r: f64, s: f64) -> Result<HexDirection, Error> {
        if q * q + r * r + s * s < EPSILON {
            return Err(Error::ZeroDirection);
        }
        Ok(Self::nearest_by_angle(q, r, s))
    }

    /// `(q, r, s)` must be nonzero.
    fn nearest_by_angle(q: f64, r: f64, s: f64) -> HexDirection {
        let length = (q * q + r * r + s * s).sqrt();

        let angle_to = |direction: &HexDirection| {
            let offset = direction.offset();
            let (oq, or, os) = (offset.q as f64, offset.r as f64, offset.s() as f64);
            // every unit offset has a cube length of sqrt(2)
            let cos = (q * oq + r * or + s * os) / (length * std::f64::consts::SQRT_2);
            cos.clamp(-1.0, 1.0).acos()
        };

        Self::ALL
            .iter()
            .position_min_by(|a, b| angle_to(a).total_cmp(&angle_to(b)))
            .map_or(HexDirection::East, Self::from_index)
    }
}

/// A path of directions, written as a run of abbreviations like `esenw`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directions(pub Vec<HexDirection>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len());
        let mut rest = s;

        while !rest.is_empty() {
            // only the diagonals take two letters
            let width = if rest.starts_with(&['n', 's'][..]) { 2 } else { 1 };
            let direction = rest
                .get(..width)
                .and_then(|head| head.parse::<HexDirection>().ok())
                .ok_or(ParseDirectionsError {
                    position: s.len() - rest.len(),
                })?;
            directions.push(direction);
            rest = &rest[width..];
        }

        Ok(Directions(directions))
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

/// A path of hex directions contained something other than a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized hex direction at byte {position}")]
pub struct ParseDirectionsError {
    pub position: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_order_is_clockwise_from_east() {
        let directions: Vec<_> = HexDirection::iter().collect();
        assert_eq!(
            directions,
            vec![
                HexDirection::East,
                HexDirection::SouthEast,
                HexDirection::SouthWest,
                HexDirection::West,
                HexDirection::NorthWest,
                HexDirection::NorthEast,
            ]
        );
    }

    #[test]
    fn test_offsets_are_unit_and_valid() {
        for direction in HexDirection::iter() {
            let offset = direction.offset();
            assert_eq!(offset.q + offset.r + offset.s(), 0);
            assert_eq!(offset.length(), 1);
            assert_eq!(HexDirection::from_offset(offset), Some(direction));
        }
        assert_eq!(HexDirection::from_offset(HexCoord::new(1, 1)), None);
    }

    #[test]
    fn test_next_cycles_in_six() {
        for direction in HexDirection::iter() {
            for &clockwise in &[true, false] {
                let mut current = direction;
                for _ in 0..6 {
                    current = current.next(clockwise);
                }
                assert_eq!(current, direction);
            }
            assert_eq!(direction.clockwise().counterclockwise(), direction);
        }
        assert_eq!(HexDirection::East.clockwise(), HexDirection::SouthEast);
        assert_eq!(HexDirection::East.counterclockwise(), HexDirection::NorthEast);
        assert_eq!(HexDirection::NorthEast.clockwise(), HexDirection::East);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::East.opposite(), HexDirection::West);
        assert_eq!(HexDirection::East.offset(), HexCoord::new(1, 0));
        assert_eq!(HexDirection::West.offset(), HexCoord::new(-1, 0));
        assert_eq!(HexDirection::West.offset().s(), 1);
        for direction in HexDirection::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().offset(), -direction.offset());
        }
    }

    #[test]
    fn test_closest_exact_offsets() {
        for direction in HexDirection::iter() {
            let offset = direction.offset();
            assert_eq!(
                HexDirection::closest(offset.q as f64, offset.r as f64).unwrap(),
                direction
            );
        }
    }

    #[test]
    fn test_closest_approximate() {
        assert_eq!(HexDirection::closest(3.0, 0.4).unwrap(), HexDirection::East);
        assert_eq!(HexDirection::closest(-0.2, -2.0).unwrap(), HexDirection::NorthWest);
        assert_eq!(HexDirection::closest(5.0, -4.5).unwrap(), HexDirection::NorthEast);
    }

    #[test]
    fn test_closest_tie_prefers_earlier_direction() {
        // exactly between East and SouthEast
        assert_eq!(HexDirection::closest(1.0, 1.0).unwrap(), HexDirection::East);
    }

    #[test]
    fn test_closest_zero_is_error() {
        assert_eq!(HexDirection::closest(0.0, 0.0), Err(Error::ZeroDirection));
        assert_eq!(HexDirection::closest(0.01, 0.0), Err(Error::ZeroDirection));
    }

    #[test]
    fn test_closest_threshold_uses_axial_length() {
        // 0.025² = 0.000625: short in the plane, though its cube length is 0.00125
        assert_eq!(HexDirection::closest(0.025, 0.0), Err(Error::ZeroDirection));
        assert_eq!(HexDirection::closest(0.0, -0.03), Err(Error::ZeroDirection));
        assert_eq!(HexDirection::closest(0.04, 0.0), Ok(HexDirection::East));
        assert_eq!(
            HexDirection::closest_cube(0.025, 0.0, -0.025),
            Ok(HexDirection::East)
        );
    }

    #[test]
    fn test_display_and_parse_single() {
        for direction in HexDirection::iter() {
            assert_eq!(direction.to_string().parse::<HexDirection>().ok(), Some(direction));
        }
        assert_eq!(HexDirection::SouthWest.to_string(), "sw");
        assert_eq!("ne".parse::<HexDirection>().ok(), Some(HexDirection::NorthEast));
        assert!("n".parse::<HexDirection>().is_err());
        assert!("East".parse::<HexDirection>().is_err());
    }

    #[test]
    fn test_parse_directions() {
        let directions: Directions = "esenwwsw".parse().unwrap();
        assert_eq!(
            directions.0,
            vec![
                HexDirection::East,
                HexDirection::SouthEast,
                HexDirection::NorthWest,
                HexDirection::West,
                HexDirection::SouthWest,
            ]
        );
        assert_eq!(directions.to_string(), "esenwwsw");
        assert_eq!("".parse::<Directions>(), Ok(Directions::default()));
    }

    #[test]
    fn test_parse_directions_reports_position() {
        assert_eq!(
            "ex".parse::<Directions>(),
            Err(ParseDirectionsError { position: 1 })
        );
        assert_eq!(
            "nwsn".parse::<Directions>(),
            Err(ParseDirectionsError { position: 2 })
        );
        assert_eq!(
            "wé".parse::<Directions>(),
            Err(ParseDirectionsError { position: 1 })
        );
    }
}
