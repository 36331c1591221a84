use super::{HexCoord, HexDirection};
use std::iter::FusedIterator;

/// Iterator over the hexes at exactly some distance from a center.
///
/// Created by the [`ring`] function. See there for more details.
#[derive(Clone, Debug)]
pub struct Ring {
    current: HexCoord,
    radius: i32,
    /// Total steps taken so far; the walk is done after `6 * radius`.
    step: usize,
}

/// Enumerate every hex at distance exactly `radius` from `center`.
///
/// The walk starts at `radius` steps to the north-west of `center` and
/// proceeds clockwise, taking `radius` steps in each direction from `East`
/// onward. It yields `6 * radius` hexes with no repeats, each adjacent to the
/// one before.
///
/// A non-positive radius yields nothing.
pub fn ring(center: HexCoord, radius: i32) -> Ring {
    let radius = radius.max(0);
    Ring {
        current: center.neighbor(HexDirection::NorthWest, radius),
        radius,
        step: 0,
    }
}

impl Ring {
    fn total(&self) -> usize {
        6 * self.radius as usize
    }
}

impl Iterator for Ring {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.total() {
            return None;
        }

        let next = self.current;
        let direction = HexDirection::from_index(self.step / self.radius as usize);
        self.current += direction;
        self.step += 1;

        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.total() - self.step;
        (size, Some(size))
    }
}

impl ExactSizeIterator for Ring {}

impl FusedIterator for Ring {}

/// Iterator over concentric rings around a center.
///
/// Created by the [`spiral`] function. See there for more details.
#[derive(Clone, Debug)]
pub struct Spiral {
    center: HexCoord,
    pending_center: bool,
    max_radius: i32,
    ring: Ring,
}

/// Enumerate `center` (optionally), then each [`ring`] from radius `1` to
/// `max_radius` inclusive.
///
/// With the center included this yields `1 + 3 * max_radius * (max_radius + 1)`
/// hexes. A negative `max_radius` yields nothing, not even the center.
pub fn spiral(center: HexCoord, max_radius: i32, include_center: bool) -> Spiral {
    Spiral {
        center,
        pending_center: include_center && max_radius >= 0,
        max_radius: max_radius.max(0),
        ring: ring(center, 1.min(max_radius)),
    }
}

impl Iterator for Spiral {
    type Item = HexCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_center {
            self.pending_center = false;
            return Some(self.center);
        }

        loop {
            if let Some(hex) = self.ring.next() {
                return Some(hex);
            }
            if self.ring.radius >= self.max_radius {
                return None;
            }
            self.ring = ring(self.center, self.ring.radius + 1);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let r = self.ring.radius as usize;
        let m = self.max_radius as usize;
        // hexes in the rings after the current one
        let later = 3 * m * (m + 1) - 3 * r * (r + 1);
        let size = later + self.ring.len() + self.pending_center as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for Spiral {}

impl FusedIterator for Spiral {}
