//! 60° rotations about a pivot.
//!
//! Positive step counts turn clockwise, matching the order of [`HexDirection`]:
//! one clockwise step carries `East` onto `SouthEast`.
//!
//! [`HexDirection`]: super::HexDirection

use super::{Error, HexCoord, RotationReferenceProblem};
use num::Integer;

impl HexCoord {
    /// Rotate this coordinate about `pivot` by `steps` sixths of a turn.
    ///
    /// Any integer is accepted; it is reduced modulo 6, so negative steps turn
    /// counterclockwise. The distance to `pivot` is preserved.
    pub fn rotate_by_steps(self, pivot: HexCoord, steps: i32) -> HexCoord {
        let (q, r, s) = (self - pivot).cube();
        let (q, r, _) = match steps.mod_floor(&6) {
            1 => (-r, -s, -q),
            2 => (s, q, r),
            3 => (-q, -r, -s),
            4 => (r, s, q),
            5 => (-s, -q, -r),
            _ => (q, r, s),
        };
        HexCoord::new(q, r) + pivot
    }

    /// Rotate this coordinate about `pivot` by whatever rotation carries
    /// `orient_from` onto `orient_to`.
    ///
    /// The shorter way round is used, clockwise on a tie, unless
    /// `force_clockwise` picks the direction.
    ///
    /// Both references must be distinct from `pivot` and equally far from it.
    /// If the references are equal this coordinate is returned unchanged,
    /// without checking them.
    pub fn rotate_to_match(
        self,
        orient_from: HexCoord,
        orient_to: HexCoord,
        pivot: HexCoord,
        force_clockwise: Option<bool>,
    ) -> Result<HexCoord, Error> {
        if orient_from == orient_to {
            return Ok(self);
        }
        if orient_from == pivot || orient_to == pivot {
            return Err(Error::InvalidRotationReference(
                RotationReferenceProblem::CoincidesWithPivot,
            ));
        }
        if orient_from.distance(pivot) != orient_to.distance(pivot) {
            return Err(Error::InvalidRotationReference(
                RotationReferenceProblem::DistanceMismatch,
            ));
        }

        let counterclockwise_steps = (0..6)
            .find(|&steps| orient_from.rotate_by_steps(pivot, -steps) == orient_to)
            .ok_or(Error::InvalidRotationReference(
                RotationReferenceProblem::NotAligned,
            ))?;
        let clockwise_steps = (6 - counterclockwise_steps) % 6;

        let clockwise = force_clockwise.unwrap_or(clockwise_steps <= counterclockwise_steps);
        let steps = if clockwise {
            clockwise_steps
        } else {
            -counterclockwise_steps
        };
        log::trace!(
            "rotating {} about {} by {} steps {}",
            self,
            pivot,
            steps.abs(),
            if clockwise { "clockwise" } else { "counterclockwise" },
        );

        Ok(self.rotate_by_steps(pivot, steps))
    }
}
