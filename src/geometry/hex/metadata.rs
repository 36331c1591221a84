use super::{HexCoord, EPSILON};
use crate::geometry::Point2;
use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// How hex space maps onto pixel space.
///
/// A `size` of `0.0` describes a degenerate grid: every pixel maps back to
/// the origin hex. Negative sizes and stretches are not rejected; they mirror
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexMetadata {
    /// Center-to-corner radius of a hex, in pixels.
    pub size: f64,
    /// `true` for pointy-topped hexes, `false` for flat-topped.
    pub pointy_top: bool,
    pub horizontal_stretch: f64,
    pub vertical_stretch: f64,
}

/// A [`HexMetadata`] field holds NaN or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a finite number")]
pub struct NonFiniteField {
    pub field: &'static str,
}

impl Default for HexMetadata {
    fn default() -> Self {
        HexMetadata {
            size: 1.0,
            pointy_top: true,
            horizontal_stretch: 1.0,
            vertical_stretch: 1.0,
        }
    }
}

impl HexMetadata {
    pub fn new(size: f64, pointy_top: bool) -> HexMetadata {
        HexMetadata {
            size,
            pointy_top,
            ..HexMetadata::default()
        }
    }

    pub fn with_stretch(self, horizontal_stretch: f64, vertical_stretch: f64) -> HexMetadata {
        HexMetadata {
            horizontal_stretch,
            vertical_stretch,
            ..self
        }
    }

    /// Fails on the first field which is not a finite number.
    pub fn validate(&self) -> Result<(), NonFiniteField> {
        let fields = [
            ("size", self.size),
            ("horizontal_stretch", self.horizontal_stretch),
            ("vertical_stretch", self.vertical_stretch),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, _)) => Err(NonFiniteField { field }),
            None => Ok(()),
        }
    }

    /// Center of `hex` in pixel space.
    pub fn hex_to_pixel(&self, hex: HexCoord) -> Point2 {
        let q = hex.q as f64;
        let r = hex.r as f64;
        let (x, y) = if self.pointy_top {
            (SQRT_3 * q + SQRT_3 / 2.0 * r, 1.5 * r)
        } else {
            (1.5 * q, SQRT_3 / 2.0 * q + SQRT_3 * r)
        };
        Point2::new(
            x * self.size * self.horizontal_stretch,
            y * self.size * self.vertical_stretch,
        )
    }

    /// Fractional axial coordinates `(q, r)` of a pixel.
    pub fn pixel_to_fractional(&self, pixel: Point2) -> (f64, f64) {
        let x = pixel.x / (self.size * self.horizontal_stretch);
        let y = pixel.y / (self.size * self.vertical_stretch);
        if self.pointy_top {
            (SQRT_3 / 3.0 * x - y / 3.0, 2.0 / 3.0 * y)
        } else {
            (2.0 / 3.0 * x, -x / 3.0 + SQRT_3 / 3.0 * y)
        }
    }

    /// The hex containing `pixel`.
    ///
    /// A zero `size` short-circuits to the origin.
    pub fn pixel_to_hex(&self, pixel: Point2) -> HexCoord {
        if self.size == 0.0 {
            log::debug!("zero hex size; mapping {} to the origin", pixel);
            return HexCoord::ORIGIN;
        }
        let (q, r) = self.pixel_to_fractional(pixel);
        HexCoord::round(q, r)
    }

    /// Pixel-space corners of `hex`, in order of increasing angle.
    pub fn hex_corners(&self, hex: HexCoord) -> [Point2; 6] {
        let center = self.hex_to_pixel(hex);
        let start_angle = if self.pointy_top { 0.5 } else { 0.0 };
        let mut corners = [center; 6];
        for (corner, point) in corners.iter_mut().enumerate() {
            let angle = std::f64::consts::FRAC_PI_3 * (start_angle + corner as f64);
            *point += Point2::new(
                self.size * self.horizontal_stretch * angle.cos(),
                self.size * self.vertical_stretch * angle.sin(),
            );
        }
        corners
    }

    /// The hex reached by moving `distance` steps from `origin` toward `target`
    /// in pixel space.
    ///
    /// One step is `size` pixels along the unit direction after stretching,
    /// so stretched axes take proportionally longer steps. Returns `origin`
    /// unchanged if `distance` is not positive or `target` coincides with it.
    pub fn hex_at_pixel_distance(&self, origin: HexCoord, target: Point2, distance: i32) -> HexCoord {
        if distance <= 0 {
            return origin;
        }

        let start = self.hex_to_pixel(origin);
        let delta = target - start;
        if delta.length_squared() < EPSILON {
            log::trace!("target {} coincides with {}", target, origin);
            return origin;
        }

        let direction = delta.normalized();
        let step = self.size
            * direction
                .scale(self.horizontal_stretch, self.vertical_stretch)
                .length();
        self.pixel_to_hex(start + direction * (step * distance as f64))
    }
}
