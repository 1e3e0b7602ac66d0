//! Arbitrary-precision ratios for chart scaling.
//!
//! A chart maps its tallest entry onto a few hundred pixels, so the scale is
//! `available_pixels / max_height_meters`. Heights in a comparison range from
//! sub-atomic to cosmic, and the intermediate ratio can sit more than 40
//! orders of magnitude away from either operand. [`Precision`] performs that
//! step on exact decimal expansions of the inputs and only projects back to
//! `f64` at the end.
//!
//! ```
//! use height_engine::Precision;
//!
//! let universe = Precision::new(8.7e28).unwrap();
//! let quark = Precision::new(1e-13).unwrap();
//! let ratio = universe.divide(&quark).unwrap().to_f64();
//! assert!(ratio.is_finite() && ratio > 0.0);
//! ```

use bigdecimal::{BigDecimal, FromPrimitive, ToPrimitive, Zero};
use std::fmt;

use crate::error::{HeightError, HeightResult};

/// Significant digits kept by every operation.
pub const PRECISION_DIGITS: u64 = 100;

/// Immutable arbitrary-precision decimal wrapper.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct Precision(BigDecimal);

impl Precision {
    /// Wrap a finite number. The binary value is expanded exactly.
    ///
    /// # Errors
    /// * `InvalidMagnitude` for NaN or ±Infinity
    pub fn new(value: f64) -> HeightResult<Self> {
        if !value.is_finite() {
            return Err(HeightError::invalid("Precision::new", value));
        }
        BigDecimal::from_f64(value)
            .map(Precision)
            .ok_or_else(|| HeightError::invalid("Precision::new", value))
    }

    /// `self / other`, rounded to [`PRECISION_DIGITS`] significant digits.
    ///
    /// # Errors
    /// * `DivisionByZero` if `other` is zero
    pub fn divide(&self, other: &Precision) -> HeightResult<Precision> {
        if other.is_zero() {
            return Err(HeightError::DivisionByZero);
        }
        let quotient = (&self.0 / &other.0).with_prec(PRECISION_DIGITS);
        log::debug!("precision divide: {} / {} = {}", self.0, other.0, quotient);
        Ok(Precision(quotient))
    }

    /// `self * other`, rounded to [`PRECISION_DIGITS`] significant digits.
    pub fn multiply(&self, other: &Precision) -> Precision {
        Precision((&self.0 * &other.0).with_prec(PRECISION_DIGITS))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Project back to `f64`.
    ///
    /// This is where float limits come back into play: values beyond the
    /// `f64` range saturate to `±f64::MAX` and values below the smallest
    /// subnormal become zero.
    pub fn to_f64(&self) -> f64 {
        let negative = self.0 < BigDecimal::zero();
        match self.0.to_f64() {
            Some(v) if v.is_finite() => v,
            _ => {
                log::warn!("precision value {} exceeds f64 range, saturating", self.0);
                if negative {
                    f64::MIN
                } else {
                    f64::MAX
                }
            }
        }
    }
}

impl TryFrom<f64> for Precision {
    type Error = HeightError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Precision::new(value)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Pixels-per-metre for a chart of `available_pixels` showing `max_meters`.
///
/// # Errors
/// * `InvalidMagnitude` if either input is not finite
/// * `DivisionByZero` if `max_meters` is zero
pub fn pixels_per_meter(available_pixels: f64, max_meters: f64) -> HeightResult<f64> {
    let pixels = Precision::new(available_pixels)?;
    let meters = Precision::new(max_meters)?;
    Ok(pixels.divide(&meters)?.to_f64())
}
