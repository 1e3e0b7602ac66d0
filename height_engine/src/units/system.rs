//! Fine-grained length units and their conversion table.
//!
//! The canonical unit is the metre. Every other unit is stored as an exact
//! rational relationship `per` units == `meters` metres, where both sides are
//! integers that f64 represents exactly. This keeps the imperial definitions
//! (the international inch is exactly `0.0254 m`) free of the rounding a
//! pre-computed decimal factor would carry.
//!
//! ```text
//! v_meters = v_unit * meters / per
//! v_unit   = v_meters * per / meters
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_converted, ensure_length, HeightError, HeightResult};

/// Measurement family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Metric,
    Imperial,
}

/// Length unit tag used for one-shot conversions and display-unit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Mile,
}

/// Conversion metadata for one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitMeta {
    /// Metres on the metre side of the exact relationship.
    pub meters: f64,
    /// Units on the unit side of the exact relationship.
    pub per: f64,
    /// Printable symbol.
    pub symbol: &'static str,
    /// Singular lowercase name.
    pub name: &'static str,
    pub family: UnitFamily,
}

impl UnitMeta {
    /// How many of this unit fit in one metre.
    #[inline]
    pub fn units_per_meter(&self) -> f64 {
        self.per / self.meters
    }
}

const ALL_UNITS: [UnitSystem; 9] = [
    UnitSystem::Nanometer,
    UnitSystem::Micrometer,
    UnitSystem::Millimeter,
    UnitSystem::Centimeter,
    UnitSystem::Meter,
    UnitSystem::Kilometer,
    UnitSystem::Inch,
    UnitSystem::Foot,
    UnitSystem::Mile,
];

impl UnitSystem {
    /// Every supported unit, metric ladder first, smallest to largest within a family.
    pub fn all() -> &'static [UnitSystem] {
        &ALL_UNITS
    }

    /// Conversion table entry for this unit.
    pub const fn meta(self) -> UnitMeta {
        use UnitFamily::{Imperial, Metric};
        match self {
            UnitSystem::Nanometer => UnitMeta {
                meters: 1.0,
                per: 1e9,
                symbol: "nm",
                name: "nanometer",
                family: Metric,
            },
            UnitSystem::Micrometer => UnitMeta {
                meters: 1.0,
                per: 1e6,
                symbol: "μm",
                name: "micrometer",
                family: Metric,
            },
            UnitSystem::Millimeter => UnitMeta {
                meters: 1.0,
                per: 1e3,
                symbol: "mm",
                name: "millimeter",
                family: Metric,
            },
            UnitSystem::Centimeter => UnitMeta {
                meters: 1.0,
                per: 1e2,
                symbol: "cm",
                name: "centimeter",
                family: Metric,
            },
            UnitSystem::Meter => UnitMeta {
                meters: 1.0,
                per: 1.0,
                symbol: "m",
                name: "meter",
                family: Metric,
            },
            UnitSystem::Kilometer => UnitMeta {
                meters: 1e3,
                per: 1.0,
                symbol: "km",
                name: "kilometer",
                family: Metric,
            },
            // 1 in = 0.0254 m exactly
            UnitSystem::Inch => UnitMeta {
                meters: 254.0,
                per: 10_000.0,
                symbol: "in",
                name: "inch",
                family: Imperial,
            },
            // 1 ft = 0.3048 m exactly
            UnitSystem::Foot => UnitMeta {
                meters: 3_048.0,
                per: 10_000.0,
                symbol: "ft",
                name: "foot",
                family: Imperial,
            },
            // 1 mi = 1609.344 m exactly
            UnitSystem::Mile => UnitMeta {
                meters: 1_609_344.0,
                per: 1_000.0,
                symbol: "mi",
                name: "mile",
                family: Imperial,
            },
        }
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        self.meta().symbol
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.meta().name
    }

    #[inline]
    pub fn family(self) -> UnitFamily {
        self.meta().family
    }

    #[inline]
    pub fn is_metric(self) -> bool {
        self.family() == UnitFamily::Metric
    }

    /// Size of one unit in metres. Use for ordering units by size.
    #[inline]
    pub fn meters_per_unit(self) -> f64 {
        let meta = self.meta();
        meta.meters / meta.per
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for UnitSystem {
    type Err = HeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        // "μm" has no ASCII lowercase form, match it before folding case
        if tag == "μm" || tag == "µm" {
            return Ok(UnitSystem::Micrometer);
        }
        match tag.to_ascii_lowercase().as_str() {
            "nm" | "nanometer" | "nanometers" | "nanometre" | "nanometres" => {
                Ok(UnitSystem::Nanometer)
            }
            "um" | "micrometer" | "micrometers" | "micrometre" | "micrometres" => {
                Ok(UnitSystem::Micrometer)
            }
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(UnitSystem::Millimeter)
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(UnitSystem::Centimeter)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(UnitSystem::Meter),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(UnitSystem::Kilometer)
            }
            "in" | "inch" | "inches" => Ok(UnitSystem::Inch),
            "ft" | "foot" | "feet" => Ok(UnitSystem::Foot),
            "mi" | "mile" | "miles" => Ok(UnitSystem::Mile),
            _ => Err(HeightError::UnsupportedUnit(tag.to_string())),
        }
    }
}

/// Express `value` (given in `unit`) in metres.
///
/// # Errors
/// * `InvalidMagnitude` if `value` is negative, NaN or infinite, or if the
///   result overflows f64
///
/// ```
/// use height_engine::units::{to_meters, UnitSystem};
/// let m = to_meters(6.0, UnitSystem::Foot).unwrap();
/// assert!((m - 1.8288).abs() < 1e-12);
/// ```
pub fn to_meters(value: f64, unit: UnitSystem) -> HeightResult<f64> {
    let value = ensure_length("to_meters", value)?;
    ensure_converted("to_meters", value, scale_to_meters(value, unit))
}

/// Express `meters` in `unit`. Inverse of [`to_meters`].
///
/// # Errors
/// * `InvalidMagnitude` if `meters` is negative, NaN or infinite, or if the
///   result overflows f64
pub fn to_unit(meters: f64, unit: UnitSystem) -> HeightResult<f64> {
    let meters = ensure_length("to_unit", meters)?;
    checked_scale_to_unit("to_unit", meters, unit)
}

/// `value * num / den`, dividing first only when the product overflows.
#[inline]
fn scale_ratio(value: f64, num: f64, den: f64) -> f64 {
    let product = value * num;
    if product.is_finite() {
        product / den
    } else {
        value / den * num
    }
}

/// Unchecked conversion for callers that already validated `meters`.
#[inline]
pub(crate) fn scale_to_unit(meters: f64, unit: UnitSystem) -> f64 {
    let meta = unit.meta();
    scale_ratio(meters, meta.per, meta.meters)
}

/// Unchecked inverse of [`scale_to_unit`].
#[inline]
pub(crate) fn scale_to_meters(value: f64, unit: UnitSystem) -> f64 {
    let meta = unit.meta();
    scale_ratio(value, meta.meters, meta.per)
}

/// [`scale_to_unit`] for a validated length, failing when the result overflows.
pub(crate) fn checked_scale_to_unit(
    context: &'static str,
    meters: f64,
    unit: UnitSystem,
) -> HeightResult<f64> {
    ensure_converted(context, meters, scale_to_unit(meters, unit))
}

/// Convert a value between any two supported units.
pub fn convert(value: f64, from: UnitSystem, to: UnitSystem) -> HeightResult<f64> {
    if from == to {
        return ensure_length("convert", value);
    }
    to_unit(to_meters(value, from)?, to)
}
