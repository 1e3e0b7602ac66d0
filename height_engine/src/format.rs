//! Human-readable height strings.
//!
//! Numbers are rounded to a bounded count of significant digits and written
//! out positionally, so `1.7999999999` renders as `1.8` and `8.7e28` renders
//! as digits rather than exponent notation.
//!
//! Two selection modes exist:
//!
//! - **smart**: each value picks its own unit ([`convert_height_smart`]).
//! - **chart-consistent**: the unit comes from the chart maximum and every
//!   gridline shares it ([`convert_height_for_grid_imperial`],
//!   [`convert_height_precision`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{FormatConfig, MAX_SIGNIFICANT_DIGITS};
use crate::error::{ensure_length, HeightResult};
use crate::selector::best_unit_unchecked;
use crate::units::system::{checked_scale_to_unit, scale_to_meters, scale_to_unit};
use crate::units::{Unit, UnitSystem};

/// Significant digits used when no precision is given.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 3;

const INCHES_PER_FOOT: f64 = 12.0;

/// A value expressed in a chosen display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// Magnitude in `unit`.
    pub value: f64,
    /// Unit symbol.
    pub unit: String,
    /// Final display string, e.g. `"1.75 m"`.
    pub formatted: String,
}

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Round `value` to at most `precision` significant digits and render it
/// without exponent notation, trailing zeros trimmed.
///
/// `precision` defaults to [`DEFAULT_SIGNIFICANT_DIGITS`] and is clamped to
/// `1..=15`. Non-finite input is rendered as-is.
///
/// ```
/// use height_engine::format_number;
/// assert_eq!(format_number(1.7999999999, None), "1.8");
/// assert_eq!(format_number(324.0, None), "324");
/// assert_eq!(format_number(0.000123456, Some(2)), "0.00012");
/// assert_eq!(format_number(8.7e28, None), "87000000000000000000000000000");
/// ```
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = precision
        .unwrap_or(DEFAULT_SIGNIFICANT_DIGITS)
        .clamp(1, MAX_SIGNIFICANT_DIGITS);

    // "{:.Ne}" yields "-d.ddde±x" with correct rounding of the binary value
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i64 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => return scientific,
    };

    let negative = mantissa.starts_with('-');
    let mut significand: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    while significand.len() > 1 && significand.ends_with('0') {
        significand.pop();
    }

    let point = exponent + 1;
    let len = significand.len() as i64;
    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), significand)
    } else if point >= len {
        format!("{}{}", significand, "0".repeat((point - len) as usize))
    } else {
        let (int_part, frac_part) = significand.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Formatter carrying a validated [`FormatConfig`].
///
/// The free functions in this module use `HeightFormatter::default()`.
#[derive(Debug, Clone, Default)]
pub struct HeightFormatter {
    config: FormatConfig,
}

impl HeightFormatter {
    /// Create a formatter, validating the configuration.
    pub fn new(config: FormatConfig) -> HeightResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// [`format_number`] with the configured digit count.
    pub fn format_number(&self, value: f64) -> String {
        format_number(value, Some(self.config.max_significant_digits))
    }

    fn with_symbol(&self, value: f64, unit: UnitSystem) -> String {
        format!("{} {}", self.format_number(value), unit.symbol())
    }

    /// `value` as it reads after rounding to the configured digits.
    fn rounded(&self, value: f64) -> f64 {
        self.format_number(value).parse().unwrap_or(value)
    }

    /// Smart unit for `meters`, moved up a rung when rounding the displayed
    /// value reaches the next threshold (`0.9999 m` reads `"1 m"`, not `"100 cm"`).
    fn settled_unit(&self, meters: f64, is_metric: bool) -> UnitSystem {
        let unit = best_unit_unchecked(meters, is_metric);
        let shown = match unit {
            UnitSystem::Foot => {
                let inches = scale_to_unit(meters, UnitSystem::Inch).round();
                scale_to_meters(inches, UnitSystem::Inch)
            }
            _ => scale_to_meters(self.rounded(scale_to_unit(meters, unit)), unit),
        };
        let settled = best_unit_unchecked(shown, is_metric);
        if settled.meters_per_unit() > unit.meters_per_unit() {
            settled
        } else {
            unit
        }
    }

    /// Feet and whole inches, e.g. `"5 ft 11 in"`, or `"6 ft"` when the
    /// rounded remainder is zero.
    fn feet_inches(&self, context: &'static str, meters: f64) -> HeightResult<String> {
        let total_inches = checked_scale_to_unit(context, meters, UnitSystem::Inch)?.round();
        let feet = (total_inches / INCHES_PER_FOOT).floor();
        let inches = total_inches - feet * INCHES_PER_FOOT;
        Ok(if inches == 0.0 {
            format!("{:.0} ft", feet)
        } else {
            format!("{:.0} ft {:.0} in", feet, inches)
        })
    }

    /// Smart metric or imperial formatting.
    pub fn convert_height_smart(&self, meters: f64, is_metric: bool) -> HeightResult<String> {
        if is_metric {
            let meters = ensure_length("convert_height_smart", meters)?;
            let unit = self.settled_unit(meters, true);
            Ok(self.with_symbol(scale_to_unit(meters, unit), unit))
        } else {
            self.convert_height_smart_imperial(meters)
        }
    }

    /// Smart imperial formatting with the feet-inches composite in the foot band.
    pub fn convert_height_smart_imperial(&self, meters: f64) -> HeightResult<String> {
        const CONTEXT: &str = "convert_height_smart_imperial";
        let meters = ensure_length(CONTEXT, meters)?;
        let unit = self.settled_unit(meters, false);
        match unit {
            UnitSystem::Foot => self.feet_inches(CONTEXT, meters),
            _ => Ok(self.with_symbol(scale_to_unit(meters, unit), unit)),
        }
    }

    /// Format `meters` in a unit picked by the caller.
    pub fn convert_height_precision(
        &self,
        meters: f64,
        unit: UnitSystem,
    ) -> HeightResult<FormattedResult> {
        let meters = ensure_length("convert_height_precision", meters)?;
        let value = checked_scale_to_unit("convert_height_precision", meters, unit)?;
        Ok(FormattedResult {
            value,
            unit: unit.symbol().to_string(),
            formatted: self.with_symbol(value, unit),
        })
    }

    /// Imperial gridline label whose unit is chosen from the chart maximum.
    ///
    /// Foot charts shorter than `feet_inches_limit_ft` use the feet-inches
    /// composite for every line; taller foot charts use decimal feet.
    pub fn convert_height_for_grid_imperial(
        &self,
        meters: f64,
        max_meters_in_chart: f64,
    ) -> HeightResult<String> {
        const CONTEXT: &str = "convert_height_for_grid_imperial";
        let meters = ensure_length(CONTEXT, meters)?;
        let max_meters = ensure_length(CONTEXT, max_meters_in_chart)?;
        let unit = best_unit_unchecked(max_meters, false);
        match unit {
            UnitSystem::Foot if self.uses_feet_inches(max_meters) => {
                self.feet_inches(CONTEXT, meters)
            }
            _ => {
                let value = checked_scale_to_unit(CONTEXT, meters, unit)?;
                Ok(self.with_symbol(value, unit))
            }
        }
    }

    fn uses_feet_inches(&self, max_meters: f64) -> bool {
        scale_to_unit(max_meters, UnitSystem::Foot) < self.config.feet_inches_limit_ft
    }

    /// Dispatch on the display family.
    pub fn convert_height(&self, meters: f64, unit: Unit) -> HeightResult<String> {
        match unit {
            Unit::Cm => self.convert_height_smart(meters, true),
            Unit::FtIn => self.convert_height_smart_imperial(meters),
        }
    }
}

/// Smart formatting with the most readable unit of the family.
///
/// ```
/// use height_engine::convert_height_smart;
/// assert_eq!(convert_height_smart(1.8, true).unwrap(), "1.8 m");
/// assert_eq!(convert_height_smart(0.5, true).unwrap(), "50 cm");
/// assert_eq!(convert_height_smart(1.8, false).unwrap(), "5 ft 11 in");
/// ```
pub fn convert_height_smart(meters: f64, is_metric: bool) -> HeightResult<String> {
    HeightFormatter::default().convert_height_smart(meters, is_metric)
}

/// Smart imperial formatting (`in`, `ft + in`, `mi`).
pub fn convert_height_smart_imperial(meters: f64) -> HeightResult<String> {
    HeightFormatter::default().convert_height_smart_imperial(meters)
}

/// Format `meters` in a pre-selected unit.
pub fn convert_height_precision(meters: f64, unit: UnitSystem) -> HeightResult<FormattedResult> {
    HeightFormatter::default().convert_height_precision(meters, unit)
}

/// Imperial gridline label, unit chosen from `max_meters_in_chart`.
pub fn convert_height_for_grid_imperial(
    meters: f64,
    max_meters_in_chart: f64,
) -> HeightResult<String> {
    HeightFormatter::default().convert_height_for_grid_imperial(meters, max_meters_in_chart)
}

/// Smart formatting keyed by the coarse display family.
pub fn convert_height(meters: f64, unit: Unit) -> HeightResult<String> {
    HeightFormatter::default().convert_height(meters, unit)
}
