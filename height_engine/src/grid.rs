//! Comparison chart scale: pixels per metre, axis unit and gridlines.
//!
//! The chart maps its tallest entry onto the available pixel height. The
//! pixels-per-metre factor is computed with [`Precision`] so that a chart
//! holding a quark or the observable universe still gets a finite, non-zero
//! scale. Gridlines split `[0, max]` into equal intervals and are all
//! labelled in the unit chosen for the maximum.

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::error::{ensure_length, HeightError, HeightResult};
use crate::format::HeightFormatter;
use crate::precision::Precision;
use crate::selector::best_unit_unchecked;
use crate::units::{Unit, UnitSystem};

/// One horizontal line of the chart grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Height of the line in metres.
    pub meters: f64,
    /// Distance from the chart baseline in pixels.
    pub pixel_offset: f64,
    pub label: String,
}

/// Scale and gridlines for one rendering of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridScale {
    /// Height mapped to the top of the chart, in metres.
    pub max_meters: f64,
    pub available_pixels: f64,
    pub pixels_per_meter: f64,
    /// Unit shared by every gridline label.
    pub unit: UnitSystem,
    pub lines: Vec<GridLine>,
    /// Exact `available_pixels / max_meters`; absent after deserialization.
    #[serde(skip)]
    scale: Option<Precision>,
}

/// Tallest height in a comparison, or the configured default when empty.
///
/// # Errors
/// * `InvalidMagnitude` if any height is negative, NaN or infinite
pub fn max_height_in_comparison(heights: &[f64], config: &FormatConfig) -> HeightResult<f64> {
    let mut max: Option<f64> = None;
    for &height in heights {
        let height = ensure_length("max_height_in_comparison", height)?;
        max = Some(max.map_or(height, |m| m.max(height)));
    }
    Ok(match max {
        Some(m) if m > 0.0 => m,
        _ => config.default_chart_height_m,
    })
}

impl GridScale {
    /// Build the scale for a chart whose tallest entry is `max_meters`.
    ///
    /// # Arguments
    /// * `max_meters` - Tallest height shown, in metres
    /// * `available_pixels` - Drawable chart height
    /// * `family` - Display family for labels
    /// * `formatter` - Formatter providing digits, gridline count and limits
    ///
    /// # Errors
    /// * `InvalidMagnitude` if an input is negative, NaN or infinite, or the
    ///   pixel height is zero
    /// * `DivisionByZero` if `max_meters` is zero
    pub fn compute(
        max_meters: f64,
        available_pixels: f64,
        family: Unit,
        formatter: &HeightFormatter,
    ) -> HeightResult<Self> {
        let max_meters = ensure_length("GridScale::compute", max_meters)?;
        let available_pixels = ensure_length("GridScale::compute", available_pixels)?;
        if available_pixels == 0.0 {
            return Err(HeightError::invalid("GridScale::compute", available_pixels));
        }

        let scale = Self::exact_scale(available_pixels, max_meters)?;
        let pixels_per_meter = scale.to_f64();
        let unit = best_unit_unchecked(max_meters, family.is_metric());

        let count = formatter.config().gridline_count;
        log::debug!(
            "Grid scale: max={} m, pixels={}, ppm={}, unit={}, lines={}",
            max_meters,
            available_pixels,
            pixels_per_meter,
            unit,
            count + 1
        );

        let step = Precision::new(max_meters)?.divide(&Precision::new(count as f64)?)?;
        let mut lines = Vec::with_capacity(count + 1);
        for i in 0..=count {
            let index = Precision::new(i as f64)?;
            let meters = step.multiply(&index);
            // the top line is the chart maximum itself
            let pixel_offset = if i == count {
                available_pixels
            } else {
                meters.multiply(&scale).to_f64()
            };
            let meters = if i == count { max_meters } else { meters.to_f64() };

            let label = match family {
                Unit::Cm => formatter.convert_height_precision(meters, unit)?.formatted,
                Unit::FtIn => formatter.convert_height_for_grid_imperial(meters, max_meters)?,
            };
            lines.push(GridLine {
                meters,
                pixel_offset,
                label,
            });
        }

        Ok(Self {
            max_meters,
            available_pixels,
            pixels_per_meter,
            unit,
            lines,
            scale: Some(scale),
        })
    }

    fn exact_scale(available_pixels: f64, max_meters: f64) -> HeightResult<Precision> {
        Precision::new(available_pixels)?.divide(&Precision::new(max_meters)?)
    }

    /// Scale for a list of heights, falling back to the configured default
    /// maximum when the list is empty.
    pub fn for_heights(
        heights: &[f64],
        available_pixels: f64,
        family: Unit,
        formatter: &HeightFormatter,
    ) -> HeightResult<Self> {
        let max = max_height_in_comparison(heights, formatter.config())?;
        Self::compute(max, available_pixels, family, formatter)
    }

    /// Pixel height of an entry that is `meters` tall.
    pub fn pixel_height(&self, meters: f64) -> HeightResult<f64> {
        let height = Precision::new(ensure_length("GridScale::pixel_height", meters)?)?;
        let pixels = match &self.scale {
            Some(scale) => height.multiply(scale),
            None => height.multiply(&Self::exact_scale(self.available_pixels, self.max_meters)?),
        };
        Ok(pixels.to_f64())
    }

    /// Axis header, e.g. `"ft"` or `"km"`.
    pub fn unit_label(&self) -> &'static str {
        self.unit.symbol()
    }
}
