//! Best-unit selection for a magnitude.
//!
//! Each family has a ladder of thresholds in metres; a value picks the first
//! rung whose upper bound it is below, and the last rung otherwise. The
//! ladders are sorted, which makes the selection monotonic: a larger value
//! never gets a smaller unit.
//!
//! | family   | below          | unit |
//! |----------|----------------|------|
//! | metric   | 1e-6 m         | nm   |
//! | metric   | 1e-3 m         | μm   |
//! | metric   | 1e-2 m         | mm   |
//! | metric   | 1 m            | cm   |
//! | metric   | 1000 m         | m    |
//! | metric   | (otherwise)    | km   |
//! | imperial | 0.3048 m       | in   |
//! | imperial | 1609.344 m     | ft   |
//! | imperial | (otherwise)    | mi   |

use crate::error::{ensure_length, HeightResult};
use crate::units::{UnitFamily, UnitSystem};

const METRIC_LADDER: [(f64, UnitSystem); 5] = [
    (1e-6, UnitSystem::Nanometer),
    (1e-3, UnitSystem::Micrometer),
    (1e-2, UnitSystem::Millimeter),
    (1.0, UnitSystem::Centimeter),
    (1_000.0, UnitSystem::Meter),
];
const METRIC_TOP: UnitSystem = UnitSystem::Kilometer;

const IMPERIAL_LADDER: [(f64, UnitSystem); 2] = [
    (0.3048, UnitSystem::Inch),
    (1_609.344, UnitSystem::Foot),
];
const IMPERIAL_TOP: UnitSystem = UnitSystem::Mile;

fn climb(meters: f64, ladder: &[(f64, UnitSystem)], top: UnitSystem) -> UnitSystem {
    ladder
        .iter()
        .find(|(limit, _)| meters < *limit)
        .map(|(_, unit)| *unit)
        .unwrap_or(top)
}

/// Most readable unit for `meters` in the requested family.
///
/// Zero selects the smallest unit of the family; magnitudes beyond the
/// ladder select its largest unit.
///
/// # Errors
/// * `InvalidMagnitude` if `meters` is negative, NaN or infinite
///
/// ```
/// use height_engine::{get_best_unit, UnitSystem};
/// assert_eq!(get_best_unit(1.8, true).unwrap(), UnitSystem::Meter);
/// assert_eq!(get_best_unit(0.5, true).unwrap(), UnitSystem::Centimeter);
/// assert_eq!(get_best_unit(1.8, false).unwrap(), UnitSystem::Foot);
/// ```
pub fn get_best_unit(meters: f64, is_metric: bool) -> HeightResult<UnitSystem> {
    let meters = ensure_length("get_best_unit", meters)?;
    Ok(best_unit_unchecked(meters, is_metric))
}

/// Same as [`get_best_unit`] but keyed by [`UnitFamily`].
pub fn best_unit_for_family(meters: f64, family: UnitFamily) -> HeightResult<UnitSystem> {
    get_best_unit(meters, family == UnitFamily::Metric)
}

pub(crate) fn best_unit_unchecked(meters: f64, is_metric: bool) -> UnitSystem {
    if is_metric {
        climb(meters, &METRIC_LADDER, METRIC_TOP)
    } else {
        climb(meters, &IMPERIAL_LADDER, IMPERIAL_TOP)
    }
}

/// Axis header for an imperial chart whose tallest entry is `meters`.
///
/// Always the symbol of `get_best_unit(meters, false)`.
pub fn get_imperial_grid_unit_label(meters: f64) -> HeightResult<&'static str> {
    Ok(get_best_unit(meters, false)?.symbol())
}
