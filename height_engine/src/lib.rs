//! # Height Engine
//!
//! Unit-aware height conversion, formatting and chart scaling for the height
//! comparison app.
//!
//! Heights are plain `f64` metres. The crate converts them between metric and
//! imperial units, picks readable display units, renders bounded-precision
//! strings and computes pixel scales that stay finite from quark to universe
//! scale.
//!
//! ## Architecture
//!
//! - [`units`]: the conversion table ([`UnitSystem`]) and display families ([`Unit`])
//! - [`selector`]: best-unit selection per magnitude
//! - [`format`]: smart and chart-consistent formatting
//! - [`precision`]: arbitrary-precision ratios ([`Precision`])
//! - [`grid`]: chart scale and gridlines ([`GridScale`])
//! - [`config`]: TOML-backed [`FormatConfig`]
//! - [`cache`]: injected [`AspectRatioCache`]
//!
//! ## Example
//!
//! ```
//! use height_engine::{convert_height_smart, GridScale, HeightFormatter, Unit};
//!
//! assert_eq!(convert_height_smart(1.8, true).unwrap(), "1.8 m");
//! assert_eq!(convert_height_smart(1.8, false).unwrap(), "5 ft 11 in");
//!
//! let grid = GridScale::compute(324.0, 600.0, Unit::Cm, &HeightFormatter::default()).unwrap();
//! assert_eq!(grid.lines.len(), 21);
//! assert_eq!(grid.lines[20].label, "324 m");
//! ```
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod precision;
pub mod selector;
pub mod units;

pub use cache::AspectRatioCache;
pub use config::FormatConfig;
pub use error::{HeightError, HeightResult};
pub use format::{
    convert_height, convert_height_for_grid_imperial, convert_height_precision,
    convert_height_smart, convert_height_smart_imperial, format_number, FormattedResult,
    HeightFormatter,
};
pub use grid::{max_height_in_comparison, GridLine, GridScale};
pub use precision::{pixels_per_meter, Precision};
pub use selector::{get_best_unit, get_imperial_grid_unit_label};
pub use units::{to_meters, to_unit, Unit, UnitFamily, UnitSystem};
