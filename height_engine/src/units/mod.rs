//! Length units: the conversion table and the display families.

pub mod display;
pub mod system;

pub use display::Unit;
pub use system::{convert, to_meters, to_unit, UnitFamily, UnitMeta, UnitSystem};
