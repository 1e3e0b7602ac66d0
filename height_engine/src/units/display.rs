//! Coarse display families used by the comparison chart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::system::UnitFamily;
use crate::error::HeightError;

/// Display family for smart chart formatting.
///
/// `Cm` selects metric smart display (cm / m / km style), `FtIn` the imperial
/// feet-and-inches composite display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "FT_IN")]
    FtIn,
}

impl Unit {
    #[inline]
    pub fn is_metric(self) -> bool {
        matches!(self, Unit::Cm)
    }

    pub fn family(self) -> UnitFamily {
        match self {
            Unit::Cm => UnitFamily::Metric,
            Unit::FtIn => UnitFamily::Imperial,
        }
    }
}

impl From<UnitFamily> for Unit {
    fn from(family: UnitFamily) -> Self {
        match family {
            UnitFamily::Metric => Unit::Cm,
            UnitFamily::Imperial => Unit::FtIn,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Cm => f.write_str("CM"),
            Unit::FtIn => f.write_str("FT_IN"),
        }
    }
}

impl FromStr for Unit {
    type Err = HeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CM" | "METRIC" => Ok(Unit::Cm),
            "FT_IN" | "FT" | "IMPERIAL" => Ok(Unit::FtIn),
            other => Err(HeightError::UnsupportedUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Unit::Cm.to_string(), "CM");
        assert_eq!(Unit::FtIn.to_string(), "FT_IN");
        assert_eq!("ft_in".parse::<Unit>().unwrap(), Unit::FtIn);
        assert_eq!("CM".parse::<Unit>().unwrap(), Unit::Cm);
        assert!(matches!("cubit".parse::<Unit>(), Err(HeightError::UnsupportedUnit(_))));
    }

    #[test]
    fn test_family_mapping() {
        assert!(Unit::Cm.is_metric());
        assert!(!Unit::FtIn.is_metric());
        assert_eq!(Unit::from(UnitFamily::Imperial), Unit::FtIn);
        assert_eq!(Unit::FtIn.family(), UnitFamily::Imperial);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&Unit::FtIn).unwrap(), "\"FT_IN\"");
        let unit: Unit = serde_json::from_str("\"CM\"").unwrap();
        assert_eq!(unit, Unit::Cm);
    }
}
