//! Export quality tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ForgeError;

/// Output quality tier requested by the user.
///
/// Each tier maps to exactly one factory (and therefore one fixed
/// video/audio codec pair); the mapping lives in
/// [`factory_for`](crate::export::factory::factory_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// High speed, lower quality.
    Low,
    /// Lower speed, higher quality.
    High,
    /// Low speed, master quality.
    Master,
}

impl Quality {
    /// All tiers, in ascending quality order.
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::High, Quality::Master];

    /// The tier keyword as entered by the user.
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::High => "high",
            Quality::Master => "master",
        }
    }
}

impl FromStr for Quality {
    type Err = ForgeError;

    /// Parse a tier keyword. Anything but `low`, `high`, `master`
    /// (case-sensitive, untrimmed) is rejected so a typo never selects a
    /// silently-wrong pipeline.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Quality::Low),
            "high" => Ok(Quality::High),
            "master" => Ok(Quality::Master),
            other => Err(ForgeError::UnknownQuality(other.to_string())),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tiers() {
        assert_eq!("low".parse::<Quality>().unwrap(), Quality::Low);
        assert_eq!("high".parse::<Quality>().unwrap(), Quality::High);
        assert_eq!("master".parse::<Quality>().unwrap(), Quality::Master);
    }

    #[test]
    fn test_parse_unknown_tier() {
        let err = "ultra".parse::<Quality>().unwrap_err();
        assert!(matches!(err, ForgeError::UnknownQuality(ref s) if s == "ultra"));
    }

    #[test]
    fn test_parse_rejects_case_and_whitespace_variants() {
        assert!("LOW".parse::<Quality>().is_err());
        assert!(" low".parse::<Quality>().is_err());
        assert!("".parse::<Quality>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for q in Quality::ALL {
            assert_eq!(q.to_string().parse::<Quality>().unwrap(), q);
        }
    }
}
