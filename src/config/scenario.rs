//! Built-in dataset scenarios
//!
//! Each scenario carries the sub-directory it lives in under the dataset base
//! path and its default frame range.

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A dataset scenario selected by a two-character code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// PETS 2009 S2.L1
    #[default]
    S2L1,
    /// PETS 2009 S2.L2
    S2L2,
    /// PETS 2009 S2.L3
    S2L3,
}

impl Scenario {
    /// All known scenarios
    pub const ALL: [Scenario; 3] = [Scenario::S2L1, Scenario::S2L2, Scenario::S2L3];

    /// Code used in settings files (`DATASET_SCENARIO`)
    pub const fn code(self) -> &'static str {
        match self {
            Scenario::S2L1 => "L1",
            Scenario::S2L2 => "L2",
            Scenario::S2L3 => "L3",
        }
    }

    /// Directory of this scenario relative to the dataset base path
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Scenario::S2L1 => "S2/L1/Time_12-34",
            Scenario::S2L2 => "S2/L2/Time_14-55",
            Scenario::S2L3 => "S2/L3/Time_14-41",
        }
    }

    /// First frame used when `START_FRAME_IDX` is absent
    pub const fn default_start_frame(self) -> u32 {
        0
    }

    /// Last frame used when `END_FRAME_IDX` is absent
    pub const fn default_end_frame(self) -> u32 {
        match self {
            Scenario::S2L1 => 794,
            Scenario::S2L2 => 435,
            Scenario::S2L3 => 239,
        }
    }

    /// Look up a scenario by its exact, case-sensitive code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::unknown_scenario(s))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.path_suffix())
    }
}
