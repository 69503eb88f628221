use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;

pub const DEFAULT_ENERGY: f64 = 10000.0;
pub const DEFAULT_SUPPLIES: f64 = 1000.0;
pub const DEFAULT_MONEY: f64 = 10000.0;
pub const DEFAULT_SUPPLY_USAGE: f64 = 2.0;
pub const DEFAULT_SENSOR_COST: f64 = 2.0;
pub const DEFAULT_BOUNDARY: i32 = 127;
pub const DEFAULT_ENGINE: &str = "basic";
pub const DEFAULT_PLAYSTYLE: &str = "regular play";

/// Detection radius of a freshly deployed sensor, in CP.
pub const DEFAULT_SENSOR_RADIUS: u32 = 2;

/// Planets recorded on every new celestial map, when the catalog has them.
pub const SEEDED_PLANETS: [&str; 3] = ["Celeron", "Xeon", "Ryzen"];

/// Type tag reported for planets in scans and the gazetteer.
pub const PLANET_TAG: &str = "PLANET";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineClass {
    Basic,
    Upgraded,
    Pro,
}

impl EngineClass {
    /// Energy spent per CP travelled.
    pub fn energy_per_unit(&self) -> f64 {
        match self {
            EngineClass::Basic => 10.0,
            EngineClass::Upgraded => 5.0,
            EngineClass::Pro => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngineClass::Basic => "basic",
            EngineClass::Upgraded => "upgraded",
            EngineClass::Pro => "pro",
        }
    }
}

impl FromStr for EngineClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(EngineClass::Basic),
            "upgraded" => Ok(EngineClass::Upgraded),
            "pro" => Ok(EngineClass::Pro),
            other => Err(ConfigError::UnknownEngine(other.to_string())),
        }
    }
}

/// Whether depleted vitals end the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playstyle {
    RegularPlay,
    NeverDies,
}

impl FromStr for Playstyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular play" => Ok(Playstyle::RegularPlay),
            "never dies" => Ok(Playstyle::NeverDies),
            other => Err(ConfigError::UnknownPlaystyle(other.to_string())),
        }
    }
}

/// The two depletable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vital {
    Energy,
    Supplies,
}

impl Vital {
    pub fn label(&self) -> &'static str {
        match self {
            Vital::Energy => "Energy",
            Vital::Supplies => "Supplies",
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
