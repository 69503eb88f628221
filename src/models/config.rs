//! Vessel configuration
//!
//! Starting resources, cost model, engine, playstyle, domain size and
//! wormhole behaviour for one run. Deserializable from JSON so a host can
//! keep it in a file; every field has a default.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use super::constants::{
    Vital, DEFAULT_BOUNDARY, DEFAULT_ENERGY, DEFAULT_ENGINE, DEFAULT_MONEY, DEFAULT_PLAYSTYLE,
    DEFAULT_SENSOR_COST, DEFAULT_SENSOR_RADIUS, DEFAULT_SUPPLIES, DEFAULT_SUPPLY_USAGE,
};
use super::errors::ConfigError;
use super::position::Coordinate;

/// A starting value: either fixed or drawn uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalSetting {
    Fixed(f64),
    Random { min: f64, max: f64 },
}

impl VitalSetting {
    pub fn validate(&self, vital: Vital) -> Result<(), ConfigError> {
        match *self {
            VitalSetting::Fixed(value) if !value.is_finite() => {
                Err(ConfigError::NonFiniteVital(vital))
            }
            VitalSetting::Random { min, max } if !min.is_finite() || !max.is_finite() => {
                Err(ConfigError::NonFiniteVital(vital))
            }
            VitalSetting::Random { min, max } if min > max => {
                Err(ConfigError::InvalidVitalsRange { vital, min, max })
            }
            _ => Ok(()),
        }
    }

    pub fn resolve<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            VitalSetting::Fixed(value) => value,
            VitalSetting::Random { min, max } if min == max => min,
            VitalSetting::Random { min, max } => rng.gen_range(min..=max),
        }
    }
}

/// How supplies drain on each move.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyModel {
    /// Fixed amount per move.
    Subtractive { per_move: f64 },
    /// Supplies are multiplied by `rate` and rounded to two decimals.
    Multiplicative { rate: f64 },
}

impl SupplyModel {
    pub fn apply(&self, supplies: f64) -> f64 {
        match *self {
            SupplyModel::Subtractive { per_move } => supplies - per_move,
            SupplyModel::Multiplicative { rate } => round_to_hundredths(supplies * rate),
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VesselConfig {
    pub start: Coordinate,
    pub energy: VitalSetting,
    pub supplies: VitalSetting,
    pub money: f64,
    pub supply_model: SupplyModel,
    /// Flat energy charge per move, on top of the engine's per-CP cost.
    pub energy_per_move: f64,
    pub sensor_cost: f64,
    /// Half-width of the square window a new sensor sweeps.
    pub sensor_radius: u32,
    /// Engine class name, resolved when a move is made.
    pub engine: String,
    /// Playstyle name, resolved when vitals run out.
    pub playstyle: String,
    /// Half-width of the square domain.
    pub boundary: i32,
    /// Fixed wormhole exit; `None` sends the vessel to a random point.
    pub wormhole: Option<Coordinate>,
    pub seed: Option<u64>,
}

impl Default for VesselConfig {
    fn default() -> Self {
        VesselConfig {
            start: Coordinate::ORIGIN,
            energy: VitalSetting::Fixed(DEFAULT_ENERGY),
            supplies: VitalSetting::Fixed(DEFAULT_SUPPLIES),
            money: DEFAULT_MONEY,
            supply_model: SupplyModel::Subtractive {
                per_move: DEFAULT_SUPPLY_USAGE,
            },
            energy_per_move: 0.0,
            sensor_cost: DEFAULT_SENSOR_COST,
            sensor_radius: DEFAULT_SENSOR_RADIUS,
            engine: DEFAULT_ENGINE.to_string(),
            playstyle: DEFAULT_PLAYSTYLE.to_string(),
            boundary: DEFAULT_BOUNDARY,
            wormhole: None,
            seed: None,
        }
    }
}

impl VesselConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Invalid(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Checks that can be made before the run starts. Engine and playstyle
    /// names are checked where they are used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundary <= 0 {
            return Err(ConfigError::NonPositiveBoundary(self.boundary));
        }
        if !self.start.is_within(self.boundary) {
            return Err(ConfigError::Invalid(format!(
                "start position {} lies outside boundary {}",
                self.start, self.boundary
            )));
        }
        self.energy.validate(Vital::Energy)?;
        self.supplies.validate(Vital::Supplies)?;
        if let Some(point) = self.wormhole {
            if !point.is_within(self.boundary) {
                return Err(ConfigError::WormholeOutOfBounds {
                    point,
                    boundary: self.boundary,
                });
            }
        }
        Ok(())
    }
}
