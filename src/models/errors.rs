use thiserror::Error;

use super::constants::Vital;
use super::position::Coordinate;

/// Setup mistakes. They abort the operation that found them, never the process.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown engine class '{0}' (expected basic, upgraded or pro)")]
    UnknownEngine(String),

    #[error("unknown playstyle '{0}' (expected 'regular play' or 'never dies')")]
    UnknownPlaystyle(String),

    #[error("invalid {vital} range: minimum {min} exceeds maximum {max}")]
    InvalidVitalsRange { vital: Vital, min: f64, max: f64 },

    #[error("{0} starting value must be a finite number")]
    NonFiniteVital(Vital),

    #[error("course must be finite, got distance {distance} at {angle} degrees")]
    InvalidCourse { distance: f64, angle: f64 },

    #[error("boundary must be positive, got {0}")]
    NonPositiveBoundary(i32),

    #[error("fixed wormhole exit {point} lies outside boundary {boundary}")]
    WormholeOutOfBounds { point: Coordinate, boundary: i32 },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failures while reading the planet/artifact catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Top-level error for the control surface.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("the run is over: {0} has run out")]
    GameOver(Vital),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
