//! Stardrift
//!
//! A single vessel crossing a bounded square grid, spending energy and
//! supplies as it goes and charting planets and artifacts with the
//! sensors it drops.
//!
//! # Modules
//!
//! - [`game_engine`] - Run state and the end-of-run rule
//! - [`models`] - Domain models (Vessel, Sensor, Catalog, CelestialMap, etc.)
//! - [`services`] - Navigation rules and the gazetteer report
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Presentation of vessel events and status
//! - [`cli`] - Arguments for the binary
//!
//! # Example
//!
//! ```rust
//! use stardrift::models::catalog::Catalog;
//! use stardrift::models::config::VesselConfig;
//! use stardrift::models::position::Coordinate;
//! use stardrift::GameEngine;
//!
//! let catalog = Catalog::new().with_planet("Celeron", Coordinate::new(1, 1));
//! let mut engine = GameEngine::new("G.S.S. Old Spice", catalog, &VesselConfig::default()).unwrap();
//! engine.move_ship(1.0, 0.0).unwrap();
//! let found = engine.deploy_sensor().unwrap();
//! assert_eq!(found[0].name, "Celeron");
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameState};
pub use models::errors::{GameError, GameResult};
pub use models::vessel::MoveEvent;
