//! Game state machine
//!
//! The control surface for one run. The GameEngine owns the vessel and its
//! celestial map, shares the catalog, and ends the run once a vital is
//! exhausted.

use std::sync::Arc;

use crate::models::catalog::Catalog;
use crate::models::celestial_map::CelestialMap;
use crate::models::config::VesselConfig;
use crate::models::constants::Vital;
use crate::models::errors::{GameError, GameResult};
use crate::models::sensor::Detection;
use crate::models::vessel::{MoveEvent, Vessel};
use crate::services::gazetteer::{Access, Gazetteer};

/// Core game engine that tracks whether the run is still going
pub struct GameEngine {
    catalog: Arc<Catalog>,
    vessel: Vessel,
    map: CelestialMap,
    state: GameState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Defeat { reason: DefeatReason },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefeatReason {
    Exhausted(Vital),
}

impl GameEngine {
    /// Creates a new run with a vessel built from `config` and a celestial
    /// map seeded from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` if the configuration fails validation.
    pub fn new(name: &str, catalog: Catalog, config: &VesselConfig) -> GameResult<Self> {
        let catalog = Arc::new(catalog);
        let vessel = Vessel::new(name, Arc::clone(&catalog), config)?;
        let map = CelestialMap::seeded(&catalog);
        Ok(Self {
            catalog,
            vessel,
            map,
            state: GameState::Playing,
        })
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn celestial_map(&self) -> &CelestialMap {
        &self.map
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves the vessel and updates the game state from the result.
    ///
    /// # Errors
    ///
    /// * `GameError::GameOver` if the run already ended; the vessel is not touched
    /// * `GameError::Config` if the course is not finite or the vessel's
    ///   configuration fails at use
    pub fn move_ship(&mut self, distance: f64, angle_degrees: f64) -> GameResult<MoveEvent> {
        if let GameState::Defeat {
            reason: DefeatReason::Exhausted(vital),
        } = self.state
        {
            return Err(GameError::GameOver(vital));
        }

        let event = self.vessel.move_by(distance, angle_degrees)?;
        if let MoveEvent::Died(vital) = event {
            self.state = GameState::Defeat {
                reason: DefeatReason::Exhausted(vital),
            };
        }
        Ok(event)
    }

    /// Deploys a sensor at the vessel's cell. `None` means one was already there.
    pub fn deploy_sensor(&mut self) -> Option<Vec<Detection>> {
        self.vessel.deploy_sensor(&mut self.map)
    }

    pub fn celestial_map_report(&self) -> String {
        self.map.render()
    }

    pub fn gazetteer_report(&self, access: Access, include_discoveries: bool) -> String {
        Gazetteer::new(&self.catalog).render_for(access, Some(&self.map), include_discoveries)
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }
}
