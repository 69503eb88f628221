use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::catalog::Catalog;
use super::celestial_map::CelestialMap;
use super::config::{SupplyModel, VesselConfig};
use super::constants::{EngineClass, Playstyle, Vital};
use super::errors::ConfigError;
use super::position::Coordinate;
use super::sensor::{Detection, Sensor};
use crate::services::navigation::{course_delta, depleted_vital, wormhole_exit};

/// What a move led to. The vessel's state is already updated when this
/// is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveEvent {
    /// Still alive and inside the domain.
    Cruising,
    /// A vital reached zero or below under regular play.
    Died(Vital),
    /// Left the domain and was moved back inside.
    Wormhole { from: Coordinate, to: Coordinate },
}

/// The player's ship.
pub struct Vessel {
    name: String,
    position: Coordinate,
    energy: f64,
    supplies: f64,
    money: f64,
    engine: String,
    playstyle: String,
    supply_model: SupplyModel,
    energy_per_move: f64,
    sensor_cost: f64,
    sensor_radius: u32,
    boundary: i32,
    wormhole: Option<Coordinate>,
    sensors: Vec<Sensor>,
    catalog: Arc<Catalog>,
    rng: StdRng,
}

impl Vessel {
    /// Build a vessel at `config.start`, resolving any randomized vitals.
    pub fn new(name: &str, catalog: Arc<Catalog>, config: &VesselConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let energy = config.energy.resolve(&mut rng);
        let supplies = config.supplies.resolve(&mut rng);

        log::info!(
            "vessel {} initialized at {} (energy {}, supplies {})",
            name,
            config.start,
            energy,
            supplies
        );

        Ok(Vessel {
            name: name.to_string(),
            position: config.start,
            energy,
            supplies,
            money: config.money,
            engine: config.engine.clone(),
            playstyle: config.playstyle.clone(),
            supply_model: config.supply_model,
            energy_per_move: config.energy_per_move,
            sensor_cost: config.sensor_cost,
            sensor_radius: config.sensor_radius,
            boundary: config.boundary,
            wormhole: config.wormhole,
            sensors: Vec::new(),
            catalog,
            rng,
        })
    }

    // ========== Accessor Methods ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn supplies(&self) -> f64 {
        self.supplies
    }

    pub fn money(&self) -> f64 {
        self.money
    }

    /// Configured engine class name, as given.
    pub fn engine_name(&self) -> &str {
        &self.engine
    }

    pub fn engine(&self) -> Result<EngineClass, ConfigError> {
        self.engine.parse()
    }

    pub fn boundary(&self) -> i32 {
        self.boundary
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ========== Operations ==========

    /// Travel `distance` CP along `angle_degrees`.
    ///
    /// Position, supplies and energy are updated first. Then the vitals
    /// check runs (regular play reports the exhausted vital and skips the
    /// boundary check), then the boundary check (an out-of-bounds vessel
    /// is moved to the wormhole exit before the event is returned).
    ///
    /// A non-finite distance or angle is rejected before anything changes.
    /// An unknown engine class is logged and only skips the energy charge.
    /// An unknown playstyle fails the move once vitals are exhausted; the
    /// state changes made before that point remain.
    pub fn move_by(&mut self, distance: f64, angle_degrees: f64) -> Result<MoveEvent, ConfigError> {
        if !distance.is_finite() || !angle_degrees.is_finite() {
            return Err(ConfigError::InvalidCourse {
                distance,
                angle: angle_degrees,
            });
        }

        let (dx, dy) = course_delta(distance, angle_degrees);
        self.position = self.position.offset(dx, dy);
        self.supplies = self.supply_model.apply(self.supplies);

        match self.engine() {
            Ok(engine) => {
                self.energy -= engine.energy_per_unit() * distance + self.energy_per_move;
            }
            Err(err) => log::warn!("{}: energy charge skipped", err),
        }

        log::debug!(
            "{} moved by ({}, {}) to {}; energy {}, supplies {}",
            self.name,
            dx,
            dy,
            self.position,
            self.energy,
            self.supplies
        );

        if let Some(vital) = depleted_vital(self.energy, self.supplies) {
            match self.playstyle.parse::<Playstyle>()? {
                Playstyle::RegularPlay => {
                    log::warn!("{} has run out of {}", self.name, vital);
                    return Ok(MoveEvent::Died(vital));
                }
                Playstyle::NeverDies => {}
            }
        }

        if !self.position.is_within(self.boundary) {
            let from = self.position;
            self.position = wormhole_exit(self.boundary, self.wormhole, &mut self.rng);
            log::info!("{} hit a wormhole at {} and came out at {}", self.name, from, self.position);
            return Ok(MoveEvent::Wormhole {
                from,
                to: self.position,
            });
        }

        Ok(MoveEvent::Cruising)
    }

    /// Drop a sensor at the current cell and sweep it at once.
    ///
    /// Returns `None`, spending nothing, when a sensor already sits here.
    pub fn deploy_sensor(&mut self, map: &mut CelestialMap) -> Option<Vec<Detection>> {
        if self.sensors.iter().any(|s| s.position() == self.position) {
            log::info!("sensor already deployed at {}", self.position);
            return None;
        }

        self.supplies -= self.sensor_cost;
        let sensor = Sensor::new(self.position, self.sensor_radius, Arc::clone(&self.catalog));
        let detections = sensor.scan(self.position, map);
        self.sensors.push(sensor);

        log::info!(
            "sensor deployed at {}: {} object(s) detected",
            self.position,
            detections.len()
        );
        Some(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::VitalSetting;

    fn config() -> VesselConfig {
        VesselConfig {
            seed: Some(42),
            ..VesselConfig::default()
        }
    }

    fn vessel_with(config: VesselConfig) -> Vessel {
        Vessel::new("G.S.S. Old Spice", Arc::new(Catalog::new()), &config).unwrap()
    }

    #[test]
    fn new_vessel_uses_configured_start() {
        let v = vessel_with(VesselConfig {
            start: Coordinate::new(10, -10),
            ..config()
        });
        assert_eq!(v.name(), "G.S.S. Old Spice");
        assert_eq!(v.position(), Coordinate::new(10, -10));
        assert_eq!(v.energy(), 10000.0);
        assert_eq!(v.supplies(), 1000.0);
        assert_eq!(v.money(), 10000.0);
        assert!(v.sensors().is_empty());
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let result = Vessel::new(
            "Bad",
            Arc::new(Catalog::new()),
            &VesselConfig {
                boundary: -1,
                ..config()
            },
        );
        assert!(matches!(result, Err(ConfigError::NonPositiveBoundary(-1))));
    }

    #[test]
    fn randomized_vitals_are_reproducible_with_seed() {
        let cfg = VesselConfig {
            energy: VitalSetting::Random { min: 100.0, max: 900.0 },
            ..config()
        };
        let a = vessel_with(cfg.clone());
        let b = vessel_with(cfg);
        assert_eq!(a.energy(), b.energy());
        assert!((100.0..=900.0).contains(&a.energy()));
    }

    #[test]
    fn move_updates_position_and_vitals() {
        let mut v = vessel_with(config());
        let event = v.move_by(1.0, 90.0).unwrap();

        assert_eq!(event, MoveEvent::Cruising);
        assert_eq!(v.position(), Coordinate::new(0, 1));
        assert_eq!(v.energy(), 10000.0 - 10.0);
        assert_eq!(v.supplies(), 998.0);
    }

    #[test]
    fn engine_class_sets_energy_rate() {
        for (engine, per_unit) in [("basic", 10.0), ("upgraded", 5.0), ("pro", 1.0)] {
            let mut v = vessel_with(VesselConfig {
                engine: engine.into(),
                ..config()
            });
            v.move_by(3.0, 0.0).unwrap();
            assert_eq!(v.energy(), 10000.0 - per_unit * 3.0, "engine {}", engine);
        }
    }

    #[test]
    fn flat_energy_charge_added_per_move() {
        let mut v = vessel_with(VesselConfig {
            energy_per_move: 7.0,
            ..config()
        });
        v.move_by(2.0, 0.0).unwrap();
        assert_eq!(v.energy(), 10000.0 - 20.0 - 7.0);
    }

    #[test]
    fn unknown_engine_skips_energy_charge_only() {
        let mut v = vessel_with(VesselConfig {
            engine: "hyperdrive".into(),
            ..config()
        });
        let event = v.move_by(1.0, 0.0).unwrap();

        assert_eq!(event, MoveEvent::Cruising);
        assert_eq!(v.energy(), 10000.0);
        assert_eq!(v.supplies(), 998.0);
        assert_eq!(v.position(), Coordinate::new(1, 0));
        assert!(v.engine().is_err());
    }

    #[test]
    fn energy_exhaustion_reports_death_after_mutation() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(15.0),
            ..config()
        });
        let event = v.move_by(2.0, 0.0).unwrap();

        assert_eq!(event, MoveEvent::Died(Vital::Energy));
        assert_eq!(v.energy(), -5.0);
        assert_eq!(v.position(), Coordinate::new(2, 0));
    }

    #[test]
    fn supplies_exhaustion_reports_supplies() {
        let mut v = vessel_with(VesselConfig {
            supplies: VitalSetting::Fixed(2.0),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Supplies));
        assert_eq!(v.supplies(), 0.0);
    }

    #[test]
    fn both_exhausted_reports_energy() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(5.0),
            supplies: VitalSetting::Fixed(1.0),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
    }

    #[test]
    fn dead_vessel_can_still_be_moved() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(5.0),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
        assert_eq!(v.position(), Coordinate::new(2, 0));
    }

    #[test]
    fn non_finite_course_rejected_without_side_effects() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(1.0),
            ..config()
        });

        for (distance, angle) in [(f64::NAN, 0.0), (f64::INFINITY, 0.0), (1.0, f64::NAN)] {
            assert!(matches!(
                v.move_by(distance, angle),
                Err(ConfigError::InvalidCourse { .. })
            ));
        }
        assert_eq!(v.energy(), 1.0);
        assert_eq!(v.supplies(), 1000.0);
        assert_eq!(v.position(), Coordinate::ORIGIN);

        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
    }

    #[test]
    fn never_dies_ignores_exhaustion() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(5.0),
            playstyle: "never dies".into(),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Cruising);
        assert_eq!(v.energy(), -5.0);
    }

    #[test]
    fn unknown_playstyle_fails_once_vitals_run_out() {
        let mut v = vessel_with(VesselConfig {
            energy: VitalSetting::Fixed(5.0),
            playstyle: "sandbox".into(),
            ..config()
        });
        assert_eq!(
            v.move_by(1.0, 0.0),
            Err(ConfigError::UnknownPlaystyle("sandbox".into()))
        );
        assert_eq!(v.energy(), -5.0);
    }

    #[test]
    fn unknown_playstyle_unused_while_healthy() {
        let mut v = vessel_with(VesselConfig {
            playstyle: "sandbox".into(),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0), Ok(MoveEvent::Cruising));
    }

    #[test]
    fn fixed_wormhole_resets_to_exit() {
        let mut v = vessel_with(VesselConfig {
            boundary: 5,
            start: Coordinate::new(5, 0),
            wormhole: Some(Coordinate::new(-1, 2)),
            ..config()
        });
        let event = v.move_by(1.0, 0.0).unwrap();

        assert_eq!(
            event,
            MoveEvent::Wormhole {
                from: Coordinate::new(6, 0),
                to: Coordinate::new(-1, 2),
            }
        );
        assert_eq!(v.position(), Coordinate::new(-1, 2));
    }

    #[test]
    fn random_wormhole_lands_in_bounds() {
        let mut v = vessel_with(VesselConfig {
            boundary: 5,
            start: Coordinate::new(0, -5),
            ..config()
        });
        let event = v.move_by(1.0, 270.0).unwrap();

        assert!(matches!(event, MoveEvent::Wormhole { .. }));
        assert!(v.position().is_within(5));
    }

    #[test]
    fn reaching_the_edge_is_not_a_wormhole() {
        let mut v = vessel_with(VesselConfig {
            boundary: 5,
            start: Coordinate::new(4, 4),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Cruising);
        assert_eq!(v.position(), Coordinate::new(5, 4));
    }

    #[test]
    fn death_takes_precedence_over_wormhole() {
        let mut v = vessel_with(VesselConfig {
            boundary: 5,
            start: Coordinate::new(5, 0),
            energy: VitalSetting::Fixed(1.0),
            ..config()
        });
        assert_eq!(v.move_by(1.0, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
    }

    #[test]
    fn multiplicative_supplies_have_no_drift() {
        let mut v = vessel_with(VesselConfig {
            supplies: VitalSetting::Fixed(100.0),
            supply_model: SupplyModel::Multiplicative { rate: 0.9 },
            ..config()
        });
        for _ in 0..5 {
            v.move_by(0.0, 0.0).unwrap();
        }
        assert_eq!(v.supplies(), 59.05);
    }

    #[test]
    fn sensor_deployment_spends_supplies() {
        let mut v = vessel_with(config());
        let mut map = CelestialMap::new();

        let detections = v.deploy_sensor(&mut map);

        assert_eq!(detections, Some(vec![]));
        assert_eq!(v.supplies(), 998.0);
        assert_eq!(v.sensors().len(), 1);
        assert_eq!(v.sensors()[0].position(), Coordinate::ORIGIN);
        assert_eq!(v.sensors()[0].radius(), 2);
    }

    #[test]
    fn duplicate_sensor_rejected_without_cost() {
        let mut v = vessel_with(config());
        let mut map = CelestialMap::new();

        assert!(v.deploy_sensor(&mut map).is_some());
        let supplies = v.supplies();
        assert!(v.deploy_sensor(&mut map).is_none());

        assert_eq!(v.supplies(), supplies);
        assert_eq!(v.sensors().len(), 1);
    }

    #[test]
    fn configured_sensor_radius_widens_the_sweep() {
        let catalog = Catalog::new().with_planet("Xeon", Coordinate::new(4, -4));
        let mut v = Vessel::new(
            "G.S.S. Old Spice",
            Arc::new(catalog),
            &VesselConfig {
                sensor_radius: 4,
                ..config()
            },
        )
        .unwrap();
        let mut map = CelestialMap::new();

        let found = v.deploy_sensor(&mut map).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(v.sensors()[0].radius(), 4);
    }

    #[test]
    fn far_catalog_entry_does_not_break_the_sweep() {
        let catalog = Catalog::parse("PLANETS\nFar -2147483648,0\nCeleron 1,1\n").unwrap();
        let mut v = Vessel::new("G.S.S. Old Spice", Arc::new(catalog), &config()).unwrap();
        let mut map = CelestialMap::new();

        v.move_by(1.0, 0.0).unwrap();
        let found = v.deploy_sensor(&mut map).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Celeron");
    }

    #[test]
    fn dead_vessel_drifting_to_the_plane_edge_can_still_scan() {
        let catalog = Catalog::new().with_planet("Far", Coordinate::new(i32::MIN, 0));
        let mut v = Vessel::new(
            "G.S.S. Old Spice",
            Arc::new(catalog),
            &VesselConfig {
                energy: VitalSetting::Fixed(1.0),
                ..config()
            },
        )
        .unwrap();
        let mut map = CelestialMap::new();

        assert_eq!(v.move_by(1e12, 0.0).unwrap(), MoveEvent::Died(Vital::Energy));
        assert_eq!(v.position(), Coordinate::new(i32::MAX, 0));

        assert_eq!(v.deploy_sensor(&mut map), Some(vec![]));
    }

    #[test]
    fn sensors_allowed_at_distinct_cells() {
        let mut v = vessel_with(config());
        let mut map = CelestialMap::new();

        v.deploy_sensor(&mut map).unwrap();
        v.move_by(1.0, 0.0).unwrap();
        v.deploy_sensor(&mut map).unwrap();

        assert_eq!(v.sensors().len(), 2);
    }
}
