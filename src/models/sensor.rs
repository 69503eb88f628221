//! Sensor model
//!
//! A sensor is dropped at a fixed cell and sweeps the square window of
//! cells within its radius for catalog objects.

use std::fmt;
use std::sync::Arc;

use super::catalog::Catalog;
use super::celestial_map::CelestialMap;
use super::constants::PLANET_TAG;
use super::position::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionKind {
    Planet,
    /// An artifact with its declared type tag.
    Artifact(String),
}

impl fmt::Display for DetectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DetectionKind::Planet => f.write_str(PLANET_TAG),
            DetectionKind::Artifact(kind) => f.write_str(kind),
        }
    }
}

/// One object found by a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub kind: DetectionKind,
    pub name: String,
    pub position: Coordinate,
}

#[derive(Debug, Clone)]
pub struct Sensor {
    position: Coordinate,
    radius: u32,
    catalog: Arc<Catalog>,
}

impl Sensor {
    pub fn new(position: Coordinate, radius: u32, catalog: Arc<Catalog>) -> Self {
        Sensor {
            position,
            radius,
            catalog,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// True if `target` lies in the square window of side `2r + 1`
    /// centred on `origin`. Edges are inclusive.
    pub fn in_range(&self, origin: Coordinate, target: Coordinate) -> bool {
        origin.chebyshev_distance(target) <= self.radius
    }

    /// Sweep around `position` and record every hit on `map`.
    ///
    /// Planets are listed before artifacts, each group in name order.
    /// Every detection becomes its own `visit` call; nothing is written
    /// when the sweep comes back empty.
    pub fn scan(&self, position: Coordinate, map: &mut CelestialMap) -> Vec<Detection> {
        let mut detections = Vec::new();

        for (name, &planet) in self.catalog.planets() {
            if self.in_range(position, planet) {
                detections.push(Detection {
                    kind: DetectionKind::Planet,
                    name: name.clone(),
                    position: planet,
                });
            }
        }

        for (name, artifact) in self.catalog.artifacts() {
            if self.in_range(position, artifact.position) {
                detections.push(Detection {
                    kind: DetectionKind::Artifact(artifact.kind.clone()),
                    name: name.clone(),
                    position: artifact.position,
                });
            }
        }

        if let Some(target) = self.catalog.target() {
            if detections
                .iter()
                .any(|d| d.kind == DetectionKind::Planet && d.name == target)
            {
                log::info!("target planet {} is within sensor range of {}", target, position);
            }
        }

        for detection in &detections {
            match detection.kind {
                DetectionKind::Planet => map.visit(detection.position, Some(&detection.name), None),
                DetectionKind::Artifact(_) => {
                    map.visit(detection.position, None, Some(&detection.name))
                }
            }
        }

        detections
    }
}
