//! Celestial map
//!
//! Ledger of every cell the vessel's sensors have recorded, with the
//! planets and artifacts seen there. Entries are append-only: names are
//! never removed and never listed twice for the same cell.

use std::collections::{HashMap, HashSet};

use super::catalog::Catalog;
use super::constants::SEEDED_PLANETS;
use super::position::Coordinate;

/// What has been recorded at one cell, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellRecord {
    planets: Vec<String>,
    artifacts: Vec<String>,
}

impl CellRecord {
    pub fn planets(&self) -> &[String] {
        &self.planets
    }

    pub fn artifacts(&self) -> &[String] {
        &self.artifacts
    }

    fn add_planet(&mut self, name: &str) {
        if !self.planets.iter().any(|p| p == name) {
            self.planets.push(name.to_string());
        }
    }

    fn add_artifact(&mut self, name: &str) {
        if !self.artifacts.iter().any(|a| a == name) {
            self.artifacts.push(name.to_string());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CelestialMap {
    /// Cells in first-visit order.
    cells: Vec<(Coordinate, CellRecord)>,
    /// Cell index into `cells`.
    index: HashMap<Coordinate, usize>,
    visited: HashSet<Coordinate>,
}

impl CelestialMap {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger pre-loaded with the well-known planets (Celeron, Xeon,
    /// Ryzen) that the catalog contains.
    pub fn seeded(catalog: &Catalog) -> Self {
        let mut map = Self::new();
        for name in SEEDED_PLANETS {
            if let Some(position) = catalog.planet(name) {
                map.visit(position, Some(name), None);
            }
        }
        map
    }

    /// Record a visit to `position`, adding any names not already listed
    /// there. The cell is recorded even when both names are `None`.
    pub fn visit(&mut self, position: Coordinate, planet: Option<&str>, artifact: Option<&str>) {
        let slot = match self.index.get(&position) {
            Some(&slot) => slot,
            None => {
                self.cells.push((position, CellRecord::default()));
                self.index.insert(position, self.cells.len() - 1);
                self.cells.len() - 1
            }
        };
        self.visited.insert(position);

        let record = &mut self.cells[slot].1;
        if let Some(name) = planet {
            record.add_planet(name);
        }
        if let Some(name) = artifact {
            record.add_artifact(name);
        }

        log::debug!("celestial map: visit {} planet={:?} artifact={:?}", position, planet, artifact);
    }

    pub fn is_visited(&self, position: Coordinate) -> bool {
        self.visited.contains(&position)
    }

    pub fn cell(&self, position: Coordinate) -> Option<&CellRecord> {
        self.index.get(&position).map(|&slot| &self.cells[slot].1)
    }

    /// Cells in first-visit order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &CellRecord)> {
        self.cells.iter().map(|(pos, record)| (*pos, record))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Human-readable listing of every visited cell.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No locations visited yet.".to_string();
        }

        let mut lines = vec!["=== CELESTIAL MAP VISITS ===".to_string()];
        for (position, record) in self.cells() {
            lines.push(format!(
                "Position: {} | Planets: {} | Artifacts: {}",
                position,
                join_or_none(record.planets()),
                join_or_none(record.artifacts()),
            ));
        }
        lines.join("\n")
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}
