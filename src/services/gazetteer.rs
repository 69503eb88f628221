//! Celestial gazetteer
//!
//! Read-only report of every catalog planet and artifact, optionally
//! followed by the artifacts the celestial map has recorded.

use std::collections::HashSet;

use crate::models::catalog::Catalog;
use crate::models::celestial_map::CelestialMap;
use crate::models::constants::PLANET_TAG;

/// Who is asking for the report. Players get directions instead of the
/// full chart; quality engineers see everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Player,
    QualityEngineer,
}

pub const RESTRICTED_MESSAGE: &str = "The celestial gazetteer is restricted to quality engineers.\n\
Deploy sensors and open the celestial map to chart what you have found.";

pub struct Gazetteer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Gazetteer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Gazetteer { catalog }
    }

    /// Full report: the static table, plus a "Discovered" section when
    /// `include_discoveries` is set and a map is given.
    pub fn render(&self, map: Option<&CelestialMap>, include_discoveries: bool) -> String {
        let mut lines = vec![
            "=== CELESTIAL GAZETTEER ===".to_string(),
            format!("{:<22} {:<20} {:<15}", "Name", "Type", "Coordinates"),
            "-".repeat(60),
        ];

        let mut planets: Vec<_> = self.catalog.planets().iter().collect();
        planets.sort_by_key(|(name, _)| name.to_lowercase());
        for (name, pos) in planets {
            lines.push(format!("{:<22} {:<20} ({},{})", name, PLANET_TAG, pos.x, pos.y));
        }

        let mut artifacts: Vec<_> = self.catalog.artifacts().iter().collect();
        artifacts.sort_by_key(|(name, _)| name.to_lowercase());
        for (name, artifact) in artifacts {
            lines.push(format!(
                "{:<22} {:<20} ({},{})",
                name, artifact.kind, artifact.position.x, artifact.position.y
            ));
        }

        if let (true, Some(map)) = (include_discoveries, map) {
            if !map.is_empty() {
                lines.push(String::new());
                lines.push("-- Discovered (from visits) --".to_string());
                let mut seen = HashSet::new();
                for (pos, record) in map.cells() {
                    for name in record.artifacts() {
                        if seen.insert((name.as_str(), pos)) {
                            lines.push(format!("{:<22} {:<20} ({},{})", name, "DISCOVERED", pos.x, pos.y));
                        }
                    }
                }
            }
        }

        lines.join("\n")
    }

    /// As [`render`](Self::render), but a player only gets
    /// [`RESTRICTED_MESSAGE`].
    pub fn render_for(&self, access: Access, map: Option<&CelestialMap>, include_discoveries: bool) -> String {
        match access {
            Access::Player => RESTRICTED_MESSAGE.to_string(),
            Access::QualityEngineer => self.render(map, include_discoveries),
        }
    }
}
