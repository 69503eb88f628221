//! Catalog model
//!
//! The fixed set of planets and artifacts for a run, plus the target
//! planet. Loaded once before the vessel is built and never changed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::errors::CatalogError;
use super::position::Coordinate;

/// A non-planet celestial object with its declared type tag
/// (e.g. `WORM-HOLE`, `ASTEROID`, `ABANDONED-FREIGHTER`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: String,
    pub position: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    planets: BTreeMap<String, Coordinate>,
    target: Option<String>,
    artifacts: BTreeMap<String, Artifact>,
}

#[derive(Clone, Copy)]
enum Section {
    Planets,
    Target,
    Artifacts,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_planet(mut self, name: &str, position: Coordinate) -> Self {
        self.planets.insert(name.to_string(), position);
        self
    }

    pub fn with_artifact(mut self, name: &str, kind: &str, position: Coordinate) -> Self {
        self.artifacts.insert(
            name.to_string(),
            Artifact {
                kind: kind.to_string(),
                position,
            },
        );
        self
    }

    pub fn with_target(mut self, name: &str) -> Self {
        self.target = Some(name.to_string());
        self
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse the line-oriented catalog format.
    ///
    /// Sections start with a `PLANETS`, `TARGET` or `ARTIFACTS` line.
    /// Blank lines and `#` comments are skipped. Planet lines are
    /// `<name> <x>,<y>`, the target section holds one planet name, and
    /// artifact lines are `<name> <type> <x>,<y>`.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        let mut section = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line {
                "PLANETS" => {
                    section = Some(Section::Planets);
                    continue;
                }
                "TARGET" => {
                    section = Some(Section::Target);
                    continue;
                }
                "ARTIFACTS" => {
                    section = Some(Section::Artifacts);
                    continue;
                }
                _ => {}
            }

            match section {
                None => {
                    log::warn!("catalog line {} is outside any section, ignored", line_no);
                }
                Some(Section::Planets) => {
                    let parts: Vec<&str> = line.split_whitespace().collect();
                    let &[name, coords] = parts.as_slice() else {
                        return Err(CatalogError::Malformed {
                            line: line_no,
                            message: format!("expected '<name> <x>,<y>', got '{}'", line),
                        });
                    };
                    let position = parse_coordinate(coords, line_no)?;
                    catalog.planets.insert(name.to_string(), position);
                }
                Some(Section::Target) => {
                    if let Some(previous) = catalog.target.replace(line.to_string()) {
                        log::warn!("catalog line {}: target '{}' replaced by '{}'", line_no, previous, line);
                    }
                }
                Some(Section::Artifacts) => {
                    let parts: Vec<&str> = line.split_whitespace().collect();
                    if parts.len() < 3 {
                        log::warn!("catalog line {}: artifact entry '{}' is incomplete, ignored", line_no, line);
                        continue;
                    }
                    let position = parse_coordinate(parts[2], line_no)?;
                    catalog.artifacts.insert(
                        parts[0].to_string(),
                        Artifact {
                            kind: parts[1].to_string(),
                            position,
                        },
                    );
                }
            }
        }

        Ok(catalog)
    }

    /// Planets by name, in name order.
    pub fn planets(&self) -> &BTreeMap<String, Coordinate> {
        &self.planets
    }

    /// Artifacts by name, in name order.
    pub fn artifacts(&self) -> &BTreeMap<String, Artifact> {
        &self.artifacts
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn planet(&self, name: &str) -> Option<Coordinate> {
        self.planets.get(name).copied()
    }
}

fn parse_coordinate(text: &str, line: usize) -> Result<Coordinate, CatalogError> {
    let malformed = || CatalogError::Malformed {
        line,
        message: format!("invalid coordinates '{}'", text),
    };
    let (x, y) = text.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse::<i32>().map_err(|_| malformed())?;
    let y = y.trim().parse::<i32>().map_err(|_| malformed())?;
    Ok(Coordinate { x, y })
}
