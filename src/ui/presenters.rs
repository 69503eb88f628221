use crate::io::OutputWriter;
use crate::models::catalog::Catalog;
use crate::models::position::Coordinate;
use crate::models::sensor::Detection;
use crate::models::vessel::{MoveEvent, Vessel};

pub struct VesselPresenter;

impl VesselPresenter {
    pub fn show_status(vessel: &Vessel, catalog: &Catalog, output: &mut dyn OutputWriter) {
        output.writeln(&format!("Ship: {}", vessel.name()));
        output.writeln(&format!("Position: {}", vessel.position()));
        output.writeln(&format!("Energy: {}", vessel.energy()));
        output.writeln(&format!("Supplies: {}", vessel.supplies()));
        output.writeln(&format!("Money: {}", vessel.money()));
        output.writeln(&format!("Engine: {}", vessel.engine_name()));
        output.writeln(&format!(
            "Target Planet: {}",
            catalog.target().unwrap_or("unknown")
        ));
        output.writeln(&format!("Planets in system: {}", catalog.planets().len()));
        output.writeln(&format!("Artifacts in system: {}", catalog.artifacts().len()));
        output.writeln(&format!("Sensors deployed: {}", vessel.sensors().len()));
    }

    pub fn show_move_event(event: &MoveEvent, output: &mut dyn OutputWriter) {
        match event {
            MoveEvent::Cruising => {}
            MoveEvent::Died(vital) => {
                output.writeln("Game Over");
                output.writeln(&format!("You have run out of {}! Game over.", vital));
            }
            MoveEvent::Wormhole { from, to } => {
                output.writeln(&format!("Hit a wormhole at {}! Emerged at {}.", from, to));
            }
        }
    }
}

pub struct SensorPresenter;

impl SensorPresenter {
    pub fn show_deployment(
        at: Coordinate,
        result: Option<&[Detection]>,
        output: &mut dyn OutputWriter,
    ) {
        let Some(detections) = result else {
            output.writeln(&format!(
                "Failed to add sensor at {}! Sensor already exists.",
                at
            ));
            return;
        };

        output.writeln(&format!("Sensor added at {}!!", at));
        if detections.is_empty() {
            output.writeln("Nothing detected within range.");
        }
        for d in detections {
            output.writeln(&format!("  {} {} at {}", d.kind, d.name, d.position));
        }
    }
}
