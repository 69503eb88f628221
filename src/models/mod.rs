//! Domain models
//!
//! The vessel, its sensors, the catalog and the celestial map, with the
//! configuration and error types they share.

pub mod catalog;
pub mod celestial_map;
pub mod config;
pub mod constants;
pub mod errors;
pub mod position;
pub mod sensor;
pub mod vessel;
