//! Game services
//!
//! Navigation rules used by the vessel and the gazetteer report.

pub mod gazetteer;
pub mod navigation;
