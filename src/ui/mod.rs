//! User interface and presentation
//!
//! Presenters turn vessel events and state into the messages a control
//! surface shows the player.

pub mod presenters;
