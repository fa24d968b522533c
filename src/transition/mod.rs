//! What the pitcher can throw and what happens when it arrives.
//!
//! The tables here are produced upstream (pitch-location error models,
//! swing/take classifiers) and consumed as opaque probabilities.

mod action;
mod cell;
mod choice;
mod distribution;
mod pitch;
mod provider;
mod table;
mod zone;

pub use action::*;
pub use cell::*;
pub use choice::*;
pub use distribution::*;
pub use pitch::*;
pub use provider::*;
pub use table::*;
pub use zone::*;
