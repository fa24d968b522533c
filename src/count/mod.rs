//! Ball-strike counts and how raw pitch outcomes move between them.

mod count;
mod outcome;
mod rules;
mod successor;
mod terminal;

pub use count::*;
pub use outcome::*;
pub use rules::*;
pub use successor::*;
pub use terminal::*;
