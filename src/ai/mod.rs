//! AI move selection: the [`Policy`] trait, the [`Difficulty`] levels, and
//! the three policies implementing them.

mod minimax;
mod policy;
mod random;
mod tactical;

pub use minimax::MinimaxPolicy;
pub use policy::{Difficulty, Policy};
pub use random::RandomPolicy;
pub use tactical::TacticalPolicy;
