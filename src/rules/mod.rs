//! Game rules: the validator chain, move application, and the ring census.

pub mod apply;
pub mod rings;
pub mod validate;

pub use apply::apply_move;
pub use rings::{ring_census, RingTally};
pub use validate::{validate, ValidatedMove};
