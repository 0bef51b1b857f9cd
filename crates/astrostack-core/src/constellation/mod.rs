pub mod bounded_min_set;
pub mod compare;
pub mod extract;
pub mod types;

pub use compare::{compare, ConstellationMatch};
pub use extract::extract_constellations;
pub use types::Constellation;
