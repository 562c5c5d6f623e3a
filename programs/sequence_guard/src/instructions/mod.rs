pub mod check_sequence;
pub mod initialize_tracker;

pub use check_sequence::*;
pub use initialize_tracker::*;
