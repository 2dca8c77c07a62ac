pub mod add_candidate;
pub mod cast_vote;
pub mod initialize_poll;

pub use add_candidate::*;
pub use cast_vote::*;
pub use initialize_poll::*;
