pub mod candidate;
pub mod poll;
pub mod receipt;

pub use candidate::*;
pub use poll::*;
pub use receipt::*;
