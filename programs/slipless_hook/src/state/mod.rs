pub mod token_badge;

pub use token_badge::*;
