pub mod state;
pub mod types;

pub use state::*;
pub use types::*;
