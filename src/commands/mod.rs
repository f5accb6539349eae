pub mod filemod;
pub mod tools;

pub use filemod::*;
pub use tools::*;
