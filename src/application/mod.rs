pub mod config;
pub mod sampling;

pub use config::*;
pub use sampling::*;
