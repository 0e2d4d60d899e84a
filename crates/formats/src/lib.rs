pub mod error;
pub mod manifest;

pub use error::*;
pub use manifest::*;
