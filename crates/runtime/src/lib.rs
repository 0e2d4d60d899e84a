pub mod animation;
pub mod delay;
pub mod observers;

pub use animation::*;
pub use delay::*;
pub use observers::*;
