pub mod easing;
pub mod polar;
pub mod vec;

pub use easing::*;
pub use polar::*;
pub use vec::*;
