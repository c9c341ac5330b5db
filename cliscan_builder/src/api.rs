mod capture;
mod core;
mod custom;
mod field;
mod parameter;

pub use self::core::*;
pub use capture::*;
pub use custom::*;
pub use field::*;
pub use parameter::*;
