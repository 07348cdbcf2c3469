mod action;
mod core;
mod option;
mod parameter;

pub use self::core::*;
pub use action::*;
pub use option::*;
pub use parameter::*;
