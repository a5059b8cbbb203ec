mod allergen;
mod dish;
mod profile;

pub use allergen::*;
pub use dish::*;
pub use profile::*;
