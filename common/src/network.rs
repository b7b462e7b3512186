pub mod address;
pub mod family;
pub mod range;
pub mod target;
