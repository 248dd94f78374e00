pub mod display;
pub mod firmware;
pub mod input;
