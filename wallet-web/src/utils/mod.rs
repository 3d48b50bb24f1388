//! Utility modules

pub mod browser;
pub mod constants;
