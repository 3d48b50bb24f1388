//! Application state

pub mod assets;
