//! Backend services

pub mod assets;
