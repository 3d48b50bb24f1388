//! # Model Layer
//!
//! Access to externally owned asset state.

pub mod store;
