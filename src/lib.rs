//! Species Factory - Factory Method over a species attribute taxonomy

pub mod core;
pub mod entity;
pub mod render;
